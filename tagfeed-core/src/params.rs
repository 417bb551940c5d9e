use crate::error::InvalidParam;
use crate::post::{Direction, SortField};

/// Resolve the `sortBy` query parameter. Absent means the default (`id`);
/// anything outside the allow-list is rejected with the offending value.
pub fn validate_sort_by(raw: Option<&str>) -> Result<SortField, InvalidParam> {
    match raw {
        None => Ok(SortField::default()),
        Some(value) => SortField::from_raw(value).ok_or_else(|| InvalidParam {
            name: "sortBy",
            value: value.to_owned(),
        }),
    }
}

/// Resolve the `direction` query parameter. Absent means `asc`.
pub fn validate_direction(raw: Option<&str>) -> Result<Direction, InvalidParam> {
    match raw {
        None => Ok(Direction::default()),
        Some(value) => Direction::from_raw(value).ok_or_else(|| InvalidParam {
            name: "direction",
            value: value.to_owned(),
        }),
    }
}

/// Split a comma-separated tag list into trimmed, non-empty tokens.
/// Duplicate tokens are kept as given; the fetch layer collapses them.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
