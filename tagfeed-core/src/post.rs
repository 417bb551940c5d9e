use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single upstream blog post. The four numeric metrics are typed so they
/// can be sorted on; every other upstream field is carried through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: i64,
    pub reads: i64,
    pub likes: i64,
    pub popularity: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    /// Canonical rendering of the full record, used as the dedup key when
    /// merging result sets. Two posts collapse only if every field matches,
    /// not just `id`.
    pub fn identity(&self) -> String {
        serde_json::to_string(self).expect("serialize post record")
    }

    pub fn metric(&self, field: SortField) -> i64 {
        match field {
            SortField::Id => self.id,
            SortField::Reads => self.reads,
            SortField::Likes => self.likes,
            SortField::Popularity => self.popularity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Reads,
    Likes,
    Popularity,
}

impl SortField {
    /// Accepted wire values; the first entry is the default.
    pub const ALLOWED: [&'static str; 4] = ["id", "reads", "likes", "popularity"];

    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(Self::Id),
            "reads" => Some(Self::Reads),
            "likes" => Some(Self::Likes),
            "popularity" => Some(Self::Popularity),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Reads => "reads",
            Self::Likes => "likes",
            Self::Popularity => "popularity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Dsc,
}

impl Direction {
    /// Accepted wire values; the first entry is the default.
    pub const ALLOWED: [&'static str; 2] = ["asc", "dsc"];

    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(Self::Asc),
            "dsc" => Some(Self::Dsc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Dsc => "dsc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extra_fields_round_trip_unchanged() {
        let body = json!({
            "id": 1,
            "reads": 100,
            "likes": 10,
            "popularity": 250,
            "author": "Rylee Paul",
            "tags": ["tech", "health"]
        });
        let post: Post = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(post.extra.get("author"), Some(&json!("Rylee Paul")));
        assert_eq!(serde_json::to_value(&post).unwrap(), body);
    }

    #[test]
    fn identity_distinguishes_same_id_different_record() {
        let a: Post =
            serde_json::from_value(json!({"id": 1, "reads": 5, "likes": 0, "popularity": 0}))
                .unwrap();
        let b: Post =
            serde_json::from_value(json!({"id": 1, "reads": 6, "likes": 0, "popularity": 0}))
                .unwrap();
        assert_ne!(a.identity(), b.identity());
        assert_eq!(a.identity(), a.clone().identity());
    }

    #[test]
    fn every_allowed_value_parses_and_defaults_are_first() {
        for raw in SortField::ALLOWED {
            assert!(SortField::from_raw(raw).is_some());
        }
        for raw in Direction::ALLOWED {
            assert!(Direction::from_raw(raw).is_some());
        }
        assert_eq!(SortField::default().as_str(), SortField::ALLOWED[0]);
        assert_eq!(Direction::default().as_str(), Direction::ALLOWED[0]);
    }
}
