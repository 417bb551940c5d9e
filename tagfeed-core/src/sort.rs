use crate::post::{Direction, Post, SortField};

/// Order `posts` in place by `field`.
///
/// Ascending uses a stable sort, so posts with equal field values keep
/// their pre-sort relative order. Descending is the exact reverse of the
/// ascending result, which is not the same as an independent
/// stable-descending sort when keys repeat.
pub fn sort_posts(posts: &mut [Post], field: SortField, direction: Direction) {
    posts.sort_by_key(|post| post.metric(field));
    if direction == Direction::Dsc {
        posts.reverse();
    }
}
