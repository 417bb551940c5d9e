use std::collections::HashSet;

use futures_util::future::join_all;
use tracing::warn;

use crate::cache::ResponseCache;
use crate::client::BlogClient;
use crate::error::AggregateError;
use crate::post::Post;

/// Fetch every distinct tag concurrently (cache first, upstream on a miss)
/// and merge the per-tag results into a single deduplicated list.
///
/// All fetch tasks run to completion before any outcome is reported; if a
/// tag fails, the whole aggregation fails with the first error in tag order.
/// The merged order is task order, then upstream order within a tag.
pub async fn fetch_all(
    client: &BlogClient,
    cache: &ResponseCache,
    tags: &[String],
) -> Result<Vec<Post>, AggregateError> {
    let mut distinct = Vec::with_capacity(tags.len());
    let mut requested = HashSet::new();
    for tag in tags {
        if requested.insert(tag.as_str()) {
            distinct.push(tag.clone());
        }
    }

    let mut handles = Vec::with_capacity(distinct.len());
    for tag in distinct {
        let client = client.clone();
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            let fetch_tag = tag.clone();
            let result = cache
                .get_or_compute(&tag, move || async move { client.fetch(&fetch_tag).await })
                .await;
            if let Err(err) = &result {
                warn!(tag = %tag, error = %err, "failed to fetch posts for tag");
            }
            result
        }));
    }

    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for joined in join_all(handles).await {
        for post in joined?? {
            if seen.insert(post.identity()) {
                merged.push(post);
            }
        }
    }

    Ok(merged)
}
