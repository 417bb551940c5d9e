use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use tagfeed_core::{
    fetch_all, parse_tags, sort_posts, validate_direction, validate_sort_by, BlogClient, Post,
    ResponseCache,
};

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub client: BlogClient,
    pub cache: ResponseCache,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/ping", get(ping))
        .route("/api/posts", get(posts))
        .with_state(state)
}

// GET /api/ping
async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "success": true }))
}

#[derive(Debug, Deserialize)]
struct PostsQuery {
    tags: Option<String>,
    #[serde(rename = "sortBy")]
    sort_by: Option<String>,
    direction: Option<String>,
}

#[derive(Debug, Serialize)]
struct PostsResponse {
    posts: Vec<Post>,
}

// GET /api/posts?tags=<csv>&sortBy=<field>&direction=<dir>
async fn posts(
    State(state): State<AppState>,
    Query(query): Query<PostsQuery>,
) -> Result<Json<PostsResponse>, ApiError> {
    let tags = query
        .tags
        .as_deref()
        .map(parse_tags)
        .filter(|tags| !tags.is_empty())
        .ok_or(ApiError::MissingTags)?;

    let sort_field = validate_sort_by(query.sort_by.as_deref())?;
    let direction = validate_direction(query.direction.as_deref())?;

    let mut posts = fetch_all(&state.client, &state.cache, &tags).await?;
    sort_posts(&mut posts, sort_field, direction);

    Ok(Json(PostsResponse { posts }))
}
