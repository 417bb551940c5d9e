use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("upstream returned HTTP {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("malformed upstream response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// A query parameter outside its allow-list. The `Display` rendering is the
/// exact message returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name} parameter is invalid ({value}).")]
pub struct InvalidParam {
    pub name: &'static str,
    pub value: String,
}
