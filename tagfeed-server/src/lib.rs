pub mod app;
pub mod error;

pub use app::{build_router, AppState};
pub use error::ApiError;
