//! HTTP transport for the receipt processor

pub mod error;
pub mod routes;
pub mod server;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::{create_router, AppState, PointsResponse, ProcessResponse};
pub use server::{create_app, run_server};
