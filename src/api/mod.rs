//! HTTP Surface
//!
//! Thin axum layer exposing the validation engine as a file-upload endpoint.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use server::{AppState, router, serve};
