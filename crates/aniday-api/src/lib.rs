//! Axum HTTP server for the anime-of-the-day service.
//!
//! This crate provides:
//! - The daily selection procedure over the AniList API
//! - An in-memory one-slot cache keyed by calendar date
//! - The `/data`, `/test` and `/health` endpoints

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::{DailySelector, MAX_ATTEMPTS};
pub use state::AppState;
