//! # postbox-api
//!
//! HTTP API layer for Postbox built on Axum.
//!
//! Provides the REST endpoints (signup, login, post CRUD, health), the
//! authenticated-user extractor, DTOs, CORS, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
