//! # rosterdb HTTP Server Module
//!
//! Axum server exposing the student API.
//!
//! # Endpoints
//!
//! - `/api/v1/student/*` - Student CRUD
//! - `/health` - Health check
//! - `/metrics` - Operation counters

pub mod config;
pub mod observability_routes;
pub mod server;
pub mod student_routes;

pub use config::{ConfigError, ConfigResult, HttpServerConfig, NotFoundPolicy, StoreKind};
pub use server::HttpServer;
pub use student_routes::STUDENT_BASE_PATH;
