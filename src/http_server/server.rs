//! # HTTP Server
//!
//! Composition root: builds the record store and service from configuration
//! and hands them to the route constructors.

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::{HttpServerConfig, StoreKind};
use super::observability_routes::{log_requests, observability_routes};
use super::student_routes::{student_routes, StudentState, STUDENT_BASE_PATH};
use crate::observability::{Logger, MetricsRegistry};
use crate::student::{
    FileStudentStore, InMemoryStudentStore, StoreError, StoreResult, StudentService, StudentStore,
};

/// HTTP Server for the student API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration and an in-memory store
    pub fn new() -> Self {
        Self::with_store(
            HttpServerConfig::default(),
            Arc::new(InMemoryStudentStore::new()),
        )
    }

    /// Build the store named by the configuration, then the server
    pub fn from_config(config: HttpServerConfig) -> StoreResult<Self> {
        let store = open_store(&config)?;
        Ok(Self::with_store(config, store))
    }

    /// Create a server over an explicit store
    pub fn with_store(config: HttpServerConfig, store: Arc<dyn StudentStore>) -> Self {
        let service = Arc::new(StudentService::new(store, Arc::new(MetricsRegistry::new())));
        let router = Self::build_router(&config, service);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, service: Arc<StudentService>) -> Router {
        let student_state = Arc::new(StudentState::new(service.clone(), config.not_found));

        let allow_origin = if config.cors_origins.is_empty() {
            AllowOrigin::any()
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            AllowOrigin::list(origins)
        };
        let cors = CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(observability_routes(service.clone()))
            .nest(STUDENT_BASE_PATH, student_routes(student_state))
            .layer(
                ServiceBuilder::new()
                    .layer(middleware::from_fn_with_state(service, log_requests))
                    .layer(cors),
            )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        Logger::info(
            "HTTP_SERVER_STARTED",
            &[("addr", &addr), ("base_path", STUDENT_BASE_PATH)],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Logger::info("HTTP_SERVER_STOPPED", &[("addr", &addr)]);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn open_store(config: &HttpServerConfig) -> StoreResult<Arc<dyn StudentStore>> {
    match config.store {
        StoreKind::Memory => Ok(Arc::new(InMemoryStudentStore::new())),
        StoreKind::File => {
            let path = config.data_file.clone().ok_or_else(|| {
                StoreError::Misconfigured("data_file is required for the file store".to_string())
            })?;
            let store = FileStudentStore::open(path)?;
            Logger::info(
                "FILE_STORE_OPENED",
                &[("path", &store.path().display().to_string())],
            );
            Ok(Arc::new(store))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        Logger::warn("SHUTDOWN_SIGNAL_FAILED", &[("error", &e.to_string())]);
        std::future::pending::<()>().await;
    }
}
