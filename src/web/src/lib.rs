mod error;
mod filters;
mod managers;
mod routes;

pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use core::ManagerCatalog;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

/// Outcome of the one-time dataset load. A failed load is a distinct state
/// from an empty result set: handlers keep reporting the failure until the
/// process is restarted.
pub enum CatalogState {
    Loaded(ManagerCatalog),
    Failed(String),
}

impl CatalogState {
    pub fn catalog(&self) -> Result<&ManagerCatalog, ApiError> {
        match self {
            CatalogState::Loaded(catalog) => Ok(catalog),
            CatalogState::Failed(reason) => Err(ApiError::DatasetUnavailable(reason.clone())),
        }
    }
}

pub struct AppData {
    pub catalog: Arc<CatalogState>,
}

impl Clone for AppData {
    fn clone(&self) -> Self {
        AppData {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

pub struct ManagerCatalogServer {
    data: AppData,
}

impl ManagerCatalogServer {
    pub fn new(data: AppData) -> Self {
        ManagerCatalogServer { data }
    }

    pub async fn run(&self) {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    })),
            )
            .with_state(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], 18000));

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to address {}: {}", addr, e);
                panic!("Cannot start server without binding to port");
            }
        };

        info!("listen at: http://localhost:18000");

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
            error!("Server stopped unexpectedly, but not crashing the process");
        }
    }
}
