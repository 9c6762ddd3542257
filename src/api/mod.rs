mod error;
mod handlers;

pub use error::ApiError;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::core::GridwireError;
use crate::service::GridService;

pub struct GridApi {
    service: Arc<GridService>,
}

impl GridApi {
    pub fn new(service: GridService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/v1/employees/table", post(handlers::employees_table))
            .layer(TraceLayer::new_for_http())
            .with_state(self.service.clone())
    }

    pub async fn serve(self, addr: &str) -> Result<(), GridwireError> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GridwireError::IoError(format!("binding to {addr}: {e}")))?;
        axum::serve(listener, self.router())
            .await
            .map_err(|e| GridwireError::IoError(format!("serving: {e}")))?;
        Ok(())
    }
}
