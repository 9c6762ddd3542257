use std::sync::Arc;

use axum::extract::State;
use log::debug;

use crate::protocol::{TableRequest, TableResponse};
use crate::service::GridService;

use super::error::ApiError;

pub async fn health() -> &'static str {
    "OK"
}

/// The server-side endpoint for the table widget. The widget posts its
/// structured request as the raw body string; a payload that fails to
/// parse is a 400, while application-level problems ride back inside
/// the envelope's `error` field.
pub async fn employees_table(
    State(service): State<Arc<GridService>>,
    body: String,
) -> Result<TableResponse, ApiError> {
    let req = TableRequest::parse(&body)?;
    debug!(
        "table request draw={} start={} length={}",
        req.draw, req.start, req.length
    );
    Ok(service.table(&req))
}
