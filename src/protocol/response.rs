use std::io::Write;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::core::GridwireError;

/// The response envelope the widget expects.
///
/// A constructed value always carries every required field; the only
/// ways to obtain one are [`TableResponse::new`],
/// [`TableResponse::error_envelope`], and a successful
/// [`TableResponseBuilder::build`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableResponse {
    /// Echo of the request's draw counter.
    pub draw: u64,
    /// Record count before any filtering.
    #[serde(rename = "recordsTotal")]
    pub records_total: u64,
    /// Record count after filtering, before paging.
    #[serde(rename = "recordsFiltered")]
    pub records_filtered: u64,
    /// One inner vec per row, values pre-stringified, in the widget's
    /// declared column order. The widget consumes positional arrays,
    /// not keyed objects.
    pub data: Vec<Vec<String>>,
    /// Application-level error message. Omitted from the JSON object
    /// entirely when unset; the widget treats presence as failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TableResponse {
    pub fn new(
        draw: u64,
        records_total: u64,
        records_filtered: u64,
        data: Vec<Vec<String>>,
    ) -> Self {
        Self {
            draw,
            records_total,
            records_filtered,
            data,
            error: None,
        }
    }

    /// A well-formed envelope carrying an application-level error:
    /// zero counts, no rows, `error` set. This is the channel for
    /// surfacing downstream failures to the widget while still
    /// answering the draw.
    pub fn error_envelope(draw: u64, message: impl Into<String>) -> Self {
        Self {
            draw,
            records_total: 0,
            records_filtered: 0,
            data: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn builder() -> TableResponseBuilder {
        TableResponseBuilder::default()
    }

    /// Serialize to UTF-8 JSON bytes with the exact wire field names.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GridwireError> {
        serde_json::to_vec(self).map_err(|e| GridwireError::SerializationError(e.to_string()))
    }

    /// Serialize fully, then write the document in one pass. Either the
    /// whole valid document reaches the sink or nothing does.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<(), GridwireError> {
        let buf = self.to_bytes()?;
        sink.write_all(&buf)?;
        Ok(())
    }
}

impl IntoResponse for TableResponse {
    fn into_response(self) -> Response {
        match self.to_bytes() {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        }
    }
}

/// Incremental assembly for handlers that gather the envelope fields in
/// stages. `build` refuses to produce a [`TableResponse`] with any
/// required field unset; forgetting one is a bug in the handler, not a
/// condition to paper over with a partial document.
#[derive(Debug, Default)]
pub struct TableResponseBuilder {
    draw: Option<u64>,
    records_total: Option<u64>,
    records_filtered: Option<u64>,
    data: Option<Vec<Vec<String>>>,
    error: Option<String>,
}

impl TableResponseBuilder {
    pub fn draw(mut self, draw: u64) -> Self {
        self.draw = Some(draw);
        self
    }

    pub fn records_total(mut self, records_total: u64) -> Self {
        self.records_total = Some(records_total);
        self
    }

    pub fn records_filtered(mut self, records_filtered: u64) -> Self {
        self.records_filtered = Some(records_filtered);
        self
    }

    /// An empty vec is a valid value here and distinct from never
    /// setting the rows at all.
    pub fn data(mut self, data: Vec<Vec<String>>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    pub fn build(self) -> Result<TableResponse, GridwireError> {
        let draw = self.draw.ok_or_else(|| {
            GridwireError::ValidationError(
                "draw is unset; echo the draw value the widget sent".to_string(),
            )
        })?;
        let records_total = self.records_total.ok_or_else(|| {
            GridwireError::ValidationError("recordsTotal is unset".to_string())
        })?;
        let records_filtered = self.records_filtered.ok_or_else(|| {
            GridwireError::ValidationError("recordsFiltered is unset".to_string())
        })?;
        let data = self
            .data
            .ok_or_else(|| GridwireError::ValidationError("data is unset".to_string()))?;

        Ok(TableResponse {
            draw,
            records_total,
            records_filtered,
            data,
            error: self.error,
        })
    }
}
