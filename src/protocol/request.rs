use serde::{Deserialize, Serialize};

use crate::core::GridwireError;

/// One page/sort/filter request from the table widget.
///
/// The widget posts its structured request as a single JSON string field
/// because generic form binding cannot reconstruct this shape; [`parse`]
/// is the entry point for that string.
///
/// [`parse`]: TableRequest::parse
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableRequest {
    /// Draw counter. Echoed back verbatim so the widget can discard
    /// stale out-of-order responses. Never recompute it server-side.
    pub draw: u64,
    /// Zero-based offset of the first record to return.
    #[serde(default)]
    pub start: u64,
    /// Number of records requested; `-1` means all remaining records.
    #[serde(default = "default_length")]
    pub length: i64,
    /// Global search, applied to every column with `searchable` set.
    #[serde(default)]
    pub search: Search,
    /// Columns in the widget's declared order. The position in this
    /// list is the column's identity; `data`/`name` are display-side.
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
    /// Sort keys in priority order.
    #[serde(default)]
    pub order: Vec<OrderRule>,
}

fn default_length() -> i64 {
    -1
}

impl TableRequest {
    /// Deserialize a widget request from its raw JSON string.
    ///
    /// Unknown fields are ignored; absent nested search objects default
    /// to the empty search. Malformed JSON or a type mismatch is a
    /// [`GridwireError::ParseError`]; the caller picks the HTTP policy.
    pub fn parse(raw: &str) -> Result<TableRequest, GridwireError> {
        serde_json::from_str(raw).map_err(|e| GridwireError::ParseError(e.to_string()))
    }
}

/// A search term. An empty or whitespace-only value means "no filter".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Search {
    #[serde(default)]
    pub value: String,
    /// The widget can flag the term as a regex. Parsed but not
    /// evaluated; matching is always case-insensitive substring.
    #[serde(default)]
    pub regex: bool,
}

impl Search {
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// One column the widget knows about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnSpec {
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub orderable: bool,
    /// Per-column search term.
    #[serde(default)]
    pub search: Search,
}

/// One sort key. `column` indexes into the request's `columns` list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrderRule {
    pub column: u64,
    pub dir: SortDirection,
}

/// Sort direction, restricted to an enum so arbitrary client strings
/// never reach query building.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}
