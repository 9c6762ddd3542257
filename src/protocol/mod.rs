mod request;
mod response;

pub use request::{ColumnSpec, OrderRule, Search, SortDirection, TableRequest};
pub use response::{TableResponse, TableResponseBuilder};
