use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

use crate::conf::DatasetConfig;
use crate::core::GridwireError;
use crate::protocol::{TableRequest, TableResponse};
use crate::query::ColumnMap;

/// One record of the demo dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub city: String,
    pub start_date: NaiveDate,
    pub salary: i64,
}

/// Serves widget requests over the demo dataset.
///
/// The dataset is loaded once at construction and read-only afterwards,
/// so a `GridService` can sit behind an `Arc` and serve concurrent
/// requests without synchronization.
pub struct GridService {
    employees: Vec<Employee>,
    columns: ColumnMap<Employee>,
}

impl GridService {
    pub fn load(config: &DatasetConfig) -> Result<Self, GridwireError> {
        let raw = std::fs::read_to_string(&config.path).map_err(|e| {
            GridwireError::DatasetError(format!("reading {}: {}", config.path, e))
        })?;
        let employees: Vec<Employee> = serde_json::from_str(&raw).map_err(|e| {
            GridwireError::DatasetError(format!("parsing {}: {}", config.path, e))
        })?;
        info!("loaded {} employees from {}", employees.len(), config.path);
        Ok(Self::from_records(employees))
    }

    pub fn from_records(employees: Vec<Employee>) -> Self {
        Self {
            employees,
            columns: employee_columns(),
        }
    }

    pub fn num_records(&self) -> usize {
        self.employees.len()
    }

    /// Answer one widget request. A request that declares a different
    /// number of columns than this endpoint serves gets a well-formed
    /// envelope with `error` set rather than a transport failure; a
    /// request declaring no columns at all is still answered (plain
    /// paging, no per-column filters).
    pub fn table(&self, req: &TableRequest) -> TableResponse {
        if !req.columns.is_empty() && req.columns.len() != self.columns.len() {
            return TableResponse::error_envelope(
                req.draw,
                format!(
                    "endpoint serves {} columns, request declared {}",
                    self.columns.len(),
                    req.columns.len()
                ),
            );
        }
        self.columns.run(req, &self.employees)
    }
}

/// The endpoint's column registry, in the widget's declared order:
/// first name, last name, company, city, start date, salary.
fn employee_columns() -> ColumnMap<Employee> {
    ColumnMap::new()
        .column(|e: &Employee| e.first_name.clone())
        .column(|e| e.last_name.clone())
        .column(|e| e.company.clone())
        .column(|e| e.city.clone())
        .column_with(
            |e| e.start_date.format("%m/%d/%Y").to_string(),
            |a, b| a.start_date.cmp(&b.start_date),
        )
        .column_with(|e| e.salary.to_string(), |a, b| a.salary.cmp(&b.salary))
}
