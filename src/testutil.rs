//! Test utilities: deterministic employee fixtures and widget payload
//! builders.
//!
//! This module is only available when the `testutil` feature is enabled.

use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::{Value, json};

use crate::service::Employee;

pub use tempfile::TempDir;

const LAST_NAMES: [&str; 8] = [
    "Smith", "Jones", "Khan", "Ortiz", "Diaz", "Okafor", "Varga", "Lindqvist",
];
const COMPANIES: [&str; 5] = ["Acme", "Globex", "Initech", "Umbrella", "Soylent"];
const CITIES: [&str; 4] = ["Edinburgh", "Tokyo", "San Francisco", "Lisbon"];

/// Generate `n` employees deterministically from the row index:
/// - `first_name` is `First00`, `First01`, ... (string sort == index sort)
/// - `last_name`/`company`/`city` cycle through fixed lists
/// - `start_date` advances 37 days per row from 2015-01-01
/// - `salary` is `40_000 + (i * 1_337) % 90_000`
///
/// With `n = 25` exactly three rows carry the last name "Jones".
pub fn sample_employees(n: usize) -> Vec<Employee> {
    (0..n)
        .map(|i| Employee {
            first_name: format!("First{i:02}"),
            last_name: LAST_NAMES[i % LAST_NAMES.len()].to_string(),
            company: COMPANIES[i % COMPANIES.len()].to_string(),
            city: CITIES[i % CITIES.len()].to_string(),
            start_date: NaiveDate::from_ymd_opt(2015, 1, 1)
                .unwrap()
                .checked_add_days(Days::new(37 * i as u64))
                .unwrap(),
            salary: 40_000 + ((i * 1_337) % 90_000) as i64,
        })
        .collect()
}

/// Same records as [`sample_employees`], in a seeded random order, so
/// sort assertions exercise a real reordering.
pub fn shuffled_employees(n: usize, seed: u64) -> Vec<Employee> {
    let mut employees = sample_employees(n);
    employees.shuffle(&mut StdRng::seed_from_u64(seed));
    employees
}

/// Write a dataset file the demo service can load.
pub fn write_dataset(dir: &Path, employees: &[Employee]) -> std::io::Result<PathBuf> {
    let path = dir.join("data.json");
    std::fs::write(&path, serde_json::to_vec(employees)?)?;
    Ok(path)
}

/// The full six-column payload the widget posts, with no filters and a
/// single ascending sort on column 0.
pub fn widget_payload(draw: u64, start: u64, length: i64) -> Value {
    json!({
        "draw": draw,
        "start": start,
        "length": length,
        "search": {"value": "", "regex": false},
        "columns": [
            widget_column("firstName"),
            widget_column("lastName"),
            widget_column("company"),
            widget_column("city"),
            widget_column("startDate"),
            widget_column("salary"),
        ],
        "order": [{"column": 0, "dir": "asc"}],
    })
}

pub fn widget_column(data: &str) -> Value {
    json!({
        "data": data,
        "name": "",
        "searchable": true,
        "orderable": true,
        "search": {"value": "", "regex": false},
    })
}

/// Set the search term of column `idx` in a payload built by
/// [`widget_payload`].
pub fn set_column_search(payload: &mut Value, idx: usize, term: &str) {
    payload["columns"][idx]["search"]["value"] = Value::String(term.to_string());
}
