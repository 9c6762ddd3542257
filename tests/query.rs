use gridwire::conf::DatasetConfig;
use gridwire::protocol::TableRequest;
use gridwire::service::{Employee, GridService};
use gridwire::testutil::{
    TempDir, sample_employees, set_column_search, shuffled_employees, widget_payload,
    write_dataset,
};
use rstest::rstest;

fn service_25() -> GridService {
    GridService::from_records(shuffled_employees(25, 42))
}

fn parse(payload: serde_json::Value) -> TableRequest {
    TableRequest::parse(&payload.to_string()).unwrap()
}

/// 25 records, no filters, first page of 10, sorted ascending by
/// column 0.
#[test]
fn full_page_over_25_records() {
    let service = service_25();
    let resp = service.table(&parse(widget_payload(1, 0, 10)));

    assert_eq!(resp.draw, 1);
    assert_eq!(resp.records_total, 25);
    assert_eq!(resp.records_filtered, 25);
    assert_eq!(resp.data.len(), 10);
    assert!(resp.error.is_none());

    let first_names: Vec<&str> = resp.data.iter().map(|r| r[0].as_str()).collect();
    let expected: Vec<String> = (0..10).map(|i| format!("First{i:02}")).collect();
    assert_eq!(first_names, expected);
}

/// A column-1 search matching 3 of 25 records.
#[test]
fn column_search_matching_3_of_25() {
    let service = service_25();
    let mut payload = widget_payload(2, 0, 10);
    set_column_search(&mut payload, 1, "jones");
    let resp = service.table(&parse(payload));

    assert_eq!(resp.draw, 2);
    assert_eq!(resp.records_total, 25);
    assert_eq!(resp.records_filtered, 3);
    assert_eq!(resp.data.len(), 3);
    assert!(resp.data.iter().all(|r| r[1] == "Jones"));
}

/// length -1 returns every filtered record.
#[test]
fn length_sentinel_returns_all_17_filtered() {
    let records: Vec<Employee> = sample_employees(25)
        .into_iter()
        .enumerate()
        .map(|(i, mut e)| {
            e.company = if i < 17 { "Initech".into() } else { "Hooli".into() };
            e
        })
        .collect();
    let service = GridService::from_records(records);

    let mut payload = widget_payload(3, 0, -1);
    set_column_search(&mut payload, 2, "initech");
    let resp = service.table(&parse(payload));

    assert_eq!(resp.records_filtered, 17);
    assert_eq!(resp.data.len(), 17);
}

/// length -1 also means "all remaining after start".
#[test]
fn length_sentinel_respects_start_offset() {
    let service = service_25();
    let resp = service.table(&parse(widget_payload(4, 8, -1)));

    assert_eq!(resp.records_filtered, 25);
    assert_eq!(resp.data.len(), 17);
    assert_eq!(resp.data[0][0], "First08");
}

#[test]
fn start_beyond_filtered_set_yields_empty_page() {
    let service = service_25();
    let resp = service.table(&parse(widget_payload(5, 100, 10)));

    assert_eq!(resp.records_filtered, 25);
    assert!(resp.data.is_empty());
}

/// recordsFiltered counts matches before paging, never the page size.
#[test]
fn filtered_is_counted_before_paging() {
    let service = service_25();
    let mut payload = widget_payload(6, 0, 2);
    set_column_search(&mut payload, 1, "jones");
    let resp = service.table(&parse(payload));

    assert_eq!(resp.records_filtered, 3);
    assert_eq!(resp.data.len(), 2);
    assert!(resp.records_filtered <= resp.records_total);
}

/// The global search term applies across all searchable columns.
#[test]
fn global_search_spans_columns() {
    let service = service_25();
    let mut payload = widget_payload(7, 0, -1);
    payload["search"]["value"] = serde_json::Value::String("jones".to_string());
    let resp = service.table(&parse(payload));

    assert_eq!(resp.records_filtered, 3);
}

/// Descending sort on the salary column uses the numeric comparator,
/// not string order over the rendered digits.
#[test]
fn salary_sorts_numerically_descending() {
    let service = service_25();
    let mut payload = widget_payload(8, 0, -1);
    payload["order"] = serde_json::json!([{"column": 5, "dir": "desc"}]);
    let resp = service.table(&parse(payload));

    let salaries: Vec<i64> = resp.data.iter().map(|r| r[5].parse().unwrap()).collect();
    let mut sorted = salaries.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(salaries, sorted);
}

/// Secondary order rules break ties left by the primary key.
#[test]
fn multi_key_sort_breaks_ties() {
    let service = service_25();
    let mut payload = widget_payload(9, 0, -1);
    payload["order"] = serde_json::json!([
        {"column": 2, "dir": "asc"},
        {"column": 0, "dir": "desc"},
    ]);
    let resp = service.table(&parse(payload));

    for pair in resp.data.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a[2] <= b[2]);
        if a[2] == b[2] {
            assert!(a[0] >= b[0]);
        }
    }
}

/// Draw is echoed verbatim, whatever the request outcome.
#[rstest]
#[case(1)]
#[case(999)]
#[case(0)]
fn draw_is_echoed(#[case] draw: u64) {
    let service = service_25();
    let resp = service.table(&parse(widget_payload(draw, 0, 10)));
    assert_eq!(resp.draw, draw);
}

/// The demo service loads its record set from a JSON file once at
/// construction.
#[test]
fn dataset_loads_from_file() {
    let dir = TempDir::new().unwrap();
    let employees = sample_employees(5);
    let path = write_dataset(dir.path(), &employees).unwrap();

    let config = DatasetConfig {
        path: path.to_str().unwrap().to_string(),
    };
    let service = GridService::load(&config).unwrap();
    assert_eq!(service.num_records(), 5);

    let resp = service.table(&parse(widget_payload(1, 0, -1)));
    assert_eq!(resp.records_total, 5);
    assert_eq!(resp.data.len(), 5);
}

#[test]
fn missing_dataset_file_is_a_dataset_error() {
    let config = DatasetConfig {
        path: "/nonexistent/data.json".to_string(),
    };
    assert!(matches!(
        GridService::load(&config),
        Err(gridwire::core::GridwireError::DatasetError(_))
    ));
}
