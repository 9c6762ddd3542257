//! Column registry driving filter/sort/page over an in-memory record set.
//!
//! A [`ColumnMap`] is built once per endpoint and maps each positional
//! column index from the widget's request to a render function (also
//! used for substring matching) and a comparator. This replaces the
//! hardcoded index-to-field switch a naive handler would write.

use std::cmp::Ordering;

use crate::protocol::{SortDirection, TableRequest, TableResponse};

type Render<T> = Box<dyn Fn(&T) -> String + Send + Sync>;
type Compare<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

struct ColumnDef<T> {
    render: Render<T>,
    compare: Option<Compare<T>>,
}

pub struct ColumnMap<T> {
    columns: Vec<ColumnDef<T>>,
}

impl<T> Default for ColumnMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ColumnMap<T> {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Register the next column. Sorting compares the rendered strings.
    pub fn column(mut self, render: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.columns.push(ColumnDef {
            render: Box::new(render),
            compare: None,
        });
        self
    }

    /// Register the next column with a typed comparator, for fields
    /// where string order is wrong (dates, numbers).
    pub fn column_with(
        mut self,
        render: impl Fn(&T) -> String + Send + Sync + 'static,
        compare: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.columns.push(ColumnDef {
            render: Box::new(render),
            compare: Some(Box::new(compare)),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn cmp_at(&self, idx: usize, a: &T, b: &T) -> Ordering {
        let col = &self.columns[idx];
        match &col.compare {
            Some(compare) => compare(a, b),
            None => (col.render)(a).cmp(&(col.render)(b)),
        }
    }

    fn matches(&self, idx: usize, record: &T, needle: &str) -> bool {
        (self.columns[idx].render)(record)
            .to_lowercase()
            .contains(needle)
    }

    /// Run the whole pipeline for one request: filter, count, sort,
    /// page, render. `recordsFiltered` is taken after filtering and
    /// before paging; the draw counter is echoed from the request.
    pub fn run(&self, req: &TableRequest, records: &[T]) -> TableResponse {
        let records_total = records.len() as u64;
        let mut rows: Vec<&T> = records.iter().collect();

        // Global search: keep rows where any searchable column matches.
        if !req.search.is_empty() {
            let needle = req.search.value.to_lowercase();
            rows.retain(|r| {
                req.columns.iter().enumerate().any(|(i, spec)| {
                    spec.searchable && i < self.columns.len() && self.matches(i, r, &needle)
                })
            });
        }

        // Per-column search, matched positionally. Request columns
        // beyond the registry are ignored.
        for (i, spec) in req.columns.iter().enumerate() {
            if !spec.searchable || spec.search.is_empty() || i >= self.columns.len() {
                continue;
            }
            let needle = spec.search.value.to_lowercase();
            rows.retain(|r| self.matches(i, r, &needle));
        }

        let records_filtered = rows.len() as u64;

        // Stable multi-key sort: order rules applied in priority order,
        // ties keeping their earlier relative order. Out-of-range
        // indices are skipped.
        let keys: Vec<(usize, SortDirection)> = req
            .order
            .iter()
            .filter(|rule| (rule.column as usize) < self.columns.len())
            .map(|rule| (rule.column as usize, rule.dir))
            .collect();
        if !keys.is_empty() {
            rows.sort_by(|a, b| {
                for &(idx, dir) in &keys {
                    let ord = match dir {
                        SortDirection::Asc => self.cmp_at(idx, a, b),
                        SortDirection::Desc => self.cmp_at(idx, a, b).reverse(),
                    };
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                Ordering::Equal
            });
        }

        // Paging. length == -1 means all remaining records.
        let start = usize::try_from(req.start).unwrap_or(usize::MAX);
        let page = rows.into_iter().skip(start);
        let page: Vec<&T> = if req.length == -1 {
            page.collect()
        } else {
            page.take(req.length.max(0) as usize).collect()
        };

        let data = page
            .into_iter()
            .map(|r| self.columns.iter().map(|c| (c.render)(r)).collect())
            .collect();

        TableResponse::new(req.draw, records_total, records_filtered, data)
    }
}
