//! Single-pass aggregation over a parsed CSV table.
//!
//! Every row is visited once. Each visit updates the duplicate-signature map
//! and one accumulator per column; the accumulators are folded into
//! [`ColumnStat`] values at the end.

use std::borrow::Cow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;
use tracing::debug;

use crate::reader::CsvTable;

/// Number of duplicate pairs kept for console and report previews.
pub const DUPLICATE_PREVIEW_LIMIT: usize = 10;

/// A duplicate row and the row it repeats, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DuplicatePair {
    pub first: usize,
    pub duplicate: usize,
}

/// A frequent value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopValue {
    pub value: String,
    pub count: usize,
}

/// Per-column aggregates.
///
/// Numeric fields are `None` when no cell in the column parses as a number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStat {
    pub column: String,
    pub non_empty: usize,
    pub missing: usize,
    pub unique_count: usize,
    pub numeric_count: usize,
    #[serde(serialize_with = "serialize_rounded")]
    pub numeric_min: Option<f64>,
    #[serde(serialize_with = "serialize_rounded")]
    pub numeric_max: Option<f64>,
    #[serde(serialize_with = "serialize_rounded")]
    pub numeric_mean: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top_values: Vec<TopValue>,
}

/// Whole-file aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditResult {
    pub path: String,
    pub rows: usize,
    pub columns: usize,
    /// Every duplicate occurrence in file order; the first occurrence of a
    /// signature is never included.
    pub duplicates: Vec<DuplicatePair>,
    pub per_column: Vec<ColumnStat>,
}

impl AuditResult {
    pub fn duplicate_rows(&self) -> usize {
        self.duplicates.len()
    }

    /// The first [`DUPLICATE_PREVIEW_LIMIT`] duplicate pairs.
    pub fn duplicate_examples(&self) -> &[DuplicatePair] {
        let end = self.duplicates.len().min(DUPLICATE_PREVIEW_LIMIT);
        &self.duplicates[..end]
    }

    pub fn has_top_values(&self) -> bool {
        self.per_column.iter().any(|stat| !stat.top_values.is_empty())
    }
}

/// Parse a cell as a number, ignoring thousands separators.
///
/// `"1,234.5"` is `1234.5`; blank cells and non-finite values (`nan`, `inf`)
/// are not numbers.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned: Cow<'_, str> = if trimmed.contains(',') {
        Cow::Owned(trimmed.replace(',', ""))
    } else {
        Cow::Borrowed(trimmed)
    };
    cleaned.parse::<f64>().ok().filter(|number| number.is_finite())
}

#[derive(Default)]
struct ColumnAccumulator<'a> {
    missing: usize,
    frequencies: HashMap<&'a str, usize>,
    numeric_count: usize,
    numeric_sum: f64,
    /// Incremental mean, used when `numeric_sum` overflows.
    running_mean: f64,
    numeric_min: Option<f64>,
    numeric_max: Option<f64>,
}

impl<'a> ColumnAccumulator<'a> {
    fn observe(&mut self, value: &'a str) {
        if value.is_empty() {
            self.missing += 1;
            return;
        }
        *self.frequencies.entry(value).or_insert(0) += 1;
        if let Some(number) = parse_number(value) {
            self.numeric_count += 1;
            self.numeric_sum += number;
            let n = self.numeric_count as f64;
            self.running_mean += number / n - self.running_mean / n;
            self.numeric_min = Some(self.numeric_min.map_or(number, |min| min.min(number)));
            self.numeric_max = Some(self.numeric_max.map_or(number, |max| max.max(number)));
        }
    }

    fn finish(self, column: &str, row_count: usize, top_k: usize) -> ColumnStat {
        let numeric_mean = match self.numeric_count {
            0 => None,
            _ if self.numeric_sum.is_finite() => {
                Some(self.numeric_sum / self.numeric_count as f64)
            }
            _ => Some(self.running_mean).filter(|mean| mean.is_finite()),
        };
        ColumnStat {
            column: column.to_string(),
            non_empty: row_count - self.missing,
            missing: self.missing,
            unique_count: self.frequencies.len(),
            numeric_count: self.numeric_count,
            numeric_min: self.numeric_min,
            numeric_max: self.numeric_max,
            numeric_mean,
            top_values: top_values(&self.frequencies, top_k),
        }
    }
}

/// The `k` most frequent values, by descending count then ascending value.
pub fn top_values(frequencies: &HashMap<&str, usize>, k: usize) -> Vec<TopValue> {
    if k == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<(&str, usize)> = frequencies
        .iter()
        .map(|(value, count)| (*value, *count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(k);
    ranked
        .into_iter()
        .map(|(value, count)| TopValue {
            value: value.to_string(),
            count,
        })
        .collect()
}

/// Aggregate `table` in one pass. `top_k == 0` disables top-value ranking.
pub fn audit_table(table: &CsvTable, path: &str, top_k: usize) -> AuditResult {
    let mut first_seen: HashMap<&[String], usize> = HashMap::with_capacity(table.rows.len());
    let mut duplicates = Vec::new();
    let mut accumulators: Vec<ColumnAccumulator<'_>> = table
        .headers
        .iter()
        .map(|_| ColumnAccumulator::default())
        .collect();

    for (offset, row) in table.rows.iter().enumerate() {
        let index = offset + 1;
        match first_seen.entry(row.values()) {
            Entry::Occupied(entry) => duplicates.push(DuplicatePair {
                first: *entry.get(),
                duplicate: index,
            }),
            Entry::Vacant(entry) => {
                entry.insert(index);
            }
        }
        for (column, accumulator) in accumulators.iter_mut().enumerate() {
            accumulator.observe(row.value(column));
        }
    }

    let row_count = table.rows.len();
    let per_column = accumulators
        .into_iter()
        .zip(&table.headers)
        .map(|(accumulator, header)| accumulator.finish(header, row_count, top_k))
        .collect();

    debug!(
        rows = row_count,
        columns = table.headers.len(),
        duplicates = duplicates.len(),
        "audit aggregated"
    );

    AuditResult {
        path: path.to_string(),
        rows: row_count,
        columns: table.headers.len(),
        duplicates,
        per_column,
    }
}

/// Round to six decimals for machine-readable output.
pub fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

fn serialize_rounded<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Some(number) => serializer.serialize_some(&round6(*number)),
        None => serializer.serialize_none(),
    }
}
