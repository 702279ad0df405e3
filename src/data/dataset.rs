//! KEV Dataset Module
//! In-memory catalog rows and the counts derived from them.

use crate::error::DashboardError;
use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Logical columns of the KEV catalog, each with the header names it may
/// appear under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KevColumn {
    CveId,
    Vendor,
    Product,
    DateAdded,
    Ransomware,
}

impl KevColumn {
    /// Header names accepted for this column, preferred first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            KevColumn::CveId => &["cveID", "cveId"],
            KevColumn::Vendor => &["vendorProject", "vendor"],
            KevColumn::Product => &["product"],
            KevColumn::DateAdded => &["dateAdded", "year"],
            KevColumn::Ransomware => &["knownRansomwareCampaignUse"],
        }
    }
}

/// How `total_records` counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TotalVariant {
    /// Every row.
    #[default]
    Rows,
    /// Distinct non-null identifier values.
    DistinctIds,
}

/// A loaded KEV catalog. Read-only after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    df: DataFrame,
    source: PathBuf,
}

impl Dataset {
    /// Read a CSV file fully into memory.
    ///
    /// Every column is read as text; typed interpretation happens in the
    /// accessors below. A missing, empty or malformed file yields
    /// `DataUnavailable` and no dataset.
    pub fn read_csv(path: &Path) -> Result<Self, DashboardError> {
        if !path.is_file() {
            return Err(DashboardError::data_unavailable(path, "file not found"));
        }

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(|e| DashboardError::data_unavailable(path, e))?;

        if df.width() == 0 {
            return Err(DashboardError::data_unavailable(path, "no columns"));
        }

        Ok(Self::from_frame(df, path))
    }

    /// Wrap an existing DataFrame.
    pub fn from_frame(df: DataFrame, source: impl Into<PathBuf>) -> Self {
        Self {
            df,
            source: source.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Resolve a logical column to the header present in this file.
    pub fn column_name(&self, column: KevColumn) -> Result<&str, DashboardError> {
        let names = self.df.get_column_names();
        column
            .aliases()
            .iter()
            .find(|alias| names.iter().any(|n| n.as_str() == **alias))
            .copied()
            .ok_or_else(|| {
                DashboardError::data_unavailable(
                    &self.source,
                    format!("missing column `{}`", column.aliases()[0]),
                )
            })
    }

    /// Row count, or distinct identifier count.
    pub fn total_records(&self, variant: TotalVariant) -> Result<usize, DashboardError> {
        match variant {
            TotalVariant::Rows => Ok(self.height()),
            TotalVariant::DistinctIds => {
                let name = self.column_name(KevColumn::CveId)?;
                self.distinct_count(name)
            }
        }
    }

    /// Distinct non-null values in a named column.
    pub fn distinct_count(&self, column: &str) -> Result<usize, DashboardError> {
        let values = self.text_column(column)?;
        let distinct: HashSet<&str> = values.into_iter().flatten().collect();
        Ok(distinct.len())
    }

    /// Distinct non-null values in a logical column.
    pub fn distinct(&self, column: KevColumn) -> Result<usize, DashboardError> {
        self.distinct_count(self.column_name(column)?)
    }

    /// Rows per calendar year, ascending. Cells may hold a bare year or an
    /// ISO date; anything else is skipped.
    pub fn counts_by_year(&self, year_column: &str) -> Result<Vec<(i32, usize)>, DashboardError> {
        let values = self.text_column(year_column)?;
        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
        for year in values.into_iter().flatten().filter_map(parse_year) {
            *counts.entry(year).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }

    /// Rows per calendar month (1..=12) of a date column, ascending.
    pub fn counts_by_month(&self, date_column: &str) -> Result<Vec<(u32, usize)>, DashboardError> {
        let values = self.text_column(date_column)?;
        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        for date in values.into_iter().flatten().filter_map(parse_date) {
            *counts.entry(date.month()).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }

    /// Rows per year embedded in the CVE identifier (`CVE-2021-44228`).
    pub fn counts_by_cve_year(&self) -> Result<Vec<(i32, usize)>, DashboardError> {
        let values = self.text_column(self.column_name(KevColumn::CveId)?)?;
        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
        for year in values.into_iter().flatten().filter_map(cve_year) {
            *counts.entry(year).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }

    /// The `n` most frequent values, highest count first, ties by value.
    pub fn top_values(&self, column: &str, n: usize) -> Result<Vec<(String, usize)>, DashboardError> {
        let values = self.text_column(column)?;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for value in values.into_iter().flatten() {
            *counts.entry(value).or_default() += 1;
        }

        let mut ranked: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(value, count)| (value.to_string(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(n);
        Ok(ranked)
    }

    /// A column as text, whatever dtype it was built with.
    fn text_column(&self, column: &str) -> Result<StringChunked, DashboardError> {
        let col = self.df.column(column).map_err(|_| {
            DashboardError::data_unavailable(&self.source, format!("missing column `{}`", column))
        })?;
        let text = col
            .cast(&DataType::String)
            .map_err(|e| DashboardError::data_unavailable(&self.source, e))?;
        let chunked = text
            .str()
            .map_err(|e| DashboardError::data_unavailable(&self.source, e))?;
        Ok(chunked.clone())
    }
}

fn parse_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    let day = cell.get(..10).unwrap_or(cell);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn parse_year(cell: &str) -> Option<i32> {
    let trimmed = cell.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }
    // Years written back by float-typed tooling, e.g. "2021.0"
    if let Ok(year) = trimmed.parse::<f64>() {
        if year.fract() == 0.0 && year.is_finite() {
            return Some(year as i32);
        }
    }
    parse_date(trimmed).map(|d| d.year())
}

fn cve_year(id: &str) -> Option<i32> {
    let mut parts = id.trim().split('-');
    match (parts.next(), parts.next()) {
        (Some(prefix), Some(year)) if prefix.eq_ignore_ascii_case("CVE") => year.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let df = df!(
            "cveID" => ["CVE-2021-1", "CVE-2021-2", "CVE-2022-3", "CVE-2021-1"],
            "vendorProject" => ["a", "a", "b", "c"],
            "product" => [Some("x"), None, Some("y"), Some("x")],
            "dateAdded" => ["2021-11-03", "2021-12-10", "2022-01-05", "not a date"],
        )
        .unwrap();
        Dataset::from_frame(df, "sample.csv")
    }

    #[test]
    fn totals_by_variant() {
        let ds = sample();
        assert_eq!(ds.total_records(TotalVariant::Rows).unwrap(), 4);
        assert_eq!(ds.total_records(TotalVariant::DistinctIds).unwrap(), 3);
    }

    #[test]
    fn distinct_count_ignores_nulls() {
        let ds = sample();
        assert_eq!(ds.distinct_count("vendorProject").unwrap(), 3);
        assert_eq!(ds.distinct_count("product").unwrap(), 2);
        assert_eq!(ds.distinct(KevColumn::Vendor).unwrap(), 3);
    }

    #[test]
    fn unknown_column_is_data_unavailable() {
        let err = sample().distinct_count("nope").unwrap_err();
        assert!(matches!(err, DashboardError::DataUnavailable { .. }));
        let err = sample().column_name(KevColumn::Ransomware).unwrap_err();
        assert!(err.to_string().contains("knownRansomwareCampaignUse"));
    }

    #[test]
    fn years_from_dates_skip_garbage() {
        let ds = sample();
        assert_eq!(
            ds.counts_by_year("dateAdded").unwrap(),
            vec![(2021, 2), (2022, 1)]
        );
    }

    #[test]
    fn years_from_integer_column() {
        let df = df!("year" => [2022i64, 2021, 2021]).unwrap();
        let ds = Dataset::from_frame(df, "years.csv");
        assert_eq!(ds.column_name(KevColumn::DateAdded).unwrap(), "year");
        assert_eq!(
            ds.counts_by_year("year").unwrap(),
            vec![(2021, 2), (2022, 1)]
        );
    }

    #[test]
    fn months_and_cve_years() {
        let ds = sample();
        assert_eq!(
            ds.counts_by_month("dateAdded").unwrap(),
            vec![(1, 1), (11, 1), (12, 1)]
        );
        assert_eq!(ds.counts_by_cve_year().unwrap(), vec![(2021, 3), (2022, 1)]);
    }

    #[test]
    fn top_values_rank_by_count_then_name() {
        let ds = sample();
        assert_eq!(
            ds.top_values("vendorProject", 2).unwrap(),
            vec![("a".to_string(), 2), ("b".to_string(), 1)]
        );
    }

    #[test]
    fn year_parsing_forms() {
        assert_eq!(parse_year("2020"), Some(2020));
        assert_eq!(parse_year("2020.0"), Some(2020));
        assert_eq!(parse_year("2019-03-01"), Some(2019));
        assert_eq!(parse_year("2019-03-01T00:00:00"), Some(2019));
        assert_eq!(parse_year("soon"), None);
        assert_eq!(cve_year("CVE-1999-0001"), Some(1999));
        assert_eq!(cve_year("GHSA-xxxx"), None);
    }
}
