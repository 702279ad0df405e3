//! EDA Summary Module
//! Headline numbers and count series shown on the overview pages.

use crate::data::{Dataset, KevColumn, TotalVariant};
use crate::error::DashboardError;
use serde::Serialize;

/// Everything the overview and trend pages read from the dataset.
#[derive(Debug, Clone, Serialize)]
pub struct EdaSummary {
    pub total_cves: usize,
    pub unique_cve_ids: usize,
    pub unique_vendors: usize,
    pub unique_products: usize,
    pub by_year_added: Vec<(i32, usize)>,
    pub by_cve_year: Vec<(i32, usize)>,
    pub by_month_added: Vec<(u32, usize)>,
    pub top_vendors: Vec<(String, usize)>,
    pub top_products: Vec<(String, usize)>,
    /// Empty when the file has no ransomware column.
    pub ransomware_use: Vec<(String, usize)>,
}

impl EdaSummary {
    /// Compute the summary. Fails if a core column is absent.
    pub fn from_dataset(dataset: &Dataset, top_n: usize) -> Result<Self, DashboardError> {
        let vendor = dataset.column_name(KevColumn::Vendor)?;
        let product = dataset.column_name(KevColumn::Product)?;
        let date = dataset.column_name(KevColumn::DateAdded)?;

        let ransomware_use = match dataset.column_name(KevColumn::Ransomware) {
            Ok(column) => dataset.top_values(column, usize::MAX)?,
            Err(_) => Vec::new(),
        };

        Ok(Self {
            total_cves: dataset.total_records(TotalVariant::Rows)?,
            unique_cve_ids: dataset.total_records(TotalVariant::DistinctIds)?,
            unique_vendors: dataset.distinct_count(vendor)?,
            unique_products: dataset.distinct_count(product)?,
            by_year_added: dataset.counts_by_year(date)?,
            by_cve_year: dataset.counts_by_cve_year()?,
            by_month_added: dataset.counts_by_month(date)?,
            top_vendors: dataset.top_values(vendor, top_n)?,
            top_products: dataset.top_values(product, top_n)?,
            ransomware_use,
        })
    }
}

/// Format a count with thousands separators, e.g. `1,234`.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Three-letter month name for 1..=12.
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    month
        .checked_sub(1)
        .and_then(|i| NAMES.get(i as usize))
        .copied()
        .unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn summary_from_frame() {
        let df = df!(
            "cveID" => ["CVE-2021-44228", "CVE-2021-45046", "CVE-2017-0144"],
            "vendorProject" => ["Apache", "Apache", "Microsoft"],
            "product" => ["Log4j2", "Log4j2", "SMBv1"],
            "dateAdded" => ["2021-12-10", "2021-12-14", "2022-02-10"],
            "knownRansomwareCampaignUse" => ["Known", "Unknown", "Known"],
        )
        .unwrap();
        let ds = Dataset::from_frame(df, "kev.csv");

        let summary = EdaSummary::from_dataset(&ds, 1).unwrap();
        assert_eq!(summary.total_cves, 3);
        assert_eq!(summary.unique_vendors, 2);
        assert_eq!(summary.unique_products, 2);
        assert_eq!(summary.by_year_added, vec![(2021, 2), (2022, 1)]);
        assert_eq!(summary.by_cve_year, vec![(2017, 1), (2021, 2)]);
        assert_eq!(summary.by_month_added, vec![(2, 1), (12, 2)]);
        assert_eq!(summary.top_vendors, vec![("Apache".to_string(), 2)]);
        assert_eq!(
            summary.ransomware_use,
            vec![("Known".to_string(), 2), ("Unknown".to_string(), 1)]
        );
    }

    #[test]
    fn missing_vendor_column_fails() {
        let df = df!("cveID" => ["CVE-2021-1"], "product" => ["p"]).unwrap();
        let ds = Dataset::from_frame(df, "kev.csv");
        assert!(EdaSummary::from_dataset(&ds, 5).is_err());
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "Jan");
        assert_eq!(month_name(12), "Dec");
        assert_eq!(month_name(0), "?");
        assert_eq!(month_name(13), "?");
    }
}
