//! Yearly Trend Module
//! Spread of per-year CVE counts, shown next to the yearly boxplot figure.

use serde::Serialize;
use statrs::statistics::{Data, OrderStatistics, Statistics};

/// Descriptive statistics over the per-year counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyTrend {
    pub first_year: i32,
    pub last_year: i32,
    pub years: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub median: f64,
    pub lower_quartile: f64,
    pub upper_quartile: f64,
    pub min: f64,
    pub max: f64,
    /// Year with the most additions (earliest on ties).
    pub peak_year: i32,
}

impl YearlyTrend {
    /// Returns `None` for an empty series.
    pub fn from_counts(counts: &[(i32, usize)]) -> Option<Self> {
        let (first_year, _) = *counts.first()?;
        let (last_year, _) = *counts.last()?;
        let values: Vec<f64> = counts.iter().map(|&(_, c)| c as f64).collect();

        let peak_year = counts
            .iter()
            .fold((first_year, 0usize), |best, &(year, count)| {
                if count > best.1 {
                    (year, count)
                } else {
                    best
                }
            })
            .0;

        let std_dev = if values.len() > 1 {
            values.iter().std_dev()
        } else {
            0.0
        };

        let mut data = Data::new(values.clone());

        Some(Self {
            first_year,
            last_year,
            years: counts.len(),
            mean: values.iter().mean(),
            std_dev,
            median: data.median(),
            lower_quartile: data.lower_quartile(),
            upper_quartile: data.upper_quartile(),
            min: Statistics::min(values.iter()),
            max: Statistics::max(values.iter()),
            peak_year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_has_no_trend() {
        assert!(YearlyTrend::from_counts(&[]).is_none());
    }

    #[test]
    fn trend_over_three_years() {
        let trend = YearlyTrend::from_counts(&[(2021, 10), (2022, 30), (2023, 20)]).unwrap();
        assert_eq!(trend.first_year, 2021);
        assert_eq!(trend.last_year, 2023);
        assert_eq!(trend.years, 3);
        assert_eq!(trend.peak_year, 2022);
        assert!((trend.mean - 20.0).abs() < 1e-9);
        assert!((trend.std_dev - 10.0).abs() < 1e-9);
        assert!((trend.median - 20.0).abs() < 1e-9);
        assert_eq!(trend.min, 10.0);
        assert_eq!(trend.max, 30.0);
    }

    #[test]
    fn single_year_has_zero_spread() {
        let trend = YearlyTrend::from_counts(&[(2024, 7)]).unwrap();
        assert_eq!(trend.std_dev, 0.0);
        assert_eq!(trend.median, 7.0);
    }
}
