//! Dashboard error kinds.
//! Only two conditions reach the user: the dataset cannot be read, or a
//! figure file is absent. Everything else is application glue handled with
//! `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    /// Dataset file missing, unreadable, malformed, or lacking a column.
    #[error("Dataset unavailable ({}): {reason}", path.display())]
    DataUnavailable { path: PathBuf, reason: String },

    /// A referenced figure could not be found or decoded.
    #[error("Figure `{file}` is missing")]
    AssetMissing { file: String },
}

impl DashboardError {
    pub fn data_unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        DashboardError::DataUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn asset_missing(file: impl Into<String>) -> Self {
        DashboardError::AssetMissing { file: file.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_source() {
        let err = DashboardError::data_unavailable("data/cisa_kev.csv", "file not found");
        assert_eq!(
            err.to_string(),
            "Dataset unavailable (data/cisa_kev.csv): file not found"
        );
        let err = DashboardError::asset_missing("ransomware_flag.png");
        assert_eq!(err.to_string(), "Figure `ransomware_flag.png` is missing");
    }
}
