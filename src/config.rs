//! Dashboard configuration.
//! Defaults, then an optional JSON file, then command-line overrides.

use crate::cli::Cli;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the KEV export.
pub const DEFAULT_DATA_PATH: &str = "data/cisa_kev.csv";
/// Default location of notebook-generated figures.
pub const DEFAULT_FIGURES_DIR: &str = "figures";

/// Color scheme of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub figures_dir: PathBuf,
    pub theme: Theme,
    /// Number of bars in the top vendor/product charts.
    pub top_n: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            figures_dir: PathBuf::from(DEFAULT_FIGURES_DIR),
            theme: Theme::Light,
            top_n: 10,
        }
    }
}

impl DashboardConfig {
    /// Read a JSON config file. Absent keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Build the effective config for a command line.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(data) = &cli.data {
            self.data_path = data.clone();
        }
        if let Some(figures) = &cli.figures {
            self.figures_dir = figures.clone();
        }
        if let Some(theme) = cli.theme {
            self.theme = theme;
        }
        if let Some(top_n) = cli.top_n {
            self.top_n = top_n;
        }
    }
}
