//! KEV Dashboard - analytical dashboard over the CISA Known Exploited
//! Vulnerabilities catalog.
//!
//! The dataset summarizer and figure lookup are usable without the GUI.

pub mod charts;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod gui;
pub mod logging;
pub mod pages;
pub mod stats;

pub use error::DashboardError;
