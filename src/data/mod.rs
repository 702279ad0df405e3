//! Data module - KEV dataset loading and summaries

mod dataset;
mod loader;

pub use dataset::{Dataset, KevColumn, TotalVariant};
pub use loader::DatasetSummarizer;
