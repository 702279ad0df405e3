//! Stats module - dataset summaries and fixed model scores

mod metrics;
mod summary;
mod trend;

pub use metrics::{best_model, model_scores, ModelScore, MODEL_SCORES};
pub use summary::{format_count, month_name, EdaSummary};
pub use trend::YearlyTrend;
