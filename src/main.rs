//! KEV Dashboard - Global Cyberattack Pattern Analysis
//!
//! Opens the dashboard window, or prints/renders dataset summaries.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use kev_dashboard::charts::StaticChartRenderer;
use kev_dashboard::cli::{Cli, Commands};
use kev_dashboard::config::DashboardConfig;
use kev_dashboard::data::DatasetSummarizer;
use kev_dashboard::gui::DashboardApp;
use kev_dashboard::logging;
use kev_dashboard::stats::{EdaSummary, YearlyTrend};
use log::info;
use serde::Serialize;

/// Output of the `summary` command.
#[derive(Serialize)]
struct SummaryReport<'a> {
    source: String,
    summary: &'a EdaSummary,
    yearly_trend: Option<YearlyTrend>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let config = DashboardConfig::resolve(&cli)?;
    info!(
        "Data: {}, figures: {}",
        config.data_path.display(),
        config.figures_dir.display()
    );

    match cli.command() {
        Commands::Gui => run_gui(config),
        Commands::Summary => print_summary(&config),
        Commands::RenderFigures(args) => {
            let out = args.out.unwrap_or_else(|| config.figures_dir.clone());
            let summary = load_summary(&config)?;
            let written = StaticChartRenderer::render_all(&summary, &out)?;
            info!("Rendered {} figures into {}", written.len(), out.display());
            Ok(())
        }
    }
}

fn load_summary(config: &DashboardConfig) -> Result<EdaSummary> {
    let mut summarizer = DatasetSummarizer::new();
    let dataset = summarizer.load(&config.data_path)?;
    EdaSummary::from_dataset(&dataset, config.top_n)
        .with_context(|| format!("Failed to summarize {}", config.data_path.display()))
}

fn print_summary(config: &DashboardConfig) -> Result<()> {
    let summary = load_summary(config)?;
    let report = SummaryReport {
        source: config.data_path.display().to_string(),
        yearly_trend: YearlyTrend::from_counts(&summary.by_year_added),
        summary: &summary,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_gui(config: DashboardConfig) -> Result<()> {
    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("Global Cyberattack Pattern Analysis"),
        ..Default::default()
    };

    eframe::run_native(
        "KEV Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("Dashboard window failed: {}", e))
}
