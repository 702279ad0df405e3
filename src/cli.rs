//! Command Line Interface
//! Global options shared by every subcommand.

use crate::config::Theme;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kev-dashboard", author, version, about, long_about = None)]
pub struct Cli {
    /// JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// KEV catalog CSV
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Directory holding pre-rendered figures
    #[arg(short, long, global = true)]
    pub figures: Option<PathBuf>,

    /// Initial color theme
    #[arg(long, global = true, value_enum)]
    pub theme: Option<Theme>,

    /// Bars shown in the top vendor/product charts
    #[arg(long, global = true)]
    pub top_n: Option<usize>,

    /// Log filter (trace, debug, info, warn, error); overrides RUST_LOG
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Open the dashboard window (default)
    Gui,
    /// Print the dataset summary as JSON
    Summary,
    /// Render the dataset-derived figures as PNG files
    RenderFigures(RenderArgs),
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RenderArgs {
    /// Output directory; defaults to the figures directory
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Gui)
    }
}
