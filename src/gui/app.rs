//! KEV Dashboard Main Application
//! Main window with navigation panel and page view.

use crate::charts::FigureResolver;
use crate::config::{DashboardConfig, Theme};
use crate::data::{Dataset, DatasetSummarizer};
use crate::gui::{NavAction, NavPanel, PageContext, PageView};
use crate::stats::{format_count, EdaSummary, YearlyTrend};
use egui::{Color32, RichText, SidePanel, TopBottomPanel};
use log::{error, info};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

/// CSV loading result from background thread
enum LoadResult {
    Complete { path: PathBuf, dataset: Dataset },
    Error(String),
}

/// Main application window.
pub struct DashboardApp {
    config: DashboardConfig,
    summarizer: DatasetSummarizer,
    resolver: FigureResolver,
    nav_panel: NavPanel,
    page_view: PageView,

    summary: Option<EdaSummary>,
    trend: Option<YearlyTrend>,
    data_error: Option<String>,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        cc.egui_ctx.set_visuals(config.theme.visuals());

        let mut app = Self {
            summarizer: DatasetSummarizer::new(),
            resolver: FigureResolver::new(config.figures_dir.clone()),
            nav_panel: NavPanel::new(config.theme, config.data_path.clone()),
            page_view: PageView::new(),
            summary: None,
            trend: None,
            data_error: None,
            load_rx: None,
            is_loading: false,
            config,
        };
        app.start_loading(app.config.data_path.clone());
        app
    }

    /// Read the CSV on a background thread unless it is already cached.
    fn start_loading(&mut self, path: PathBuf) {
        if self.is_loading {
            return; // Already loading
        }

        self.nav_panel.data_path = path.clone();
        self.data_error = None;

        if let Some(dataset) = self.summarizer.cached(&path) {
            self.set_dataset(dataset);
            return;
        }

        self.summary = None;
        self.trend = None;
        self.is_loading = true;
        self.nav_panel.busy = true;
        self.nav_panel.set_status("Reading CSV file...");

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match Dataset::read_csv(&path) {
                Ok(dataset) => LoadResult::Complete { path, dataset },
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete { path, dataset }) => {
                let dataset = self.summarizer.insert(&path, dataset);
                self.finish_loading();
                self.set_dataset(dataset);
            }
            Ok(LoadResult::Error(e)) => {
                error!("{}", e);
                self.finish_loading();
                self.nav_panel.set_status("Error: dataset unavailable");
                self.data_error = Some(e);
            }
            Err(TryRecvError::Empty) => self.load_rx = Some(rx),
            Err(TryRecvError::Disconnected) => {
                error!("CSV loader thread exited without a result");
                self.finish_loading();
                self.nav_panel.set_status("Error: dataset unavailable");
                self.data_error = Some("Loading was interrupted".to_string());
            }
        }
    }

    fn finish_loading(&mut self) {
        self.is_loading = false;
        self.nav_panel.busy = false;
    }

    /// Compute the summaries for a freshly loaded dataset.
    fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        match EdaSummary::from_dataset(&dataset, self.config.top_n) {
            Ok(summary) => {
                info!("Summarized {}", dataset.source().display());
                self.trend = YearlyTrend::from_counts(&summary.by_year_added);
                self.nav_panel.set_status(&format!(
                    "Loaded {} rows, {} columns",
                    format_count(dataset.height()),
                    dataset.column_names().len()
                ));
                self.summary = Some(summary);
            }
            Err(e) => {
                error!("{}", e);
                self.nav_panel.set_status("Error: dataset unavailable");
                self.data_error = Some(e.to_string());
                self.summary = None;
                self.trend = None;
            }
        }
    }

    fn handle_open_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            info!("Opening {}", path.display());
            self.start_loading(path);
        }
    }

    fn handle_reload(&mut self) {
        let path = self.nav_panel.data_path.clone();
        self.summarizer.invalidate(&path);
        self.page_view.refresh_figures();
        info!("Reloading {}", path.display());
        self.start_loading(path);
    }

    fn apply_theme(&mut self, ctx: &egui::Context, theme: Theme) {
        self.config.theme = theme;
        ctx.set_visuals(theme.visuals());
    }

    fn show_header(ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(Color32::from_rgb(15, 23, 42))
            .rounding(18.0)
            .inner_margin(20.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new("Global Cyberattack Pattern Analysis")
                        .size(24.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.label(
                    RichText::new(
                        "Interactive analytical dashboard built on CISA Known Exploited \
                         Vulnerabilities (KEV) data. The dashboard presents exploratory \
                         analysis, machine learning results, clustering insights, \
                         association rules, and long-term temporal trends.",
                    )
                    .color(Color32::from_gray(220)),
                );
            });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Navigation
        SidePanel::left("navigation")
            .min_width(240.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.nav_panel.show(ui) {
                        NavAction::ThemeChanged(theme) => self.apply_theme(ctx, theme),
                        NavAction::OpenCsv => self.handle_open_csv(),
                        NavAction::Reload => self.handle_reload(),
                        NavAction::PageChanged(page) => info!("Showing {}", page.label()),
                        NavAction::None => {}
                    }
                });
            });

        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            Self::show_header(ui);
            ui.add_space(8.0);
        });

        TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("© 2025 Raghad Ali · Cybersecurity & Data Analytics")
                        .size(11.0)
                        .color(Color32::GRAY),
                );
            });
        });

        // Central panel - Page View
        egui::CentralPanel::default().show(ctx, |ui| {
            let pc = PageContext {
                summary: self.summary.as_ref(),
                trend: self.trend.as_ref(),
                data_error: self.data_error.as_deref(),
                loading: self.is_loading,
                resolver: &self.resolver,
            };
            self.page_view.show(ctx, ui, self.nav_panel.page, &pc);
        });
    }
}
