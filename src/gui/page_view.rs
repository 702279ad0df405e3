//! Page View Widget
//! Central scrollable area rendering the selected analysis page.

use crate::charts::{ChartPlotter, FigureResolver, FigureTextures};
use crate::pages::{FigureSpec, Page};
use crate::stats::{best_model, format_count, model_scores, EdaSummary, YearlyTrend};
use egui::{Color32, RichText, ScrollArea};
use log::warn;

const CARD_SPACING: f32 = 15.0;
const KPI_TITLE: Color32 = Color32::from_rgb(107, 114, 128);
const INFO_BLUE: Color32 = Color32::from_rgb(52, 152, 219);
const ERROR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// What the page view reads from the app for one frame.
pub struct PageContext<'a> {
    pub summary: Option<&'a EdaSummary>,
    pub trend: Option<&'a YearlyTrend>,
    pub data_error: Option<&'a str>,
    pub loading: bool,
    pub resolver: &'a FigureResolver,
}

/// Renders one page at a time; owns the figure texture cache.
#[derive(Default)]
pub struct PageView {
    textures: FigureTextures,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget decoded figures so changed files are picked up.
    pub fn refresh_figures(&mut self) {
        self.textures.clear();
    }

    pub fn show(&mut self, ctx: &egui::Context, ui: &mut egui::Ui, page: Page, pc: &PageContext) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(RichText::new(page.heading()).strong());
                ui.label(RichText::new(page.caption()).color(Color32::GRAY));
                ui.add_space(CARD_SPACING);

                // Figures and notes still render without a dataset
                if page.needs_dataset() {
                    Self::show_data_state(ui, pc);
                }

                match page {
                    Page::EdaOverview => self.show_eda(ctx, ui, pc),
                    Page::ModelingResults => Self::show_modeling(ui),
                    Page::ClusteringInsights | Page::AssociationRules => {
                        self.show_figure_pair(ctx, ui, page.figures(), pc.resolver)
                    }
                    Page::TrendsForecast => self.show_trends(ctx, ui, pc),
                }
            });
    }

    /// Draw the loading/error banner while no summary is available.
    fn show_data_state(ui: &mut egui::Ui, pc: &PageContext) {
        if let Some(error) = pc.data_error {
            Self::banner(ui, ERROR_RED, &format!("⚠ {}", error));
            ui.add_space(CARD_SPACING);
        } else if pc.summary.is_none() {
            ui.horizontal(|ui| {
                if pc.loading {
                    ui.spinner();
                }
                ui.label("Loading dataset…");
            });
            ui.add_space(CARD_SPACING);
        }
    }

    fn show_eda(&mut self, ctx: &egui::Context, ui: &mut egui::Ui, pc: &PageContext) {
        if let Some(summary) = pc.summary {
            ui.columns(3, |cols| {
                Self::kpi_card(&mut cols[0], "Total CVEs", &format_count(summary.total_cves));
                Self::kpi_card(
                    &mut cols[1],
                    "Unique Vendors",
                    &format_count(summary.unique_vendors),
                );
                Self::kpi_card(
                    &mut cols[2],
                    "Unique Products",
                    &format_count(summary.unique_products),
                );
            });
            ui.add_space(CARD_SPACING);
        }

        let figures = Page::EdaOverview.figures();
        let (singles, rest) = figures.split_at(2);
        for spec in singles {
            self.show_figure(ctx, ui, spec, pc.resolver);
        }
        // Ransomware and vendors side by side, products below
        let (pair, tail) = rest.split_at(2);
        self.show_figure_pair(ctx, ui, pair, pc.resolver);
        self.show_figures(ctx, ui, tail, pc.resolver);

        let Some(summary) = pc.summary else {
            return;
        };
        ui.separator();
        ui.label(RichText::new("Live counts from the dataset").size(16.0).strong());
        ui.add_space(5.0);
        ui.columns(2, |cols| {
            cols[0].label(RichText::new("CVEs added per year").strong());
            ChartPlotter::draw_year_bars(&mut cols[0], "eda_year_bars", &summary.by_year_added);
            cols[1].label(RichText::new("Top vendors").strong());
            ChartPlotter::draw_ranked_bars(&mut cols[1], "eda_vendor_bars", &summary.top_vendors);
        });
    }

    fn show_modeling(ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("model_scores")
                    .striped(true)
                    .min_col_width(120.0)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Model").strong());
                        ui.label(RichText::new("Accuracy").strong());
                        ui.label(RichText::new("Macro-F1").strong());
                        ui.end_row();

                        for score in model_scores() {
                            ui.label(score.model);
                            ui.label(format!("{:.2}", score.accuracy));
                            ui.label(format!("{:.2}", score.macro_f1));
                            ui.end_row();
                        }
                    });
            });

        let best = best_model();
        ui.add_space(5.0);
        ui.label(
            RichText::new(format!(
                "Best macro-F1: {} ({:.2})",
                best.model, best.macro_f1
            ))
            .size(12.0)
            .color(Color32::GRAY),
        );

        ui.add_space(CARD_SPACING);
        Self::banner(
            ui,
            INFO_BLUE,
            "All models were trained and evaluated in the `modeling.ipynb` notebook. \
             The dashboard displays final evaluation metrics only.",
        );
    }

    fn show_trends(&mut self, ctx: &egui::Context, ui: &mut egui::Ui, pc: &PageContext) {
        let figures = Page::TrendsForecast.figures();
        let (timeline, pair) = figures.split_at(1);
        self.show_figures(ctx, ui, timeline, pc.resolver);
        self.show_figure_pair(ctx, ui, pair, pc.resolver);

        if let Some(summary) = pc.summary {
            ui.separator();
            ui.label(RichText::new("CVEs added per year").size(16.0).strong());
            ChartPlotter::draw_year_bars(ui, "trend_year_bars", &summary.by_year_added);
            ui.add_space(5.0);
            ui.label(RichText::new("CVEs added per month").size(16.0).strong());
            ChartPlotter::draw_month_bars(ui, "trend_month_bars", &summary.by_month_added);
        }

        if let Some(trend) = pc.trend {
            ui.add_space(CARD_SPACING);
            egui::Grid::new("yearly_trend")
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    let rows = [
                        ("Years", format!("{}–{}", trend.first_year, trend.last_year)),
                        ("Peak year", trend.peak_year.to_string()),
                        ("Mean per year", format!("{:.1}", trend.mean)),
                        ("Std. deviation", format!("{:.1}", trend.std_dev)),
                        ("Median", format!("{:.1}", trend.median)),
                        (
                            "Quartiles",
                            format!("{:.1} / {:.1}", trend.lower_quartile, trend.upper_quartile),
                        ),
                        ("Min / Max", format!("{:.0} / {:.0}", trend.min, trend.max)),
                    ];
                    for (name, value) in rows {
                        ui.label(RichText::new(name).strong());
                        ui.label(value);
                        ui.end_row();
                    }
                });
        }

        ui.add_space(CARD_SPACING);
        ui.label(RichText::new("Forecast (Planned)").size(16.0).strong());
        ui.label(
            RichText::new(
                "Time-series forecasting using Prophet or LSTM will be added in a future release.",
            )
            .color(Color32::GRAY),
        );
    }

    fn show_figures(
        &mut self,
        ctx: &egui::Context,
        ui: &mut egui::Ui,
        specs: &[FigureSpec],
        resolver: &FigureResolver,
    ) {
        for spec in specs {
            self.show_figure(ctx, ui, spec, resolver);
        }
    }

    fn show_figure_pair(
        &mut self,
        ctx: &egui::Context,
        ui: &mut egui::Ui,
        specs: &[FigureSpec],
        resolver: &FigureResolver,
    ) {
        ui.columns(2, |cols| {
            for (col, spec) in cols.iter_mut().zip(specs) {
                self.show_figure(ctx, col, spec, resolver);
            }
        });
    }

    fn show_figure(
        &mut self,
        ctx: &egui::Context,
        ui: &mut egui::Ui,
        spec: &FigureSpec,
        resolver: &FigureResolver,
    ) {
        if let Some(title) = spec.title {
            ui.label(RichText::new(title).size(16.0).strong());
        }
        ui.label(RichText::new(spec.description).size(11.0).color(Color32::GRAY));

        let figure = resolver.resolve(spec.file);
        if !figure.exists {
            Self::banner(ui, INFO_BLUE, &figure.placeholder());
            if ui.small_button("📂 Open figures folder").clicked() {
                if let Err(e) = open::that(resolver.dir()) {
                    warn!("Failed to open {}: {}", resolver.dir().display(), e);
                }
            }
            ui.add_space(CARD_SPACING);
            return;
        }

        match self.textures.get(ctx, &figure) {
            Ok(texture) => {
                let sized = egui::load::SizedTexture::from_handle(&texture);
                ui.add(egui::Image::from_texture(sized).max_width(ui.available_width()));
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(spec.caption).size(11.0).italics());
                });
            }
            // Undecodable files were already logged when first read
            Err(_) => Self::banner(ui, INFO_BLUE, &figure.placeholder()),
        }
        ui.add_space(CARD_SPACING);
    }

    fn kpi_card(ui: &mut egui::Ui, title: &str, value: &str) {
        egui::Frame::none()
            .fill(ui.visuals().extreme_bg_color)
            .rounding(14.0)
            .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
            .inner_margin(20.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(title.to_uppercase()).size(11.0).color(KPI_TITLE));
                ui.label(RichText::new(value).size(26.0).strong());
            });
    }

    fn banner(ui: &mut egui::Ui, color: Color32, text: &str) {
        egui::Frame::none()
            .fill(color.gamma_multiply(0.15))
            .stroke(egui::Stroke::new(1.0, color))
            .rounding(8.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(text).color(color));
            });
    }
}
