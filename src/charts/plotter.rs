//! Chart Plotter Module
//! Live bar charts of dataset counts using egui_plot.

use crate::stats::month_name;
use egui::Color32;
use egui_plot::{Bar, BarChart, Plot};

/// Bar color for dataset-derived charts
pub const BAR_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

const CHART_HEIGHT: f32 = 260.0;

/// Draws simple count charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Color for the i-th category of a ranked chart.
    pub fn category_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Vertical bars, one per year.
    pub fn draw_year_bars(ui: &mut egui::Ui, id: &str, counts: &[(i32, usize)]) {
        let bars: Vec<Bar> = counts
            .iter()
            .map(|&(year, count)| {
                Bar::new(year as f64, count as f64)
                    .width(0.7)
                    .name(year.to_string())
            })
            .collect();

        Plot::new(id)
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Year")
            .y_axis_label("CVEs")
            .x_axis_formatter(|mark, _range| {
                // Only whole years get a label
                if mark.value.fract() == 0.0 {
                    format!("{:.0}", mark.value)
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR).name("CVEs"));
            });
    }

    /// Vertical bars, one per calendar month.
    pub fn draw_month_bars(ui: &mut egui::Ui, id: &str, counts: &[(u32, usize)]) {
        let bars: Vec<Bar> = counts
            .iter()
            .map(|&(month, count)| {
                Bar::new(month as f64, count as f64)
                    .width(0.7)
                    .name(month_name(month))
            })
            .collect();

        Plot::new(id)
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_x(0.5)
            .include_x(12.5)
            .y_axis_label("CVEs")
            .x_axis_formatter(|mark, _range| {
                let v = mark.value;
                if v.fract() == 0.0 && (1.0..=12.0).contains(&v) {
                    month_name(v as u32).to_string()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR).name("CVEs"));
            });
    }

    /// Horizontal bars for a ranked list, highest at the top.
    pub fn draw_ranked_bars(ui: &mut egui::Ui, id: &str, ranked: &[(String, usize)]) {
        let n = ranked.len();
        // Row 0 is drawn at the top of the chart
        let labels: Vec<String> = ranked.iter().rev().map(|(name, _)| name.clone()).collect();

        let bars: Vec<Bar> = ranked
            .iter()
            .enumerate()
            .map(|(i, (name, count))| {
                Bar::new((n - 1 - i) as f64, *count as f64)
                    .width(0.7)
                    .name(name)
                    .fill(Self::category_color(i))
            })
            .collect();

        Plot::new(id)
            .height(CHART_HEIGHT.max(n as f32 * 22.0))
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("CVEs")
            .y_axis_formatter(move |mark, _range| {
                let v = mark.value;
                if v.fract() != 0.0 || v < 0.0 {
                    return String::new();
                }
                labels.get(v as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).horizontal().name("CVEs"));
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps() {
        assert_eq!(ChartPlotter::category_color(0), PALETTE[0]);
        assert_eq!(ChartPlotter::category_color(10), PALETTE[0]);
        assert_eq!(ChartPlotter::category_color(13), PALETTE[3]);
    }
}
