//! Navigation Panel Widget
//! Left side panel with page selection, theme toggle and data source.

use crate::config::Theme;
use crate::pages::Page;
use egui::{Color32, RichText};
use std::path::PathBuf;

/// Left side navigation panel.
pub struct NavPanel {
    pub page: Page,
    pub theme: Theme,
    pub data_path: PathBuf,
    pub status: String,
    pub busy: bool,
}

impl NavPanel {
    pub fn new(theme: Theme, data_path: PathBuf) -> Self {
        Self {
            page: Page::default(),
            theme,
            data_path,
            status: "Ready".to_string(),
            busy: false,
        }
    }

    /// Draw the panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> NavAction {
        let mut action = NavAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🌐 KEV Dashboard")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Known Exploited Vulnerabilities")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Navigation =====
        ui.label(RichText::new("Navigation").size(14.0).strong());
        ui.label(
            RichText::new("Select an analysis module")
                .size(11.0)
                .color(Color32::GRAY),
        );
        ui.add_space(5.0);

        for page in Page::ALL {
            if ui
                .radio_value(&mut self.page, page, page.label())
                .changed()
            {
                action = NavAction::PageChanged(page);
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Appearance =====
        ui.label(RichText::new("🎨 Appearance").size(14.0).strong());
        ui.add_space(5.0);

        let label = match self.theme {
            Theme::Light => "🌙 Dark mode",
            Theme::Dark => "☀ Light mode",
        };
        if ui.button(label).clicked() {
            self.theme = self.theme.toggled();
            action = NavAction::ThemeChanged(self.theme);
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Data Source =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let file_name = self
                    .data_path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| self.data_path.display().to_string());
                ui.label(RichText::new(file_name).size(12.0))
                    .on_hover_text(self.data_path.display().to_string());

                ui.horizontal(|ui| {
                    ui.add_enabled_ui(!self.busy, |ui| {
                        if ui.button("📂 Open CSV…").clicked() {
                            action = NavAction::OpenCsv;
                        }
                        if ui.button("🔄 Reload").clicked() {
                            action = NavAction::Reload;
                        }
                    });
                });
            });

        ui.add_space(5.0);

        let status_color = if self.status.starts_with("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.starts_with("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.horizontal(|ui| {
            if self.busy {
                ui.spinner();
            }
            ui.label(RichText::new(&self.status).size(11.0).color(status_color));
        });

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by the navigation panel
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    None,
    PageChanged(Page),
    ThemeChanged(Theme),
    OpenCsv,
    Reload,
}
