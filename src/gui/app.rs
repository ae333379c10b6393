//! Dashboard Main Application
//! Sidebar navigation plus the chart viewer for the selected section.

use crate::charts::{NAVY, SIDEBAR_NAVY};
use crate::gui::{ChartViewer, NavPanel};
use amazon_sales_dashboard::{DatasetSummary, ProductTable, Section, SectionParams, SectionView};
use egui::{Color32, RichText, SidePanel};
use log::error;

/// Main application window.
pub struct DashboardApp {
    table: &'static ProductTable,
    summary: DatasetSummary,
    section: Section,
    params: SectionParams,
    /// Derived tables for the current section and params.
    view: Option<SectionView>,
    error: Option<String>,
}

impl DashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        table: &'static ProductTable,
        params: SectionParams,
    ) -> Self {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = NAVY;
        visuals.window_fill = NAVY;
        visuals.override_text_color = Some(Color32::WHITE);
        cc.egui_ctx.set_visuals(visuals);

        let mut app = Self {
            table,
            summary: DatasetSummary::of(table),
            section: Section::default(),
            params,
            view: None,
            error: None,
        };
        app.refresh();
        app
    }

    /// Recompute the derived tables for the current selection.
    fn refresh(&mut self) {
        match SectionView::compute(self.table, self.section, self.params) {
            Ok(view) => {
                self.view = Some(view);
                self.error = None;
            }
            Err(e) => {
                error!("Failed to compute {} view: {}", self.section, e);
                self.view = None;
                self.error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut needs_refresh = false;

        SidePanel::left("nav_panel")
            .min_width(220.0)
            .frame(egui::Frame::side_top_panel(&ctx.style()).fill(SIDEBAR_NAVY))
            .show(ctx, |ui| {
                needs_refresh |= NavPanel::show(ui, &mut self.section, self.summary);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(RichText::new("📦 Amazon Sales Data").size(28.0).strong());
            ui.add_space(10.0);

            match (&self.view, &self.error) {
                (Some(view), _) => {
                    needs_refresh |= ChartViewer::show(ui, view, &mut self.params);
                }
                (None, Some(error)) => {
                    ui.label(
                        RichText::new(format!("Error: {}", error))
                            .color(Color32::from_rgb(220, 53, 69)),
                    );
                }
                (None, None) => {
                    ui.centered_and_justified(|ui| {
                        ui.label(RichText::new("No Data").size(20.0));
                    });
                }
            }
        });

        if needs_refresh {
            self.refresh();
        }
    }
}
