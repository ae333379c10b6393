//! Chart Viewer Widget
//! Central scrollable panel that draws the current section view.

use crate::charts::{ChartPlotter, ColorScale};
use amazon_sales_dashboard::{DerivedTable, SectionParams, SectionView, TopN};
use amazon_sales_dashboard::stats::ScatterSeries;
use egui::{Color32, RichText, ScrollArea};

const SECTION_SPACING: f32 = 20.0;
const NOTE_COLOR: Color32 = Color32::from_rgb(100, 149, 237);

/// Draws a [`SectionView`] and its sliders.
pub struct ChartViewer;

impl ChartViewer {
    /// Draw `view`. Returns true when a slider moved and `params` changed.
    pub fn show(ui: &mut egui::Ui, view: &SectionView, params: &mut SectionParams) -> bool {
        let mut changed = false;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(RichText::new(view.section().heading()).size(24.0).strong());
                ui.add_space(10.0);

                match view {
                    SectionView::Categories {
                        by_total_rating,
                        by_average_discount,
                    } => {
                        ui.label(RichText::new("Top Categories by Total Rating").size(18.0));
                        changed |= Self::top_n_slider(ui, "rating_slider", &mut params.rating_top_n);
                        Self::chart_title(ui, by_total_rating);
                        ChartPlotter::draw_vertical_bars(ui, by_total_rating, ColorScale::Blues);

                        ui.add_space(SECTION_SPACING);

                        ui.label(RichText::new("Top Categories by Average Discount %").size(18.0));
                        changed |=
                            Self::top_n_slider(ui, "discount_slider", &mut params.discount_top_n);
                        Self::chart_title(ui, by_average_discount);
                        ChartPlotter::draw_horizontal_bars(
                            ui,
                            by_average_discount,
                            ColorScale::Blues,
                        );
                    }
                    SectionView::Products { most_reviewed } => {
                        Self::chart_title(ui, most_reviewed);
                        ChartPlotter::draw_donut(ui, most_reviewed);
                    }
                    SectionView::AboutData {
                        summary,
                        price_vs_rating,
                        discount_vs_rating,
                        discounted_price_vs_rating,
                    } => {
                        ui.label(
                            RichText::new(format!(
                                "{} products across {} categories",
                                summary.products, summary.categories
                            ))
                            .color(Color32::GRAY),
                        );
                        ui.add_space(10.0);

                        Self::scatter_block(ui, price_vs_rating, ColorScale::Viridis);
                        Self::scatter_block(ui, discount_vs_rating, ColorScale::Plasma);
                        Self::scatter_block(ui, discounted_price_vs_rating, ColorScale::Magma);
                    }
                }
            });

        changed
    }

    fn top_n_slider(ui: &mut egui::Ui, id: &str, top_n: &mut TopN) -> bool {
        let mut value = top_n.get();
        let response = ui
            .push_id(id, |ui| {
                ui.add(
                    egui::Slider::new(&mut value, TopN::MIN..=TopN::MAX)
                        .text("Number of categories to show"),
                )
            })
            .inner;

        if response.changed() && value != top_n.get() {
            *top_n = TopN::clamped(value as i64);
            return true;
        }
        false
    }

    fn chart_title(ui: &mut egui::Ui, table: &DerivedTable) {
        ui.add_space(5.0);
        ui.label(RichText::new(&table.title).size(14.0).strong());
        if table.is_empty() {
            ui.label(RichText::new("No data").color(Color32::GRAY));
        }
    }

    fn scatter_block(ui: &mut egui::Ui, series: &ScatterSeries, scale: ColorScale) {
        ui.label(RichText::new(&series.title).size(18.0));
        ChartPlotter::draw_scatter(ui, series, scale);
        ui.label(RichText::new(format!("📌 {}", series.insight())).color(NOTE_COLOR));
        ui.add_space(SECTION_SPACING);
    }
}
