//! Chart Plotter Module
//! Draws derived tables and scatter series with egui_plot, plus a
//! painter-drawn donut chart.

use super::palette::{ColorScale, PALETTE};
use amazon_sales_dashboard::stats::{DerivedTable, ScatterSeries};
use egui::{Align2, Color32, FontId, RichText, Shape, Stroke};
use egui_plot::{Bar, BarChart, Plot, PlotPoints, Points};
use std::f32::consts::{FRAC_PI_2, TAU};

const CHART_HEIGHT: f32 = 340.0;
const DONUT_SIZE: f32 = 320.0;
/// Inner radius as a fraction of the outer radius
const DONUT_HOLE: f32 = 0.3;
/// Angular step when tessellating slices (radians)
const ARC_STEP: f32 = 0.05;
/// Scatter points are bucketed into this many color bands
const SCATTER_BANDS: usize = 6;
const MAX_LABEL_CHARS: usize = 48;

/// Creates the dashboard charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Vertical bars, one per entry, colored by value.
    pub fn draw_vertical_bars(ui: &mut egui::Ui, table: &DerivedTable, scale: ColorScale) {
        let labels: Vec<String> = table.keys().iter().map(|k| Self::short(k)).collect();
        let bars = Self::bars(table, scale, |i, _| i as f64);

        Plot::new(format!("vbar_{}", table.id))
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(table.key_label)
            .y_axis_label(table.value_label)
            .x_axis_formatter(move |mark, _range| Self::index_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name(table.value_label));
            });
    }

    /// Horizontal bars with the largest entry on top.
    pub fn draw_horizontal_bars(ui: &mut egui::Ui, table: &DerivedTable, scale: ColorScale) {
        let n = table.len();
        // Row i sits at position n-1-i; store labels by position.
        let labels: Vec<String> = table
            .keys()
            .iter()
            .rev()
            .map(|k| Self::short(k))
            .collect();
        let bars = Self::bars(table, scale, |i, n| (n - 1 - i) as f64);

        Plot::new(format!("hbar_{}", table.id))
            .height(CHART_HEIGHT.max(40.0 * n as f32))
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(table.value_label)
            .y_axis_label(table.key_label)
            .y_axis_formatter(move |mark, _range| Self::index_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .horizontal()
                        .name(table.value_label),
                );
            });
    }

    /// Scatter of (x, rating), colored in bands of the x value.
    pub fn draw_scatter(ui: &mut egui::Ui, series: &ScatterSeries, scale: ColorScale) {
        let (min, max) = series
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p[0]), hi.max(p[0]))
            });

        let mut bands: Vec<Vec<[f64; 2]>> = vec![Vec::new(); SCATTER_BANDS];
        for point in &series.points {
            let t = if max > min { (point[0] - min) / (max - min) } else { 1.0 };
            let band = ((t * SCATTER_BANDS as f64) as usize).min(SCATTER_BANDS - 1);
            bands[band].push(*point);
        }

        Plot::new(format!("scatter_{}", series.title))
            .height(CHART_HEIGHT)
            .x_axis_label(series.x_label)
            .y_axis_label(series.y_label)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for (i, band) in bands.into_iter().enumerate() {
                    if band.is_empty() {
                        continue;
                    }
                    let t = (i as f64 + 0.5) / SCATTER_BANDS as f64;
                    let points: PlotPoints = band.into_iter().collect();
                    plot_ui.points(Points::new(points).radius(2.5).color(scale.sample(t)));
                }
            });
    }

    /// Donut chart with a legend to the right.
    pub fn draw_donut(ui: &mut egui::Ui, table: &DerivedTable) {
        let total: f64 = table.values().iter().sum();
        if table.is_empty() || total <= 0.0 {
            ui.label(RichText::new("No data").color(Color32::GRAY));
            return;
        }

        ui.horizontal(|ui| {
            let (response, painter) =
                ui.allocate_painter(egui::vec2(DONUT_SIZE, DONUT_SIZE), egui::Sense::hover());
            let center = response.rect.center();
            let radius = DONUT_SIZE * 0.45;
            let polar = |angle: f32, r: f32| center + r * egui::vec2(angle.cos(), angle.sin());

            let mut start = -FRAC_PI_2;
            for (i, entry) in table.entries.iter().enumerate() {
                let share = (entry.value / total) as f32;
                let sweep = share * TAU;
                let color = PALETTE[i % PALETTE.len()];

                let steps = ((sweep / ARC_STEP).ceil() as usize).max(1);
                for s in 0..steps {
                    let a0 = start + sweep * s as f32 / steps as f32;
                    let a1 = start + sweep * (s + 1) as f32 / steps as f32;
                    painter.add(Shape::convex_polygon(
                        vec![center, polar(a0, radius), polar(a1, radius)],
                        color,
                        Stroke::NONE,
                    ));
                }

                if share >= 0.04 {
                    let mid = start + sweep / 2.0;
                    painter.text(
                        polar(mid, radius * (1.0 + DONUT_HOLE) / 2.0),
                        Align2::CENTER_CENTER,
                        format!("{:.1}%", share * 100.0),
                        FontId::proportional(12.0),
                        Color32::WHITE,
                    );
                }
                start += sweep;
            }

            let hole = ui.visuals().panel_fill;
            painter.circle_filled(center, radius * DONUT_HOLE, hole);

            ui.vertical(|ui| {
                for (i, entry) in table.entries.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                        ui.painter()
                            .rect_filled(rect, 3.0, PALETTE[i % PALETTE.len()]);
                        ui.label(RichText::new(Self::short(&entry.key)).size(12.0))
                            .on_hover_text(&entry.key);
                        ui.label(
                            RichText::new(format!("{:.0}", entry.value))
                                .size(12.0)
                                .color(Color32::GRAY),
                        );
                    });
                }
            });
        });
    }

    fn bars(
        table: &DerivedTable,
        scale: ColorScale,
        position: impl Fn(usize, usize) -> f64,
    ) -> Vec<Bar> {
        let values = table.values();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let n = table.len();

        table
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Bar::new(position(i, n), entry.value)
                    .name(&entry.key)
                    .width(0.6)
                    .fill(scale.sample_range(entry.value, min, max))
            })
            .collect()
    }

    /// Axis label for integer positions only.
    fn index_label(labels: &[String], value: f64) -> String {
        let rounded = value.round();
        if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }
        labels.get(rounded as usize).cloned().unwrap_or_default()
    }

    /// Truncate long product names for axes and legends.
    fn short(label: &str) -> String {
        if label.chars().count() <= MAX_LABEL_CHARS {
            label.to_string()
        } else {
            let head: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
            format!("{head}…")
        }
    }
}
