//! Navigation Panel Widget
//! Left sidebar with the section selector and dataset facts.

use amazon_sales_dashboard::{DatasetSummary, Section};
use egui::{Color32, RichText};

/// Left sidebar.
pub struct NavPanel;

impl NavPanel {
    /// Draw the sidebar. Returns true when the selected section changed.
    pub fn show(ui: &mut egui::Ui, section: &mut Section, summary: DatasetSummary) -> bool {
        let before = *section;

        ui.add_space(5.0);
        ui.label(RichText::new("Navigation").size(20.0).strong());
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new("Go to section:").size(13.0));
        ui.add_space(5.0);
        for option in Section::ALL {
            ui.radio_value(section, option, RichText::new(option.label()).size(14.0));
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        ui.label(
            RichText::new(format!(
                "{} products · {} categories",
                summary.products, summary.categories
            ))
            .size(11.0)
            .color(Color32::GRAY),
        );

        *section != before
    }
}
