//! Amazon Sales Dashboard
//!
//! Desktop dashboard over the cleaned Amazon product CSV: category rankings,
//! most-reviewed products and price/discount versus rating.
//!
//! Usage:
//!   amazon-sales-dashboard --data cleaned_amazon_data.csv
//!   amazon-sales-dashboard --report categories --top-n 3

mod charts;
mod gui;

use amazon_sales_dashboard::{data, DashboardConfig, Section, SectionParams, SectionView};
use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use gui::DashboardApp;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "amazon-sales-dashboard")]
#[command(about = "Amazon product sales dashboard")]
#[command(version)]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cleaned product CSV (overrides the config file)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Initial number of categories per chart, 1 to 9
    #[arg(long, allow_negative_numbers = true)]
    top_n: Option<i64>,

    /// Print one section's derived tables as JSON instead of opening the window
    #[arg(long, value_name = "SECTION")]
    report: Option<Section>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(path) = args.data {
        config.data_path = path;
    }
    if let Some(n) = args.top_n {
        config.default_top_n = n;
    }

    // Nothing can be drawn without data: a load failure ends the process here.
    let table = data::load_shared(&config.data_path, &config.columns)
        .with_context(|| format!("cannot start dashboard from {}", config.data_path.display()))?;

    let params = SectionParams {
        rating_top_n: config.default_top_n(),
        discount_top_n: config.default_top_n(),
        products_top_n: config.products_top_n(),
    };

    if let Some(section) = args.report {
        let view = SectionView::compute(table, section, params)?;
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    info!("Opening dashboard window");
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("Amazon Sales Data"),
        ..Default::default()
    };

    eframe::run_native(
        "Amazon Sales Data",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, table, params)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
