// main.rs - Desktop front end for the aging Game of Life
// The simulation itself lives in the conway_aging crate; this binary only
// renders snapshots and forwards input.

use eframe::egui;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod app;
mod config;

use app::LifeApp;
use config::UiConfig;
use conway_aging::Runner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = UiConfig::from_env();

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).compact().init();

    info!(
        rows     = config.life.rows,
        cols     = config.life.cols,
        tick_ms  = config.life.tick_interval.as_millis() as u64,
        max_age  = config.life.max_age,
        "starting Game of Life"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let runner = Runner::new(config.life, runtime.handle().clone())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Box::new(LifeApp::new(cc, runtime, runner))),
    )?;
    Ok(())
}
