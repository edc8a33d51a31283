//! Freedom GUI
//!
//! A graphical interface for playing Freedom against the computer or another player.

use freedom::ui::FreedomApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Freedom Game"),
        ..Default::default()
    };

    eframe::run_native(
        "Freedom",
        options,
        Box::new(|cc| Ok(Box::new(FreedomApp::new(cc)))),
    )
}
