//! Othello AI Engine GUI
//!
//! A graphical interface for playing Othello against the AI or watching
//! it play itself.

use othello::ui::OthelloApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Othello"),
        ..Default::default()
    };

    eframe::run_native(
        "Othello",
        options,
        Box::new(|cc| Ok(Box::new(OthelloApp::new(cc)))),
    )
}
