// SuperOS Calendar Application
// Main entry point

use superos_calendar::ui_egui::TimeBlockApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting SuperOS time-blocking prototype");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("SuperOS"),
        ..Default::default()
    };

    eframe::run_native(
        "SuperOS",
        options,
        Box::new(|cc| Ok(Box::new(TimeBlockApp::new(cc)))),
    )
}
