#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Painter")
            .with_inner_size([500.0, 620.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Painter",
        native_options,
        Box::new(|cc| Ok(Box::new(eframe_painter::PainterApp::new(cc)))),
    )
}
