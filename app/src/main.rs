use eframe::egui;

mod app;
mod pages;
mod ui;

fn main() -> eframe::Result<()> {
    env_logger::init();
    eframe::run_native(
        "Voice Platform Console",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([1380.0, 860.0]),
            ..Default::default()
        },
        Box::new(|cc| Ok(Box::new(app::ConsoleApp::new(cc)))),
    )
}
