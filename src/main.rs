#![warn(clippy::all)]

fn main() {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::init();

    log::info!("Game of Life on a Torus");
    log::info!("Controls:");
    log::info!("  Click cell - Toggle it (while editing)");
    log::info!("  Space      - Start / Stop");
    log::info!("  - / +      - Slow down / speed up (buttons)");

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(960., 720.))
            .with_min_inner_size(vec2(640.0, 480.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life on a Torus",
        options,
        Box::new(move |_cc| Ok(Box::new(torus_life::App::new()))),
    )
    .unwrap();
}
