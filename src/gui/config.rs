use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 260.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::WHITE;
    pub const BUTTON_STROKE_WIDTH: f32 = 2.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::from_gray(40);

    pub const WIDGET_GAP: f32 = 12.;

    // Cell-wall palette, same as the original cube wall.
    pub const BACKGROUND_COLOR: Color32 = Color32::BLACK;
    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50);
    pub const DEAD_COLOR: Color32 = Color32::from_rgb(0xe0, 0xe0, 0xe0);

    /// Gap between cells as a fraction of the cell side (cube 1.0, gap 0.2).
    pub const CELL_GAP_RATIO: f32 = 0.2;
    pub const CELL_ROUNDING: f32 = 2.;
}
