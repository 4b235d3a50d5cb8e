use eframe::egui;

pub const WORLD_LONGITUDE_SPAN: f64 = 360.0;
pub const WORLD_LATITUDE_SPAN: f64 = 180.0;

pub const OBSERVER_DOT_RADIUS: f32 = 5.0;
pub const OBSERVER_DOT_COLOR: egui::Color32 = egui::Color32::YELLOW;
pub const OBSERVER_TEXT_COLOR: egui::Color32 = egui::Color32::WHITE;
pub const CLOCK_TEXT_COLOR: egui::Color32 = egui::Color32::BLACK;
pub const CAPTION_FONT_SIZE: f32 = 12.0;
pub const CLOCK_BOTTOM_MARGIN: f32 = 4.0;

pub const LOADING_TEXT: &str = "Loading...";

// Repaint faster than the 1 Hz fix rate so a click never waits a full second.
pub const REPAINT_INTERVAL: std::time::Duration = std::time::Duration::from_millis(200);
