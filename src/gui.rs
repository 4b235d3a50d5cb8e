mod constants;

use crate::config::{AssetConfig, WindowConfig};
use crate::shutdown::ShutdownSignal;
use crate::tracker::StationViewer;
use crate::types::{GroundLocation, PassPrediction, StationFix};
use constants::{
    CAPTION_FONT_SIZE, CLOCK_BOTTOM_MARGIN, CLOCK_TEXT_COLOR, LOADING_TEXT, OBSERVER_DOT_COLOR,
    OBSERVER_DOT_RADIUS, OBSERVER_TEXT_COLOR, REPAINT_INTERVAL, WORLD_LATITUDE_SPAN,
    WORLD_LONGITUDE_SPAN,
};
use eframe::egui;

/// The two images the map needs, decoded up front so a bad asset path
/// fails at startup rather than mid-session.
pub struct MapAssets {
    pub background: egui::ColorImage,
    pub station_icon: egui::ColorImage,
}

pub fn load_assets(config: &AssetConfig) -> Result<MapAssets, AssetError> {
    Ok(MapAssets {
        background: load_color_image(&config.map_image)?,
        station_icon: load_color_image(&config.station_icon)?,
    })
}

fn load_color_image(path: &std::path::Path) -> Result<egui::ColorImage, AssetError> {
    let decoded = image::open(path).map_err(|source| AssetError::Decode {
        source,
        path: path.to_path_buf(),
    })?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[derive(Debug)]
pub enum AssetError {
    Decode {
        source: image::ImageError,
        path: std::path::PathBuf,
    },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Decode {
                source: error,
                path,
            } => {
                write!(
                    f,
                    "Failed to load image asset '{}': {}",
                    path.display(),
                    error
                )
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Decode { source: error, .. } => Some(error),
        }
    }
}

/// Opens the map window and blocks until it closes. The window closes on
/// the first frame that observes the shutdown signal set.
pub fn run(
    window: &WindowConfig,
    assets: MapAssets,
    viewer: StationViewer,
    shutdown: ShutdownSignal,
    observer: GroundLocation,
    observer_name: String,
    pass: PassPrediction,
) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("skywatch")
            .with_inner_size([window.width, window.height])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "skywatch",
        options,
        Box::new(move |cc| {
            Ok(Box::new(StationMapApp::new(
                &cc.egui_ctx,
                assets,
                viewer,
                shutdown,
                observer,
                &observer_name,
                pass,
            )))
        }),
    )
}

pub struct StationMapApp {
    viewer: StationViewer,
    shutdown: ShutdownSignal,
    observer: GroundLocation,
    pass_caption: String,
    background: egui::TextureHandle,
    station_icon: egui::TextureHandle,
}

impl StationMapApp {
    #[must_use]
    pub fn new(
        egui_ctx: &egui::Context,
        assets: MapAssets,
        viewer: StationViewer,
        shutdown: ShutdownSignal,
        observer: GroundLocation,
        observer_name: &str,
        pass: PassPrediction,
    ) -> Self {
        let background =
            egui_ctx.load_texture("world-map", assets.background, egui::TextureOptions::LINEAR);
        let station_icon = egui_ctx.load_texture(
            "station-icon",
            assets.station_icon,
            egui::TextureOptions::LINEAR,
        );
        StationMapApp {
            viewer,
            shutdown,
            observer,
            pass_caption: format!("Next pass:\n{0}\n{1}", human_time(pass.risetime), observer_name),
            background,
            station_icon,
        }
    }
}

impl eframe::App for StationMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.shutdown.is_triggered() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Any click anywhere on the map ends the session.
        if ctx.input(|input| input.pointer.any_click()) {
            self.shutdown.trigger();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let canvas = ui.max_rect();
                let painter = ui.painter();
                let full_uv =
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

                painter.image(self.background.id(), canvas, full_uv, egui::Color32::WHITE);

                // Fixed observer pin with the next-pass caption.
                let observer_point =
                    project_to_rect(self.observer.longitude(), self.observer.latitude(), canvas);
                painter.circle_filled(observer_point, OBSERVER_DOT_RADIUS, OBSERVER_DOT_COLOR);
                painter.text(
                    observer_point + egui::vec2(OBSERVER_DOT_RADIUS + 2.0, 0.0),
                    egui::Align2::LEFT_TOP,
                    &self.pass_caption,
                    egui::FontId::proportional(CAPTION_FONT_SIZE),
                    OBSERVER_TEXT_COLOR,
                );

                // Live station marker and its clock caption.
                let latest = self.viewer.latest();
                if let Some(fix) = &latest {
                    let station_point = project_to_rect(fix.longitude, fix.latitude, canvas);
                    painter.image(
                        self.station_icon.id(),
                        egui::Rect::from_center_size(
                            station_point,
                            self.station_icon.size_vec2(),
                        ),
                        full_uv,
                        egui::Color32::WHITE,
                    );
                }
                painter.text(
                    egui::pos2(canvas.center().x, canvas.bottom() - CLOCK_BOTTOM_MARGIN),
                    egui::Align2::CENTER_BOTTOM,
                    clock_caption(latest.as_ref()),
                    egui::FontId::proportional(CAPTION_FONT_SIZE),
                    CLOCK_TEXT_COLOR,
                );
            });

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}

/// Maps longitude [-180, 180] and latitude [-90, 90] linearly onto the
/// canvas, latitude increasing upward.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn project_to_rect(longitude: f64, latitude: f64, rect: egui::Rect) -> egui::Pos2 {
    let x = f64::from(rect.left())
        + (longitude + 180.0) / WORLD_LONGITUDE_SPAN * f64::from(rect.width());
    let y = f64::from(rect.top())
        + (90.0 - latitude) / WORLD_LATITUDE_SPAN * f64::from(rect.height());
    egui::pos2(x as f32, y as f32)
}

#[must_use]
pub fn human_time(datetime: chrono::DateTime<chrono::Utc>) -> String {
    datetime.format("%a %b %d %H:%M:%S %Y UTC").to_string()
}

#[must_use]
pub fn clock_caption(fix: Option<&StationFix>) -> String {
    match fix {
        Some(fix) => format!("Time of ISS stats: {0}", human_time(fix.timestamp)),
        None => String::from(LOADING_TEXT),
    }
}

#[cfg(test)]
mod tests {
    use super::{clock_caption, human_time, project_to_rect};
    use crate::types::StationFix;
    use eframe::egui;

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(720.0, 360.0))
    }

    fn assert_close(point: egui::Pos2, x: f32, y: f32) {
        assert!((point.x - x).abs() < 0.01, "x was {}", point.x);
        assert!((point.y - y).abs() < 0.01, "y was {}", point.y);
    }

    #[test]
    fn when_projecting_the_world_corners_then_they_land_on_the_canvas_corners() {
        assert_close(project_to_rect(-180.0, 90.0, canvas()), 0.0, 0.0);
        assert_close(project_to_rect(180.0, -90.0, canvas()), 720.0, 360.0);
    }

    #[test]
    fn when_projecting_the_origin_then_it_lands_on_the_canvas_center() {
        assert_close(project_to_rect(0.0, 0.0, canvas()), 360.0, 180.0);
    }

    #[test]
    fn when_projecting_the_default_observer_then_the_pin_sits_mid_north_america() {
        let point = project_to_rect(-86.148003, 39.791, canvas());
        assert_close(point, 187.704, 100.418);
    }

    #[test]
    fn when_formatting_an_epoch_then_the_caption_is_deterministic_utc() {
        let datetime = chrono::DateTime::from_timestamp(1_600_000_000, 0).unwrap();
        assert_eq!(human_time(datetime), "Sun Sep 13 12:26:40 2020 UTC");
    }

    #[test]
    fn when_no_fix_has_arrived_then_the_clock_shows_loading() {
        assert_eq!(clock_caption(None), "Loading...");
    }

    #[test]
    fn when_a_fix_is_present_then_the_clock_reports_its_timestamp() {
        let fix = StationFix {
            longitude: 0.0,
            latitude: 0.0,
            timestamp: chrono::DateTime::from_timestamp(1_600_000_000, 0).unwrap(),
        };
        assert_eq!(
            clock_caption(Some(&fix)),
            "Time of ISS stats: Sun Sep 13 12:26:40 2020 UTC"
        );
    }
}
