mod app;
mod features;

use std::path::Path;

use env_logger::Env;
use iced::{Size, window};
use image::ImageFormat;

use crate::app::{App, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::features::settings;

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let settings = settings::load_initial_settings();
    let icon = window_icon(Path::new(settings.logo_path()));

    iced::application(
        move || App::new(settings.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .antialiasing(true)
    .window(window::Settings {
        min_size: Some(Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        }),
        icon,
        ..window::Settings::default()
    })
    .resizable(true)
    .run()
}

/// Decode the brand logo into a window icon.
fn window_icon(path: &Path) -> Option<window::Icon> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            log::warn!("window icon unavailable at {}: {err}", path.display());
            return None;
        },
    };

    match window::icon::from_file_data(&data, ImageFormat::from_path(path).ok())
    {
        Ok(icon) => Some(icon),
        Err(err) => {
            log::warn!("window icon decode failed for {}: {err}", path.display());
            None
        },
    }
}
