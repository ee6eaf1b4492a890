mod app;
mod key_binds;
mod localize;
mod message;
mod views;

use app::GalleryApp;
use std::path::PathBuf;

fn main() -> cosmic::iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(app::INITIAL_WIDTH, app::INITIAL_HEIGHT))
        .size_limits(
            cosmic::iced::Limits::NONE
                .min_width(400.0)
                .min_height(300.0),
        );

    // Optional JSON manifest listing the gallery images
    let manifest = std::env::args().nth(1).map(PathBuf::from);

    cosmic::app::run::<GalleryApp>(settings, manifest)
}
