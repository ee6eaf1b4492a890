pub mod gallery;
pub mod lightbox;

pub use gallery::GalleryView;
pub use lightbox::LightboxView;
