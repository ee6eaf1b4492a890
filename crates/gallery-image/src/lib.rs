pub mod cache;
pub mod loader;

pub use cache::{CachedImage, ImageCache};
pub use loader::{
    BulkLoadError, GalleryOutcome, LoadError, LoadedImage, load_gallery, load_image,
    load_thumbnail,
};
