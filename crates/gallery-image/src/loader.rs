use cosmic::widget::image::Handle;
use gallery_types::{GalleryEntry, LoadOutcome};
use shared::image::{ImageProcessingError, has_supported_extension, scale_to_width};
use std::{
    fmt::{self, Debug, Formatter},
    fs,
    future::Future,
    panic::{AssertUnwindSafe, catch_unwind},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tokio::task::JoinSet;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Failed to scale image: {0}")]
    Scale(#[from] ImageProcessingError),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Task cancelled")]
    Cancelled,
    #[error("Image decoder panicked")]
    Panicked,
}

/// The whole gallery load failed, as opposed to individual images.
#[derive(Debug, Error)]
pub enum BulkLoadError {
    #[error("Image loading task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Clone)]
pub struct LoadedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
}

impl Debug for LoadedImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("path", &self.path)
            .finish()
    }
}

pub type GalleryOutcome = LoadOutcome<LoadedImage>;

/// Load every entry concurrently and wait for all of them to settle.
///
/// A failing load only marks its own entry as failed. The returned outcomes
/// are in entry order no matter which load finished first. Only a load task
/// that panics or is aborted fails the whole gallery.
pub async fn load_gallery<T, F, Fut>(
    entries: Vec<GalleryEntry>,
    load_entry: F,
) -> Result<Vec<LoadOutcome<T>>, BulkLoadError>
where
    T: Send + 'static,
    F: Fn(GalleryEntry) -> Fut,
    Fut: Future<Output = Result<T, LoadError>> + Send + 'static,
{
    let total = entries.len();
    let mut set = JoinSet::new();

    for entry in entries {
        let loading = load_entry(entry.clone());
        set.spawn(async move { (entry, loading.await) });
    }

    let mut outcomes = Vec::with_capacity(total);
    while let Some(joined) = set.join_next().await {
        let (entry, result) = joined?;
        outcomes.push(match result {
            Ok(image) => LoadOutcome::Loaded { entry, image },
            Err(err) => {
                tracing::warn!("Image {} failed to load: {err}", entry.source.display());
                LoadOutcome::Failed {
                    entry,
                    reason: err.to_string(),
                }
            }
        });
    }

    outcomes.sort_by_key(LoadOutcome::index);

    let loaded = outcomes.iter().filter(|o| o.is_loaded()).count();
    tracing::info!("Gallery loaded: {loaded} of {total} images");

    Ok(outcomes)
}

pub async fn load_image(path: PathBuf) -> Result<LoadedImage, LoadError> {
    decode_on_pool(move || load_image_sync(&path)).await
}

pub async fn load_thumbnail(path: PathBuf, max_width: u32) -> Result<LoadedImage, LoadError> {
    decode_on_pool(move || load_thumbnail_sync(&path, max_width)).await
}

/// Run `decode` on the rayon pool and hand the result back over a oneshot.
///
/// A panic must not unwind out of a rayon job (the pool aborts the process),
/// so it is caught here and reported as [`LoadError::Panicked`].
async fn decode_on_pool<T, F>(decode: F) -> Result<T, LoadError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, LoadError> + Send + 'static,
{
    let (tx, rx) = tokio::sync::oneshot::channel();

    rayon::spawn(move || {
        let result = catch_unwind(AssertUnwindSafe(decode)).unwrap_or_else(|_| {
            tracing::error!("Image decoder panicked");
            Err(LoadError::Panicked)
        });
        let _ = tx.send(result);
    });

    rx.await.map_err(|_| LoadError::Cancelled)?
}

fn check_source(path: &Path) -> Result<(), LoadError> {
    if !has_supported_extension(path) {
        return Err(LoadError::UnsupportedFormat(path.display().to_string()));
    }

    fs::metadata(path)?;
    Ok(())
}

fn load_image_sync(path: &Path) -> Result<LoadedImage, LoadError> {
    check_source(path)?;

    let rgba = image::open(path)?.into_rgba8();
    let (width, height) = rgba.dimensions();
    let handle = Handle::from_rgba(width, height, rgba.into_raw());

    Ok(LoadedImage {
        handle,
        width,
        height,
        path: path.to_path_buf(),
    })
}

fn load_thumbnail_sync(path: &Path, max_width: u32) -> Result<LoadedImage, LoadError> {
    check_source(path)?;

    let img = image::open(path)?;
    let thumbnail = scale_to_width(&img, max_width)?;
    let (width, height) = thumbnail.dimensions();
    let handle = Handle::from_rgba(width, height, thumbnail.into_raw());

    Ok(LoadedImage {
        handle,
        width,
        height,
        path: path.to_path_buf(),
    })
}
