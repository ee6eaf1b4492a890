use cosmic::widget::image::Handle;
use lru::LruCache;
use std::{
    collections::HashSet,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

#[derive(Clone)]
pub struct CachedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Debug for CachedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Full-size images for the lightbox, plus the set of paths currently loading.
#[derive(Clone)]
pub struct ImageCache {
    full_images: Arc<Mutex<LruCache<PathBuf, CachedImage>>>,
    pending: Arc<Mutex<HashSet<PathBuf>>>,
}

impl ImageCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            full_images: Arc::new(Mutex::new(LruCache::new(capacity_of(capacity)))),
            pending: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(10)
    }

    pub fn get(&self, path: &Path) -> Option<CachedImage> {
        self.full_images.lock().ok()?.get(path).cloned()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.full_images
            .lock()
            .map(|cache| cache.contains(path))
            .unwrap_or(false)
    }

    pub fn insert(&self, path: PathBuf, image: CachedImage) {
        self.clear_pending(&path);

        if let Ok(mut cache) = self.full_images.lock() {
            cache.put(path, image);
        }
    }

    pub fn len(&self) -> usize {
        self.full_images.lock().map(|cache| cache.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_pending(&self, path: &Path) -> bool {
        self.pending
            .lock()
            .map(|set| set.contains(path))
            .unwrap_or(false)
    }

    /// Mark `path` as loading unless it is already cached or in flight.
    /// Returns true when the caller should start the load.
    pub fn claim(&self, path: &Path) -> bool {
        if self.contains(path) {
            return false;
        }

        self.pending
            .lock()
            .map(|mut set| set.insert(path.to_path_buf()))
            .unwrap_or(false)
    }

    pub fn clear_pending(&self, path: &Path) {
        if let Ok(mut set) = self.pending.lock() {
            set.remove(path);
        }
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn capacity_of(capacity: usize) -> NonZeroUsize {
    NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)
}
