use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One configured gallery image. `index` is its position in the gallery and
/// defines navigation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub source: PathBuf,
    pub caption: String,
    pub index: usize,
}

impl GalleryEntry {
    pub fn new(source: impl Into<PathBuf>, caption: impl Into<String>, index: usize) -> Self {
        Self {
            source: source.into(),
            caption: caption.into(),
            index,
        }
    }
}

/// Result of probing one entry. `I` is whatever the loader keeps for a
/// successfully loaded image.
#[derive(Debug, Clone)]
pub enum LoadOutcome<I> {
    Loaded { entry: GalleryEntry, image: I },
    Failed { entry: GalleryEntry, reason: String },
}

impl<I> LoadOutcome<I> {
    pub fn entry(&self) -> &GalleryEntry {
        match self {
            LoadOutcome::Loaded { entry, .. } | LoadOutcome::Failed { entry, .. } => entry,
        }
    }

    pub fn index(&self) -> usize {
        self.entry().index
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }

    pub fn image(&self) -> Option<&I> {
        match self {
            LoadOutcome::Loaded { image, .. } => Some(image),
            LoadOutcome::Failed { .. } => None,
        }
    }

    /// Split into loaded and failed outcomes, each keeping the original order.
    pub fn partition(outcomes: &[Self]) -> (Vec<&Self>, Vec<&Self>) {
        outcomes.iter().partition(|outcome| outcome.is_loaded())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Previous,
    Next,
}
