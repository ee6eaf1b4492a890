use gallery_types::GalleryEntry;
use serde::{Deserialize, Serialize};
use shared::{GridCellConfiguration, MasonryOptions};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

pub mod defaults;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Gallery has no entries")]
    Empty,
    #[error("Invalid layout: {0}")]
    Layout(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub min_item_width: u32,
    pub max_item_width: u32,
    pub gutter: u32,
    pub max_columns: u32,
    pub placeholder_height: f32,
    pub percent_position: bool,
    pub horizontal_order: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_item_width: 250,
            max_item_width: 350,
            gutter: 16,
            max_columns: 6,
            placeholder_height: 200.0,
            percent_position: false,
            horizontal_order: true,
        }
    }
}

impl LayoutConfig {
    pub fn grid(&self) -> GridCellConfiguration {
        GridCellConfiguration::new(self.min_item_width, self.max_item_width)
            .with_gutter(self.gutter)
            .with_max_columns(self.max_columns)
    }

    /// Masonry options for a container of `container_width` pixels.
    pub fn masonry_options(&self, container_width: u32) -> MasonryOptions {
        let column = self.grid().layout_for(container_width);
        MasonryOptions {
            column_width: column.item_width as f32,
            gutter: self.gutter as f32,
            percent_position: self.percent_position,
            horizontal_order: self.horizontal_order,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub resize_debounce_ms: u64,
    pub fade_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 250,
            fade_ms: 150,
        }
    }
}

impl TimingConfig {
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    /// Horizontal travel in pixels a swipe must exceed to navigate
    pub swipe_threshold: f32,
    /// Full-size images kept in memory for the lightbox
    pub cache_size: usize,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            cache_size: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryConfig {
    pub source: PathBuf,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub layout: LayoutConfig,
    pub timing: TimingConfig,
    pub lightbox: LightboxConfig,
    pub entries: Vec<EntryConfig>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            timing: TimingConfig::default(),
            lightbox: LightboxConfig::default(),
            entries: defaults::entries(),
        }
    }
}

impl GalleryConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GalleryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entries.is_empty() {
            return Err(ConfigError::Empty);
        }
        self.layout.grid().validate().map_err(ConfigError::Layout)
    }

    /// Ordered gallery entries, relative sources resolved against `base_dir`.
    pub fn gallery_entries(&self, base_dir: &Path) -> Vec<GalleryEntry> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let source = if entry.source.is_absolute() {
                    entry.source.clone()
                } else {
                    base_dir.join(&entry.source)
                };
                GalleryEntry::new(source, entry.caption.clone(), index)
            })
            .collect()
    }
}

/// Configuration plus the directory relative image sources resolve against.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: GalleryConfig,
    pub base_dir: PathBuf,
}

impl LoadedConfig {
    pub fn entries(&self) -> Vec<GalleryEntry> {
        self.config.gallery_entries(&self.base_dir)
    }
}

pub fn load_manifest(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = GalleryConfig::from_json(&json)?;
    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    tracing::info!(
        "loaded manifest {} with {} entries",
        path.display(),
        config.entries.len()
    );

    Ok(LoadedConfig { config, base_dir })
}

/// Read the manifest if one was given, otherwise use the built-in gallery.
/// A broken manifest is logged and replaced by the built-in gallery.
pub fn config(manifest: Option<&Path>) -> LoadedConfig {
    let builtin = || LoadedConfig {
        config: GalleryConfig::default(),
        base_dir: PathBuf::from("."),
    };

    match manifest {
        Some(path) => load_manifest(path).unwrap_or_else(|err| {
            tracing::error!("{err}; using the built-in gallery");
            builtin()
        }),
        None => builtin(),
    }
}
