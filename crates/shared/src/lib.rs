pub mod debounce;
pub mod grid_config;
pub mod image;
pub mod loading_state;
pub mod masonry;

pub use debounce::{Debouncer, Ticket};
pub use grid_config::{ColumnLayout, GridCellConfiguration};
pub use loading_state::{LoadingEvent, LoadingState};
pub use masonry::{CellExtent, MasonryLayout, MasonryOptions, Placement};
