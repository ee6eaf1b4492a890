pub mod types;

pub use types::{Direction, GalleryEntry, LoadOutcome};
