pub mod backdrop;
pub mod masonry_grid;

pub use backdrop::{Backdrop, backdrop};
pub use masonry_grid::{MasonryGrid, masonry_grid};
