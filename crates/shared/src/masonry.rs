//! Masonry placement engine
//!
//! Packs variable-height cells into equal-width columns. The engine follows the
//! usual masonry lifecycle: [`MasonryLayout::initialize`] with a container width
//! and options, [`MasonryLayout::layout`] whenever the cells change, and
//! [`MasonryLayout::destroy`] before re-initializing with new options.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MasonryOptions {
    pub column_width: f32,
    pub gutter: f32,
    /// Spread columns across the full container width instead of packing them
    /// at `column_width + gutter` from the left edge.
    pub percent_position: bool,
    /// Place item `i` in column `i % columns` so reading order runs left to right.
    /// Otherwise each item drops into the currently shortest column.
    pub horizontal_order: bool,
}

impl MasonryOptions {
    pub fn new(column_width: f32, gutter: f32) -> Self {
        Self {
            column_width,
            gutter,
            percent_position: false,
            horizontal_order: true,
        }
    }
}

/// Height source for one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellExtent {
    /// Natural image size; the cell keeps the aspect ratio at column width.
    Image { width: u32, height: u32 },
    /// Fixed height regardless of column width (placeholders).
    Fixed(f32),
}

impl CellExtent {
    pub fn height_at(&self, column_width: f32) -> f32 {
        match *self {
            CellExtent::Image { width, height } if width > 0 => {
                column_width * height as f32 / width as f32
            }
            CellExtent::Image { .. } => 0.0,
            CellExtent::Fixed(height) => height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone)]
pub struct MasonryLayout {
    container_width: f32,
    options: MasonryOptions,
    columns: usize,
    placements: Vec<Placement>,
    content_height: f32,
}

impl MasonryLayout {
    pub fn initialize(container_width: f32, options: MasonryOptions) -> Self {
        let columns = calculate_columns(container_width, options.column_width, options.gutter);

        tracing::debug!(
            "masonry initialized: {columns} columns of {}px in {container_width}px",
            options.column_width
        );

        Self {
            container_width,
            options,
            columns,
            placements: Vec::new(),
            content_height: 0.0,
        }
    }

    pub fn options(&self) -> &MasonryOptions {
        &self.options
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Distance between the left edges of two neighbouring columns.
    fn column_pitch(&self) -> f32 {
        if self.options.percent_position {
            (self.container_width + self.options.gutter) / self.columns as f32
        } else {
            self.options.column_width + self.options.gutter
        }
    }

    pub fn layout(&mut self, cells: &[CellExtent]) -> &[Placement] {
        let pitch = self.column_pitch();
        let width = self.options.column_width;
        let gutter = self.options.gutter;
        let mut heights = vec![0.0_f32; self.columns];

        self.placements.clear();

        for (index, cell) in cells.iter().enumerate() {
            let col = if self.options.horizontal_order {
                index % self.columns
            } else {
                shortest_column(&heights)
            };

            let height = cell.height_at(width);
            self.placements.push(Placement {
                index,
                x: col as f32 * pitch,
                y: heights[col],
                width,
                height,
            });

            heights[col] += height + gutter;
        }

        self.content_height = heights
            .iter()
            .copied()
            .fold(0.0_f32, f32::max)
            .max(gutter)
            - gutter;

        &self.placements
    }

    pub fn destroy(self) {
        tracing::debug!(
            "masonry destroyed after placing {} cells",
            self.placements.len()
        );
    }
}

/// Number of columns of `column_width` that fit in the container.
pub fn calculate_columns(container_width: f32, column_width: f32, gutter: f32) -> usize {
    if container_width <= 0.0 || column_width <= 0.0 {
        return 1;
    }

    (((container_width + gutter) / (column_width + gutter)).floor() as usize).max(1)
}

fn shortest_column(heights: &[f32]) -> usize {
    heights
        .iter()
        .enumerate()
        .fold((0, f32::INFINITY), |(best, min), (idx, &h)| {
            if h < min { (idx, h) } else { (best, min) }
        })
        .0
}
