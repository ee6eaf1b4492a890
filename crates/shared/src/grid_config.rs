use serde::{Deserialize, Serialize};

/// Column count and item width chosen for a given container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub columns: u32,
    pub item_width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCellConfiguration {
    pub min_item_width: u32,
    pub max_item_width: u32,
    pub gutter: u32,
    pub max_columns: u32,
}

impl GridCellConfiguration {
    pub fn new(min_item_width: u32, max_item_width: u32) -> Self {
        Self {
            min_item_width,
            max_item_width,
            gutter: 16,     // Default 16px gutter
            max_columns: 6, // Never more than six columns
        }
    }

    pub fn with_gutter(mut self, gutter: u32) -> Self {
        self.gutter = gutter;
        self
    }

    pub fn with_max_columns(mut self, max_columns: u32) -> Self {
        self.max_columns = max_columns;
        self
    }

    /// Largest column count in `[1, max_columns]` such that
    /// `columns * min_item_width + (columns - 1) * gutter <= container_width`.
    pub fn columns_for(&self, container_width: u32) -> u32 {
        let pitch = self.min_item_width + self.gutter;
        if pitch == 0 {
            return 1;
        }

        ((container_width + self.gutter) / pitch).clamp(1, self.max_columns.max(1))
    }

    /// Remaining space split evenly across the columns, clamped to the item bounds.
    pub fn item_width_for(&self, container_width: u32, columns: u32) -> u32 {
        let columns = columns.max(1);
        let gutters = (columns - 1) * self.gutter;
        let width = container_width.saturating_sub(gutters) / columns;

        width.clamp(self.min_item_width, self.max_item_width)
    }

    pub fn layout_for(&self, container_width: u32) -> ColumnLayout {
        let columns = self.columns_for(container_width);
        ColumnLayout {
            columns,
            item_width: self.item_width_for(container_width, columns),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min_item_width > 0
            && self.min_item_width <= self.max_item_width
            && self.max_columns > 0
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.min_item_width == 0 {
            return Err("Minimum item width must be greater than zero".to_string());
        }

        if self.min_item_width > self.max_item_width {
            return Err("Minimum item width cannot exceed maximum item width".to_string());
        }

        if self.max_columns == 0 {
            return Err("At least one column is required".to_string());
        }

        Ok(())
    }
}

impl Default for GridCellConfiguration {
    fn default() -> Self {
        Self::new(250, 350)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = GridCellConfiguration::default();
        assert_eq!(config.min_item_width, 250);
        assert_eq!(config.max_item_width, 350);
        assert_eq!(config.gutter, 16);
        assert_eq!(config.max_columns, 6);
    }

    #[test]
    fn test_builder() {
        let config = GridCellConfiguration::new(200, 300)
            .with_gutter(8)
            .with_max_columns(4);

        assert_eq!(config.min_item_width, 200);
        assert_eq!(config.max_item_width, 300);
        assert_eq!(config.gutter, 8);
        assert_eq!(config.max_columns, 4);
    }

    #[test]
    fn test_columns_for_common_widths() {
        let config = GridCellConfiguration::default();

        // (800 + 16) / (250 + 16) = 3
        assert_eq!(config.columns_for(800), 3);
        // (1200 + 16) / 266 = 4
        assert_eq!(config.columns_for(1200), 4);
        // Wide screens stop at six
        assert_eq!(config.columns_for(2400), 6);
    }

    #[test]
    fn test_columns_boundary() {
        let config = GridCellConfiguration::default();

        // 2 * 250 + 16 = 516 fits exactly
        assert_eq!(config.columns_for(516), 2);
        assert_eq!(config.columns_for(515), 1);
    }

    #[test]
    fn test_narrow_container_keeps_one_column() {
        let config = GridCellConfiguration::default();
        assert_eq!(config.columns_for(0), 1);
        assert_eq!(config.columns_for(100), 1);
    }

    #[test]
    fn test_item_width_clamped() {
        let config = GridCellConfiguration::default();

        // (800 - 2 * 16) / 3 = 256
        assert_eq!(config.layout_for(800).item_width, 256);
        // (1200 - 3 * 16) / 4 = 288
        assert_eq!(config.layout_for(1200).item_width, 288);
        // Single wide column is capped at the maximum
        assert_eq!(config.layout_for(515).item_width, 350);
        // Too narrow is raised to the minimum
        assert_eq!(config.layout_for(200).item_width, 250);
        // (2400 - 5 * 16) / 6 = 386, capped
        assert_eq!(config.layout_for(2400).item_width, 350);
    }

    #[test]
    fn test_layout_never_overflows_when_columns_fit() {
        let config = GridCellConfiguration::default();

        for width in (516..3000).step_by(7) {
            let layout = config.layout_for(width);
            let used = layout.columns * config.min_item_width + (layout.columns - 1) * config.gutter;
            assert!(used <= width, "width {width} produced {layout:?}");
        }
    }

    #[test]
    fn test_validation() {
        let valid = GridCellConfiguration::default();
        assert!(valid.is_valid());
        assert!(valid.validate().is_ok());

        let inverted = GridCellConfiguration::new(400, 300);
        assert!(!inverted.is_valid());
        assert!(inverted.validate().is_err());

        let no_columns = GridCellConfiguration::default().with_max_columns(0);
        assert!(!no_columns.is_valid());
        assert!(no_columns.validate().is_err());
    }
}
