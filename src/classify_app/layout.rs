use crate::config::LayoutConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
}

/// Arrangement of the upload button and the uploaded image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub direction: Direction,
    pub gap: f32,
}

impl Layout {
    pub fn for_width(config: &LayoutConfig, width: f32) -> Self {
        if width <= config.narrow_max_width {
            Self {
                direction: Direction::Column,
                gap: config.narrow_gap,
            }
        } else {
            Self {
                direction: Direction::Row,
                gap: config.wide_gap,
            }
        }
    }
}
