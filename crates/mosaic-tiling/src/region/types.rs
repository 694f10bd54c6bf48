//! Core types for region partitioning: Direction, Region and RegionSplit.

use mosaic_common::types::Rect;
use serde::{Deserialize, Serialize};

/// Axis along which the container is cut.
///
/// `Horizontal` places the regions side by side (a vertical divider),
/// `Vertical` stacks them (a horizontal divider).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// A sub-box of the container and the tiles laid out in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Position and size relative to the container origin.
    pub bounds: Rect,
    /// Input indices of the tiles in this region, in input order.
    pub tiles: Vec<usize>,
    /// Whether the big-tile bounds govern this region.
    pub big: bool,
}

/// Result of partitioning the visible tiles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionSplit {
    pub big: Option<Region>,
    pub rest: Option<Region>,
    /// Set only when both regions exist.
    pub direction: Option<Direction>,
}

impl RegionSplit {
    /// Regions in the order they are laid out.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.big.iter().chain(self.rest.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.big.is_none() && self.rest.is_none()
    }
}
