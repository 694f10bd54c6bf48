//! Layout engine types and output.

use mosaic_common::types::{Rect, TileId};
use mosaic_common::LayoutError;
use mosaic_config::LayoutOptions;
use serde::Serialize;

/// Computes tile rectangles for a fixed set of options.
///
/// Options are checked and clipped once at construction, so every
/// `compute` call runs against a valid configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    pub(super) options: LayoutOptions,
}

impl LayoutEngine {
    /// Build an engine, failing on inverted or non-finite ratio bounds.
    pub fn new(options: LayoutOptions) -> Result<Self, LayoutError> {
        Ok(Self {
            options: options.prepared()?,
        })
    }

    /// The options in effect after clipping.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }
}

/// A tile's final position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub id: TileId,
    pub rect: Rect,
}

/// Result of one layout pass, index-aligned with the input tiles.
///
/// Hidden tiles, and every tile of a degenerate container, map to `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Layout {
    slots: Vec<Option<Rect>>,
}

impl Layout {
    pub(crate) fn new(slots: Vec<Option<Rect>>) -> Self {
        Self { slots }
    }

    /// Rectangle for the tile at `index`, if it was laid out.
    pub fn get(&self, index: usize) -> Option<Rect> {
        self.slots.get(index).copied().flatten()
    }

    /// Number of input tiles.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of tiles that received a rectangle.
    pub fn laid_out_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Laid-out tiles in input order.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.map(|rect| Placement {
                id: TileId(index),
                rect,
            })
        })
    }

    pub fn as_slice(&self) -> &[Option<Rect>] {
        &self.slots
    }

    pub fn into_vec(self) -> Vec<Option<Rect>> {
        self.slots
    }
}
