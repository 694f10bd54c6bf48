//! Layout calculation: regions, then one grid per region.

use mosaic_common::types::{Rect, Size};
use mosaic_common::LayoutError;
use mosaic_config::LayoutOptions;
use tracing::debug;

use crate::region::{self, Region};
use crate::tile::Tile;
use crate::{assign, grid, ratio};

use super::{Layout, LayoutEngine};

impl LayoutEngine {
    /// Lay out `tiles` inside a `container` content box.
    ///
    /// Every visible tile gets exactly one rectangle, relative to the
    /// container origin; hidden tiles get none. A container without area
    /// yields a layout with no rectangles at all.
    pub fn compute(&self, container: Size, tiles: &[Tile]) -> Layout {
        let mut slots = vec![None; tiles.len()];

        if container.is_degenerate() {
            debug!(
                width = container.width,
                height = container.height,
                "skipping layout of degenerate container"
            );
            return Layout::new(slots);
        }

        let split = region::split(container, tiles, &self.options);
        for region in split.regions() {
            for (index, rect) in self.layout_region(region, tiles) {
                slots[index] = Some(rect);
            }
        }

        Layout::new(slots)
    }

    fn layout_region(&self, region: &Region, tiles: &[Tile]) -> Vec<(usize, Rect)> {
        let bounds = self.options.group(region.big);
        let ratios: Vec<f64> = region
            .tiles
            .iter()
            .map(|&index| ratio::resolve(&tiles[index], &bounds))
            .collect();

        // Fixed-ratio groups are searched with the first tile's shape.
        let (min, max) = match (bounds.fixed, ratios.first()) {
            (true, Some(&first)) => (first, first),
            _ => (bounds.min, bounds.max),
        };

        let Some(choice) = grid::optimize(region.bounds.size(), ratios.len(), min, max) else {
            // No usable area: park the tiles at the region origin.
            let origin = Rect::new(region.bounds.x, region.bounds.y, 0.0, 0.0);
            return region.tiles.iter().map(|&index| (index, origin)).collect();
        };

        debug!(
            big = region.big,
            tiles = ratios.len(),
            rows = choice.shape.rows,
            cols = choice.shape.cols,
            cell_width = choice.cell.width,
            cell_height = choice.cell.height,
            "chose grid shape"
        );

        let rects = assign::assign(
            region.bounds,
            &choice,
            &ratios,
            bounds.fixed,
            self.options.alignment,
        );
        region.tiles.iter().copied().zip(rects).collect()
    }
}

/// One-shot layout with `options`.
pub fn compute_layout(
    container: Size,
    tiles: &[Tile],
    options: &LayoutOptions,
) -> Result<Layout, LayoutError> {
    Ok(LayoutEngine::new(options.clone())?.compute(container, tiles))
}
