//! Concrete rectangles from a chosen grid shape.
//!
//! Tiles fill rows left to right in input order. Rows that overflow the
//! region are scaled down; rows that fall short of its width share any
//! leftover height, so a ragged last row grows into unused space. Rows
//! are then aligned inside the region, each one on its own.

use mosaic_common::types::Rect;
use mosaic_config::Alignment;

use crate::grid::GridChoice;

/// A row of tiles before placement.
#[derive(Debug, Clone, PartialEq)]
struct Row {
    /// Index of the first tile of the row in the region's tile slice.
    start: usize,
    len: usize,
    width: f64,
    height: f64,
}

impl Row {
    fn is_short(&self, available: f64) -> bool {
        self.width < available && self.width > 0.0 && self.height > 0.0
    }
}

/// Place `ratios.len()` tiles in `region` according to `choice`.
///
/// `ratios` are the resolved height/width ratios in input order. With
/// `fixed_ratio` each tile keeps its own ratio at the row height;
/// otherwise every tile is one cell wide. Rectangles are returned in
/// input order, in the same coordinate space as `region`.
pub fn assign(
    region: Rect,
    choice: &GridChoice,
    ratios: &[f64],
    fixed_ratio: bool,
    alignment: Alignment,
) -> Vec<Rect> {
    if ratios.is_empty() {
        return Vec::new();
    }

    let cell = choice.cell;
    let cols = choice.shape.cols.max(1);
    let tile_width = |ratio: f64, height: f64| {
        if fixed_ratio {
            height / ratio
        } else {
            cell.width
        }
    };

    let mut rows: Vec<Row> = ratios
        .chunks(cols)
        .enumerate()
        .map(|(i, chunk)| Row {
            start: i * cols,
            len: chunk.len(),
            width: chunk.iter().map(|&r| tile_width(r, cell.height)).sum(),
            height: cell.height,
        })
        .collect();

    let mut total_height = 0.0;
    let mut short_rows = 0usize;
    for row in &mut rows {
        if row.width > region.width {
            row.height = (row.height * (region.width / row.width)).floor();
            row.width = region.width;
        } else if row.is_short(region.width) {
            short_rows += 1;
        }
        total_height += row.height;
    }

    if total_height < region.height && short_rows > 0 {
        let mut remaining = region.height - total_height;
        total_height = 0.0;
        for row in &mut rows {
            if row.is_short(region.width) {
                let mut extra = remaining / short_rows as f64;
                let free = (region.width - row.width) / row.width;
                if extra / row.height > free {
                    extra = (free * row.height).floor();
                }
                row.width += ((extra / row.height) * row.width).floor();
                row.height += extra;
                remaining -= extra;
                short_rows -= 1;
            }
            total_height += row.height;
        }
    }

    let mut boxes = Vec::with_capacity(ratios.len());
    let mut y = alignment.offset(region.height, total_height);
    for row in &rows {
        let tiles = &ratios[row.start..row.start + row.len];
        let widths: Vec<f64> = tiles
            .iter()
            .map(|&r| {
                if fixed_ratio {
                    tile_width(r, row.height).floor()
                } else {
                    cell.width
                }
            })
            .collect();
        let used = row.width.max(widths.iter().sum());
        let mut x = alignment.offset(region.width, used);
        for width in widths {
            boxes.push(Rect::new(region.x + x, region.y + y, width, row.height));
            x += width;
        }
        y += row.height;
    }
    boxes
}
