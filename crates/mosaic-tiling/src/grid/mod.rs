//! Grid shape search.
//!
//! For `n` tiles every row count `1..=n` is tried with `ceil(n / rows)`
//! columns. Naive cells are floored to whole pixels, then clipped into
//! the ratio bounds by shrinking whichever side overshoots. The shape
//! covering the most area with the tiles actually present wins; the
//! first (fewest rows) wins a tie.

use mosaic_common::types::Size;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

/// One evaluated candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridChoice {
    /// Rows actually filled and the column count.
    pub shape: GridShape,
    /// Cell size after ratio clipping.
    pub cell: Size,
    /// Area covered by the tiles present: `count * cell.width * cell.height`.
    pub area: f64,
}

/// Every candidate shape for `count` tiles in `region`, in evaluation order.
///
/// Empty when `count` is zero or the region has no area. Ratio bounds
/// are height/width.
pub fn candidates(region: Size, count: usize, min_ratio: f64, max_ratio: f64) -> Vec<GridChoice> {
    if count == 0 || region.is_degenerate() {
        return Vec::new();
    }
    (1..=count)
        .map(|rows| evaluate(region, count, rows, min_ratio, max_ratio))
        .collect()
}

/// The candidate with the largest occupied area.
pub fn optimize(region: Size, count: usize, min_ratio: f64, max_ratio: f64) -> Option<GridChoice> {
    let mut best: Option<GridChoice> = None;
    for choice in candidates(region, count, min_ratio, max_ratio) {
        match best {
            Some(current) if choice.area <= current.area => {}
            _ => best = Some(choice),
        }
    }
    best
}

fn evaluate(region: Size, count: usize, rows: usize, min_ratio: f64, max_ratio: f64) -> GridChoice {
    let cols = count.div_ceil(rows);
    let mut width = (region.width / cols as f64).floor();
    let mut height = (region.height / rows as f64).floor();

    if width > 0.0 && height > 0.0 {
        let ratio = height / width;
        if ratio > max_ratio {
            height = width * max_ratio;
        } else if ratio < min_ratio {
            width = height / min_ratio;
        }
    }

    GridChoice {
        shape: GridShape {
            rows: count.div_ceil(cols),
            cols,
        },
        cell: Size::new(width, height),
        area: width * height * count as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: f64 = 9.0 / 16.0;
    const MAX: f64 = 3.0 / 2.0;

    fn shape(rows: usize, cols: usize) -> GridShape {
        GridShape { rows, cols }
    }

    #[test]
    fn zero_tiles_has_no_shape() {
        assert!(optimize(Size::new(400.0, 300.0), 0, MIN, MAX).is_none());
        assert!(candidates(Size::new(400.0, 300.0), 0, MIN, MAX).is_empty());
    }

    #[test]
    fn degenerate_region_has_no_shape() {
        assert!(optimize(Size::new(0.0, 300.0), 3, MIN, MAX).is_none());
        assert!(optimize(Size::new(400.0, -5.0), 3, MIN, MAX).is_none());
    }

    #[test]
    fn single_tile_fills_clipped_region() {
        let choice = optimize(Size::new(320.0, 300.0), 1, MIN, MAX).unwrap();
        assert_eq!(choice.shape, shape(1, 1));
        assert_eq!(choice.cell, Size::new(320.0, 300.0));

        // 400x800 is taller than 2:3, so the height is clipped.
        let choice = optimize(Size::new(400.0, 640.0), 1, MIN, MAX).unwrap();
        assert_eq!(choice.cell, Size::new(400.0, 600.0));
    }

    #[test]
    fn two_tiles_side_by_side() {
        let choice = optimize(Size::new(400.0, 300.0), 2, MIN, MAX).unwrap();
        assert_eq!(choice.shape, shape(1, 2));
        assert_eq!(choice.cell, Size::new(200.0, 300.0));
    }

    #[test]
    fn five_tiles_three_over_two() {
        let choice = optimize(Size::new(400.0, 300.0), 5, MIN, MAX).unwrap();
        assert_eq!(choice.shape, shape(2, 3));
        assert_eq!(choice.cell, Size::new(133.0, 150.0));
    }

    #[test]
    fn five_tiles_in_wide_container_single_row() {
        let choice = optimize(Size::new(1000.0, 300.0), 5, MIN, MAX).unwrap();
        assert_eq!(choice.shape, shape(1, 5));
        assert_eq!(choice.cell, Size::new(200.0, 300.0));
    }

    #[test]
    fn five_tiles_in_tall_container() {
        let choice = optimize(Size::new(400.0, 800.0), 5, MIN, MAX).unwrap();
        assert_eq!(choice.shape, shape(3, 2));
        assert_eq!(choice.cell, Size::new(200.0, 266.0));
    }

    #[test]
    fn narrow_column_stacks() {
        let choice = optimize(Size::new(80.0, 300.0), 4, MIN, MAX).unwrap();
        assert_eq!(choice.shape, shape(4, 1));
        assert_eq!(choice.cell, Size::new(80.0, 75.0));
    }

    #[test]
    fn wide_cells_are_narrowed() {
        let choice = optimize(Size::new(320.0, 300.0), 2, MIN, MAX).unwrap();
        assert_eq!(choice.shape, shape(2, 1));
        assert!((choice.cell.width - 266.666_666).abs() < 1e-3);
        assert_eq!(choice.cell.height, 150.0);
    }

    #[test]
    fn tall_cells_are_shortened() {
        let choice = optimize(Size::new(80.0, 300.0), 1, MIN, MAX).unwrap();
        assert_eq!(choice.cell, Size::new(80.0, 120.0));
    }

    #[test]
    fn forced_ratio_gives_sixteen_nine() {
        let forced = 9.0 / 16.0;
        let choice = optimize(Size::new(400.0, 300.0), 2, forced, forced).unwrap();
        let aspect = choice.cell.width / choice.cell.height;
        assert!((aspect - 16.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn cells_never_exceed_naive_bounds() {
        for count in 1..=12 {
            for choice in candidates(Size::new(640.0, 360.0), count, MIN, MAX) {
                let cols = choice.shape.cols as f64;
                assert!(choice.cell.width <= 640.0 / cols + 1e-9);
                assert!(choice.cell.height * choice.shape.rows as f64 <= 360.0 + 1e-9);
            }
        }
    }

    #[test]
    fn chosen_area_dominates_candidates() {
        for count in 1..=16 {
            for (w, h) in [(400.0, 300.0), (1000.0, 300.0), (400.0, 800.0), (123.0, 457.0)] {
                let region = Size::new(w, h);
                let best = optimize(region, count, MIN, MAX).unwrap();
                for other in candidates(region, count, MIN, MAX) {
                    assert!(best.area >= other.area);
                }
            }
        }
    }

    #[test]
    fn ties_prefer_fewer_rows() {
        // Both one row of two and two rows of one cover 60000px here.
        let fixed = 3.0 / 4.0;
        let all = candidates(Size::new(400.0, 300.0), 2, fixed, fixed);
        assert_eq!(all[0].area, all[1].area);
        let choice = optimize(Size::new(400.0, 300.0), 2, fixed, fixed).unwrap();
        assert_eq!(choice.shape, shape(1, 2));
        assert_eq!(choice.cell, Size::new(200.0, 150.0));
    }

    #[test]
    fn reported_rows_are_filled_rows() {
        // Four rows of two columns only fill three rows for five tiles.
        let all = candidates(Size::new(400.0, 300.0), 5, MIN, MAX);
        assert_eq!(all[3].shape, shape(3, 2));
    }

    #[test]
    fn search_is_deterministic() {
        let a = candidates(Size::new(777.0, 433.0), 9, MIN, MAX);
        let b = candidates(Size::new(777.0, 433.0), 9, MIN, MAX);
        assert_eq!(a, b);
    }
}
