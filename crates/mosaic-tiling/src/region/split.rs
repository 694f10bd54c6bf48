//! Container partitioning into the big and rest regions.

use mosaic_common::types::{Rect, Size};
use mosaic_config::LayoutOptions;

use super::{Direction, Region, RegionSplit};
use crate::ratio;
use crate::tile::Tile;

/// Partition the visible tiles and carve the container into regions.
///
/// With both groups present the container is cut across its longer
/// axis relative to the first big tile's shape: a container taller than
/// that tile stacks the regions, otherwise they sit side by side. The
/// big region takes `floor(extent * big_percentage)` of the cut axis.
pub fn split(container: Size, tiles: &[Tile], options: &LayoutOptions) -> RegionSplit {
    let (big, rest): (Vec<usize>, Vec<usize>) = tiles
        .iter()
        .enumerate()
        .filter(|(_, tile)| tile.visible)
        .map(|(index, _)| index)
        .partition(|&index| tiles[index].big);

    let full = Rect::from_size(container);

    match (big.is_empty(), rest.is_empty()) {
        (true, true) => RegionSplit::default(),
        (false, true) => RegionSplit {
            big: Some(Region {
                bounds: full,
                tiles: big,
                big: true,
            }),
            rest: None,
            direction: None,
        },
        (true, false) => RegionSplit {
            big: None,
            rest: Some(Region {
                bounds: full,
                tiles: rest,
                big: false,
            }),
            direction: None,
        },
        (false, false) => {
            let reference = ratio::natural_or_default(&tiles[big[0]]);
            let direction = if container.height_ratio() > reference {
                Direction::Vertical
            } else {
                Direction::Horizontal
            };
            let (big_bounds, rest_bounds) = carve(
                full,
                direction,
                options.big_percentage,
                options.big_first,
            );
            RegionSplit {
                big: Some(Region {
                    bounds: big_bounds,
                    tiles: big,
                    big: true,
                }),
                rest: Some(Region {
                    bounds: rest_bounds,
                    tiles: rest,
                    big: false,
                }),
                direction: Some(direction),
            }
        }
    }
}

/// Cut `bounds` into (big, rest) boxes along `direction`.
fn carve(bounds: Rect, direction: Direction, percentage: f64, big_first: bool) -> (Rect, Rect) {
    match direction {
        Direction::Vertical => {
            let big_height = (bounds.height * percentage).floor();
            let rest_height = bounds.height - big_height;
            if big_first {
                (
                    Rect::new(bounds.x, bounds.y, bounds.width, big_height),
                    Rect::new(bounds.x, bounds.y + big_height, bounds.width, rest_height),
                )
            } else {
                (
                    Rect::new(bounds.x, bounds.y + rest_height, bounds.width, big_height),
                    Rect::new(bounds.x, bounds.y, bounds.width, rest_height),
                )
            }
        }
        Direction::Horizontal => {
            let big_width = (bounds.width * percentage).floor();
            let rest_width = bounds.width - big_width;
            if big_first {
                (
                    Rect::new(bounds.x, bounds.y, big_width, bounds.height),
                    Rect::new(bounds.x + big_width, bounds.y, rest_width, bounds.height),
                )
            } else {
                (
                    Rect::new(bounds.x + rest_width, bounds.y, big_width, bounds.height),
                    Rect::new(bounds.x, bounds.y, rest_width, bounds.height),
                )
            }
        }
    }
}
