//! Per-tile aspect ratios, in height over width.
//!
//! Tiles report their natural ratio as width/height; everything past this
//! module works in height/width to match the option bounds.

use mosaic_config::RatioBounds;

use crate::tile::Tile;

/// Height/width used when a tile has no usable natural ratio (4:3 content).
pub const DEFAULT_RATIO: f64 = 3.0 / 4.0;

/// The tile's natural height/width, or [`DEFAULT_RATIO`].
pub fn natural_or_default(tile: &Tile) -> f64 {
    tile.natural_ratio
        .filter(|r| r.is_finite() && *r > 0.0)
        .map(|r| 1.0 / r)
        .unwrap_or(DEFAULT_RATIO)
}

/// The height/width a tile is laid out with under `bounds`.
///
/// Outside fixed-ratio mode every tile shares the default ratio; inside
/// it the tile's own ratio is used. Either way the result is clipped to
/// the group's bounds.
pub fn resolve(tile: &Tile, bounds: &RatioBounds) -> f64 {
    let ratio = if bounds.fixed {
        natural_or_default(tile)
    } else {
        DEFAULT_RATIO
    };
    bounds.clip(ratio)
}
