use mosaic_common::types::{Size, TileId};

/// One unit to be positioned, as seen by a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub id: TileId,
    pub visible: bool,
    pub big: bool,
    /// Width over height of the intrinsic content, e.g. a video frame.
    pub natural_ratio: Option<f64>,
}

impl Tile {
    pub fn new(index: usize) -> Self {
        Self {
            id: TileId(index),
            visible: true,
            big: false,
            natural_ratio: None,
        }
    }

    pub fn big(mut self) -> Self {
        self.big = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn with_natural_ratio(mut self, ratio: f64) -> Self {
        self.natural_ratio = Some(ratio);
        self
    }

    /// Natural ratio from intrinsic dimensions. Degenerate sizes leave it unset.
    pub fn with_natural_size(mut self, width: f64, height: f64) -> Self {
        let size = Size::new(width, height);
        self.natural_ratio = (!size.is_degenerate()).then(|| width / height);
        self
    }

    /// `count` visible regular tiles with ids `0..count`.
    pub fn sequence(count: usize) -> Vec<Tile> {
        (0..count).map(Tile::new).collect()
    }
}
