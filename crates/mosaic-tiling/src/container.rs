//! Container entry point: measure, compute, write back.
//!
//! The container never touches a UI tree itself. A [`TileSource`] reports
//! what the children look like right now, the [`LayoutEngine`] computes
//! slots, and a [`LayoutSink`] receives the final boxes.

use mosaic_common::types::{Insets, Rect, Size};
use mosaic_common::LayoutError;
use mosaic_config::LayoutOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::{Layout, LayoutEngine};
use crate::tile::Tile;

/// Measured state of one child element at layout time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementSnapshot {
    pub visible: bool,
    pub big: bool,
    pub classes: Vec<String>,
    /// Intrinsic content size, e.g. the dimensions of a video frame.
    pub natural_size: Option<Size>,
    /// Margin, border and padding combined, per side.
    pub insets: Insets,
}

impl Default for ElementSnapshot {
    fn default() -> Self {
        Self {
            visible: true,
            big: false,
            classes: Vec::new(),
            natural_size: None,
            insets: Insets::default(),
        }
    }
}

impl ElementSnapshot {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Reads the container and its children.
pub trait TileSource {
    /// Usable content box of the container.
    fn container_size(&self) -> Size;
    fn elements(&self) -> Vec<ElementSnapshot>;
}

/// Receives the result of a layout pass.
pub trait LayoutSink {
    /// Position the element at `index`. `rect` excludes its insets.
    fn apply(&mut self, index: usize, rect: Rect);
    fn hide(&mut self, index: usize);
}

/// Decides whether a child belongs to the big group.
pub type BigPredicate = Box<dyn Fn(&ElementSnapshot) -> bool + Send + Sync>;

/// Lays out the children of one container.
pub struct LayoutContainer {
    engine: LayoutEngine,
    big_predicate: Option<BigPredicate>,
}

impl LayoutContainer {
    pub fn new(options: LayoutOptions) -> Result<Self, LayoutError> {
        Ok(Self {
            engine: LayoutEngine::new(options)?,
            big_predicate: None,
        })
    }

    /// Replace flag and class matching with `predicate`.
    pub fn with_big_predicate(
        mut self,
        predicate: impl Fn(&ElementSnapshot) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.big_predicate = Some(Box::new(predicate));
        self
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn is_big(&self, element: &ElementSnapshot) -> bool {
        match &self.big_predicate {
            Some(predicate) => predicate(element),
            None => element.big || element.has_class(&self.engine.options().big_class),
        }
    }

    /// Run one pass over `source` and push the boxes into `sink`.
    ///
    /// Returns the raw slots, before insets are removed.
    pub fn layout<S, K>(&self, source: &S, sink: &mut K) -> Layout
    where
        S: TileSource + ?Sized,
        K: LayoutSink + ?Sized,
    {
        let container = source.container_size();
        let elements = source.elements();

        let tiles: Vec<Tile> = elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                let mut tile = Tile::new(index);
                tile.visible = element.visible;
                tile.big = self.is_big(element);
                if let Some(size) = element.natural_size {
                    tile = tile.with_natural_size(size.width, size.height);
                }
                tile
            })
            .collect();

        let layout = self.engine.compute(container, &tiles);
        for (index, element) in elements.iter().enumerate() {
            match layout.get(index) {
                Some(slot) => sink.apply(index, slot.inset(element.insets)),
                None => sink.hide(index),
            }
        }

        debug!(
            elements = elements.len(),
            laid_out = layout.laid_out_count(),
            "container layout pass"
        );
        layout
    }
}

impl std::fmt::Debug for LayoutContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutContainer")
            .field("engine", &self.engine)
            .field("big_predicate", &self.big_predicate.is_some())
            .finish()
    }
}
