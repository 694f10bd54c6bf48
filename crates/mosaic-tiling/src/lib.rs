pub mod assign;
pub mod container;
pub mod grid;
pub mod layout;
pub mod ratio;
pub mod region;
pub mod tile;

pub use container::{BigPredicate, ElementSnapshot, LayoutContainer, LayoutSink, TileSource};
pub use grid::{GridChoice, GridShape};
pub use layout::{compute_layout, Layout, LayoutEngine, Placement};
pub use region::{Direction, Region, RegionSplit};
pub use tile::Tile;
