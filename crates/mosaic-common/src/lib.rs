pub mod errors;
pub mod types;

pub use errors::{ConfigError, LayoutError, MosaicError};
pub use types::{Insets, Rect, Size, TileId};

pub type Result<T> = std::result::Result<T, MosaicError>;
