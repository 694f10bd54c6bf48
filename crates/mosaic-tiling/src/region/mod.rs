mod split;
mod types;

pub use split::split;
pub use types::*;
