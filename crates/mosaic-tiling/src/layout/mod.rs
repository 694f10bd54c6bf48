mod calculation;
mod types;

pub use calculation::compute_layout;
pub use types::*;
