//! Configuration schema types for Mosaic.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the layout engine was
//! tuned against.

mod layout;
mod system;

pub use layout::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Mosaic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct MosaicConfig {
    pub layout: LayoutOptions,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
