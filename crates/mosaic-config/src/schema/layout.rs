//! Layout option types.
//!
//! Ratio bounds are height over width: `min_ratio` caps how wide a cell
//! may get, `max_ratio` caps how tall. A pair of `9/16` bounds therefore
//! forces 16:9 cells.

use mosaic_common::LayoutError;
use serde::{Deserialize, Serialize};

/// Where rows sit inside their region when they do not fill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Alignment {
    Start,
    #[default]
    Center,
    End,
}

impl Alignment {
    /// Offset of a run of length `used` inside `available`.
    pub fn offset(&self, available: f64, used: f64) -> f64 {
        match self {
            Alignment::Start => 0.0,
            Alignment::Center => (available - used) / 2.0,
            Alignment::End => available - used,
        }
    }
}

/// Options for a single layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Lower height/width bound for regular cells (widest allowed).
    pub min_ratio: f64,
    /// Upper height/width bound for regular cells (tallest allowed).
    pub max_ratio: f64,
    /// Keep each regular tile's own aspect ratio.
    pub fixed_ratio: bool,
    pub big_min_ratio: f64,
    pub big_max_ratio: f64,
    pub big_fixed_ratio: bool,
    /// Fraction of the split axis given to the big region (0.0-1.0).
    pub big_percentage: f64,
    /// Place the big region before the rest along the split axis.
    pub big_first: bool,
    /// Markup tag that flags a big tile for collaborators reading a document.
    pub big_class: String,
    pub alignment: Alignment,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            min_ratio: 9.0 / 16.0,
            max_ratio: 3.0 / 2.0,
            fixed_ratio: false,
            big_min_ratio: 9.0 / 16.0,
            big_max_ratio: 3.0 / 2.0,
            big_fixed_ratio: false,
            big_percentage: 0.8,
            big_first: true,
            big_class: "OT_big".to_string(),
            alignment: Alignment::Center,
        }
    }
}

impl LayoutOptions {
    /// Reject options that denote a caller mistake.
    ///
    /// Non-finite numbers and inverted ratio bounds fail. Everything else
    /// is left for [`LayoutOptions::sanitized`] to clip.
    pub fn check(&self) -> Result<(), LayoutError> {
        for (name, value) in [
            ("min_ratio", self.min_ratio),
            ("max_ratio", self.max_ratio),
            ("big_min_ratio", self.big_min_ratio),
            ("big_max_ratio", self.big_max_ratio),
            ("big_percentage", self.big_percentage),
        ] {
            if !value.is_finite() {
                return Err(LayoutError::NonFiniteOption { name, value });
            }
        }
        if self.min_ratio > self.max_ratio {
            return Err(LayoutError::InvalidRatioBounds {
                group: "tile",
                min: self.min_ratio,
                max: self.max_ratio,
            });
        }
        if self.big_min_ratio > self.big_max_ratio {
            return Err(LayoutError::InvalidRatioBounds {
                group: "big",
                min: self.big_min_ratio,
                max: self.big_max_ratio,
            });
        }
        Ok(())
    }

    /// Copy with drifting values clipped to the nearest valid one.
    pub fn sanitized(&self) -> Self {
        Self {
            min_ratio: self.min_ratio.max(f64::MIN_POSITIVE),
            max_ratio: self.max_ratio.max(f64::MIN_POSITIVE),
            big_min_ratio: self.big_min_ratio.max(f64::MIN_POSITIVE),
            big_max_ratio: self.big_max_ratio.max(f64::MIN_POSITIVE),
            big_percentage: self.big_percentage.clamp(0.0, 1.0),
            ..self.clone()
        }
    }

    /// `check` then `sanitized`, the form the engine runs with.
    pub fn prepared(&self) -> Result<Self, LayoutError> {
        self.check()?;
        Ok(self.sanitized())
    }

    /// Ratio bounds and fixed flag for the big or regular group.
    pub fn group(&self, big: bool) -> RatioBounds {
        if big {
            RatioBounds {
                min: self.big_min_ratio,
                max: self.big_max_ratio,
                fixed: self.big_fixed_ratio,
            }
        } else {
            RatioBounds {
                min: self.min_ratio,
                max: self.max_ratio,
                fixed: self.fixed_ratio,
            }
        }
    }
}

/// The ratio settings governing one tile group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioBounds {
    pub min: f64,
    pub max: f64,
    pub fixed: bool,
}

impl RatioBounds {
    /// Clip a height/width ratio into `[min, max]`.
    pub fn clip(&self, ratio: f64) -> f64 {
        if ratio < self.min {
            self.min
        } else if ratio > self.max {
            self.max
        } else {
            ratio
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
