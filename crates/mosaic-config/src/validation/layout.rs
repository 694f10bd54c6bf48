//! Layout option validation (ratio bounds, big region share, tagging).

use crate::schema::MosaicConfig;

use super::helpers::{validate_ordered, validate_positive, validate_range_f64};

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &MosaicConfig) {
    let layout = &config.layout;

    validate_positive(errors, "layout.min_ratio", layout.min_ratio);
    validate_positive(errors, "layout.max_ratio", layout.max_ratio);
    validate_positive(errors, "layout.big_min_ratio", layout.big_min_ratio);
    validate_positive(errors, "layout.big_max_ratio", layout.big_max_ratio);
    validate_ordered(
        errors,
        "layout.min_ratio",
        layout.min_ratio,
        "layout.max_ratio",
        layout.max_ratio,
    );
    validate_ordered(
        errors,
        "layout.big_min_ratio",
        layout.big_min_ratio,
        "layout.big_max_ratio",
        layout.big_max_ratio,
    );
    validate_range_f64(
        errors,
        "layout.big_percentage",
        layout.big_percentage,
        0.0,
        1.0,
    );
    if layout.big_class.trim().is_empty() {
        errors.push("layout.big_class must not be empty".to_string());
    }
}
