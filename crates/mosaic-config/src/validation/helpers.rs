//! Shared range-validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]` (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a finite number greater than zero.
pub(crate) fn validate_positive(errors: &mut Vec<String>, name: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(format!("{name} = {value} must be a positive number"));
    }
}

/// Push an error if the `[min, max]` pair is inverted.
pub(crate) fn validate_ordered(
    errors: &mut Vec<String>,
    min_name: &str,
    min: f64,
    max_name: &str,
    max: f64,
) {
    if min > max {
        errors.push(format!("{min_name} = {min} is greater than {max_name} = {max}"));
    }
}
