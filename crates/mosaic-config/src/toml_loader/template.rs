//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Mosaic Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# Ratio bounds are height / width.
# min_ratio = 0.5625       # widest regular cell (16:9)
# max_ratio = 1.5          # tallest regular cell (2:3)
# fixed_ratio = false      # keep each tile's own aspect ratio
# big_min_ratio = 0.5625
# big_max_ratio = 1.5
# big_fixed_ratio = false
# big_percentage = 0.8     # 0.0-1.0, share of the split axis for big tiles
# big_first = true         # big region at top/left
# big_class = "OT_big"
# alignment = "center"     # start, center, end

[logging]
# level = "INFO"           # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
