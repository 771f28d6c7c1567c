//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# PolyGPT Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "PolyGPT"
# width = 1600             # 400-10000
# height = 900             # 300-10000
# startup_mode = "maximized"  # windowed, maximized
# background_color = "#1e1e1e"

[layout]
# control_bar_height = 100 # 40-400, compose strip at the bottom
# gap = 1                  # 0-20, separator between views
# supersize_fraction = 0.8 # 0.5-0.95, width share of the focused view

[zoom]
# default = 1.0
# step = 0.1               # 0.05-0.5
# min = 0.5                # 0.25-1.0
# max = 2.0                # 1.0-5.0

[sync]
# throttle_ms = 50         # 10-1000, at most one broadcast per interval
# rescan_interval_ms = 500 # 100-10000
# rescan_attempts = 10     # 0-100
# error_banner_secs = 5    # 1-60

[providers]
# chatgpt, claude, gemini, perplexity
# top_left = "claude"
# top_right = "perplexity"
# bottom_left = "chatgpt"
# bottom_right = "gemini"

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
    .to_string()
}
