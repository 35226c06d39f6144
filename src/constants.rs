//! Application-wide constants
//!
//! This module contains the collaborator invocations and the literal strings
//! shown in the status bar and selector, providing a single source of truth.

/// Config file location
pub mod config {
    /// Directory under the XDG config/cache dirs
    pub const APP_DIR: &str = "hyprmon-widget";

    /// Config filename
    pub const FILENAME: &str = "config.toml";

    /// Selector log filename (under the cache dir)
    pub const SELECTOR_LOG: &str = "selector.log";
}

/// Environment variable overrides
pub mod env {
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const MONITOR_CMD: &str = "HYPRMON_WIDGET_MONITOR_CMD";
    pub const PROFILE_CMD: &str = "HYPRMON_WIDGET_PROFILE_CMD";
    pub const GLYPH: &str = "HYPRMON_WIDGET_GLYPH";
    pub const CLASS: &str = "HYPRMON_WIDGET_CLASS";
}

/// Window-manager monitor query
pub mod monitor_query {
    /// Default program
    pub const PROGRAM: &str = "hyprctl";

    /// Arguments requesting the JSON monitor list
    pub const ARGS: &[&str] = &["monitors", "-j"];
}

/// Profile tool invocation flags
pub mod profile_tool {
    /// Default program
    pub const PROGRAM: &str = "hyprmon";

    pub const LIST_FLAG: &str = "--list-profiles";
    pub const ACTIVE_FLAG: &str = "--active-profile";
    pub const APPLY_FLAG: &str = "-profile";

    /// Trailing marker on the active profile line
    pub const ACTIVE_MARKER: char = '*';

    /// Prefix of comment lines in the listing
    pub const COMMENT_PREFIX: char = '#';
}

/// Status payload strings
pub mod status {
    /// Monitor glyph (nerd-font "monitor")
    pub const GLYPH: &str = "\u{f0379}";

    /// Status bar CSS class
    pub const CLASS: &str = "hyprmon-widget";

    pub const NO_MONITORS_TEXT: &str = "No monitors";
    pub const NO_MONITORS_TOOLTIP: &str = "No monitors detected";
    pub const ACTIVE_PROFILE_PREFIX: &str = "Active Profile: ";
    pub const SETUP_HEADER: &str = "Monitor Setup:";
    pub const CALL_TO_ACTION: &str = "Click to open profile selector";
}

/// Selector screen strings and timing
pub mod selector {
    pub const TITLE: &str = "HyprMon - Monitor Profile Manager";
    pub const LIST_HEADER: &str = "Available monitor profiles:";
    pub const EMPTY: &str = "No hyprmon profiles found.";
    pub const QUIT_HINT: &str = "Press q to quit.";
    pub const ACTIVE_SUFFIX: &str = "(active)";

    /// Rows start this many lines below the top of the list region
    pub const LIST_ROW_OFFSET: u16 = 2;

    /// Event poll timeout in milliseconds (also the signal check interval)
    pub const POLL_INTERVAL_MS: u64 = 100;

    pub const CONTROLS: &[&str] = &[
        "Controls:",
        "  ↑/k, ↓/j: Navigate  Enter/Space: Select Profile  1-9: Quick Select",
        "  Mouse Wheel: Navigate  Click: Select  q/Ctrl+c/Esc: Quit",
    ];
}
