//! Status bar payload
//!
//! Turns the monitor list into the `text`/`tooltip`/`class` triple a status
//! bar host consumes as one JSON line.

use serde::Serialize;

use crate::constants::status::{
    ACTIVE_PROFILE_PREFIX, CALL_TO_ACTION, NO_MONITORS_TEXT, NO_MONITORS_TOOLTIP, SETUP_HEADER,
};
use crate::monitor::MonitorDescriptor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPayload {
    pub text: String,
    pub tooltip: String,
    pub class: String,
}

impl StatusPayload {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Glyph alone for one monitor, glyph and count for more
pub fn display_text(glyph: &str, monitors: &[MonitorDescriptor]) -> String {
    match monitors.len() {
        0 => NO_MONITORS_TEXT.to_string(),
        1 => glyph.to_string(),
        n => format!("{glyph} {n}"),
    }
}

pub fn monitor_line(index: usize, monitor: &MonitorDescriptor) -> String {
    format!(
        "{}. {} - {}x{}@{:.1}Hz ({:.1}x scale)",
        index + 1,
        monitor.name,
        monitor.width,
        monitor.height,
        monitor.refresh_rate_hz,
        monitor.scale
    )
}

/// Multi-line tooltip. `active_profile` is only looked up when there is a monitor to describe.
pub fn tooltip_text(
    monitors: &[MonitorDescriptor],
    active_profile: impl FnOnce() -> Option<String>,
) -> String {
    if monitors.is_empty() {
        return NO_MONITORS_TOOLTIP.to_string();
    }

    let mut lines = Vec::with_capacity(monitors.len() + 6);

    if let Some(profile) = active_profile().filter(|p| !p.is_empty()) {
        lines.push(format!("{ACTIVE_PROFILE_PREFIX}{profile}"));
        lines.push(String::new());
    }

    lines.push(SETUP_HEADER.to_string());
    lines.push(String::new());
    lines.extend(monitors.iter().enumerate().map(|(i, m)| monitor_line(i, m)));
    lines.push(String::new());
    lines.push(CALL_TO_ACTION.to_string());

    lines.join("\n")
}

pub fn build_status(
    glyph: &str,
    class: &str,
    monitors: &[MonitorDescriptor],
    active_profile: impl FnOnce() -> Option<String>,
) -> StatusPayload {
    StatusPayload {
        text: display_text(glyph, monitors),
        tooltip: tooltip_text(monitors, active_profile),
        class: class.to_string(),
    }
}
