//! Interactive profile selector
//!
//! A single-screen list driven by an explicit state machine. Input is
//! translated into [`Input`] values, [`SelectorState::handle`] mutates the
//! state (applying a profile when asked), and [`view::render`] draws the
//! result. Only [`terminal`] touches the real terminal.

pub mod input;
pub mod terminal;
pub mod view;

use tracing::{error, info};

use crate::profiles::{ProfileApplier, ProfileEntry, ProfileTool};

/// Abstract selector input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    Up,
    Down,
    Confirm,
    /// Quick-select key `1`..=`9`
    Digit(u8),
    /// Pointer press resolved to a profile index
    Pick(usize),
}

/// Whether the event loop keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    profiles: Vec<ProfileEntry>,
    cursor: usize,
    last_error: Option<String>,
}

impl SelectorState {
    pub fn new(profiles: Vec<ProfileEntry>) -> Self {
        Self {
            profiles,
            cursor: 0,
            last_error: None,
        }
    }

    /// Error screen with nothing to select
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            profiles: Vec::new(),
            cursor: 0,
            last_error: Some(message.into()),
        }
    }

    /// One-time synchronous listing; a failure becomes the error screen
    pub fn launch(tool: &ProfileTool<'_>) -> Self {
        match tool.list() {
            Ok(profiles) => Self::new(profiles),
            Err(e) => {
                error!(error = %e, "Failed to list profiles");
                Self::failed(e.to_string())
            }
        }
    }

    pub fn profiles(&self) -> &[ProfileEntry] {
        &self.profiles
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn handle(&mut self, input: Input, applier: &dyn ProfileApplier) -> Control {
        match input {
            Input::Quit => Control::Quit,
            Input::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                Control::Continue
            }
            Input::Down => {
                if self.cursor + 1 < self.profiles.len() {
                    self.cursor += 1;
                }
                Control::Continue
            }
            Input::Confirm => {
                if self.profiles.is_empty() {
                    Control::Continue
                } else {
                    self.apply_at(self.cursor, applier)
                }
            }
            Input::Digit(digit) => match (digit as usize).checked_sub(1) {
                Some(index) if digit <= 9 && index < self.profiles.len() => {
                    self.apply_at(index, applier)
                }
                _ => Control::Continue,
            },
            Input::Pick(index) if index < self.profiles.len() => self.apply_at(index, applier),
            Input::Pick(_) => Control::Continue,
        }
    }

    fn apply_at(&mut self, index: usize, applier: &dyn ProfileApplier) -> Control {
        self.cursor = index;
        let name = &self.profiles[index].name;
        match applier.apply(name) {
            Ok(()) => {
                info!(profile = %name, "Profile applied, quitting selector");
                Control::Quit
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Control::Continue
            }
        }
    }
}
