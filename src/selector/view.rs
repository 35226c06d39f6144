//! Selector rendering
//!
//! [`render`] is a pure function of [`SelectorState`]; [`layout`] and
//! [`scroll_offset`] are shared with pointer handling so a click maps to the
//! row that was drawn there.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::SelectorState;
use crate::constants::selector::{
    ACTIVE_SUFFIX, CONTROLS, EMPTY, LIST_HEADER, LIST_ROW_OFFSET, QUIT_HINT, TITLE,
};

const TITLE_FG: Color = Color::Rgb(0xFA, 0xFA, 0xFA);
const TITLE_BG: Color = Color::Rgb(0x7D, 0x56, 0xF4);
const ERROR_FG: Color = Color::Rgb(0xFF, 0x5F, 0x56);
const HEADER_FG: Color = Color::Rgb(0x04, 0xB5, 0x75);
const MUTED_FG: Color = Color::Rgb(0x62, 0x62, 0x62);
const SELECTED_BG: Color = Color::Rgb(0x38, 0x38, 0x38);

/// Error message, quit hint, blank line
const ERROR_HEIGHT: u16 = 3;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub banner: Rect,
    pub error: Option<Rect>,
    /// List header, blank line, then one line per visible profile
    pub list: Option<Rect>,
    pub footer: Rect,
}

impl ScreenLayout {
    /// Number of profile rows that fit in the list region
    pub fn visible_rows(&self) -> usize {
        self.list
            .map_or(0, |list| usize::from(list.height.saturating_sub(LIST_ROW_OFFSET)))
    }
}

pub fn layout(area: Rect, state: &SelectorState) -> ScreenLayout {
    let has_error = state.last_error().is_some();
    let rows = state.profiles().len();

    let mut constraints = vec![Constraint::Length(2)];
    if has_error {
        constraints.push(Constraint::Length(ERROR_HEIGHT));
    }
    if rows > 0 {
        // never ask for more than fits; overflowing rows scroll instead
        let available = area.height.saturating_sub(2 + if has_error { ERROR_HEIGHT } else { 0 });
        let height = u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_add(LIST_ROW_OFFSET)
            .min(available);
        constraints.push(Constraint::Length(height));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::vertical(constraints).split(area);
    let mut chunks = chunks.iter().copied();
    let banner = chunks.next().unwrap_or_default();
    let error = if has_error { chunks.next() } else { None };
    let list = if rows > 0 { chunks.next() } else { None };
    let footer = chunks.next().unwrap_or_default();

    ScreenLayout {
        banner,
        error,
        list,
        footer,
    }
}

/// Index of the first drawn profile; keeps the cursor row inside the list region
pub fn scroll_offset(layout: &ScreenLayout, state: &SelectorState) -> usize {
    let visible = layout.visible_rows();
    if visible == 0 {
        return 0;
    }
    (state.cursor() + 1).saturating_sub(visible)
}

/// Profile index drawn on screen row `row`, if any
pub fn row_to_index(layout: &ScreenLayout, state: &SelectorState, row: u16) -> Option<usize> {
    let list = layout.list?;
    let first = list.y.saturating_add(LIST_ROW_OFFSET);
    if row < first || row >= list.bottom() {
        return None;
    }
    let index = scroll_offset(layout, state) + usize::from(row - first);
    (index < state.profiles().len()).then_some(index)
}

pub fn render(frame: &mut Frame, state: &SelectorState) {
    let layout = layout(frame.area(), state);

    let title = Style::new().fg(TITLE_FG).bg(TITLE_BG).add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {TITLE} "), title))),
        layout.banner,
    );

    if let (Some(area), Some(message)) = (layout.error, state.last_error()) {
        let style = Style::new().fg(ERROR_FG).add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::styled(format!("Error: {message}"), style),
            quit_hint(),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    if let Some(area) = layout.list {
        let lines = list_lines(state, scroll_offset(&layout, state), layout.visible_rows());
        frame.render_widget(Paragraph::new(lines), area);
    }

    frame.render_widget(Paragraph::new(footer_lines(state)), layout.footer);
}

fn quit_hint() -> Line<'static> {
    Line::styled(QUIT_HINT, Style::new().fg(MUTED_FG).add_modifier(Modifier::ITALIC))
}

fn list_lines(state: &SelectorState, offset: usize, visible: usize) -> Vec<Line<'static>> {
    let header = Style::new().fg(HEADER_FG).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::styled(LIST_HEADER, header), Line::default()];

    let rows = state.profiles().iter().enumerate().skip(offset).take(visible);
    for (i, profile) in rows {
        let selected = i == state.cursor();
        let (marker, base) = if selected {
            ('>', Style::new().bg(SELECTED_BG))
        } else {
            (' ', Style::new())
        };
        let mut spans = vec![Span::styled(format!("{marker} {}. {}", i + 1, profile.name), base)];
        if profile.active {
            spans.push(Span::styled(format!(" {ACTIVE_SUFFIX}"), base.fg(MUTED_FG)));
        }
        lines.push(Line::from(spans));
    }

    lines
}

fn footer_lines(state: &SelectorState) -> Vec<Line<'static>> {
    let muted = Style::new().fg(MUTED_FG);

    if !state.profiles().is_empty() {
        std::iter::once(Line::default())
            .chain(CONTROLS.iter().map(|l| Line::styled(*l, muted)))
            .collect()
    } else if state.last_error().is_some() {
        Vec::new()
    } else {
        vec![
            Line::styled(EMPTY, muted.add_modifier(Modifier::ITALIC)),
            Line::default(),
            quit_hint(),
        ]
    }
}
