//! Result list widget — matched features in collection order, one per line.
//!
//! The list itself lives in the controller; this widget only owns the
//! cursor. `↑`/`↓` move it, `Enter` (handled by the app shell) selects the
//! feature under it. The window scrolls to keep the cursor visible.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use pinpoint_core::Feature;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use std::cell::Cell;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ResultListState {
    /// Index into the controller's result list.
    pub cursor: usize,
    /// Cached from the last render so scrolling can track the cursor.
    last_height: Cell<usize>,
}

impl ResultListState {
    /// Handle a navigation event. `len` is the current result count.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        if len == 0 {
            return;
        }
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                self.cursor = (self.cursor + 1).min(len - 1);
            }
            _ => {}
        }
    }

    /// Keep the cursor valid after the list is replaced.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    fn window_start(&self, len: usize) -> usize {
        let height = self.last_height.get().max(1);
        if self.cursor >= height {
            (self.cursor + 1 - height).min(len.saturating_sub(height))
        } else {
            0
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultList<'a> {
    items: &'a [Feature],
    state: &'a ResultListState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ResultList<'a> {
    pub fn new(
        items: &'a [Feature],
        state: &'a ResultListState,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            items,
            state,
            focused,
            theme,
        }
    }
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let title = format!("Results ({})", self.items.len());
        let block = Block::bordered().title(title).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        self.state.last_height.set(inner.height as usize);

        if self.items.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "no matches",
                self.theme.hint,
            )))
            .render(inner, buf);
            return;
        }

        let start = self.state.window_start(self.items.len());
        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .skip(start)
            .take(inner.height as usize)
            .map(|(i, feature)| {
                let style = if i == self.state.cursor && self.focused {
                    self.theme.result_cursor
                } else {
                    Style::default()
                };
                Line::from(Span::styled(feature.label(), style))
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
