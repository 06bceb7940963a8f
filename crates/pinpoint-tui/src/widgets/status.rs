//! Status line — one row at the bottom: layer state and feature counts on
//! the left, the latest fetch error (if any) on the right.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusLine<'a> {
    left: String,
    error: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    pub fn new(left: String, error: Option<&'a str>, theme: &'a Theme) -> Self {
        Self { left, error, theme }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(self.left, self.theme.status)];
        if let Some(error) = self.error {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!("fetch failed: {error}"), self.theme.error));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
