//! Map pane widget — plots the surface's layers on a braille canvas.
//!
//! Layers render bottom-to-top (base, nearby, highlight) in their marker
//! colours. When a highlight layer is present its popup is rendered in the
//! pane's top-right corner, attributes substituted per feature.

use crate::surface::CanvasMap;
use crate::theme::{parse_color, Theme};
use pinpoint_core::layer::LayerId;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Clear, Paragraph, Widget,
    },
};

/// Terminal cells are roughly twice as tall as wide; shrink the latitude
/// span so a degree looks the same in both axes.
const CELL_ASPECT: f64 = 0.5;

pub struct MapPane<'a> {
    map: &'a CanvasMap,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> MapPane<'a> {
    pub fn new(map: &'a CanvasMap, focused: bool, theme: &'a Theme) -> Self {
        Self { map, focused, theme }
    }

    fn render_popup(&self, area: Rect, buf: &mut Buffer) {
        let Some(spec) = self.map.layer(LayerId::Highlight) else {
            return;
        };
        let Some(feature) = spec.features.first() else {
            return;
        };

        let title = spec.popup.render_title(feature);
        let body = spec.popup.render_body(feature);
        let mut lines = vec![Line::from(Span::styled(title, self.theme.popup_title))];
        lines.extend(
            body.lines()
                .map(|l| Line::from(Span::styled(l.to_string(), self.theme.popup_body))),
        );

        let width = lines
            .iter()
            .map(|l| l.width() as u16)
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .min(area.width);
        let height = (lines.len() as u16).saturating_add(2).min(area.height);
        let popup = Rect {
            x: area.right().saturating_sub(width),
            y: area.y,
            width,
            height,
        };

        Clear.render(popup, buf);
        let block = Block::bordered().border_style(self.theme.border_unfocused);
        let inner = block.inner(popup);
        block.render(popup, buf);
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for MapPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let title = format!(
            "Map {} z{:.0}",
            self.map.center, self.map.zoom
        );

        let lon_span = self.map.lon_span();
        let lat_span = lon_span * CELL_ASPECT;
        let cx = self.map.center.lon;
        let cy = self.map.center.lat;

        Canvas::default()
            .block(Block::bordered().title(title).border_style(border_style))
            .marker(Marker::Braille)
            .x_bounds([cx - lon_span / 2.0, cx + lon_span / 2.0])
            .y_bounds([cy - lat_span / 2.0, cy + lat_span / 2.0])
            .paint(|ctx| {
                for spec in self.map.draw_order() {
                    let color = parse_color(spec.style.color).unwrap_or(Color::White);
                    let coords: Vec<(f64, f64)> = spec
                        .features
                        .iter()
                        .filter_map(|f| f.coord)
                        .map(|c| (c.lon, c.lat))
                        .collect();
                    ctx.draw(&Points {
                        coords: &coords,
                        color,
                    });
                }
            })
            .render(area, buf);

        self.render_popup(area, buf);
    }
}
