//! Footer with connection info and key hints.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Footer status bar widget.
#[derive(Debug, Clone, Default)]
pub struct StatusBar<'a> {
    server: &'a str,
    pending: usize,
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> StatusBar<'a> {
    /// Status bar for `server`.
    #[must_use]
    pub fn new(server: &'a str) -> Self {
        Self {
            server,
            pending: 0,
            hints: Vec::new(),
        }
    }

    /// Number of requests still waiting on the server.
    #[must_use]
    pub const fn pending(mut self, pending: usize) -> Self {
        self.pending = pending;
        self
    }

    /// Adds a key hint shown on the right.
    #[must_use]
    pub fn hint(mut self, key: &'a str, description: &'a str) -> Self {
        self.hints.push((key, description));
        self
    }

    fn status_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(
            self.server,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];

        if self.pending > 0 {
            let noun = if self.pending == 1 {
                "request"
            } else {
                "requests"
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("{} {noun} pending", self.pending),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        Line::from(spans)
    }

    fn hints_line(&self) -> Line<'a> {
        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for (idx, (key, description)) in self.hints.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(": {description}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans).right_aligned()
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = self.status_line();
        let hints = self.hints_line();

        let status_width = u16::try_from(status.width()).unwrap_or(u16::MAX);
        let [left, right] =
            Layout::horizontal([Constraint::Length(status_width), Constraint::Fill(1)])
                .areas(area);

        Paragraph::new(status).render(left, buf);
        Paragraph::new(hints).render(right, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_server_and_hints() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        StatusBar::new("http://localhost:8080")
            .hint("Tab", "Next")
            .render(area, &mut buf);

        let text = row_text(&buf, 0);
        assert!(text.starts_with("http://localhost:8080"));
        assert!(text.trim_end().ends_with("Tab: Next"));
    }

    #[test]
    fn test_pending_requests_pluralized() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        StatusBar::new("srv").pending(2).render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("2 requests pending"));
    }
}
