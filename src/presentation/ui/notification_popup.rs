use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationKind};

const MAX_WIDTH: u16 = 60;
const DISMISS_HINT: &str = "Esc to dismiss";

/// Overlay showing the visible notification in the top right corner.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationPopup<'a> {
    /// Popup for `notification`.
    #[must_use]
    pub const fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    const fn style(kind: NotificationKind) -> (&'static str, Color) {
        match kind {
            NotificationKind::Success => (" Success ", Color::Green),
            NotificationKind::Error => (" Error ", Color::Red),
        }
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, color) = Self::style(self.notification.kind);
        let message = self.notification.message.as_str();

        let max_popup_width = MAX_WIDTH.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width().max(DISMISS_HINT.width()))
            .unwrap_or(u16::MAX)
            .max(u16::try_from(title.width()).unwrap_or(0))
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
        let lines = content_width.div_ceil(inner_width).max(1);

        let height = lines.saturating_add(3).clamp(4, 10);

        let x = area.x + area.width.saturating_sub(width).saturating_sub(2);
        let y = area.y + 1;

        let popup_area = area.intersection(Rect::new(x, y, width, height));
        if popup_area.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(Line::from(Span::styled(
                format!(" {DISMISS_HINT} "),
                Style::default().fg(Color::DarkGray),
            )))
            .border_style(Style::default().fg(color));

        let para = Paragraph::new(message)
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Clear.render(popup_area, buf);
        para.render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_error_popup_is_red() {
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        let notification =
            Notification::new(NotificationKind::Error, "Failed to load pack sizes.");

        NotificationPopup::new(&notification).render(area, &mut buf);

        let rendered = text(&buf);
        assert!(rendered.contains("Error"));
        assert!(rendered.contains("Failed to load pack sizes."));

        let border = (0..area.width)
            .map(|x| &buf[(x, 1)])
            .find(|cell| cell.symbol() == "┌")
            .map(|cell| cell.fg);
        assert_eq!(border, Some(Color::Red));
    }

    #[test]
    fn test_success_popup_title() {
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        let notification = Notification::new(NotificationKind::Success, "Calculation complete.");

        NotificationPopup::new(&notification).render(area, &mut buf);

        let rendered = text(&buf);
        assert!(rendered.contains("Success"));
        assert!(rendered.contains("Esc to dismiss"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        let notification = Notification::new(NotificationKind::Error, "x");

        NotificationPopup::new(&notification).render(area, &mut buf);
    }
}
