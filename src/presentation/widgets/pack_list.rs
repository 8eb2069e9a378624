//! Catalog list widget with a delete control per row.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::application::{BusyGuard, DeleteTarget};
use crate::domain::format_quantity;

const SELECTED_MARKER: &str = "> ";
const UNSELECTED_MARKER: &str = "  ";

/// Rows, selection and click targets of the catalog list.
#[derive(Debug, Default)]
pub struct PackListState {
    rows: Vec<DeleteTarget>,
    selected: Option<usize>,
    offset: usize,
    focused: bool,
    hit_boxes: Vec<(Rect, DeleteTarget)>,
}

impl PackListState {
    /// Empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rows, keeping the selection on the same pack if present.
    pub fn set_rows(&mut self, rows: Vec<DeleteTarget>) {
        let selected_id = self.selected_target().map(|target| target.id);
        self.rows = rows;
        self.hit_boxes.clear();

        self.selected = if self.rows.is_empty() {
            None
        } else if let Some(idx) =
            selected_id.and_then(|id| self.rows.iter().position(|row| row.id == id))
        {
            Some(idx)
        } else {
            Some(self.selected.unwrap_or(0).min(self.rows.len() - 1))
        };
    }

    /// Delete targets, one per row.
    #[must_use]
    pub fn rows(&self) -> &[DeleteTarget] {
        &self.rows
    }

    /// Whether the list has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selected row index.
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Delete target of the highlighted row.
    #[must_use]
    pub fn selected_target(&self) -> Option<DeleteTarget> {
        self.selected.and_then(|idx| self.rows.get(idx).copied())
    }

    /// Selects the next row, wrapping.
    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let next = self.selected.map_or(0, |idx| (idx + 1) % self.rows.len());
        self.selected = Some(next);
    }

    /// Selects the previous row, wrapping.
    pub fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let previous = self.selected.map_or(0, |idx| {
            if idx == 0 {
                self.rows.len() - 1
            } else {
                idx - 1
            }
        });
        self.selected = Some(previous);
    }

    /// Sets focus.
    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether the list has focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Resolves a mouse click against the last rendered frame.
    ///
    /// Selects the clicked row and returns its target when the click landed
    /// on the row's delete label.
    pub fn click(&mut self, column: u16, row: u16) -> Option<DeleteTarget> {
        let position = Position::new(column, row);
        let hit = self
            .hit_boxes
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target);

        if let Some(target) = hit {
            self.selected = self.rows.iter().position(|r| r.id == target.id);
            return Some(target);
        }

        for (area, target) in &self.hit_boxes {
            if area.y == row && column < area.x {
                self.selected = self.rows.iter().position(|r| r.id == target.id);
                break;
            }
        }
        None
    }

    fn scroll_to_selection(&mut self, height: usize) {
        let Some(selected) = self.selected else {
            self.offset = 0;
            return;
        };
        if height == 0 {
            return;
        }
        if selected < self.offset {
            self.offset = selected;
        } else if selected >= self.offset + height {
            self.offset = selected + 1 - height;
        }
        self.offset = self.offset.min(self.rows.len().saturating_sub(height));
    }
}

/// Catalog list widget.
pub struct PackList<'a> {
    busy: &'a BusyGuard,
}

impl<'a> PackList<'a> {
    /// List widget showing `busy` Delete labels.
    #[must_use]
    pub const fn new(busy: &'a BusyGuard) -> Self {
        Self { busy }
    }
}

impl StatefulWidget for PackList<'_> {
    type State = PackListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border_style = if state.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Pack sizes ({}) ", state.rows.len()));

        let inner = block.inner(area);
        block.render(area, buf);
        state.hit_boxes.clear();

        if state.rows.is_empty() {
            Paragraph::new("No pack sizes yet. Add one to get started.")
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let height = usize::from(inner.height);
        state.scroll_to_selection(height);

        for (line, idx) in (state.offset..state.rows.len()).take(height).enumerate() {
            let target = state.rows[idx];
            let y = inner.y + u16::try_from(line).unwrap_or(u16::MAX);
            let is_selected = state.selected == Some(idx);

            let row_style = if is_selected && state.focused {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            buf.set_style(Rect::new(inner.x, y, inner.width, 1), row_style);

            let marker = if is_selected && state.focused {
                SELECTED_MARKER
            } else {
                UNSELECTED_MARKER
            };
            let text = format!("{marker}{} items", format_quantity(target.size));

            let control = target.control();
            let label = format!("[{}]", self.busy.display_label(control));
            let label_width = u16::try_from(label.width()).unwrap_or(u16::MAX);
            let label_x = (inner.x + inner.width).saturating_sub(label_width);

            let text_width = usize::from(label_x.saturating_sub(inner.x + 1));
            buf.set_stringn(inner.x, y, &text, text_width, row_style);

            let label_style = if self.busy.is_busy(control) {
                row_style
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            } else {
                row_style.fg(Color::Red)
            };
            buf.set_stringn(label_x, y, &label, usize::from(label_width), label_style);

            state
                .hit_boxes
                .push((Rect::new(label_x, y, label_width, 1), target));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ControlId;

    fn rows() -> Vec<DeleteTarget> {
        vec![
            DeleteTarget::new(3, 250),
            DeleteTarget::new(1, 500),
            DeleteTarget::new(2, 1000),
        ]
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = PackListState::new();
        state.set_rows(rows());
        assert_eq!(state.selected(), Some(0));

        state.select_previous();
        assert_eq!(state.selected(), Some(2));

        state.select_next();
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_selection_follows_pack_after_rows_change() {
        let mut state = PackListState::new();
        state.set_rows(rows());
        state.select_next();
        assert_eq!(state.selected_target().map(|t| t.id), Some(1));

        state.set_rows(vec![DeleteTarget::new(7, 5), DeleteTarget::new(1, 500)]);
        assert_eq!(state.selected_target().map(|t| t.id), Some(1));
    }

    #[test]
    fn test_selection_clamped_when_pack_removed() {
        let mut state = PackListState::new();
        state.set_rows(rows());
        state.select_previous();

        state.set_rows(vec![DeleteTarget::new(3, 250)]);
        assert_eq!(state.selected(), Some(0));

        state.set_rows(Vec::new());
        assert_eq!(state.selected(), None);
        assert!(state.selected_target().is_none());
    }

    #[test]
    fn test_renders_rows_with_delete_labels() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        let busy = BusyGuard::new();
        let mut state = PackListState::new();
        state.set_rows(rows());

        PackList::new(&busy).render(area, &mut buf, &mut state);

        assert!(row_text(&buf, 1).contains("250 items"));
        assert!(row_text(&buf, 1).contains("[Delete]"));
        assert!(row_text(&buf, 3).contains("1,000 items"));
    }

    #[test]
    fn test_busy_row_shows_busy_label() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        let mut busy = BusyGuard::new();
        let control = ControlId::DeletePack(1);
        busy.begin(control, control.idle_label(), Some(control.busy_label()));
        let mut state = PackListState::new();
        state.set_rows(rows());

        PackList::new(&busy).render(area, &mut buf, &mut state);

        assert!(row_text(&buf, 1).contains("[Delete]"));
        assert!(row_text(&buf, 2).contains("[Removing…]"));
    }

    #[test]
    fn test_empty_placeholder() {
        let area = Rect::new(0, 0, 50, 4);
        let mut buf = Buffer::empty(area);
        let busy = BusyGuard::new();
        let mut state = PackListState::new();

        PackList::new(&busy).render(area, &mut buf, &mut state);

        assert!(row_text(&buf, 1).contains("No pack sizes yet"));
    }

    #[test]
    fn test_click_on_label_returns_target() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        let busy = BusyGuard::new();
        let mut state = PackListState::new();
        state.set_rows(rows());

        PackList::new(&busy).render(area, &mut buf, &mut state);

        assert_eq!(state.click(27, 2), Some(DeleteTarget::new(1, 500)));
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_click_on_text_only_selects() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        let busy = BusyGuard::new();
        let mut state = PackListState::new();
        state.set_rows(rows());

        PackList::new(&busy).render(area, &mut buf, &mut state);

        assert_eq!(state.click(3, 3), None);
        assert_eq!(state.selected(), Some(2));
        assert_eq!(state.click(3, 0), None);
    }

    #[test]
    fn test_scrolls_to_keep_selection_visible() {
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        let busy = BusyGuard::new();
        let mut state = PackListState::new();
        state.set_rows(rows());
        state.set_focused(true);
        state.select_previous();

        PackList::new(&busy).render(area, &mut buf, &mut state);

        assert!(row_text(&buf, 2).contains("> 1,000 items"));
    }
}
