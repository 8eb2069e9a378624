//! Calculator screen: order form, results and pack size catalog.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::notification_popup::NotificationPopup;
use crate::application::{BusyGuard, Command, ControlId, DeleteTarget};
use crate::domain::{CalculationResult, Catalog, InputField, Notification, View};
use crate::presentation::events::{EventHandler, FocusStep};
use crate::presentation::widgets::{PackList, PackListState, ResultsTable, StatusBar, TextInput};

/// Focusable regions of the screen, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Order amount input.
    OrderAmount,
    /// New pack size input.
    PackSize,
    /// Pack size list.
    Catalog,
}

impl Focus {
    const fn next(self) -> Self {
        match self {
            Self::OrderAmount => Self::PackSize,
            Self::PackSize => Self::Catalog,
            Self::Catalog => Self::OrderAmount,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::OrderAmount => Self::Catalog,
            Self::PackSize => Self::OrderAmount,
            Self::Catalog => Self::PackSize,
        }
    }
}

impl From<InputField> for Focus {
    fn from(field: InputField) -> Self {
        match field {
            InputField::OrderAmount => Self::OrderAmount,
            InputField::PackSize => Self::PackSize,
        }
    }
}

/// Result of handling an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// Nothing to do.
    None,
    /// Leave the application.
    Quit,
    /// Hand a command to the controller.
    Dispatch(Command),
}

/// Screen state; doubles as the controller's view.
#[derive(Debug)]
pub struct CalculatorScreenState {
    amount_input: TextInput,
    size_input: TextInput,
    packs: PackListState,
    result: Option<CalculationResult>,
    focus: Focus,
    amount_area: Rect,
    size_area: Rect,
}

impl CalculatorScreenState {
    /// Screen with focus on the order amount.
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self {
            amount_input: TextInput::new(" Order amount ").placeholder("e.g. 251"),
            size_input: TextInput::new(" New pack size ").placeholder("e.g. 250"),
            packs: PackListState::new(),
            result: None,
            focus: Focus::OrderAmount,
            amount_area: Rect::default(),
            size_area: Rect::default(),
        };
        state.set_focus(Focus::OrderAmount);
        state
    }

    /// Focused section.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Moves focus to `focus`.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.amount_input.set_focused(focus == Focus::OrderAmount);
        self.size_input.set_focused(focus == Focus::PackSize);
        self.packs.set_focused(focus == Focus::Catalog);
    }

    /// Order amount input.
    #[must_use]
    pub fn amount_input(&self) -> &TextInput {
        &self.amount_input
    }

    /// New pack size input.
    #[must_use]
    pub fn size_input(&self) -> &TextInput {
        &self.size_input
    }

    /// Rows of the pack list.
    #[must_use]
    pub const fn packs(&self) -> &PackListState {
        &self.packs
    }

    /// Result snapshot from the last render.
    #[must_use]
    pub const fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    const fn input_mut(&mut self, field: InputField) -> &mut TextInput {
        match field {
            InputField::OrderAmount => &mut self.amount_input,
            InputField::PackSize => &mut self.size_input,
        }
    }

    /// Maps a key press to an action.
    pub fn handle_key(&mut self, key: KeyEvent, busy: &BusyGuard) -> ScreenAction {
        if !EventHandler::is_press(&key) {
            return ScreenAction::None;
        }
        if EventHandler::is_quit_event(&key) {
            return ScreenAction::Quit;
        }
        if EventHandler::is_dismiss_event(&key) {
            return ScreenAction::Dispatch(Command::DismissNotification);
        }
        if let Some(step) = EventHandler::focus_step(&key) {
            let focus = match step {
                FocusStep::Next => self.focus.next(),
                FocusStep::Previous => self.focus.previous(),
            };
            self.set_focus(focus);
            return ScreenAction::None;
        }
        if key.code == KeyCode::F(5) {
            return Self::refresh(busy);
        }

        match self.focus {
            Focus::OrderAmount => self.handle_input_key(key, busy, InputField::OrderAmount),
            Focus::PackSize => self.handle_input_key(key, busy, InputField::PackSize),
            Focus::Catalog => self.handle_catalog_key(key, busy),
        }
    }

    fn handle_input_key(
        &mut self,
        key: KeyEvent,
        busy: &BusyGuard,
        field: InputField,
    ) -> ScreenAction {
        let (control, input) = match field {
            InputField::OrderAmount => (ControlId::Calculate, &mut self.amount_input),
            InputField::PackSize => (ControlId::AddPack, &mut self.size_input),
        };

        if EventHandler::is_submit_event(&key) {
            if busy.is_busy(control) {
                return ScreenAction::None;
            }
            let raw = input.value().to_string();
            return ScreenAction::Dispatch(match field {
                InputField::OrderAmount => Command::Calculate { amount: raw },
                InputField::PackSize => Command::AddPack { size: raw },
            });
        }

        input.handle_key(key);
        ScreenAction::None
    }

    fn handle_catalog_key(&mut self, key: KeyEvent, busy: &BusyGuard) -> ScreenAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.packs.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.packs.select_next(),
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(target) = self.packs.selected_target() {
                    return Self::delete(target, busy);
                }
            }
            KeyCode::Char('r') => return Self::refresh(busy),
            _ => {}
        }
        ScreenAction::None
    }

    /// Maps a mouse event to an action.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, busy: &BusyGuard) -> ScreenAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return ScreenAction::None;
        }

        let position = Position::new(mouse.column, mouse.row);
        if self.amount_area.contains(position) {
            self.set_focus(Focus::OrderAmount);
            return ScreenAction::None;
        }
        if self.size_area.contains(position) {
            self.set_focus(Focus::PackSize);
            return ScreenAction::None;
        }

        let previous = self.packs.selected();
        match self.packs.click(mouse.column, mouse.row) {
            Some(target) => {
                self.set_focus(Focus::Catalog);
                Self::delete(target, busy)
            }
            None => {
                if self.packs.selected() != previous {
                    self.set_focus(Focus::Catalog);
                }
                ScreenAction::None
            }
        }
    }

    fn delete(target: DeleteTarget, busy: &BusyGuard) -> ScreenAction {
        if busy.is_busy(target.control()) {
            ScreenAction::None
        } else {
            ScreenAction::Dispatch(Command::DeletePack(target))
        }
    }

    fn refresh(busy: &BusyGuard) -> ScreenAction {
        if busy.is_busy(ControlId::Refresh) {
            ScreenAction::None
        } else {
            ScreenAction::Dispatch(Command::RefreshCatalog)
        }
    }
}

impl Default for CalculatorScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl View for CalculatorScreenState {
    fn render_catalog(&mut self, catalog: &Catalog) {
        let rows = catalog
            .sorted_by_size()
            .iter()
            .map(DeleteTarget::from_pack)
            .collect();
        self.packs.set_rows(rows);
    }

    fn render_result(&mut self, result: Option<&CalculationResult>) {
        self.result = result.cloned();
    }

    fn clear_input(&mut self, field: InputField) {
        self.input_mut(field).clear();
    }

    fn focus_input(&mut self, field: InputField) {
        self.set_focus(field.into());
    }
}

/// Calculator screen widget.
pub struct CalculatorScreen<'a> {
    busy: &'a BusyGuard,
    notification: Option<&'a Notification>,
    server: &'a str,
    pending: usize,
}

impl<'a> CalculatorScreen<'a> {
    /// Screen widget drawn with `busy` labels for `server`.
    #[must_use]
    pub const fn new(busy: &'a BusyGuard, server: &'a str) -> Self {
        Self {
            busy,
            notification: None,
            server,
            pending: 0,
        }
    }

    /// Overlays `notification`.
    #[must_use]
    pub const fn notification(mut self, notification: Option<&'a Notification>) -> Self {
        self.notification = notification;
        self
    }

    /// Number of requests in flight for the status bar.
    #[must_use]
    pub const fn pending(mut self, pending: usize) -> Self {
        self.pending = pending;
        self
    }

    fn render_form(
        &self,
        area: Rect,
        buf: &mut Buffer,
        input: &TextInput,
        control: ControlId,
    ) -> Rect {
        let label = format!(" {} ", self.busy.display_label(control));
        let button_width = u16::try_from(label.width()).unwrap_or(u16::MAX) + 2;
        let [input_area, button_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(button_width)])
                .areas(area);

        input.render(input_area, buf);

        let style = if self.busy.is_busy(control) {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };
        Paragraph::new(label)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style))
            .render(button_area, buf);

        input_area
    }

    fn render_header(area: Rect, buf: &mut Buffer) {
        Line::from(vec![
            Span::styled(
                " Pack Calculator ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                concat!("v", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .render(area, buf);
    }
}

impl StatefulWidget for CalculatorScreen<'_> {
    type State = CalculatorScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state
            .amount_input
            .set_disabled(self.busy.is_busy(ControlId::Calculate));
        state
            .size_input
            .set_disabled(self.busy.is_busy(ControlId::AddPack));

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Self::render_header(header, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(body);

        let [order_form, results] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(left);
        state.amount_area =
            self.render_form(order_form, buf, &state.amount_input, ControlId::Calculate);
        ResultsTable::new(state.result.as_ref()).render(results, buf);

        let [size_form, catalog] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(right);
        state.size_area = self.render_form(size_form, buf, &state.size_input, ControlId::AddPack);
        PackList::new(self.busy).render(catalog, buf, &mut state.packs);

        let status = StatusBar::new(self.server).pending(self.pending);
        let status = match state.focus {
            Focus::Catalog => status
                .hint("d", "Delete")
                .hint("r", "Refresh")
                .hint("Tab", "Next"),
            Focus::OrderAmount => status.hint("Enter", "Calculate").hint("Tab", "Next"),
            Focus::PackSize => status.hint("Enter", "Add").hint("Tab", "Next"),
        };
        status.hint("Ctrl+Q", "Quit").render(footer, buf);

        if let Some(notification) = self.notification {
            NotificationPopup::new(notification).render(body, buf);
        }
    }
}
