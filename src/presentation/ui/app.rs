//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info};

use super::calculator_screen::{CalculatorScreen, CalculatorScreenState, ScreenAction};
use crate::application::{Command, ControllerState, SyncController};
use crate::domain::CatalogPort;

const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Terminal application: event loop around the controller.
pub struct App {
    state: AppState,
    controller: SyncController<CalculatorScreenState>,
    server_url: String,
}

impl App {
    /// App talking to `gateway` at `server_url`.
    #[must_use]
    pub fn new(
        gateway: Arc<dyn CatalogPort>,
        server_url: impl Into<String>,
        notification_duration: Duration,
    ) -> Self {
        let controller = SyncController::new(
            ControllerState::new(),
            gateway,
            CalculatorScreenState::new(),
            notification_duration,
        );

        Self {
            state: AppState::Running,
            controller,
            server_url: server_url.into(),
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(server = %self.server_url, "Loading pack sizes");
        self.controller.dispatch(Command::LoadCatalog);

        self.run_event_loop(terminal).await?;

        info!(
            pending = self.controller.in_flight(),
            "Application exiting normally"
        );
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick_interval = interval(TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                biased;

                Some(completion) = self.controller.next_completion() => {
                    self.controller.apply(completion);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    self.handle_terminal_event(event);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = tick_interval.tick() => {
                    self.controller.tick();
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) {
        let (screen, busy, _) = self.controller.view_parts();
        let action = match event {
            Event::Key(key) => screen.handle_key(key, busy),
            Event::Mouse(mouse) => screen.handle_mouse(mouse, busy),
            _ => ScreenAction::None,
        };
        self.handle_action(action);
    }

    fn handle_action(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Quit => {
                debug!("Quit requested");
                self.state = AppState::Exiting;
            }
            ScreenAction::Dispatch(command) => self.controller.dispatch(command),
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let pending = self.controller.in_flight();
        let (screen, busy, notifications) = self.controller.view_parts();
        let widget = CalculatorScreen::new(busy, &self.server_url)
            .notification(notifications.current())
            .pending(pending);
        frame.render_stateful_widget(widget, frame.area(), screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockCall, MockCatalogPort};
    use crate::domain::{PackId, PackSize};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app(port: &Arc<MockCatalogPort>) -> App {
        App::new(port.clone(), "http://localhost:8080", Duration::from_secs(5))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_event_stops_loop() {
        let port = Arc::new(MockCatalogPort::new());
        let mut app = app(&port);

        app.handle_terminal_event(Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL,
        )));

        assert_eq!(app.state, AppState::Exiting);
    }

    #[tokio::test]
    async fn test_key_events_reach_controller() {
        let port = Arc::new(MockCatalogPort::with_packs(vec![PackSize::new(
            PackId::new(1),
            250,
        )]));
        let mut app = app(&port);

        app.handle_terminal_event(key(KeyCode::Char('7')));
        app.handle_terminal_event(key(KeyCode::Enter));
        assert_eq!(app.controller.in_flight(), 1);

        assert!(app.controller.process_next().await);
        assert_eq!(port.calls(), vec![MockCall::Calculate(7)]);
        assert_eq!(app.state, AppState::Running);
    }

    #[test]
    fn test_resize_is_ignored() {
        let port = Arc::new(MockCatalogPort::new());
        let mut app = app(&port);

        app.handle_terminal_event(Event::Resize(80, 24));

        assert_eq!(app.state, AppState::Running);
        assert_eq!(app.controller.in_flight(), 0);
    }
}
