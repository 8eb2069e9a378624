//! UI screens.

mod app;
mod calculator_screen;
mod notification_popup;

pub use app::App;
pub use calculator_screen::{CalculatorScreen, CalculatorScreenState, Focus, ScreenAction};
pub use notification_popup::NotificationPopup;
