/// In-flight tracking per control.
pub mod busy_guard;
/// Single-slot notifications.
pub mod notification_channel;
/// Input parsing and validation.
pub mod validation;

pub use busy_guard::{BusyGuard, ControlId};
pub use notification_channel::NotificationChannel;
pub use validation::{parse_order_amount, parse_pack_size, validate_pack_id};
