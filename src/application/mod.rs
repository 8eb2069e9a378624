//! Application layer with the synchronization controller and its services.

/// Command dispatch and state synchronization.
pub mod controller;
/// Notification, busy tracking and validation services.
pub mod services;

pub use controller::{Command, Completion, ControllerState, DeleteTarget, SyncController};
pub use services::{BusyGuard, ControlId, NotificationChannel};
