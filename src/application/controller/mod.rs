//! Synchronization of client state with the pack calculator service.

mod command;
mod state;
mod sync_controller;

pub use command::{Command, DeleteTarget};
pub use state::ControllerState;
pub use sync_controller::{Completion, SyncController};
