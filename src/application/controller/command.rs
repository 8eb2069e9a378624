//! User intents consumed by the controller.

use crate::application::services::ControlId;
use crate::domain::PackSize;

/// Data carried by a catalog row's delete control.
///
/// Captured when the row is rendered so a delete never re-reads the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTarget {
    /// Raw pack id.
    pub id: u64,
    /// Pack size, kept for the success message.
    pub size: u64,
}

impl DeleteTarget {
    /// Target for pack `id` of `size` items.
    #[must_use]
    pub const fn new(id: u64, size: u64) -> Self {
        Self { id, size }
    }

    /// Target for the row showing `pack`.
    #[must_use]
    pub const fn from_pack(pack: &PackSize) -> Self {
        Self {
            id: pack.id().as_u64(),
            size: pack.size(),
        }
    }

    /// Busy control of the row this target was captured from.
    #[must_use]
    pub const fn control(&self) -> ControlId {
        ControlId::DeletePack(self.id)
    }
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initial catalog load; runs without a triggering control.
    LoadCatalog,
    /// Manual catalog reload.
    RefreshCatalog,
    /// Submit the order amount as typed.
    Calculate { amount: String },
    /// Submit a new pack size as typed.
    AddPack { size: String },
    /// Delete the pack behind a catalog row.
    DeletePack(DeleteTarget),
    /// Hide the visible notification.
    DismissNotification,
}
