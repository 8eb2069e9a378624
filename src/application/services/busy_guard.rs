//! In-flight tracking for interactive controls.

use std::collections::HashMap;

/// Identity of a control that can trigger a remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// Calculate button.
    Calculate,
    /// Add pack button.
    AddPack,
    /// Catalog refresh.
    Refresh,
    /// Delete control of one catalog row, keyed by raw pack id.
    DeletePack(u64),
}

impl ControlId {
    /// Label shown while the control is idle.
    #[must_use]
    pub const fn idle_label(self) -> &'static str {
        match self {
            Self::Calculate => "Calculate",
            Self::AddPack => "Add",
            Self::Refresh => "Refresh",
            Self::DeletePack(_) => "Delete",
        }
    }

    /// Label shown while the control's operation is in flight.
    #[must_use]
    pub const fn busy_label(self) -> &'static str {
        match self {
            Self::Calculate => "Calculating…",
            Self::AddPack => "Adding…",
            Self::Refresh => "Refreshing…",
            Self::DeletePack(_) => "Removing…",
        }
    }
}

#[derive(Debug, Clone)]
struct BusyEntry {
    original_label: String,
    label: String,
}

/// Map from control identity to its saved label while busy.
#[derive(Debug, Default)]
pub struct BusyGuard {
    entries: HashMap<ControlId, BusyEntry>,
}

impl BusyGuard {
    /// Guard with no busy controls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `control` busy. The original label is captured only on the first
    /// begin of a cycle. Returns `false` when the control was already busy.
    pub fn begin(
        &mut self,
        control: ControlId,
        current_label: &str,
        busy_label: Option<&str>,
    ) -> bool {
        let started = !self.entries.contains_key(&control);
        let entry = self.entries.entry(control).or_insert_with(|| BusyEntry {
            original_label: current_label.to_string(),
            label: current_label.to_string(),
        });
        if let Some(busy_label) = busy_label {
            entry.label = busy_label.to_string();
        }
        started
    }

    /// Makes `control` interactive again and returns the restored label.
    pub fn end(&mut self, control: ControlId) -> Option<String> {
        self.entries
            .remove(&control)
            .map(|entry| entry.original_label)
    }

    /// Whether `control` has a request in flight.
    #[must_use]
    pub fn is_busy(&self, control: ControlId) -> bool {
        self.entries.contains_key(&control)
    }

    /// Visible label of a busy control.
    #[must_use]
    pub fn label(&self, control: ControlId) -> Option<&str> {
        self.entries.get(&control).map(|entry| entry.label.as_str())
    }

    /// Visible label, falling back to the idle label.
    #[must_use]
    pub fn display_label(&self, control: ControlId) -> &str {
        self.label(control).unwrap_or(control.idle_label())
    }

    /// Number of busy controls.
    #[must_use]
    pub fn busy_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_and_end_restore_label() {
        let mut guard = BusyGuard::new();

        let started = guard.begin(ControlId::Calculate, "Calculate", Some("Calculating…"));
        assert!(started);
        assert!(guard.is_busy(ControlId::Calculate));
        assert_eq!(guard.label(ControlId::Calculate), Some("Calculating…"));

        let restored = guard.end(ControlId::Calculate);
        assert_eq!(restored.as_deref(), Some("Calculate"));
        assert!(!guard.is_busy(ControlId::Calculate));
        assert_eq!(guard.display_label(ControlId::Calculate), "Calculate");
    }

    #[test]
    fn test_nested_begin_keeps_original_label() {
        let mut guard = BusyGuard::new();
        guard.begin(ControlId::AddPack, "Add", Some("Adding…"));

        let started = guard.begin(ControlId::AddPack, "Adding…", Some("Still adding…"));

        assert!(!started);
        assert_eq!(guard.label(ControlId::AddPack), Some("Still adding…"));
        assert_eq!(guard.end(ControlId::AddPack).as_deref(), Some("Add"));
    }

    #[test]
    fn test_begin_without_busy_label_keeps_visible_label() {
        let mut guard = BusyGuard::new();
        guard.begin(ControlId::Refresh, "Reload", None);

        assert_eq!(guard.label(ControlId::Refresh), Some("Reload"));
    }

    #[test]
    fn test_cycle_recaptures_label() {
        let mut guard = BusyGuard::new();
        guard.begin(ControlId::AddPack, "Add", Some("Adding…"));
        guard.end(ControlId::AddPack);

        guard.begin(ControlId::AddPack, "Add pack", Some("Adding…"));
        assert_eq!(guard.end(ControlId::AddPack).as_deref(), Some("Add pack"));
    }

    #[test]
    fn test_rows_are_tracked_independently() {
        let mut guard = BusyGuard::new();
        guard.begin(ControlId::DeletePack(1), "Delete", Some("Removing…"));
        guard.begin(ControlId::DeletePack(2), "Delete", Some("Removing…"));
        assert_eq!(guard.busy_count(), 2);

        guard.end(ControlId::DeletePack(1));

        assert!(!guard.is_busy(ControlId::DeletePack(1)));
        assert!(guard.is_busy(ControlId::DeletePack(2)));
    }

    #[test]
    fn test_end_without_begin_is_noop() {
        let mut guard = BusyGuard::new();
        assert_eq!(guard.end(ControlId::Calculate), None);
    }
}
