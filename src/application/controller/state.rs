//! Client-side copy of server-owned state.

use crate::domain::{CalculationResult, Catalog};

/// Catalog and last calculation for one application session.
#[derive(Debug, Clone, Default)]
pub struct ControllerState {
    catalog: Catalog,
    last_calculation: Option<CalculationResult>,
}

impl ControllerState {
    /// Empty catalog and no calculation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Local copy of the pack catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable access for applying completed edits.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Last successful calculation, if any.
    #[must_use]
    pub const fn last_calculation(&self) -> Option<&CalculationResult> {
        self.last_calculation.as_ref()
    }

    /// Stores or clears the last calculation.
    pub fn set_last_calculation(&mut self, result: Option<CalculationResult>) {
        self.last_calculation = result;
    }
}
