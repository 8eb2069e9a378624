//! View port definition.

use crate::domain::entities::{CalculationResult, Catalog};

/// Text inputs the controller may reset or focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// Order amount to calculate.
    OrderAmount,
    /// New pack size to add.
    PackSize,
}

/// Rendering target for controller state.
///
/// Render calls receive the whole snapshot; implementations must not keep
/// references into controller state.
pub trait View {
    /// Redraws the catalog panel.
    fn render_catalog(&mut self, catalog: &Catalog);

    /// Redraws the result panel; `None` shows the empty presentation.
    fn render_result(&mut self, result: Option<&CalculationResult>);

    /// Empties an input.
    fn clear_input(&mut self, field: InputField);

    /// Moves keyboard focus to an input.
    fn focus_input(&mut self, field: InputField);
}
