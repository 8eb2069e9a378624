//! Domain entity definitions.

mod calculation;
mod catalog;
mod pack_size;

pub use calculation::{CalculationResult, PackCount};
pub use catalog::Catalog;
pub use pack_size::{PackId, PackSize};
