//! Domain error types.

mod gateway_error;
mod validation_error;

pub use gateway_error::{CatalogOperation, GatewayError};
pub use validation_error::ValidationError;
