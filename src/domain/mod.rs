//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Transient user notifications.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Quantity formatting.
pub mod quantity;

pub use entities::{CalculationResult, Catalog, PackCount, PackId, PackSize};
pub use errors::{CatalogOperation, GatewayError, ValidationError};
pub use notification::{Notification, NotificationKind};
pub use ports::{CatalogPort, InputField, View};
pub use quantity::format_quantity;
