//! Remote catalog error types.

use thiserror::Error;

/// Remote operation performed by the catalog gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogOperation {
    /// Fetching the catalog.
    ListPacks,
    /// Adding a pack size.
    AddPack,
    /// Deleting a pack size.
    DeletePack,
    /// Calculating packs for an order.
    Calculate,
}

impl CatalogOperation {
    /// Message shown when nothing more specific is available.
    #[must_use]
    pub const fn default_failure_message(self) -> &'static str {
        match self {
            Self::ListPacks => "Failed to load pack sizes.",
            Self::AddPack => "Failed to add pack size.",
            Self::DeletePack => "Failed to delete pack size.",
            Self::Calculate => "Calculation failed.",
        }
    }
}

impl std::fmt::Display for CatalogOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListPacks => write!(f, "list packs"),
            Self::AddPack => write!(f, "add pack"),
            Self::DeletePack => write!(f, "delete pack"),
            Self::Calculate => write!(f, "calculate"),
        }
    }
}

/// Gateway error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum GatewayError {
    #[error("{operation} request could not complete: {detail}")]
    Transport {
        operation: CatalogOperation,
        detail: String,
    },

    #[error("{operation} rejected with status {status}: {message}")]
    Status {
        operation: CatalogOperation,
        status: u16,
        message: String,
    },

    #[error("{operation} response could not be decoded: {detail}")]
    Decode {
        operation: CatalogOperation,
        detail: String,
    },
}

impl GatewayError {
    /// Creates transport error.
    #[must_use]
    pub fn transport(operation: CatalogOperation, detail: impl Into<String>) -> Self {
        Self::Transport {
            operation,
            detail: detail.into(),
        }
    }

    /// Creates error for a non-success response. The body is trimmed; an empty
    /// body falls back to the operation's default message.
    #[must_use]
    pub fn status(operation: CatalogOperation, status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            operation.default_failure_message().to_string()
        } else {
            body.to_string()
        };
        Self::Status {
            operation,
            status,
            message,
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(operation: CatalogOperation, detail: impl Into<String>) -> Self {
        Self::Decode {
            operation,
            detail: detail.into(),
        }
    }

    /// Operation that failed.
    #[must_use]
    pub const fn operation(&self) -> CatalogOperation {
        match self {
            Self::Transport { operation, .. }
            | Self::Status { operation, .. }
            | Self::Decode { operation, .. } => *operation,
        }
    }

    /// Text shown to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Status { message, .. } => message,
            Self::Transport { operation, .. } | Self::Decode { operation, .. } => {
                operation.default_failure_message()
            }
        }
    }
}
