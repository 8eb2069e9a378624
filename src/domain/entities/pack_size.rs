//! Pack size entity.

/// Server-assigned pack identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackId(u64);

impl PackId {
    /// Wraps a raw server id.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw server id.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PackId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One kind of pack offered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackSize {
    id: PackId,
    size: u64,
}

impl PackSize {
    /// Pack size `size` stored under `id`.
    #[must_use]
    pub const fn new(id: PackId, size: u64) -> Self {
        Self { id, size }
    }

    /// Server id.
    #[must_use]
    pub const fn id(&self) -> PackId {
        self.id
    }

    /// Number of items in one pack of this kind.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }
}
