//! Calculation result entity.

/// Number of packs of one size used to fulfill an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackCount {
    size: u64,
    count: u64,
}

impl PackCount {
    /// `count` packs of `size` items.
    #[must_use]
    pub const fn new(size: u64, count: u64) -> Self {
        Self { size, count }
    }

    /// Items per pack.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Number of packs.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Items shipped by this line.
    #[must_use]
    pub const fn items(&self) -> u64 {
        self.size.saturating_mul(self.count)
    }
}

/// Server answer for one order amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    amount: u64,
    packs: Vec<PackCount>,
}

impl CalculationResult {
    /// Result for `amount`, packs as the server listed them.
    #[must_use]
    pub fn new(amount: u64, packs: Vec<PackCount>) -> Self {
        Self { amount, packs }
    }

    /// Quantity that was requested.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.amount
    }

    /// Pack lines in server order.
    #[must_use]
    pub fn packs(&self) -> &[PackCount] {
        &self.packs
    }

    /// Total items across all packs. Display only; the server guarantees it
    /// covers `amount`.
    #[must_use]
    pub fn packed_total(&self) -> u64 {
        self.packs
            .iter()
            .fold(0_u64, |total, pack| total.saturating_add(pack.items()))
    }

    /// Whether the server returned no packs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}
