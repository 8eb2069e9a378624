//! Remote catalog port definition.

use async_trait::async_trait;

use crate::domain::entities::{CalculationResult, PackId, PackSize};
use crate::domain::errors::GatewayError;

/// Port for the pack calculator service.
///
/// Each call issues exactly one request and reports a failure exactly once;
/// retrying is left to the caller.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Fetches the full pack catalog.
    async fn list_packs(&self) -> Result<Vec<PackSize>, GatewayError>;

    /// Creates a pack size and returns the stored entry.
    async fn add_pack(&self, size: u64) -> Result<PackSize, GatewayError>;

    /// Deletes a pack size by id.
    async fn delete_pack(&self, id: PackId) -> Result<(), GatewayError>;

    /// Asks the server which packs fulfill `amount`.
    async fn calculate(&self, amount: u64) -> Result<CalculationResult, GatewayError>;
}

/// In-memory catalog gateway for tests.
#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::entities::PackCount;
    use crate::domain::errors::CatalogOperation;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::sync::Semaphore;

    /// Call recorded by [`MockCatalogPort`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum MockCall {
        /// `list_packs`.
        ListPacks,
        /// `add_pack` with the size.
        AddPack(u64),
        /// `delete_pack` with the id.
        DeletePack(PackId),
        /// `calculate` with the amount.
        Calculate(u64),
    }

    /// In-memory catalog service for testing.
    #[derive(Default)]
    pub struct MockCatalogPort {
        packs: Mutex<Vec<PackSize>>,
        next_id: AtomicU64,
        calculation: Mutex<Option<CalculationResult>>,
        failures: Mutex<HashMap<CatalogOperation, GatewayError>>,
        gates: Mutex<HashMap<CatalogOperation, Arc<Semaphore>>>,
        calls: Mutex<Vec<MockCall>>,
    }

    impl MockCatalogPort {
        /// Creates new mock with an empty catalog.
        pub fn new() -> Self {
            Self::with_packs(Vec::new())
        }

        /// Creates new mock seeded with packs.
        pub fn with_packs(packs: Vec<PackSize>) -> Self {
            let next_id = packs.iter().map(|p| p.id().as_u64()).max().unwrap_or(0) + 1;
            Self {
                packs: Mutex::new(packs),
                next_id: AtomicU64::new(next_id),
                ..Self::default()
            }
        }

        /// Makes every following call of `operation` fail with `error`.
        pub fn fail(&self, operation: CatalogOperation, error: GatewayError) {
            self.failures.lock().unwrap().insert(operation, error);
        }

        /// Lets `operation` succeed again.
        pub fn recover(&self, operation: CatalogOperation) {
            self.failures.lock().unwrap().remove(&operation);
        }

        /// Sets the answer returned by `calculate`.
        pub fn set_calculation(&self, result: CalculationResult) {
            *self.calculation.lock().unwrap() = Some(result);
        }

        /// Holds calls of `operation`; each permit added to the returned gate
        /// lets one call through.
        pub fn hold(&self, operation: CatalogOperation) -> Arc<Semaphore> {
            let gate = Arc::new(Semaphore::new(0));
            self.gates.lock().unwrap().insert(operation, gate.clone());
            gate
        }

        /// Returns recorded calls.
        pub fn calls(&self) -> Vec<MockCall> {
            self.calls.lock().unwrap().clone()
        }

        /// Returns the packs currently stored on the "server".
        pub fn stored_packs(&self) -> Vec<PackSize> {
            self.packs.lock().unwrap().clone()
        }

        fn record(&self, call: MockCall) {
            self.calls.lock().unwrap().push(call);
        }

        async fn pass(&self, operation: CatalogOperation) -> Result<(), GatewayError> {
            let gate = self.gates.lock().unwrap().get(&operation).cloned();
            if let Some(gate) = gate
                && let Ok(permit) = gate.acquire().await
            {
                permit.forget();
            }
            match self.failures.lock().unwrap().get(&operation) {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl CatalogPort for MockCatalogPort {
        async fn list_packs(&self) -> Result<Vec<PackSize>, GatewayError> {
            self.record(MockCall::ListPacks);
            let snapshot = self.stored_packs();
            self.pass(CatalogOperation::ListPacks).await?;
            Ok(snapshot)
        }

        async fn add_pack(&self, size: u64) -> Result<PackSize, GatewayError> {
            self.record(MockCall::AddPack(size));
            self.pass(CatalogOperation::AddPack).await?;
            let id = PackId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
            let pack = PackSize::new(id, size);
            self.packs.lock().unwrap().push(pack);
            Ok(pack)
        }

        async fn delete_pack(&self, id: PackId) -> Result<(), GatewayError> {
            self.record(MockCall::DeletePack(id));
            self.pass(CatalogOperation::DeletePack).await?;
            self.packs.lock().unwrap().retain(|p| p.id() != id);
            Ok(())
        }

        async fn calculate(&self, amount: u64) -> Result<CalculationResult, GatewayError> {
            self.record(MockCall::Calculate(amount));
            self.pass(CatalogOperation::Calculate).await?;
            let configured = self.calculation.lock().unwrap().clone();
            Ok(configured
                .unwrap_or_else(|| CalculationResult::new(amount, vec![PackCount::new(amount, 1)])))
        }
    }
}
