//! Synchronization controller.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::command::{Command, DeleteTarget};
use super::state::ControllerState;
use crate::application::services::{
    BusyGuard, ControlId, NotificationChannel, parse_order_amount, parse_pack_size,
    validate_pack_id,
};
use crate::domain::{
    CalculationResult, CatalogPort, GatewayError, InputField, PackId, PackSize, ValidationError,
    View, format_quantity,
};

/// Outcome of one gateway call, delivered back to the controller.
#[derive(Debug)]
pub enum Completion {
    /// Result of a list fetch.
    PacksLoaded {
        /// Control that triggered the fetch; `None` for the startup load.
        control: Option<ControlId>,
        /// Catalog revision when the fetch was issued.
        issued_at: u64,
        /// Server catalog or the failure.
        result: Result<Vec<PackSize>, GatewayError>,
    },
    /// Result of adding a pack size.
    PackAdded {
        /// Size the user submitted.
        size: u64,
        /// Created entry or the failure.
        result: Result<PackSize, GatewayError>,
    },
    /// Result of deleting a pack size.
    PackDeleted {
        /// Row the delete was triggered from.
        target: DeleteTarget,
        /// Outcome of the delete.
        result: Result<(), GatewayError>,
    },
    /// Result of a calculation.
    Calculated {
        /// Order amount submitted.
        amount: u64,
        /// Packs needed or the failure.
        result: Result<CalculationResult, GatewayError>,
    },
}

/// Keeps [`ControllerState`] in step with the remote catalog.
///
/// Commands are validated and turned into gateway calls on spawned tasks.
/// Their [`Completion`]s come back through a channel and are applied one at a
/// time, in the order they finish.
pub struct SyncController<V: View> {
    state: ControllerState,
    gateway: Arc<dyn CatalogPort>,
    view: V,
    busy: BusyGuard,
    notifications: NotificationChannel,
    in_flight: usize,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
}

impl<V: View> SyncController<V> {
    /// Controller over `state`, talking to `gateway` and drawing into `view`.
    #[must_use]
    pub fn new(
        state: ControllerState,
        gateway: Arc<dyn CatalogPort>,
        view: V,
        notification_duration: Duration,
    ) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();

        Self {
            state,
            gateway,
            view,
            busy: BusyGuard::new(),
            notifications: NotificationChannel::new(notification_duration),
            in_flight: 0,
            completion_tx,
            completion_rx,
        }
    }

    /// Current catalog and calculation.
    #[must_use]
    pub const fn state(&self) -> &ControllerState {
        &self.state
    }

    /// View the controller renders into.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Mutable view, for input handling.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Busy state of every control.
    #[must_use]
    pub const fn busy(&self) -> &BusyGuard {
        &self.busy
    }

    /// Notification shown to the user.
    #[must_use]
    pub const fn notifications(&self) -> &NotificationChannel {
        &self.notifications
    }

    /// Borrows the view mutably next to the state it renders from.
    pub fn view_parts(&mut self) -> (&mut V, &BusyGuard, &NotificationChannel) {
        (&mut self.view, &self.busy, &self.notifications)
    }

    /// Number of gateway calls whose completion has not been applied yet.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Expires the visible notification when its time is up.
    pub fn tick(&mut self) {
        self.notifications.tick();
    }

    /// Validates `command` and starts its gateway call.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::LoadCatalog => self.load_catalog(None),
            Command::RefreshCatalog => self.load_catalog(Some(ControlId::Refresh)),
            Command::Calculate { amount } => self.submit_calculation(&amount),
            Command::AddPack { size } => self.submit_pack_size(&size),
            Command::DeletePack(target) => self.delete_pack(target),
            Command::DismissNotification => self.notifications.dismiss(),
        }
    }

    /// Waits for the next finished gateway call.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completion_rx.recv().await
    }

    /// Waits for one completion and applies it.
    pub async fn process_next(&mut self) -> bool {
        match self.next_completion().await {
            Some(completion) => {
                self.apply(completion);
                true
            }
            None => false,
        }
    }

    /// Applies one finished gateway call.
    pub fn apply(&mut self, completion: Completion) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match completion {
            Completion::PacksLoaded {
                control,
                issued_at,
                result,
            } => self.apply_pack_list(control, issued_at, result),
            Completion::PackAdded { size, result } => self.apply_pack_added(size, result),
            Completion::PackDeleted { target, result } => self.apply_pack_deleted(target, result),
            Completion::Calculated { amount, result } => self.apply_calculation(amount, result),
        }
    }

    fn load_catalog(&mut self, control: Option<ControlId>) {
        if let Some(control) = control
            && !self.engage(control)
        {
            return;
        }

        self.fetch_pack_list(control);
    }

    /// Issues a list fetch stamped with the current catalog revision. The
    /// caller owns `control`'s busy state.
    fn fetch_pack_list(&mut self, control: Option<ControlId>) {
        let issued_at = self.state.catalog().revision();
        debug!(revision = issued_at, "Loading pack sizes");

        let gateway = Arc::clone(&self.gateway);
        self.spawn_request(async move {
            Completion::PacksLoaded {
                control,
                issued_at,
                result: gateway.list_packs().await,
            }
        });
    }

    fn submit_calculation(&mut self, raw: &str) {
        if self.busy.is_busy(ControlId::Calculate) {
            debug!("Calculation already in flight, ignoring submit");
            return;
        }
        self.notifications.dismiss();

        let amount = match parse_order_amount(raw) {
            Ok(amount) => amount,
            Err(e) => {
                self.reject(e, Some(InputField::OrderAmount));
                return;
            }
        };

        self.engage(ControlId::Calculate);
        debug!(amount, "Submitting calculation");

        let gateway = Arc::clone(&self.gateway);
        self.spawn_request(async move {
            Completion::Calculated {
                amount,
                result: gateway.calculate(amount).await,
            }
        });
    }

    fn submit_pack_size(&mut self, raw: &str) {
        if self.busy.is_busy(ControlId::AddPack) {
            debug!("Add already in flight, ignoring submit");
            return;
        }
        self.notifications.dismiss();

        let size = match parse_pack_size(raw) {
            Ok(size) => size,
            Err(e) => {
                self.reject(e, Some(InputField::PackSize));
                return;
            }
        };

        self.engage(ControlId::AddPack);
        debug!(size, "Adding pack size");

        let gateway = Arc::clone(&self.gateway);
        self.spawn_request(async move {
            Completion::PackAdded {
                size,
                result: gateway.add_pack(size).await,
            }
        });
    }

    fn delete_pack(&mut self, target: DeleteTarget) {
        if self.busy.is_busy(target.control()) {
            debug!(id = target.id, "Delete already in flight, ignoring");
            return;
        }

        let id = match validate_pack_id(target.id) {
            Ok(id) => PackId::new(id),
            Err(e) => {
                self.reject(e, None);
                return;
            }
        };

        self.engage(target.control());
        debug!(id = %id, size = target.size, "Deleting pack size");

        let gateway = Arc::clone(&self.gateway);
        self.spawn_request(async move {
            Completion::PackDeleted {
                target,
                result: gateway.delete_pack(id).await,
            }
        });
    }

    fn apply_pack_list(
        &mut self,
        control: Option<ControlId>,
        issued_at: u64,
        result: Result<Vec<PackSize>, GatewayError>,
    ) {
        let revision = self.state.catalog().revision();
        if result.is_ok() && revision != issued_at {
            warn!(
                issued_at,
                revision, "Pack list issued before a later catalog edit, fetching again"
            );
            self.fetch_pack_list(control);
            return;
        }

        if let Some(control) = control {
            self.busy.end(control);
        }

        match result {
            Ok(packs) => {
                info!(count = packs.len(), "Pack sizes loaded");
                self.state.catalog_mut().replace_all(packs);
                self.view.render_catalog(self.state.catalog());
            }
            Err(e) => {
                warn!(error = %e, "Failed to load pack sizes");
                self.notifications.error(e.user_message());
            }
        }
    }

    fn apply_pack_added(&mut self, size: u64, result: Result<PackSize, GatewayError>) {
        self.busy.end(ControlId::AddPack);

        match result {
            Ok(pack) => {
                if !self.state.catalog_mut().append(pack) {
                    debug!(id = %pack.id(), "Added pack was already in the catalog");
                }
                info!(id = %pack.id(), size = pack.size(), "Pack size added");

                self.view.render_catalog(self.state.catalog());
                self.view.clear_input(InputField::PackSize);
                self.view.focus_input(InputField::PackSize);
                self.notifications
                    .success(format!("Added a {} item pack.", format_quantity(size)));
            }
            Err(e) => {
                warn!(error = %e, size, "Failed to add pack size");
                self.notifications.error(e.user_message());
            }
        }
    }

    fn apply_pack_deleted(&mut self, target: DeleteTarget, result: Result<(), GatewayError>) {
        self.busy.end(target.control());

        match result {
            Ok(()) => {
                if self.state.catalog_mut().remove(PackId::new(target.id)).is_none() {
                    debug!(id = target.id, "Deleted pack was not in the catalog");
                }
                info!(id = target.id, size = target.size, "Pack size deleted");

                self.view.render_catalog(self.state.catalog());
                self.notifications.success(format!(
                    "Removed the {} item pack.",
                    format_quantity(target.size)
                ));
            }
            Err(e) => {
                warn!(error = %e, id = target.id, "Failed to delete pack size");
                self.notifications.error(e.user_message());
            }
        }
    }

    fn apply_calculation(&mut self, amount: u64, result: Result<CalculationResult, GatewayError>) {
        self.busy.end(ControlId::Calculate);

        match result {
            Ok(calculation) => {
                info!(
                    amount,
                    packed = calculation.packed_total(),
                    lines = calculation.packs().len(),
                    "Calculation complete"
                );
                self.state.set_last_calculation(Some(calculation));
                self.view.render_result(self.state.last_calculation());
                self.notifications.success("Calculation complete.");
            }
            Err(e) => {
                warn!(error = %e, amount, "Calculation failed");
                self.state.set_last_calculation(None);
                self.view.render_result(None);
                self.notifications.error(e.user_message());
            }
        }
    }

    /// Marks `control` busy. Returns `false` when it already was.
    fn engage(&mut self, control: ControlId) -> bool {
        let started = self
            .busy
            .begin(control, control.idle_label(), Some(control.busy_label()));
        if !started {
            debug!(?control, "Control busy, ignoring trigger");
        }
        started
    }

    fn reject(&mut self, error: ValidationError, field: Option<InputField>) {
        debug!(error = %error, "Rejected input");
        self.notifications.error(error.to_string());
        if let Some(field) = field {
            self.view.focus_input(field);
        }
    }

    fn spawn_request<F>(&mut self, request: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            if tx.send(request.await).is_err() {
                debug!("Controller gone before request completed");
            }
        });
    }
}
