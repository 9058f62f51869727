#![allow(dead_code)]

use brew_confirm::domain::checkout::{ConfirmRequest, PendingCheckout, Provider};
use brew_confirm::domain::endpoint::ConfirmEndpoint;
use brew_confirm::domain::error::ConfirmError;
use brew_confirm::domain::nav::{Navigator, Route};
use brew_confirm::domain::store::CheckoutStore;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// Build a pending checkout with sensible defaults.
pub fn make_checkout(provider: Provider, source_id: Option<&str>) -> PendingCheckout {
    PendingCheckout {
        provider,
        source_id: source_id.map(str::to_string),
        items: serde_json::json!([{"productId": "americano-12oz", "quantity": 2}]),
        shipping_address: serde_json::json!({"line1": "12 Kapehan St", "city": "Quezon City"}),
        latitude: serde_json::json!(14.676),
        longitude: serde_json::json!(121.0437),
    }
}

/// In-memory single-slot store, the minimal stand-in for local storage.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<PendingCheckout>>,
}

impl CheckoutStore for MemoryStore {
    fn put(&self, checkout: &PendingCheckout) -> Result<(), ConfirmError> {
        *self.slot.lock().unwrap() = Some(checkout.clone());
        Ok(())
    }

    fn take(&self) -> Result<Option<PendingCheckout>, ConfirmError> {
        Ok(self.slot.lock().unwrap().take())
    }
}

/// Records every confirm request it receives. Can be told to fail, and can be
/// gated so the request does not settle until the test releases it.
#[derive(Default)]
pub struct RecordingEndpoint {
    requests: Mutex<Vec<ConfirmRequest>>,
    fail: AtomicBool,
    gate: Option<Arc<Notify>>,
}

impl RecordingEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let endpoint = Self::default();
        endpoint.fail.store(true, Ordering::SeqCst);
        endpoint
    }

    /// The confirm future blocks until `gate.notify_one()` is called.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<ConfirmRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl ConfirmEndpoint for RecordingEndpoint {
    fn confirm(
        &self,
        request: ConfirmRequest,
    ) -> Pin<Box<dyn Future<Output = Result<(), ConfirmError>> + Send + '_>> {
        Box::pin(async move {
            self.requests.lock().unwrap().push(request);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail.load(Ordering::SeqCst) {
                return Err(ConfirmError::Endpoint("simulated gateway outage".into()));
            }
            Ok(())
        })
    }
}

/// Records every navigation.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Advance the paused tokio clock and let woken timer tasks run.
///
/// Freshly spawned tasks must get a first poll before the clock moves, or
/// their timers register against the already-advanced instant.
pub async fn advance_and_settle(duration: Duration) {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
    tokio::time::advance(duration).await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
