use {
    crate::domain::endpoint::ConfirmEndpoint,
    crate::domain::store::CheckoutStore,
    std::sync::Arc,
    tokio::task::JoinHandle,
    uuid::Uuid,
};

/// What happened to the stored checkout on this mount.
#[derive(Debug)]
pub enum Dispatch {
    /// No record in the slot (or the record was unreadable).
    Idle,
    /// A record existed but needs no post-redirect confirmation; discarded.
    Skipped,
    /// A confirm request is in flight. The handle is only there so tests can
    /// await settlement; production callers drop it.
    Sent(JoinHandle<()>),
}

/// Consume the checkout slot and, if the record owes the gateway a confirm
/// call, fire it as a detached task.
///
/// The slot is cleared before the request is sent, so a reload or
/// back-navigation onto the success screen can never confirm twice. The
/// request itself is best-effort: the screen has already committed to showing
/// success, so failures are logged and otherwise ignored. No retry, no
/// user-facing error.
pub fn dispatch_pending(store: &dyn CheckoutStore, endpoint: Arc<dyn ConfirmEndpoint>) -> Dispatch {
    let checkout = match store.take() {
        Ok(Some(checkout)) => checkout,
        Ok(None) => return Dispatch::Idle,
        Err(e) => {
            tracing::warn!(error = %e, "could not read checkout slot, skipping confirmation");
            return Dispatch::Idle;
        }
    };

    let Some(request) = checkout.confirm_request() else {
        tracing::debug!(
            provider = %checkout.provider,
            "checkout needs no confirmation, record discarded"
        );
        return Dispatch::Skipped;
    };

    let attempt = Uuid::now_v7();
    tracing::info!(%attempt, source_id = %request.source_id, "dispatching payment confirmation");

    let handle = tokio::spawn(async move {
        match endpoint.confirm(request).await {
            Ok(()) => tracing::info!(%attempt, "payment confirmation accepted"),
            Err(e) => {
                tracing::warn!(%attempt, error = %e, "payment confirmation failed, not retrying");
            }
        }
    });

    Dispatch::Sent(handle)
}
