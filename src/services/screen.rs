use {
    crate::domain::endpoint::ConfirmEndpoint,
    crate::domain::nav::{Navigator, Route},
    crate::domain::store::CheckoutStore,
    crate::services::confirmation::dispatch_pending,
    std::{sync::Arc, time::Duration},
    tokio::{sync::watch, task::JoinHandle},
};

/// Fixed delay between mount and the automatic redirect.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(7);

/// Starting value of the displayed countdown. Purely cosmetic: it reaches
/// zero two seconds before the redirect fires.
pub const COUNTDOWN_START: u8 = 5;

const TICK: Duration = Duration::from_secs(1);

/// The post-payment success screen.
///
/// Mounting consumes the checkout slot (at most once per stored record),
/// optimistically fires the confirmation call, and starts two independent
/// timers: the one-shot redirect and the cosmetic countdown ticker. Both are
/// cancelled when the screen is skipped or unmounted; the confirmation task
/// is deliberately left running, its result is only logged.
pub struct SuccessScreen {
    navigator: Arc<dyn Navigator>,
    countdown: watch::Receiver<u8>,
    redirect: JoinHandle<()>,
    ticker: JoinHandle<()>,
}

impl SuccessScreen {
    pub fn mount(
        store: &dyn CheckoutStore,
        endpoint: Arc<dyn ConfirmEndpoint>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let dispatch = dispatch_pending(store, endpoint);
        tracing::debug!(?dispatch, "success screen mounted");

        let (tx, countdown) = watch::channel(COUNTDOWN_START);

        let nav = Arc::clone(&navigator);
        let redirect = tokio::spawn(async move {
            tokio::time::sleep(REDIRECT_DELAY).await;
            tracing::info!(route = %Route::OrdersPanel, "redirect timer fired");
            nav.navigate(Route::OrdersPanel);
        });

        let ticker = tokio::spawn(async move {
            let mut tick = tokio::time::interval(TICK);
            tick.tick().await; // first tick completes immediately
            let mut remaining = COUNTDOWN_START;
            while remaining > 0 {
                tick.tick().await;
                remaining -= 1;
                if tx.send(remaining).is_err() {
                    return;
                }
            }
        });

        Self {
            navigator,
            countdown,
            redirect,
            ticker,
        }
    }

    /// Watch the displayed countdown value.
    pub fn countdown(&self) -> watch::Receiver<u8> {
        self.countdown.clone()
    }

    /// The "go now" affordance: navigate immediately, cancelling the pending
    /// timers so they cannot fire after the user has already left.
    pub fn skip(&self) {
        self.redirect.abort();
        self.ticker.abort();
        tracing::info!(route = %Route::OrdersPanel, "redirect skipped by user");
        self.navigator.navigate(Route::OrdersPanel);
    }

    /// Tear the screen down without navigating.
    pub fn unmount(self) {}
}

impl Drop for SuccessScreen {
    fn drop(&mut self) {
        self.redirect.abort();
        self.ticker.abort();
    }
}
