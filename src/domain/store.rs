use {super::checkout::PendingCheckout, super::error::ConfirmError};

/// Single-slot store holding at most one pending checkout, standing in for
/// the browser's local storage.
pub trait CheckoutStore: Send + Sync {
    /// Write the slot, replacing any previous record. Called by the checkout
    /// initiator before redirecting the buyer to the provider.
    fn put(&self, checkout: &PendingCheckout) -> Result<(), ConfirmError>;

    /// Consume the slot. Read-then-clear is one logical step: once this
    /// returns, the slot is empty, so revisiting the success screen can never
    /// observe the same record twice. Malformed content is cleared and
    /// reported as `None`.
    fn take(&self) -> Result<Option<PendingCheckout>, ConfirmError>;
}
