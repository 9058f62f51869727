use {
    super::checkout::ConfirmRequest,
    super::error::ConfirmError,
    std::{future::Future, pin::Pin},
};

/// Seam to the payment gateway's confirmation endpoint.
///
/// Callers own the request; the call is spawned as a detached task, so the
/// future must not borrow anything but the endpoint itself.
pub trait ConfirmEndpoint: Send + Sync {
    fn confirm(
        &self,
        request: ConfirmRequest,
    ) -> Pin<Box<dyn Future<Output = Result<(), ConfirmError>> + Send + '_>>;
}
