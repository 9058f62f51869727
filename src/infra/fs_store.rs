use {
    crate::domain::checkout::PendingCheckout,
    crate::domain::error::ConfirmError,
    crate::domain::store::CheckoutStore,
    std::{
        fs, io,
        path::{Path, PathBuf},
        sync::Mutex,
    },
};

/// Storage key the checkout initiator writes under.
pub const STORAGE_KEY: &str = "checkoutPayload";

/// File-backed checkout slot: one JSON file named [`STORAGE_KEY`] inside a
/// storage directory.
///
/// A mutex serializes `put`/`take` so two near-simultaneous mounts cannot
/// both read the record before either clears it, the single-slot analogue of
/// the browser host being single-threaded.
pub struct FsCheckoutStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FsCheckoutStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STORAGE_KEY),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CheckoutStore for FsCheckoutStore {
    fn put(&self, checkout: &PendingCheckout) -> Result<(), ConfirmError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec(checkout)?)?;
        Ok(())
    }

    fn take(&self) -> Result<Option<PendingCheckout>, ConfirmError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());

        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // Clear the slot before anything looks at the content. A record that
        // fails to parse can never become valid, so it is cleared too.
        fs::remove_file(&self.path)?;

        match serde_json::from_slice(&bytes) {
            Ok(checkout) => Ok(Some(checkout)),
            Err(e) => {
                tracing::warn!(key = STORAGE_KEY, error = %e, "malformed checkout payload discarded");
                Ok(None)
            }
        }
    }
}
