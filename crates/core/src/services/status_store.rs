use tokio::sync::watch;

use crate::models::status::{FetchStatus, StatusReceiver};

/// Single writer for the pipeline's loading and error signals.
///
/// Views never get write access; they hold [`StatusReceiver`]s obtained from
/// [`StatusStore::subscribe`].
#[derive(Debug)]
pub struct StatusStore {
    loading: watch::Sender<bool>,
    error: watch::Sender<Option<String>>,
}

impl StatusStore {
    pub fn new() -> Self {
        let (loading, _) = watch::channel(false);
        let (error, _) = watch::channel(None);
        Self { loading, error }
    }

    pub fn subscribe(&self) -> StatusReceiver {
        StatusReceiver {
            loading: self.loading.subscribe(),
            error: self.error.subscribe(),
        }
    }

    pub fn snapshot(&self) -> FetchStatus {
        FetchStatus {
            loading: *self.loading.borrow(),
            error: self.error.borrow().clone(),
        }
    }

    /// Request started: loading on, previous error cleared.
    ///
    /// Loading stays on until the returned guard is settled or dropped, so a
    /// fetch that is cancelled mid-request still switches it off.
    pub(crate) fn begin(&self) -> FetchGuard<'_> {
        self.error.send_replace(None);
        self.loading.send_replace(true);
        FetchGuard { store: self }
    }
}

/// One in-flight request's hold on the loading signal.
#[must_use]
pub(crate) struct FetchGuard<'a> {
    store: &'a StatusStore,
}

impl FetchGuard<'_> {
    /// Request settled successfully.
    pub(crate) fn succeed(self) {}

    /// Request settled with a failure; publishes `message`.
    pub(crate) fn fail(self, message: &str) {
        self.store.error.send_replace(Some(message.to_string()));
    }
}

impl Drop for FetchGuard<'_> {
    fn drop(&mut self) {
        self.store.loading.send_replace(false);
    }
}

impl Default for StatusStore {
    fn default() -> Self {
        Self::new()
    }
}
