use serde::Serialize;
use tokio::sync::watch;

/// Fixed user-facing message published when a fetch fails.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching transactions. Please try again later.";

/// Point-in-time view of the pipeline's loading and error signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchStatus {
    /// True strictly between request start and settlement.
    pub loading: bool,

    /// Set on failure, cleared at the start of every fetch.
    pub error: Option<String>,
}

/// Read-only handle on the pipeline's signals, handed out to views.
///
/// Cloning is cheap; every clone observes the same writer.
#[derive(Debug, Clone)]
pub struct StatusReceiver {
    pub(crate) loading: watch::Receiver<bool>,
    pub(crate) error: watch::Receiver<Option<String>>,
}

impl StatusReceiver {
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn snapshot(&self) -> FetchStatus {
        FetchStatus {
            loading: self.is_loading(),
            error: self.error(),
        }
    }

    /// Wait until the loading signal changes and return its new value.
    ///
    /// Returns `None` once the owning pipeline has been dropped.
    pub async fn loading_changed(&mut self) -> Option<bool> {
        self.loading.changed().await.ok()?;
        Some(*self.loading.borrow_and_update())
    }

    /// Wait until the error signal changes and return its new value.
    ///
    /// Returns `None` once the owning pipeline has been dropped.
    pub async fn error_changed(&mut self) -> Option<Option<String>> {
        self.error.changed().await.ok()?;
        Some(self.error.borrow_and_update().clone())
    }
}
