pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use models::{
    group::TransactionGroups,
    settings::Settings,
    status::{FetchStatus, StatusReceiver},
    transaction::Transaction,
};
use providers::{http::HttpTransactionSource, traits::TransactionSource};
use services::transaction_service::TransactionService;

use errors::CoreError;

/// Main entry point for the Transaction Feed core library.
///
/// Constructed explicitly by whoever owns the application's lifetime (there
/// is no global instance). List and detail views share one feed and
/// observe its loading/error signals through [`TransactionFeed::subscribe`].
#[must_use]
pub struct TransactionFeed {
    transaction_service: TransactionService,
}

impl std::fmt::Debug for TransactionFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionFeed")
            .field("source", &self.transaction_service.source_name())
            .field("status", &self.transaction_service.status())
            .finish()
    }
}

impl TransactionFeed {
    /// Create a feed that talks HTTP to `settings.api_url`.
    pub fn new(settings: &Settings) -> Result<Self, CoreError> {
        let source = HttpTransactionSource::new(settings)?;
        Ok(Self::with_source(Box::new(source)))
    }

    /// Create a feed over any transport.
    pub fn with_source(source: Box<dyn TransactionSource>) -> Self {
        Self {
            transaction_service: TransactionService::new(source),
        }
    }

    // ── Fetching ────────────────────────────────────────────────────

    /// All transactions, flattened and EUR-normalized.
    /// Empty if the request failed (see [`TransactionFeed::status`]).
    pub async fn transactions(&self) -> Vec<Transaction> {
        self.transaction_service.fetch_all().await
    }

    /// All transactions, or the error that prevented fetching them.
    pub async fn try_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        self.transaction_service.try_fetch_all().await
    }

    /// Fetch and bucket by date, as the list view needs them.
    pub async fn grouped_transactions(&self) -> TransactionGroups {
        let transactions = self.transaction_service.fetch_all().await;
        TransactionService::group_by_date(transactions)
    }

    /// A single transaction for the detail view.
    /// `None` if absent or if the request failed.
    pub async fn transaction(&self, id: i64) -> Option<Transaction> {
        self.transaction_service.fetch_by_id(id).await
    }

    /// A single transaction, keeping request failures distinct from misses.
    pub async fn try_transaction(&self, id: i64) -> Result<Option<Transaction>, CoreError> {
        self.transaction_service.try_fetch_by_id(id).await
    }

    // ── Pure helpers ────────────────────────────────────────────────

    /// Bucket already-fetched transactions by date.
    pub fn group_by_date(transactions: Vec<Transaction>) -> TransactionGroups {
        TransactionService::group_by_date(transactions)
    }

    // ── Status ──────────────────────────────────────────────────────

    #[must_use]
    pub fn status(&self) -> FetchStatus {
        self.transaction_service.status()
    }

    /// Read-only handle on the loading/error signals.
    #[must_use]
    pub fn subscribe(&self) -> StatusReceiver {
        self.transaction_service.subscribe()
    }
}
