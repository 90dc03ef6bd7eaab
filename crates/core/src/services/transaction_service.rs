use tracing::{debug, error, info};

use super::currency_service::CurrencyService;
use super::status_store::StatusStore;
use crate::errors::CoreError;
use crate::models::group::TransactionGroups;
use crate::models::status::{FetchStatus, StatusReceiver, FETCH_ERROR_MESSAGE};
use crate::models::transaction::Transaction;
use crate::providers::traits::TransactionSource;

/// The retrieval-and-transformation pipeline:
/// fetch → flatten → normalize to EUR → group → look up by id.
///
/// Two flavours of each fetch operation exist:
/// - **Soft** (`fetch_all`, `fetch_by_id`): never fail. A failed request
///   yields an empty list / `None`, and the failure is published on the
///   error signal instead.
/// - **Strict** (`try_fetch_all`, `try_fetch_by_id`): return the
///   `CoreError`, so "request failed" and "no such id" stay distinct.
///
/// Both update the loading/error signals identically. Overlapping calls are
/// not coalesced; each issues its own request and toggles `loading`.
pub struct TransactionService {
    source: Box<dyn TransactionSource>,
    currency_service: CurrencyService,
    status: StatusStore,
}

impl TransactionService {
    pub fn new(source: Box<dyn TransactionSource>) -> Self {
        Self {
            source,
            currency_service: CurrencyService::new(),
            status: StatusStore::new(),
        }
    }

    /// Name of the underlying transport.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Read-only handle on the loading/error signals.
    pub fn subscribe(&self) -> StatusReceiver {
        self.status.subscribe()
    }

    pub fn status(&self) -> FetchStatus {
        self.status.snapshot()
    }

    /// Fetch, flatten and normalize all transactions.
    /// Resolves to an empty list when the request fails.
    pub async fn fetch_all(&self) -> Vec<Transaction> {
        self.try_fetch_all().await.unwrap_or_default()
    }

    /// Fetch, flatten and normalize all transactions, surfacing failures.
    pub async fn try_fetch_all(&self) -> Result<Vec<Transaction>, CoreError> {
        let fetch = self.status.begin();
        debug!(source = self.source.name(), "fetching transactions");

        match self.source.fetch_days().await {
            Ok(response) => {
                info!(
                    days = response.days.len(),
                    transactions = response.transaction_count(),
                    "fetched transactions"
                );
                let transactions = self.currency_service.flatten(response);
                fetch.succeed();
                Ok(transactions)
            }
            Err(e) => {
                error!(source = self.source.name(), error = %e, "error fetching transactions");
                fetch.fail(FETCH_ERROR_MESSAGE);
                Err(e)
            }
        }
    }

    /// Fetch everything and return the transaction with `id`.
    ///
    /// `None` covers both "no such id" and "the request failed"; use
    /// [`Self::try_fetch_by_id`] to tell them apart.
    pub async fn fetch_by_id(&self, id: i64) -> Option<Transaction> {
        let transactions = self.fetch_all().await;
        Self::find_by_id(transactions, id)
    }

    /// Fetch everything and return the transaction with `id`.
    /// `Ok(None)` means the request succeeded but no transaction matched.
    pub async fn try_fetch_by_id(&self, id: i64) -> Result<Option<Transaction>, CoreError> {
        let transactions = self.try_fetch_all().await?;
        Ok(Self::find_by_id(transactions, id))
    }

    /// First transaction with a matching id (ids are unique per fetch).
    pub fn find_by_id(transactions: Vec<Transaction>, id: i64) -> Option<Transaction> {
        transactions.into_iter().find(|t| t.id == id)
    }

    /// Bucket transactions by the date portion of their timestamp.
    pub fn group_by_date(transactions: Vec<Transaction>) -> TransactionGroups {
        transactions.into_iter().collect()
    }
}
