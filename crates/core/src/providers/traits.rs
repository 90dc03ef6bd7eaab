use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::transaction::TransactionsResponse;

/// Transport abstraction for the transactions endpoint.
///
/// The pipeline only needs "GET the configured endpoint and decode it".
/// `HttpTransactionSource` does this over reqwest; tests and embedding hosts
/// can supply their own implementation.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TransactionSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Issue one request and return the day-bucketed payload.
    ///
    /// Any transport failure, non-2xx status or undecodable body is an error.
    async fn fetch_days(&self) -> Result<TransactionsResponse, CoreError>;
}
