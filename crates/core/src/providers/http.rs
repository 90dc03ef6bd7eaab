use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::TransactionSource;
use crate::errors::CoreError;
use crate::models::settings::Settings;
use crate::models::transaction::TransactionsResponse;

/// Fetches transactions from a JSON HTTP endpoint.
///
/// - **Method**: `GET`, no query parameters, no body.
/// - **Body**: `{ "days": [ { "id": "YYYY-MM-DD", "transactions": [...] } ] }`
/// - **Timeout**: `Settings::timeout_secs` (reqwest has no timeout on wasm32).
pub struct HttpTransactionSource {
    client: Client,
    url: String,
}

impl HttpTransactionSource {
    pub fn new(settings: &Settings) -> Result<Self, CoreError> {
        settings.validate()?;

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.timeout_secs));

        Ok(Self {
            client: builder.build()?,
            url: settings.api_url.trim().to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Decode a response body into the day-bucketed payload.
///
/// A body without `days` is rejected; optional per-transaction fields may be
/// missing.
pub fn parse_response(body: &str) -> Result<TransactionsResponse, CoreError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TransactionSource for HttpTransactionSource {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn fetch_days(&self) -> Result<TransactionsResponse, CoreError> {
        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unexpected status")
                    .to_string(),
            });
        }

        let body = resp.text().await?;
        parse_response(&body)
    }
}
