use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Length of the `YYYY-MM-DD` prefix of an ISO-8601 timestamp.
const DATE_KEY_LEN: usize = 10;

/// Counterparty of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherParty {
    pub name: String,
    pub iban: String,
}

/// A transaction exactly as the API sends it.
///
/// `currency_rate` is only present for non-EUR transactions and is given as
/// units of the origin currency per EUR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub id: i64,
    pub timestamp: String,
    pub amount: f64,
    pub currency_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_rate: Option<f64>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_party: Option<OtherParty>,
}

/// Day envelope: the API's bucketing of transactions by calendar day.
///
/// `id` is the day (e.g. `"2022-11-08"`). It is informational only; grouping
/// is always derived from each transaction's own timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsDay {
    pub id: String,
    pub transactions: Vec<RawTransaction>,
}

/// Top-level body of the transactions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub days: Vec<TransactionsDay>,
}

impl TransactionsResponse {
    /// Total number of transactions across all days.
    pub fn transaction_count(&self) -> usize {
        self.days.iter().map(|d| d.transactions.len()).sum()
    }
}

/// A flattened, EUR-normalized transaction as handed to list/detail views.
///
/// Built fresh on every fetch; the exchange rate used to derive
/// `amount_in_eur` is not carried over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Identifier as supplied by the API (unique within one fetch).
    pub id: i64,

    /// ISO-8601 date-time, kept verbatim.
    pub timestamp: String,

    /// Amount in `currency_code`.
    pub amount: f64,

    pub currency_code: String,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_party: Option<OtherParty>,

    /// Amount converted to EUR.
    pub amount_in_eur: f64,
}

impl Transaction {
    /// The `YYYY-MM-DD` portion of the timestamp, used as the grouping key.
    ///
    /// Timestamps shorter than ten bytes (or with a multi-byte character
    /// straddling the boundary) are returned whole.
    pub fn date_key(&self) -> &str {
        self.timestamp
            .get(..DATE_KEY_LEN)
            .unwrap_or(self.timestamp.as_str())
    }

    /// Calendar date of the transaction, if the date key is a valid date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_key(), "%Y-%m-%d").ok()
    }

    /// The timestamp parsed as RFC 3339 and converted to UTC.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
