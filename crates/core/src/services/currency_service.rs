use crate::models::transaction::{RawTransaction, Transaction, TransactionsResponse};

/// The only non-EUR currency the feed converts.
pub const USD: &str = "USD";

/// Normalizes raw API transactions to EUR.
///
/// The API quotes non-EUR transactions with a rate in units of the origin
/// currency per EUR, so the EUR value is `amount / rate`. Only USD is
/// converted; every other currency, and USD without a usable rate, keeps its
/// amount as-is.
pub struct CurrencyService;

impl CurrencyService {
    pub fn new() -> Self {
        Self
    }

    /// EUR value of `amount`.
    /// E.g., to_eur(110.0, "USD", Some(1.1)) → 100.0
    pub fn to_eur(&self, amount: f64, currency_code: &str, currency_rate: Option<f64>) -> f64 {
        match currency_rate {
            // Zero and NaN rates count as missing.
            Some(rate) if currency_code == USD && rate != 0.0 && !rate.is_nan() => amount / rate,
            _ => amount,
        }
    }

    /// Convert one raw transaction into its consumer-facing form,
    /// dropping the exchange rate.
    pub fn normalize(&self, raw: RawTransaction) -> Transaction {
        let amount_in_eur = self.to_eur(raw.amount, &raw.currency_code, raw.currency_rate);
        Transaction {
            id: raw.id,
            timestamp: raw.timestamp,
            amount: raw.amount,
            currency_code: raw.currency_code,
            description: raw.description,
            other_party: raw.other_party,
            amount_in_eur,
        }
    }

    /// Flatten all day envelopes into one sequence, days first then
    /// transactions within each day, normalizing each transaction.
    pub fn flatten(&self, response: TransactionsResponse) -> Vec<Transaction> {
        response
            .days
            .into_iter()
            .flat_map(|day| day.transactions)
            .map(|raw| self.normalize(raw))
            .collect()
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}
