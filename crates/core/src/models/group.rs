use serde::Serialize;
use std::collections::BTreeMap;

use super::transaction::Transaction;

/// Transactions bucketed by their date key (`YYYY-MM-DD`).
///
/// Only dates that actually occur are present, and each bucket keeps the
/// relative order the transactions had in the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionGroups {
    buckets: BTreeMap<String, Vec<Transaction>>,
}

impl TransactionGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction to the bucket for its date key.
    pub fn push(&mut self, transaction: Transaction) {
        self.buckets
            .entry(transaction.date_key().to_string())
            .or_default()
            .push(transaction);
    }

    /// Transactions for a single date, in input order.
    pub fn get(&self, date: &str) -> Option<&[Transaction]> {
        self.buckets.get(date).map(Vec::as_slice)
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of transactions across all buckets.
    pub fn total_transactions(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Date keys, oldest first.
    pub fn dates(&self) -> Vec<&str> {
        self.buckets.keys().map(String::as_str).collect()
    }

    /// Date keys, newest first (list view order).
    pub fn dates_newest_first(&self) -> Vec<&str> {
        self.buckets.keys().rev().map(String::as_str).collect()
    }

    /// Iterate over `(date, bucket)` pairs, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Transaction])> {
        self.buckets
            .iter()
            .map(|(date, txs)| (date.as_str(), txs.as_slice()))
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<Transaction>> {
        self.buckets
    }
}

impl FromIterator<Transaction> for TransactionGroups {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        let mut groups = Self::new();
        for transaction in iter {
            groups.push(transaction);
        }
        groups
    }
}
