//! Transaction history fetch state
//!
//! Every fetch carries the generation it was issued under. Only the response
//! for the latest generation may touch the displayed list, so a slow response
//! for an account the user already navigated away from is dropped.

use crate::api::{ApiRequest, Backend, Endpoint};
use crate::error::ApiError;
use crate::transaction::{TransactionRecord, parse_records};

/// Proof that a fetch was requested for `account_id` under `generation`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub account_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryState {
    generation: u64,
    account_id: Option<String>,
    records: Vec<TransactionRecord>,
}

impl HistoryState {
    /// Returns a ticket on first mount and whenever `account_id` changes,
    /// `None` when it is the account already requested
    pub fn request(&mut self, account_id: &str) -> Option<FetchTicket> {
        if self.account_id.as_deref() == Some(account_id) {
            return None;
        }
        self.generation += 1;
        self.account_id = Some(account_id.to_string());
        tracing::debug!(
            "Fetching transactions for {} (generation {})",
            account_id,
            self.generation
        );
        Some(FetchTicket {
            generation: self.generation,
            account_id: account_id.to_string(),
        })
    }

    /// Applies a fetch result. Returns whether the displayed list was touched.
    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<TransactionRecord>, ApiError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Dropping stale transactions for {} (generation {}, current {})",
                ticket.account_id,
                ticket.generation,
                self.generation
            );
            return false;
        }
        match result {
            Ok(records) => {
                self.records = records;
                true
            }
            Err(e) => {
                tracing::error!("Error fetching transactions: {}", e);
                false
            }
        }
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }
}

/// Issues the GET for a ticket
pub async fn fetch_history<B: Backend>(
    backend: &B,
    ticket: &FetchTicket,
) -> Result<Vec<TransactionRecord>, ApiError> {
    let endpoint = Endpoint::TransactionsHistory {
        id: ticket.account_id.clone(),
    };
    let payload = backend.send(ApiRequest::new(endpoint, None)).await?;
    parse_records(payload)
}
