//! Request history records and pagination.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_types::ClientKey;

/// One computed request, as shown on the history page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestRecord {
    pub id: u64,
    pub client_key: ClientKey,
    pub matrix_size: usize,
    pub created_at: DateTime<Utc>,
}

/// A 1-based page of history records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPage {
    pub page: usize,
    pub page_size: usize,
}

impl HistoryPage {
    pub const DEFAULT_PAGE: usize = 1;

    /// Builds a page from raw query values. Invalid or non-positive values
    /// fall back to page 1 and `default_page_size`.
    pub fn from_params(page: Option<&str>, page_size: Option<&str>, default_page_size: usize) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(Self::DEFAULT_PAGE),
            page_size: parse_positive(page_size).unwrap_or(default_page_size.max(1)),
        }
    }

    /// Index of the first record on this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Slices `records` (already ordered by id) down to this page.
    pub fn apply(&self, records: Vec<RequestRecord>) -> Vec<RequestRecord> {
        records
            .into_iter()
            .skip(self.offset())
            .take(self.page_size)
            .collect()
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.parse::<i64>().ok())
        .filter(|&n| n > 0)
        .and_then(|n| usize::try_from(n).ok())
}
