//! In-memory request history.

use crate::domain::{HistoryError, RequestRecord};
use crate::ports::RequestHistory;
use chrono::Utc;
use parking_lot::RwLock;
use shared_types::ClientKey;

/// Append-only history held in process memory. Ids start at 1.
///
/// Stand-in for a persistent store: records are never evicted, and
/// `for_client` scans and clones the full log on every call. Nothing
/// survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryRequestHistory {
    records: RwLock<Vec<RequestRecord>>,
}

impl InMemoryRequestHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl RequestHistory for InMemoryRequestHistory {
    fn record(&self, key: &ClientKey, matrix_size: usize) -> Result<RequestRecord, HistoryError> {
        let mut records = self.records.write();
        let record = RequestRecord {
            id: records.len() as u64 + 1,
            client_key: key.clone(),
            matrix_size,
            created_at: Utc::now(),
        };
        records.push(record.clone());
        Ok(record)
    }

    /// Linear scan over every record; cost grows with total history.
    fn for_client(&self, key: &ClientKey) -> Result<Vec<RequestRecord>, HistoryError> {
        Ok(self
            .records
            .read()
            .iter()
            .filter(|record| &record.client_key == key)
            .cloned()
            .collect())
    }
}
