//! In-memory record store

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError, Record,
    RecordStore, StoredRecord, Table,
};

#[derive(Default)]
struct Inner {
    /// Every stored record in arrival order
    log: Vec<StoredRecord>,
    /// Index into `log` of the latest record per (table, key)
    latest: HashMap<(Table, String), usize>,
}

/// Append-only store held in process memory
#[derive(Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<Inner>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records of a table in the order they were stored
    pub async fn records(&self, table: Table) -> Vec<StoredRecord> {
        self.inner
            .read()
            .await
            .log
            .iter()
            .filter(|stored| stored.record.table() == table)
            .cloned()
            .collect()
    }

    /// Number of records stored in a table
    pub async fn count(&self, table: Table) -> usize {
        self.inner
            .read()
            .await
            .log
            .iter()
            .filter(|stored| stored.record.table() == table)
            .count()
    }
}

impl DomainPort for InMemoryRecordStore {}

#[async_trait]
impl HealthCheckable for InMemoryRecordStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "in-memory-record-store".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: 0,
            message: None,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    #[instrument(skip(self, record), fields(table = %record.table()))]
    async fn store(&self, record: Record) -> Result<StoredRecord, PortError> {
        let key = record.key();
        let table = record.table();
        let stored = StoredRecord::new(record);

        let mut inner = self.inner.write().await;
        let index = inner.log.len();
        inner.log.push(stored.clone());
        inner.latest.insert((table, key), index);

        debug!(record_id = %stored.id, "Record stored");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn fetch_by_key(
        &self,
        table: Table,
        key: &str,
    ) -> Result<Option<StoredRecord>, PortError> {
        let inner = self.inner.read().await;
        Ok(inner
            .latest
            .get(&(table, key.to_string()))
            .and_then(|&index| inner.log.get(index))
            .cloned())
    }
}
