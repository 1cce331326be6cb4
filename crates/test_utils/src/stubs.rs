//! Collaborator doubles
//!
//! Stand-ins for the description service, the record store and the identifier
//! service so workflow tests can script success and failure paths.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use core_kernel::{
    AdapterHealth, DescriptionService, DocumentKind, DomainPort, HealthCheckResult,
    HealthCheckable, IdentifierService, ImageRef, PortError, RandomIdentifierService, Record,
    RecordStore, StoredRecord, Table,
};
use infra_db::InMemoryRecordStore;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Description service that returns the same narrative for every image
pub struct StubDescriptionService {
    narrative: String,
}

impl StubDescriptionService {
    pub fn new(narrative: impl Into<String>) -> Self {
        Self {
            narrative: narrative.into(),
        }
    }
}

impl DomainPort for StubDescriptionService {}

#[async_trait]
impl DescriptionService for StubDescriptionService {
    async fn describe(&self, _image: &ImageRef) -> Result<String, PortError> {
        Ok(self.narrative.clone())
    }
}

/// Description service that is always unavailable
pub struct FailingDescriptionService;

impl DomainPort for FailingDescriptionService {}

#[async_trait]
impl DescriptionService for FailingDescriptionService {
    async fn describe(&self, _image: &ImageRef) -> Result<String, PortError> {
        Err(PortError::unavailable("vision model"))
    }
}

/// Record store whose every call fails with a connection error
pub struct FailingRecordStore;

impl DomainPort for FailingRecordStore {}

#[async_trait]
impl HealthCheckable for FailingRecordStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "failing-record-store".to_string(),
            status: AdapterHealth::Unhealthy,
            latency_ms: 0,
            message: Some("connection refused".to_string()),
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl RecordStore for FailingRecordStore {
    async fn store(&self, _record: Record) -> Result<StoredRecord, PortError> {
        Err(PortError::connection("connection refused"))
    }

    async fn fetch_by_key(
        &self,
        _table: Table,
        _key: &str,
    ) -> Result<Option<StoredRecord>, PortError> {
        Err(PortError::connection("connection refused"))
    }
}

/// Record store that serves reads from an in-memory store but rejects writes
pub struct ReadOnlyRecordStore {
    inner: InMemoryRecordStore,
}

impl ReadOnlyRecordStore {
    pub fn new(inner: InMemoryRecordStore) -> Self {
        Self { inner }
    }
}

impl DomainPort for ReadOnlyRecordStore {}

#[async_trait]
impl HealthCheckable for ReadOnlyRecordStore {
    async fn health_check(&self) -> HealthCheckResult {
        let mut result = self.inner.health_check().await;
        result.adapter_id = "read-only-record-store".to_string();
        result.status = AdapterHealth::Degraded;
        result
    }
}

#[async_trait]
impl RecordStore for ReadOnlyRecordStore {
    async fn store(&self, record: Record) -> Result<StoredRecord, PortError> {
        Err(PortError::unavailable(format!("{} writes", record.table())))
    }

    async fn fetch_by_key(
        &self,
        table: Table,
        key: &str,
    ) -> Result<Option<StoredRecord>, PortError> {
        self.inner.fetch_by_key(table, key).await
    }
}

/// Identifier service that hands out scripted numbers, then random ones
///
/// Repeating a number in the script simulates a collision.
#[derive(Default)]
pub struct SequenceIdentifierService {
    queue: Mutex<VecDeque<String>>,
}

impl SequenceIdentifierService {
    pub fn new<I, S>(numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: Mutex::new(numbers.into_iter().map(Into::into).collect()),
        }
    }
}

impl IdentifierService for SequenceIdentifierService {
    fn propose(&self, kind: DocumentKind, date: NaiveDate) -> String {
        let scripted = self
            .queue
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front());
        scripted.unwrap_or_else(|| RandomIdentifierService.propose(kind, date))
    }
}
