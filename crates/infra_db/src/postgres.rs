//! PostgreSQL record store
//!
//! All tables share one append-only `records` relation. Each row carries the
//! logical table name, the record's lookup key and the tagged record as JSONB:
//!
//! ```text
//! records(record_id uuid pk, table_name text, record_key text,
//!         payload jsonb, stored_at timestamptz)
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError, Record, RecordId,
    RecordStore, StoredRecord, Table,
};

use crate::error::DatabaseError;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS records (
        record_id  UUID PRIMARY KEY,
        table_name TEXT NOT NULL,
        record_key TEXT NOT NULL,
        payload    JSONB NOT NULL,
        stored_at  TIMESTAMPTZ NOT NULL
    )
"#;

const CREATE_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS records_lookup_idx
        ON records (table_name, record_key, stored_at DESC)
"#;

#[derive(sqlx::FromRow)]
struct RecordRow {
    record_id: Uuid,
    payload: Json<Record>,
    stored_at: DateTime<Utc>,
}

impl From<RecordRow> for StoredRecord {
    fn from(row: RecordRow) -> Self {
        StoredRecord {
            id: RecordId::from(row.record_id),
            stored_at: row.stored_at,
            record: row.payload.0,
        }
    }
}

/// PostgreSQL-backed implementation of [`RecordStore`]
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `records` table and its lookup index if missing
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        for statement in [CREATE_TABLE, CREATE_INDEX] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::SchemaFailed(e.to_string()))?;
        }
        info!("Record store schema ready");
        Ok(())
    }

    async fn insert(&self, stored: &StoredRecord) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO records (record_id, table_name, record_key, payload, stored_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(*stored.id.as_uuid())
        .bind(stored.record.table().as_str())
        .bind(stored.record.key())
        .bind(Json(&stored.record))
        .bind(stored.stored_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn latest(&self, table: Table, key: &str) -> Result<Option<RecordRow>, DatabaseError> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT record_id, payload, stored_at
            FROM records
            WHERE table_name = $1 AND record_key = $2
            ORDER BY stored_at DESC, record_id DESC
            LIMIT 1
            "#,
        )
        .bind(table.as_str())
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

impl DomainPort for PgRecordStore {}

#[async_trait]
impl HealthCheckable for PgRecordStore {
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();
        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;
        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        let (status, message) = match result {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
        };
        HealthCheckResult {
            adapter_id: "postgres-record-store".to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    #[instrument(skip(self, record), fields(table = %record.table()))]
    async fn store(&self, record: Record) -> Result<StoredRecord, PortError> {
        let stored = StoredRecord::new(record);
        self.insert(&stored).await?;
        debug!(record_id = %stored.id, "Record stored");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn fetch_by_key(
        &self,
        table: Table,
        key: &str,
    ) -> Result<Option<StoredRecord>, PortError> {
        Ok(self.latest(table, key).await?.map(StoredRecord::from))
    }
}
