//! Ports to the pipeline's external collaborators
//!
//! The scoring engines are pure; everything they need from outside the process
//! goes through the traits defined here:
//!
//! ```text
//!   engines / workflow services
//!              │
//!              ▼
//!   RecordStore        DescriptionService
//!     │      │                 │
//!  memory  postgres     (image model client)
//! ```
//!
//! Stores and description services are injected into each workflow service at
//! construction. There is no process-wide registry.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

use crate::identifiers::{DocumentKind, IdentifierService, RecordId};
use crate::records::{ActivityRecord, ClaimRecord, PolicyRecord, Record, StoredRecord, Table};

/// Attempts made to find an unused document number
pub const MAX_NUMBER_ATTEMPTS: usize = 5;

/// Error type for port operations
///
/// Every adapter reports failures with this type so that callers can decide
/// between degrading and failing without knowing the backing system.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout { operation: String, duration_ms: u64 },

    /// The external system is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable { service: String },

    /// A payload could not be encoded or decoded
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    pub fn unavailable(service: impl Into<String>) -> Self {
        PortError::ServiceUnavailable {
            service: service.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. }
                | PortError::Timeout { .. }
                | PortError::ServiceUnavailable { .. }
        )
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

impl From<serde_json::Error> for PortError {
    fn from(err: serde_json::Error) -> Self {
        PortError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Marker trait for all domain ports
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    Healthy,
    Degraded,
    Unhealthy,
    Unknown,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub adapter_id: String,
    pub status: AdapterHealth,
    pub latency_ms: u64,
    pub message: Option<String>,
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

/// Trait for adapters that support health checks
#[async_trait]
pub trait HealthCheckable: Send + Sync {
    async fn health_check(&self) -> HealthCheckResult;
}

/// Append-only record store
///
/// `store` never overwrites: storing a second record under an existing key
/// appends it, and `fetch_by_key` returns the most recent one.
#[async_trait]
pub trait RecordStore: DomainPort + HealthCheckable {
    /// Appends a record and returns it with its assigned identifier
    async fn store(&self, record: Record) -> Result<StoredRecord, PortError>;

    /// Returns the latest record stored under `key` in `table`
    async fn fetch_by_key(&self, table: Table, key: &str)
        -> Result<Option<StoredRecord>, PortError>;
}

/// A document number together with whether the store confirmed it unused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatedNumber {
    pub number: String,
    /// False when the store could not be consulted
    pub verified: bool,
}

/// Typed helpers over any [`RecordStore`]
#[async_trait]
pub trait RecordStoreExt: RecordStore {
    /// Fetches a policy by number
    async fn fetch_policy(&self, policy_number: &str) -> Result<Option<PolicyRecord>, PortError> {
        match self.fetch_by_key(Table::Policies, policy_number).await? {
            None => Ok(None),
            Some(StoredRecord {
                record: Record::Policy(policy),
                ..
            }) => Ok(Some(policy)),
            Some(other) => Err(PortError::internal(format!(
                "policies table returned a {} record",
                other.record.table()
            ))),
        }
    }

    /// Fetches a claim by number
    async fn fetch_claim(&self, claim_number: &str) -> Result<Option<ClaimRecord>, PortError> {
        match self.fetch_by_key(Table::Claims, claim_number).await? {
            None => Ok(None),
            Some(StoredRecord {
                record: Record::Claim(claim),
                ..
            }) => Ok(Some(claim)),
            Some(other) => Err(PortError::internal(format!(
                "claims table returned a {} record",
                other.record.table()
            ))),
        }
    }

    /// Appends an activity entry
    ///
    /// Failures are logged and swallowed; `None` means the entry was lost.
    async fn log_activity(&self, activity: ActivityRecord) -> Option<RecordId> {
        let action = activity.action.clone();
        match self.store(Record::Activity(activity)).await {
            Ok(stored) => {
                debug!(record_id = %stored.id, action = %action, "Activity logged");
                Some(stored.id)
            }
            Err(e) => {
                warn!(error = %e, action = %action, "Failed to log activity");
                None
            }
        }
    }

    /// Draws document numbers from `ids` until one is unused in the store
    ///
    /// Gives up with `Conflict` after [`MAX_NUMBER_ATTEMPTS`] collisions. When
    /// the store cannot be consulted the proposed number is returned unverified.
    async fn allocate_number(
        &self,
        ids: &dyn IdentifierService,
        kind: DocumentKind,
        date: NaiveDate,
    ) -> Result<AllocatedNumber, PortError> {
        for attempt in 1..=MAX_NUMBER_ATTEMPTS {
            let number = ids.propose(kind, date);
            match self.fetch_by_key(kind.table(), &number).await {
                Ok(None) => {
                    return Ok(AllocatedNumber {
                        number,
                        verified: true,
                    })
                }
                Ok(Some(_)) => {
                    debug!(number = %number, attempt, "Document number already in use");
                }
                Err(e) => {
                    warn!(error = %e, number = %number, "Could not verify document number");
                    return Ok(AllocatedNumber {
                        number,
                        verified: false,
                    });
                }
            }
        }
        Err(PortError::conflict(format!(
            "no unused {} number after {} attempts",
            kind.prefix(),
            MAX_NUMBER_ATTEMPTS
        )))
    }
}

impl<T: RecordStore + ?Sized> RecordStoreExt for T {}

/// Opaque reference to an image held by the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns an image into narrative text
#[async_trait]
pub trait DescriptionService: DomainPort {
    async fn describe(&self, image: &ImageRef) -> Result<String, PortError>;
}
