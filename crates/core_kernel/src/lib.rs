//! Core Kernel - Foundational types shared by the inference pipeline
//!
//! This crate provides the building blocks used by every engine and service:
//! - Typed identifiers and the document number service
//! - Lenient date parsing and calendar helpers
//! - Tagged store records and the collaborator ports

pub mod error;
pub mod identifiers;
pub mod ports;
pub mod records;
pub mod scoring;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{DocumentKind, IdentifierService, RandomIdentifierService, RecordId, RequestId};
pub use ports::{
    AdapterHealth, AllocatedNumber, DescriptionService, DomainPort, HealthCheckResult,
    HealthCheckable, ImageRef, PortError, RecordStore, RecordStoreExt,
};
pub use records::{
    ActivityRecord, ClaimRecord, Component, DecisionStatus, EscalationPriority, EscalationRecord,
    PolicyRecord, PolicyStatus, Policyholder, Record, StoredRecord, Table,
};
pub use scoring::RiskCategory;
pub use temporal::{days_between, is_weekend, parse_date};
