//! Claims domain errors

use core_kernel::{CoreError, PortError};
use thiserror::Error;

/// Errors that can occur in the claims workflow
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Policy not found: {0}")]
    PolicyNotFound(String),

    #[error("Policy number is required")]
    MissingPolicyNumber,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Record store error: {0}")]
    Store(#[from] PortError),
}
