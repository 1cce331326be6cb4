//! Customer domain errors

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur in the customer workflows
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("Query text is required")]
    EmptyQuery,

    #[error("Record store error: {0}")]
    Store(#[from] PortError),
}
