//! Underwriting domain errors

use core_kernel::{CoreError, PortError};
use thiserror::Error;

/// Errors that can occur in the underwriting workflow
#[derive(Debug, Error)]
pub enum UnderwritingError {
    #[error("Either a narrative or an image is required")]
    MissingNarrative,

    #[error("Nothing to insure: recommended coverage is zero")]
    NothingToInsure,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Record store error: {0}")]
    Store(#[from] PortError),
}
