//! Test Utilities Crate
//!
//! Shared test infrastructure for the pipeline test suites.
//!
//! # Modules
//!
//! - `fixtures`: Narratives, policies and dates with known scores
//! - `stubs`: Collaborator doubles (description services, failing stores,
//!   scripted identifier service)
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod generators;
pub mod stubs;

pub use fixtures::*;
pub use generators::*;
pub use stubs::*;
