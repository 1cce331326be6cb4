//! Request/response data transfer objects
//!
//! Request bodies are validated with `validator` before they reach a service.
//! Responses reuse the domain result types, which already serialize.

pub mod claims;
pub mod customer;
pub mod documents;
pub mod underwriting;
