//! Request handlers for each domain

pub mod claims;
pub mod customer;
pub mod documents;
pub mod health;
pub mod underwriting;
