//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: chat models the drafter can talk to
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod string;
