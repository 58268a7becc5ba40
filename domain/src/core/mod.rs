//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`string`] — case-insensitive text helpers used by detection

pub mod error;
pub mod string;
