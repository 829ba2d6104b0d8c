//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: setup and programming errors
//! - [`string`]: UTF-8 safe text helpers

pub mod error;
pub mod string;
