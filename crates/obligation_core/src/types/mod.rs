//! Core calendar types.
//!
//! This module provides:
//! - `time`: The [`Date`] type and UTC calendar helpers for period arithmetic
//! - `error`: Structured error types for date construction and parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`days_in_month`] from `time`
//! - [`DateError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::DateError;
pub use time::{days_in_month, Date};
