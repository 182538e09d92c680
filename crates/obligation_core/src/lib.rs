//! # obligation_core: Calendar Foundation for Filing Schedules
//!
//! ## Foundation Layer Role
//!
//! obligation_core is the bottom layer of the workspace, providing:
//! - Time types: [`Date`] and its UTC calendar helpers (`types::time`)
//! - Error types: [`DateError`] (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other obligation_* crates, with minimal
//! external dependencies:
//! - chrono: Calendar arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use obligation_core::types::Date;
//!
//! let anchor = Date::from_ymd(2024, 5, 17).unwrap();
//! assert_eq!(anchor.first_of_quarter(), Date::from_ymd(2024, 4, 1).unwrap());
//! assert_eq!(anchor.last_of_quarter(), Date::from_ymd(2024, 6, 30).unwrap());
//! assert_eq!(anchor.quarter(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for [`Date`]
//!
//! [`Date`]: types::Date
//! [`DateError`]: types::DateError

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
