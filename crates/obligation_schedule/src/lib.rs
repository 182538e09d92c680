//! # obligation_schedule: Recurring Filing Schedule Generator
//!
//! ## Kernel Layer Role
//!
//! Given an obligation's filing frequency and declarative due rule, and a
//! query window, this crate produces the concrete `(period, due date)`
//! occurrences falling inside the window:
//! - [`DueRule`] / [`CompiledDueRule`]: the due-rule interpreter
//! - [`generate`] / [`generate_all`]: the occurrence generator
//! - [`ObligationDescriptor`] / [`ObligationRecord`]: typed and stored obligations
//! - [`ScheduleOccurrence`]: one generated filing
//!
//! Everything here is pure: no I/O, no clock, no shared state. Calls are safe
//! from any number of threads and return the same output for the same input.
//!
//! ## Usage Examples
//!
//! ```rust
//! use obligation_core::types::Date;
//! use obligation_schedule::{generate, DueRule, Frequency, ObligationDescriptor, RelativeTo};
//!
//! let payroll = ObligationDescriptor::new(
//!     "org-1/payroll",
//!     Frequency::Monthly,
//!     DueRule::FixedDayRelative { day: 15, relative_to: RelativeTo::CalendarMonthEnd },
//! );
//!
//! let occurrences = generate(
//!     &payroll,
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     Date::from_ymd(2024, 3, 31).unwrap(),
//! )
//! .unwrap();
//!
//! // The March period is due on 2024-04-15, past the window end.
//! assert_eq!(occurrences.len(), 2);
//! assert_eq!(occurrences[0].period(), "2024-01");
//! assert_eq!(occurrences[0].due_date(), Date::from_ymd(2024, 2, 15).unwrap());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod due_rule;
mod error;
mod frequency;
mod generator;
mod obligation;
mod occurrence;
mod window;

pub use due_rule::{CompiledDueRule, DueRule, RelativeTo};
pub use error::ScheduleError;
pub use frequency::Frequency;
pub use generator::{generate, generate_all, period_label, PeriodAnchors};
pub use obligation::{ObligationDescriptor, ObligationRecord};
pub use occurrence::{OccurrenceStatus, ScheduleOccurrence};
pub use window::{ScheduleWindow, DEFAULT_WINDOW_DAYS};
