//! # Constraint Module
//!
//! Named value constraints for route template parameters. A template such as
//! `Employees/{id:int}` only matches when the text bound to `id` satisfies
//! the `int` constraint; a candidate whose constraint rejects the value is
//! skipped and matching falls through to the next entry in the table.
//!
//! ## Overview
//!
//! Constraints are pure, stateless predicates over candidate segment text.
//! They are resolved **once**, at template parse time, through a
//! [`ConstraintRegistry`]: an unknown constraint name is a registration-time
//! error ([`TemplateError::UnknownConstraint`](crate::TemplateError)), never
//! a request-time surprise.
//!
//! ## Built-in constraints
//!
//! | Token | Accepts |
//! |-------|---------|
//! | `int` | a 32-bit signed integer |
//! | `long` | a 64-bit signed integer |
//! | `bool` | `true` or `false` (case-insensitive) |
//! | `guid` | a hyphenated GUID (`8-4-4-4-12` hex digits) |
//! | `alpha` | one or more ASCII letters |
//! | `length(n)` / `length(min,max)` | exact or bounded character count |
//! | `maxlength(n)` | at most `n` characters |
//! | `minlength(n)` | at least `n` characters |
//! | `min(n)` / `max(n)` / `range(min,max)` | integer value bounds |
//! | `regex(pattern)` | anchored regular expression match |
//!
//! ## Example
//!
//! ```
//! use odata_router::constraint::ConstraintRegistry;
//!
//! let registry = ConstraintRegistry::default();
//! let constraint = registry.resolve("maxlength(3)").unwrap();
//! assert!(constraint.matches("abc"));
//! assert!(!constraint.matches("abcd"));
//! ```

mod core;
mod registry;

pub use core::Constraint;
pub use registry::ConstraintRegistry;
