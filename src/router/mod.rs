//! # Router Module
//!
//! The route table and its specificity ordering: given an incoming path,
//! deterministically select the single best-matching route template among
//! many overlapping, parameterized candidates.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Building an immutable, sorted routing table from route registrations
//! - Ranking route entries by explicit order and structural specificity
//! - Matching incoming paths to the most specific binding candidate
//! - Extracting bound path parameters for downstream dispatch
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Build**: templates are parsed (constraints resolved, segment
//!    matchers compiled) and the entries are stable-sorted once with
//!    [`RouteEntry::compare`] — explicit `prefix_order`/`order` first, then
//!    per-segment specificity (literal > mixed > constrained parameter >
//!    parameter > catch-all). Equivalent entries keep insertion order.
//!
//! 2. **Match**: the incoming path is split into segments and candidates
//!    are tried in table order. Literals compare case-insensitively,
//!    parameters bind their segment text subject to their constraint, and
//!    a trailing catch-all binds the joined remainder. A rejected
//!    candidate (wrong literal, failed constraint) just falls through to
//!    the next; only exhausting the table yields no match.
//!
//! ## Example
//!
//! ```
//! use odata_router::router::RouteTable;
//!
//! let table = RouteTable::builder()
//!     .route("Employees", "list_employees")
//!     .route("Employees/{id:int}", "employee_by_key")
//!     .route("Employees/{id}", "employee_by_name")
//!     .route("files/{*path}", "serve_file")
//!     .build()
//!     .expect("valid templates");
//!
//! // `{id:int}` outranks `{id}`; `abc` fails `int` and falls through.
//! assert_eq!(*table.match_path("Employees/5").unwrap().handler, "employee_by_key");
//! assert_eq!(*table.match_path("Employees/abc").unwrap().handler, "employee_by_name");
//!
//! let m = table.match_path("files/a/b/c").unwrap();
//! assert_eq!(m.get_param("path"), Some("a/b/c"));
//! ```
//!
//! ## Concurrency
//!
//! Tables are built once, synchronously, and matching is a pure read —
//! no locks, no mutation, no I/O. Route changes go through
//! [`SharedRouteTable`]: build a new table, swap it in atomically.

mod core;
mod entry;
mod shared;
#[cfg(test)]
mod tests;

pub use core::{
    BuildErrorPolicy, ParamVec, RouteMatch, RouteTable, RouteTableBuilder, MAX_INLINE_PARAMS,
};
pub use entry::{compare_templates, RouteEntry};
pub use shared::SharedRouteTable;
