//! # Route Set Module
//!
//! File-backed route registration. A route set file lists templates and
//! the handler names they dispatch to, with optional explicit precedence
//! overrides:
//!
//! ```yaml
//! routes:
//!   - template: Employees/{id:int}
//!     handler: employee_by_key
//!   - template: Employees/{id}
//!     handler: employee_by_name
//!   - template: "{*rest}"
//!     handler: fallback
//!     order: 100
//! ```
//!
//! [`load_route_set`] reads YAML (`.yaml`/`.yml`) or JSON, chosen by file
//! extension; [`build_table`] feeds the definitions through the table
//! builder. Handler bindings loaded from files are handler *names* — the
//! dispatch layer that maps names to callables sits above this crate.

mod load;

pub use load::{build_table, load_route_set, RouteDef};
