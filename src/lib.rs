//! # odata-router
//!
//! **odata-router** is a specificity-ordered route template matcher for
//! OData-style HTTP services: parse overlapping, parameterized route
//! templates into an immutable table, then deterministically select the
//! single best-matching template for each incoming path.
//!
//! ## Overview
//!
//! OData route sets are full of overlapping templates — `Employees`,
//! `Employees/{id:int}`, `Employees/{id}`, `files/{*path}` — and the
//! framework must always try the exact literal before any parameterized
//! alternative, a constrained parameter before an unconstrained one, and a
//! catch-all dead last. This crate owns exactly that problem: route
//! template parsing, constraint matching, entry ordering, and table
//! matching. Payload (de)serialization, the EDM type system, and HTTP
//! message plumbing are the host framework's concern; the handler binding
//! each route carries is opaque here and returned unchanged.
//!
//! ## Architecture
//!
//! The library is organized into four modules:
//!
//! - **[`template`]** - route template parsing (`{name[:constraint][=default]}`
//!   tokens, `{*name}` catch-alls, mixed literal/parameter segments)
//! - **[`constraint`]** - named value constraints (`int`, `alpha`,
//!   `maxlength(10)`, ...) resolved once at parse time through a registry
//! - **[`router`]** - the route entry ordering algorithm, the sorted
//!   immutable [`RouteTable`](router::RouteTable), and the atomic-swap
//!   [`SharedRouteTable`](router::SharedRouteTable)
//! - **[`routeset`]** - loading route definitions from YAML/JSON files
//!
//! ### Matching Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant App as Host framework
//!     participant Builder as RouteTableBuilder
//!     participant Registry as ConstraintRegistry
//!     participant Table as RouteTable (sorted, immutable)
//!
//!     App->>Builder: route("Employees/{id:int}", handler)
//!     Builder->>Registry: resolve("int")
//!     Registry-->>Builder: Constraint::Int
//!     App->>Builder: build()
//!     Builder->>Builder: stable sort by RouteEntry::compare
//!     Builder-->>App: RouteTable
//!
//!     App->>Table: match_path("Employees/5")
//!     Table->>Table: try candidates in specificity order
//!     Table-->>App: RouteMatch { handler, id -> "5" }
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use odata_router::router::RouteTable;
//!
//! let table = RouteTable::builder()
//!     .route("Employees", "list_employees")
//!     .route("Employees/{id:int}", "employee_by_key")
//!     .route("Employees/{id}", "employee_by_name")
//!     .build()
//!     .expect("valid route templates");
//!
//! let m = table.match_path("Employees/5").expect("a match");
//! assert_eq!(*m.handler, "employee_by_key");
//! assert_eq!(m.get_param("id"), Some("5"));
//!
//! // "abc" fails the int constraint; matching falls through to {id}.
//! let m = table.match_path("Employees/abc").expect("a match");
//! assert_eq!(*m.handler, "employee_by_name");
//! ```
//!
//! ## Ordering Rules
//!
//! Entries sort by `prefix_order`, then `order`, then structural
//! specificity, applied per path segment from the left:
//!
//! 1. literal text
//! 2. mixed literal/parameter segment (`v{version}`)
//! 3. constrained parameter (`{id:int}`)
//! 4. plain or defaulted parameter (`{id}`, `{id=0}`)
//! 5. constrained catch-all (`{*path:maxlength(80)}`)
//! 6. catch-all (`{*path}`)
//!
//! Literal *text* carries no priority — `abc` and `def` rank equal — and
//! templates that rank equal everywhere keep their registration order.
//! The explicit order fields exist for the caller to pin precedence
//! between structurally incomparable templates.
//!
//! ## Concurrency
//!
//! A table is built once, synchronously, and never mutated: matching is a
//! bounded, CPU-only read with no locking, safe for arbitrarily many
//! concurrent requests. For live route changes, build a fresh table and
//! publish it through [`SharedRouteTable`](router::SharedRouteTable) —
//! readers keep their snapshot, new requests see the new table.

pub mod constraint;
pub mod errors;
pub mod router;
pub mod routeset;
pub mod template;

pub use constraint::{Constraint, ConstraintRegistry};
pub use errors::TemplateError;
pub use router::{
    compare_templates, BuildErrorPolicy, ParamVec, RouteEntry, RouteMatch, RouteTable,
    RouteTableBuilder, SharedRouteTable, MAX_INLINE_PARAMS,
};
pub use routeset::{build_table, load_route_set, RouteDef};
pub use template::{ParameterPart, RouteTemplate, Segment, SegmentPart};
