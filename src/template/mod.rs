//! # Template Module
//!
//! Route template parsing for OData-style path routing. A template is a
//! `/`-separated sequence of segments, each a mix of literal text and
//! parameter tokens:
//!
//! ```text
//! Employees                    literal segment
//! Employees/{id}               parameter segment
//! Employees/{id:int}           constrained parameter
//! Employees/{id=0}             defaulted parameter
//! v{version}/Employees         mixed literal/parameter segment
//! files/{*path}                catch-all (must end the template)
//! ```
//!
//! ## Architecture
//!
//! Parsing is a two-phase build step, mirroring how the route table itself
//! is built once and then only read:
//!
//! 1. **Parse**: the template text is split into segments and each segment
//!    into literal runs and parameter tokens. Constraint tokens are resolved
//!    against a [`ConstraintRegistry`](crate::constraint::ConstraintRegistry)
//!    immediately, so an unknown constraint fails registration rather than a
//!    request. Mixed segments compile a case-insensitive anchored regex here.
//! 2. **Match**: at request time the parsed [`RouteTemplate`] is read-only;
//!    binding an incoming segment touches no shared state.
//!
//! All malformed-template conditions are parse-time
//! [`TemplateError`](crate::errors::TemplateError)s: unbalanced braces,
//! empty parameter names, duplicated parameter names, adjacent parameters
//! with no separating literal, catch-alls anywhere but as the entire final
//! segment, and empty interior segments.

mod core;
mod parser;

pub use core::{ParameterPart, RouteTemplate, Segment, SegmentPart};
