//! Route table core - hot path for path matching.

use std::collections::HashMap;
use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::constraint::ConstraintRegistry;
use crate::errors::TemplateError;
use crate::template::{RouteTemplate, Segment};

use super::entry::RouteEntry;

/// Maximum number of bound path parameters before heap allocation.
/// Most route templates have ≤4 parameters (e.g., Employees/{id}/Orders/{orderId}).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the match hot path.
///
/// Parameter names are `Arc<str>` cloned from the parsed template
/// (an O(1) refcount bump); values are per-request `String`s cut from
/// the incoming path.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Result of successfully matching a path against the table
///
/// Borrows the matched entry's template and handler binding; the bound
/// parameter values are owned per-request data.
#[derive(Debug)]
pub struct RouteMatch<'t, H> {
    /// The handler binding of the winning entry, returned unchanged
    pub handler: &'t H,
    /// The winning entry's template
    pub template: &'t RouteTemplate,
    /// Parameter name → bound value, in binding order
    pub params: ParamVec,
}

impl<H> RouteMatch<'_, H> {
    /// Get a bound parameter by name
    ///
    /// Uses "last write wins" semantics if the same name was bound at
    /// several depths.
    #[inline]
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Convert the bound parameters to a map
    ///
    /// Note: this allocates - use [`RouteMatch::get_param`] in hot paths.
    #[must_use]
    pub fn params_map(&self) -> HashMap<String, String> {
        self.params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

/// What the builder does with a malformed template
///
/// A bad template is never silently accepted; the caller either aborts the
/// whole build or skips that entry (logged at `warn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildErrorPolicy {
    /// The first malformed template fails the build
    #[default]
    Abort,
    /// Malformed templates are logged and dropped; the build continues
    Skip,
}

/// Builder collecting route registrations for a [`RouteTable`]
///
/// Templates are parsed against the builder's constraint registry when
/// [`build`](RouteTableBuilder::build) runs; the finished table is
/// stable-sorted by [`RouteEntry::compare`] and immutable thereafter.
pub struct RouteTableBuilder<H> {
    registry: ConstraintRegistry,
    policy: BuildErrorPolicy,
    pending: Vec<(String, H, i32, i32)>,
}

impl<H> Default for RouteTableBuilder<H> {
    fn default() -> Self {
        Self {
            registry: ConstraintRegistry::default(),
            policy: BuildErrorPolicy::default(),
            pending: Vec::new(),
        }
    }
}

impl<H> RouteTableBuilder<H> {
    /// Create a builder with the default constraint registry and
    /// [`BuildErrorPolicy::Abort`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the constraint registry used to parse templates
    #[must_use]
    pub fn registry(mut self, registry: ConstraintRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set the malformed-template policy
    #[must_use]
    pub fn on_error(mut self, policy: BuildErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register a route with default explicit orders
    #[must_use]
    pub fn route(self, template: impl Into<String>, handler: H) -> Self {
        self.route_with_orders(template, handler, 0, 0)
    }

    /// Register a route with explicit precedence overrides
    ///
    /// Lower `prefix_order`/`order` values sort first; structural
    /// specificity only breaks ties between equal explicit orders.
    #[must_use]
    pub fn route_with_orders(
        mut self,
        template: impl Into<String>,
        handler: H,
        prefix_order: i32,
        order: i32,
    ) -> Self {
        self.pending
            .push((template.into(), handler, prefix_order, order));
        self
    }

    /// Parse every registration and build the sorted table
    pub fn build(self) -> Result<RouteTable<H>, TemplateError> {
        let mut entries = Vec::with_capacity(self.pending.len());
        for (text, handler, prefix_order, order) in self.pending {
            match RouteTemplate::parse(&text, &self.registry) {
                Ok(template) => {
                    entries.push(RouteEntry::with_orders(
                        template,
                        handler,
                        prefix_order,
                        order,
                    ));
                }
                Err(err) => match self.policy {
                    BuildErrorPolicy::Abort => return Err(err),
                    BuildErrorPolicy::Skip => {
                        warn!(
                            template = %text,
                            error = %err,
                            "Skipping malformed route template"
                        );
                    }
                },
            }
        }

        entries.sort_by(RouteEntry::compare);

        let routes_summary: Vec<&str> = entries
            .iter()
            .take(10)
            .map(|entry| entry.template().raw())
            .collect();
        info!(
            route_count = entries.len(),
            routes_summary = ?routes_summary,
            "Route table built"
        );

        Ok(RouteTable { entries })
    }
}

/// An immutable, specificity-sorted route table
///
/// Built once, synchronously, then shared read-only: matching never
/// mutates the table or takes a lock, so it is safe for unlimited
/// concurrent invocation. To change routes, build a new table and swap it
/// in (see [`SharedRouteTable`](super::SharedRouteTable)); never mutate a
/// table concurrent readers may be traversing.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    /// Entries in match order (stable-sorted by [`RouteEntry::compare`])
    entries: Vec<RouteEntry<H>>,
}

impl<H> RouteTable<H> {
    /// Start building a table
    #[must_use]
    pub fn builder() -> RouteTableBuilder<H> {
        RouteTableBuilder::new()
    }

    /// The entries in match order
    #[must_use]
    pub fn entries(&self) -> &[RouteEntry<H>] {
        &self.entries
    }

    /// Number of routes in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no routes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Match an incoming path against the table
    ///
    /// Candidates are tried in table order (most specific first). A
    /// candidate whose literal text, segment matcher, or constraint rejects
    /// the path is skipped and the next is tried — a constraint rejection
    /// is always recovered, never surfaced. Returns the first candidate
    /// that fully binds, or `None` once every candidate is exhausted.
    ///
    /// # Example
    ///
    /// ```
    /// use odata_router::router::RouteTable;
    ///
    /// let table = RouteTable::builder()
    ///     .route("Employees/{id:int}", "by_key")
    ///     .route("Employees/{id}", "by_name")
    ///     .build()
    ///     .unwrap();
    ///
    /// let m = table.match_path("Employees/5").unwrap();
    /// assert_eq!(*m.handler, "by_key");
    /// assert_eq!(m.get_param("id"), Some("5"));
    /// ```
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_, H>> {
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        debug!(path = %path, segment_count = segments.len(), "Route match attempt");

        for entry in &self.entries {
            if !counts_compatible(entry.template(), segments.len()) {
                continue;
            }
            if let Some(params) = bind(entry.template(), &segments) {
                debug!(
                    path = %path,
                    template = %entry.template().raw(),
                    param_count = params.len(),
                    "Route matched"
                );
                return Some(RouteMatch {
                    handler: entry.handler(),
                    template: entry.template(),
                    params,
                });
            }
        }

        warn!(path = %path, "No route matched");
        None
    }
}

/// Segment-count compatibility prefilter
///
/// Equal counts are required, except that a trailing catch-all accepts any
/// longer path (and the empty remainder), and trailing defaulted parameters
/// may be absent.
fn counts_compatible(template: &RouteTemplate, path_segments: usize) -> bool {
    path_segments >= template.required_segments()
        && (template.has_catch_all() || path_segments <= template.segments().len())
}

/// Attempt segment-wise binding of `segments` against `template`
///
/// Returns the bound parameters on success, `None` on any rejection
/// (literal mismatch, matcher failure, or constraint rejection).
fn bind(template: &RouteTemplate, segments: &[&str]) -> Option<ParamVec> {
    let mut params = ParamVec::new();

    for (index, segment) in template.segments().iter().enumerate() {
        if segment.is_catch_all() {
            let param = segment.single_parameter()?;
            let remainder = segments.get(index..).unwrap_or(&[]).join("/");
            let value = if remainder.is_empty() {
                param.default.clone().unwrap_or(remainder)
            } else {
                remainder
            };
            if let Some(constraint) = &param.constraint {
                if !constraint.matches(&value) {
                    return None;
                }
            }
            params.push((param.name.clone(), value));
            return Some(params);
        }

        let Some(&text) = segments.get(index) else {
            // Path exhausted: a trailing defaulted parameter binds its default.
            let param = segment.single_parameter()?;
            let value = param.default.clone()?;
            if let Some(constraint) = &param.constraint {
                if !constraint.matches(&value) {
                    return None;
                }
            }
            params.push((param.name.clone(), value));
            continue;
        };

        if !bind_segment(segment, text, &mut params) {
            return None;
        }
    }

    // Leftover path segments with no catch-all to consume them.
    if segments.len() > template.segments().len() {
        return None;
    }
    Some(params)
}

/// Bind one incoming path segment against one template segment
fn bind_segment(segment: &Segment, text: &str, params: &mut ParamVec) -> bool {
    if let Some(literal) = segment.single_literal() {
        return literal.eq_ignore_ascii_case(text);
    }

    if let Some(param) = segment.single_parameter() {
        if let Some(constraint) = &param.constraint {
            if !constraint.matches(text) {
                return false;
            }
        }
        params.push((param.name.clone(), text.to_string()));
        return true;
    }

    // Mixed segment: bind through the compiled matcher, captures in
    // parameter order.
    let Some(matcher) = segment.matcher() else {
        return false;
    };
    let Some(captures) = matcher.captures(text) else {
        return false;
    };
    for (group, param) in segment.parameters().enumerate() {
        let Some(value) = captures.get(group + 1) else {
            return false;
        };
        if let Some(constraint) = &param.constraint {
            if !constraint.matches(value.as_str()) {
                return false;
            }
        }
        params.push((param.name.clone(), value.as_str().to_string()));
    }
    true
}
