use std::cmp::Ordering;

use crate::template::{RouteTemplate, Segment};

/// Per-segment specificity rank, most specific first
///
/// Declaration order is the sort order: a literal always beats a mixed
/// segment, a mixed segment beats any pure parameter, a constrained
/// parameter beats an unconstrained one, and catch-alls come last
/// (they match anything, so they are the least preferred fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SegmentRank {
    Literal,
    Mixed,
    ConstrainedParameter,
    Parameter,
    ConstrainedCatchAll,
    CatchAll,
}

fn segment_rank(segment: &Segment) -> SegmentRank {
    if segment.is_mixed() {
        return SegmentRank::Mixed;
    }
    match segment.single_parameter() {
        None => SegmentRank::Literal,
        Some(param) => match (param.catch_all, param.constraint.is_some()) {
            (true, true) => SegmentRank::ConstrainedCatchAll,
            (true, false) => SegmentRank::CatchAll,
            (false, true) => SegmentRank::ConstrainedParameter,
            // A defaulted parameter ranks like a plain parameter.
            (false, false) => SegmentRank::Parameter,
        },
    }
}

/// Compare two templates by structural specificity
///
/// A pure function over the parsed representations: walks both segment
/// lists in lockstep, comparing per-position [`SegmentRank`]s. Literal text
/// never decides the order — two distinct literals rank equal and the walk
/// continues. When one template exhausts first, the shorter (fewer wildcard
/// opportunities) sorts first, whether or not the longer one's tail is a
/// catch-all. Templates that compare [`Ordering::Equal`] are equivalent and
/// keep their insertion order under the table's stable sort.
///
/// The relation is a strict total preorder: antisymmetric up to sign and
/// transitive, so sorting yields a deterministic match order regardless of
/// insertion sequence.
#[must_use]
pub fn compare_templates(a: &RouteTemplate, b: &RouteTemplate) -> Ordering {
    for (left, right) in a.segments().iter().zip(b.segments()) {
        let ranks = segment_rank(left).cmp(&segment_rank(right));
        if ranks != Ordering::Equal {
            return ranks;
        }
    }
    a.segments().len().cmp(&b.segments().len())
}

/// One registered route: a parsed template, explicit ordering keys, and an
/// opaque handler binding
///
/// `prefix_order` and `order` are caller-assigned precedence overrides
/// (default 0, lower sorts first); the structural comparison only breaks
/// ties when both are equal. Entries are created at table-build time and
/// immutable thereafter. The handler binding `H` is stored and returned
/// unchanged — this layer never inspects it.
#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
    template: RouteTemplate,
    prefix_order: i32,
    order: i32,
    handler: H,
}

impl<H> RouteEntry<H> {
    /// Create an entry with default explicit orders (both 0)
    pub fn new(template: RouteTemplate, handler: H) -> Self {
        Self::with_orders(template, handler, 0, 0)
    }

    /// Create an entry with explicit precedence overrides
    pub fn with_orders(template: RouteTemplate, handler: H, prefix_order: i32, order: i32) -> Self {
        Self {
            template,
            prefix_order,
            order,
            handler,
        }
    }

    /// The parsed template
    #[must_use]
    pub fn template(&self) -> &RouteTemplate {
        &self.template
    }

    /// The opaque handler binding
    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Caller-assigned prefix order (lower sorts first)
    #[must_use]
    pub fn prefix_order(&self) -> i32 {
        self.prefix_order
    }

    /// Caller-assigned order (lower sorts first)
    #[must_use]
    pub fn order(&self) -> i32 {
        self.order
    }

    /// Rank this entry against another, most specific first
    ///
    /// Applied in order, short-circuiting on the first decision:
    /// `prefix_order`, then `order`, then structural specificity via
    /// [`compare_templates`]. Not an `Ord` impl on purpose: two entries
    /// with different handlers can be order-equivalent, and `Ord` would
    /// declare them equal outright. Tables sort with
    /// `sort_by(RouteEntry::compare)`, which is stable, so equivalent
    /// entries keep their insertion order.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.prefix_order
            .cmp(&other.prefix_order)
            .then_with(|| self.order.cmp(&other.order))
            .then_with(|| compare_templates(&self.template, &other.template))
    }
}
