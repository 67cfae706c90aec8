use std::sync::Arc;

use regex::Regex;

use crate::constraint::{Constraint, ConstraintRegistry};
use crate::errors::TemplateError;

use super::parser;

/// A parameter token inside a route template segment
///
/// Parameter names use `Arc<str>` so that every successful match can hand
/// out the name with an O(1) refcount bump instead of copying the string
/// (names come from the static template, values are per-request data).
#[derive(Debug, Clone)]
pub struct ParameterPart {
    /// Parameter name as written between the braces
    pub name: Arc<str>,
    /// Constraint resolved at parse time, if the token carried one
    pub constraint: Option<Constraint>,
    /// Default value bound when a trailing segment is absent from the path
    pub default: Option<String>,
    /// Whether this is a `{*name}` catch-all consuming the path remainder
    pub catch_all: bool,
}

/// One literal run or parameter token within a segment
#[derive(Debug, Clone)]
pub enum SegmentPart {
    /// Literal text, matched case-insensitively
    Literal(String),
    /// A `{name[:constraint][=default]}` or `{*name}` token
    Parameter(ParameterPart),
}

/// A whole `/`-delimited template segment
///
/// Most segments are a single literal or a single parameter and bind
/// without any regex work. Mixed segments (`v{major}.{minor}`) carry a
/// matcher compiled once at parse time.
#[derive(Debug, Clone)]
pub struct Segment {
    parts: Vec<SegmentPart>,
    /// Compiled only for mixed segments; pure segments bind directly
    matcher: Option<Regex>,
}

impl Segment {
    pub(super) fn new(parts: Vec<SegmentPart>, matcher: Option<Regex>) -> Self {
        Self { parts, matcher }
    }

    /// The literal runs and parameter tokens of this segment, in order
    #[must_use]
    pub fn parts(&self) -> &[SegmentPart] {
        &self.parts
    }

    /// The literal text if this segment is a single literal run
    #[must_use]
    pub fn single_literal(&self) -> Option<&str> {
        match self.parts.as_slice() {
            [SegmentPart::Literal(text)] => Some(text),
            _ => None,
        }
    }

    /// The parameter if this segment is a single parameter token
    #[must_use]
    pub fn single_parameter(&self) -> Option<&ParameterPart> {
        match self.parts.as_slice() {
            [SegmentPart::Parameter(param)] => Some(param),
            _ => None,
        }
    }

    /// Whether this segment is a catch-all parameter
    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        self.single_parameter().map_or(false, |p| p.catch_all)
    }

    /// Whether this segment mixes literal text and parameters
    #[must_use]
    pub fn is_mixed(&self) -> bool {
        self.parts.len() > 1
    }

    /// Iterate the parameter tokens of this segment, in binding order
    pub fn parameters(&self) -> impl Iterator<Item = &ParameterPart> {
        self.parts.iter().filter_map(|part| match part {
            SegmentPart::Parameter(param) => Some(param),
            SegmentPart::Literal(_) => None,
        })
    }

    pub(crate) fn matcher(&self) -> Option<&Regex> {
        self.matcher.as_ref()
    }
}

/// A parsed route template
///
/// Immutable once parsed; matching and ordering only read it. Two
/// independently parsed instances of the same text are structurally
/// equivalent (they compare [`Equal`](std::cmp::Ordering::Equal) under
/// [`compare_templates`](crate::router::compare_templates)).
#[derive(Debug, Clone)]
pub struct RouteTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl RouteTemplate {
    pub(super) fn from_parts(raw: String, segments: Vec<Segment>) -> Self {
        Self { raw, segments }
    }

    /// Parse a route template, resolving constraints against `registry`
    ///
    /// Leading and trailing slashes are stripped; `/` parses to the empty
    /// root template. Fails with a [`TemplateError`] on any malformed
    /// template or unknown constraint — never at request time.
    pub fn parse(text: &str, registry: &ConstraintRegistry) -> Result<Self, TemplateError> {
        parser::parse(text, registry)
    }

    /// The template text as registered
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The parsed segments, in path order
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the final segment is a catch-all parameter
    #[must_use]
    pub fn has_catch_all(&self) -> bool {
        self.segments.last().map_or(false, Segment::is_catch_all)
    }

    /// Number of path segments a candidate path must supply
    ///
    /// Trailing segments that can bind without path text do not count: a
    /// catch-all accepts the empty remainder, and a trailing single
    /// defaulted parameter binds its default.
    pub(crate) fn required_segments(&self) -> usize {
        let optional_tail = self
            .segments
            .iter()
            .rev()
            .take_while(|segment| {
                segment.is_catch_all()
                    || segment
                        .single_parameter()
                        .map_or(false, |p| p.default.is_some())
            })
            .count();
        self.segments.len() - optional_tail
    }
}
