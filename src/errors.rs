use std::fmt;

/// Route template parse error
///
/// Returned by [`RouteTemplate::parse`](crate::template::RouteTemplate::parse)
/// and by the table builder when a registered template is malformed or names
/// an unknown constraint. Parse errors are permanent for a given template
/// string; they are never retried and never deferred to request time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{` without a matching `}` (or a stray `}`) inside a segment
    UnbalancedBraces {
        /// The segment containing the unterminated parameter token
        segment: String,
    },
    /// A parameter token with no name (`{}` or `{:int}` or `{*}`)
    EmptyParameterName {
        /// The segment containing the empty token
        segment: String,
    },
    /// An empty interior segment (`a//b`)
    ///
    /// Leading and trailing slashes are tolerated and stripped; an empty
    /// segment between two others has no matchable meaning.
    EmptySegment,
    /// The same parameter name appears more than once in one template
    DuplicateParameter {
        /// The repeated parameter name
        name: String,
    },
    /// A catch-all parameter (`{*name}`) in a non-final segment
    ///
    /// A catch-all consumes the remainder of the path, so nothing may
    /// follow it.
    CatchAllNotLast {
        /// The offending catch-all parameter name
        name: String,
    },
    /// A catch-all parameter mixed with other text in its segment (`a{*x}`)
    ///
    /// A catch-all must be the entire final segment.
    CatchAllNotAlone {
        /// The offending catch-all parameter name
        name: String,
    },
    /// Two parameters with no separating literal (`{x}{y}`)
    ///
    /// There is no unambiguous way to split the incoming text between them.
    ConsecutiveParameters {
        /// The segment containing the adjacent parameters
        segment: String,
    },
    /// A constraint name the registry does not know
    UnknownConstraint {
        /// The unresolved constraint name
        name: String,
    },
    /// A constraint whose argument list is missing, malformed, or out of range
    InvalidConstraintArgument {
        /// The constraint name
        name: String,
        /// The argument text as written in the template
        argument: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnbalancedBraces { segment } => {
                write!(
                    f,
                    "route template error: unbalanced braces in segment '{}'. \
                    Every '{{' must be closed by a matching '}}'.",
                    segment
                )
            }
            TemplateError::EmptyParameterName { segment } => {
                write!(
                    f,
                    "route template error: empty parameter name in segment '{}'. \
                    Expected '{{name}}', '{{name:constraint}}' or '{{*name}}'.",
                    segment
                )
            }
            TemplateError::EmptySegment => {
                write!(
                    f,
                    "route template error: empty path segment. \
                    Interior '//' sequences are not allowed."
                )
            }
            TemplateError::DuplicateParameter { name } => {
                write!(
                    f,
                    "route template error: parameter '{}' appears more than once. \
                    Parameter names must be unique within a template.",
                    name
                )
            }
            TemplateError::CatchAllNotLast { name } => {
                write!(
                    f,
                    "route template error: catch-all parameter '{{*{}}}' must be \
                    the last segment of the template.",
                    name
                )
            }
            TemplateError::CatchAllNotAlone { name } => {
                write!(
                    f,
                    "route template error: catch-all parameter '{{*{}}}' cannot be \
                    combined with other text in its segment.",
                    name
                )
            }
            TemplateError::ConsecutiveParameters { segment } => {
                write!(
                    f,
                    "route template error: segment '{}' places two parameters \
                    side by side. Separate them with literal text.",
                    segment
                )
            }
            TemplateError::UnknownConstraint { name } => {
                write!(
                    f,
                    "route template error: unknown constraint '{}'. \
                    Register it before parsing or use a built-in constraint.",
                    name
                )
            }
            TemplateError::InvalidConstraintArgument { name, argument } => {
                write!(
                    f,
                    "route template error: invalid argument '{}' for constraint '{}'.",
                    argument, name
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}
