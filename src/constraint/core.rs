use once_cell::sync::Lazy;
use regex::Regex;

/// Hyphenated GUID shape: 8-4-4-4-12 hex digits.
static GUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .expect("guid pattern is a valid regex")
});

/// A parameter value constraint
///
/// Constraints are pure predicates: [`Constraint::matches`] reads the
/// candidate text and returns whether it is acceptable, with no side
/// effects and no retained state. All parsing-time work (number parsing of
/// arguments, regex compilation) happens when the constraint is built by
/// the [`ConstraintRegistry`](super::ConstraintRegistry), never per request.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// A 32-bit signed integer
    Int,
    /// A 64-bit signed integer
    Long,
    /// `true` or `false`, case-insensitive
    Bool,
    /// A hyphenated GUID
    Guid,
    /// One or more ASCII letters
    Alpha,
    /// Character count within `[min, max]`
    Length {
        /// Minimum accepted character count
        min: usize,
        /// Maximum accepted character count
        max: usize,
    },
    /// Character count at most `n`
    MaxLength(usize),
    /// Character count at least `n`
    MinLength(usize),
    /// Integer value at least `n`
    Min(i64),
    /// Integer value at most `n`
    Max(i64),
    /// Integer value within `[min, max]`
    Range {
        /// Minimum accepted value
        min: i64,
        /// Maximum accepted value
        max: i64,
    },
    /// Anchored regular expression match
    Regex(Regex),
}

impl Constraint {
    /// Check whether `value` satisfies this constraint
    ///
    /// Pure and side-effect free; safe for unlimited concurrent use.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Constraint::Int => value.parse::<i32>().is_ok(),
            Constraint::Long => value.parse::<i64>().is_ok(),
            Constraint::Bool => {
                value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
            }
            Constraint::Guid => GUID_PATTERN.is_match(value),
            Constraint::Alpha => {
                !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
            }
            Constraint::Length { min, max } => {
                let len = value.chars().count();
                len >= *min && len <= *max
            }
            Constraint::MaxLength(n) => value.chars().count() <= *n,
            Constraint::MinLength(n) => value.chars().count() >= *n,
            Constraint::Min(n) => value.parse::<i64>().map_or(false, |v| v >= *n),
            Constraint::Max(n) => value.parse::<i64>().map_or(false, |v| v <= *n),
            Constraint::Range { min, max } => value
                .parse::<i64>()
                .map_or(false, |v| v >= *min && v <= *max),
            Constraint::Regex(re) => re.is_match(value),
        }
    }
}
