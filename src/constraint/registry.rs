use std::collections::HashMap;
use std::sync::Arc;

use regex::Regex;

use super::Constraint;
use crate::errors::TemplateError;

/// Factory for one named constraint
///
/// Receives the constraint name (for error reporting) and the raw argument
/// text between the parentheses, if any. Returns the built [`Constraint`]
/// or a parse-time error.
pub type ConstraintFactory =
    Arc<dyn Fn(&str, Option<&str>) -> Result<Constraint, TemplateError> + Send + Sync>;

/// Registry mapping constraint names to factories
///
/// The registry is consulted while parsing a route template: every
/// `{name:constraint}` token is resolved here, once, and an unresolved name
/// fails the registration of that template. The registry itself is only
/// touched at table-build time; matching never looks anything up.
///
/// [`ConstraintRegistry::default`] carries all built-in constraints.
/// Additional names can be registered before parsing:
///
/// ```
/// use odata_router::constraint::{Constraint, ConstraintRegistry};
///
/// let mut registry = ConstraintRegistry::default();
/// registry.register("digits", |_, _| Ok(Constraint::Regex(
///     regex::Regex::new("^[0-9]+$").expect("valid pattern"),
/// )));
/// assert!(registry.resolve("digits").is_ok());
/// ```
#[derive(Clone)]
pub struct ConstraintRegistry {
    factories: HashMap<String, ConstraintFactory>,
}

impl Default for ConstraintRegistry {
    fn default() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register("int", |name, args| no_args(Constraint::Int, name, args));
        registry.register("long", |name, args| no_args(Constraint::Long, name, args));
        registry.register("bool", |name, args| no_args(Constraint::Bool, name, args));
        registry.register("guid", |name, args| no_args(Constraint::Guid, name, args));
        registry.register("alpha", |name, args| {
            no_args(Constraint::Alpha, name, args)
        });
        registry.register("length", build_length);
        registry.register("maxlength", build_maxlength);
        registry.register("minlength", build_minlength);
        registry.register("min", build_min);
        registry.register("max", build_max);
        registry.register("range", build_range);
        registry.register("regex", build_regex);
        registry
    }
}

impl ConstraintRegistry {
    /// Register a constraint factory under `name`, replacing any previous one
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&str, Option<&str>) -> Result<Constraint, TemplateError> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    /// Resolve a constraint token from a route template
    ///
    /// The token is either a bare name (`int`) or a name with an argument
    /// list (`maxlength(10)`, `range(1,99)`). Returns
    /// [`TemplateError::UnknownConstraint`] for names this registry does not
    /// know and [`TemplateError::InvalidConstraintArgument`] when the
    /// argument text does not suit the constraint.
    pub fn resolve(&self, token: &str) -> Result<Constraint, TemplateError> {
        let (name, args) = split_token(token);
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| TemplateError::UnknownConstraint {
                name: name.to_string(),
            })?;
        factory(name, args)
    }
}

/// Split `maxlength(10)` into `("maxlength", Some("10"))`
///
/// Arguments run from the first `(` to the *final* `)`, so constraint
/// arguments may themselves contain parentheses (`regex((a|b)+)`).
fn split_token(token: &str) -> (&str, Option<&str>) {
    match token.find('(') {
        Some(open) if token.ends_with(')') => {
            (&token[..open], Some(&token[open + 1..token.len() - 1]))
        }
        _ => (token, None),
    }
}

fn invalid(name: &str, args: Option<&str>) -> TemplateError {
    TemplateError::InvalidConstraintArgument {
        name: name.to_string(),
        argument: args.unwrap_or("").to_string(),
    }
}

fn no_args(
    constraint: Constraint,
    name: &str,
    args: Option<&str>,
) -> Result<Constraint, TemplateError> {
    match args {
        None => Ok(constraint),
        Some(_) => Err(invalid(name, args)),
    }
}

fn parse_usize(name: &str, args: Option<&str>, text: &str) -> Result<usize, TemplateError> {
    text.trim().parse::<usize>().map_err(|_| invalid(name, args))
}

fn parse_i64(name: &str, args: Option<&str>, text: &str) -> Result<i64, TemplateError> {
    text.trim().parse::<i64>().map_err(|_| invalid(name, args))
}

fn build_length(name: &str, args: Option<&str>) -> Result<Constraint, TemplateError> {
    let text = args.ok_or_else(|| invalid(name, args))?;
    let (min, max) = match text.split_once(',') {
        Some((min, max)) => (
            parse_usize(name, args, min)?,
            parse_usize(name, args, max)?,
        ),
        None => {
            let exact = parse_usize(name, args, text)?;
            (exact, exact)
        }
    };
    if min > max {
        return Err(invalid(name, args));
    }
    Ok(Constraint::Length { min, max })
}

fn build_maxlength(name: &str, args: Option<&str>) -> Result<Constraint, TemplateError> {
    let text = args.ok_or_else(|| invalid(name, args))?;
    Ok(Constraint::MaxLength(parse_usize(name, args, text)?))
}

fn build_minlength(name: &str, args: Option<&str>) -> Result<Constraint, TemplateError> {
    let text = args.ok_or_else(|| invalid(name, args))?;
    Ok(Constraint::MinLength(parse_usize(name, args, text)?))
}

fn build_min(name: &str, args: Option<&str>) -> Result<Constraint, TemplateError> {
    let text = args.ok_or_else(|| invalid(name, args))?;
    Ok(Constraint::Min(parse_i64(name, args, text)?))
}

fn build_max(name: &str, args: Option<&str>) -> Result<Constraint, TemplateError> {
    let text = args.ok_or_else(|| invalid(name, args))?;
    Ok(Constraint::Max(parse_i64(name, args, text)?))
}

fn build_range(name: &str, args: Option<&str>) -> Result<Constraint, TemplateError> {
    let text = args.ok_or_else(|| invalid(name, args))?;
    let (min, max) = text.split_once(',').ok_or_else(|| invalid(name, args))?;
    let (min, max) = (parse_i64(name, args, min)?, parse_i64(name, args, max)?);
    if min > max {
        return Err(invalid(name, args));
    }
    Ok(Constraint::Range { min, max })
}

fn build_regex(name: &str, args: Option<&str>) -> Result<Constraint, TemplateError> {
    let pattern = args.ok_or_else(|| invalid(name, args))?;
    // Anchor the pattern so it must cover the whole bound value.
    let anchored = format!("^(?:{})$", pattern);
    let compiled = Regex::new(&anchored).map_err(|_| invalid(name, args))?;
    Ok(Constraint::Regex(compiled))
}
