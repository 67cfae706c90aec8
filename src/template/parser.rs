use std::collections::HashSet;
use std::sync::Arc;

use regex::Regex;

use crate::constraint::ConstraintRegistry;
use crate::errors::TemplateError;

use super::core::{ParameterPart, RouteTemplate, Segment, SegmentPart};

pub(super) fn parse(
    text: &str,
    registry: &ConstraintRegistry,
) -> Result<RouteTemplate, TemplateError> {
    let trimmed = text.trim_matches('/');
    let mut segments = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    if !trimmed.is_empty() {
        let raw_segments: Vec<&str> = trimmed.split('/').collect();
        let last = raw_segments.len() - 1;
        for (index, segment_text) in raw_segments.iter().enumerate() {
            if segment_text.is_empty() {
                return Err(TemplateError::EmptySegment);
            }
            let segment = parse_segment(segment_text, registry, &mut seen_names)?;
            if index != last {
                if let Some(name) = catch_all_name(&segment) {
                    return Err(TemplateError::CatchAllNotLast { name });
                }
            }
            segments.push(segment);
        }
    }

    Ok(RouteTemplate::from_parts(text.to_string(), segments))
}

fn catch_all_name(segment: &Segment) -> Option<String> {
    segment
        .parameters()
        .find(|p| p.catch_all)
        .map(|p| p.name.to_string())
}

fn parse_segment(
    text: &str,
    registry: &ConstraintRegistry,
    seen_names: &mut HashSet<String>,
) -> Result<Segment, TemplateError> {
    let mut parts: Vec<SegmentPart> = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(['{', '}']) {
            None => {
                parts.push(SegmentPart::Literal(rest.to_string()));
                break;
            }
            Some(pos) => {
                let (literal, tail) = rest.split_at(pos);
                if !literal.is_empty() {
                    parts.push(SegmentPart::Literal(literal.to_string()));
                }
                if tail.starts_with('}') {
                    return Err(TemplateError::UnbalancedBraces {
                        segment: text.to_string(),
                    });
                }

                // Find the matching close brace; constraint arguments may
                // contain balanced braces of their own (regex(\d{4})).
                let mut depth = 0usize;
                let mut close = None;
                for (offset, byte) in tail.bytes().enumerate() {
                    match byte {
                        b'{' => depth += 1,
                        b'}' => {
                            depth -= 1;
                            if depth == 0 {
                                close = Some(offset);
                                break;
                            }
                        }
                        _ => {}
                    }
                }
                let close = close.ok_or_else(|| TemplateError::UnbalancedBraces {
                    segment: text.to_string(),
                })?;

                if matches!(parts.last(), Some(SegmentPart::Parameter(_))) {
                    return Err(TemplateError::ConsecutiveParameters {
                        segment: text.to_string(),
                    });
                }

                let param = parse_parameter(&tail[1..close], text, registry)?;
                if !seen_names.insert(param.name.to_string()) {
                    return Err(TemplateError::DuplicateParameter {
                        name: param.name.to_string(),
                    });
                }
                parts.push(SegmentPart::Parameter(param));
                rest = &tail[close + 1..];
            }
        }
    }

    // A catch-all must stand alone in its segment.
    if let Some(name) = parts
        .iter()
        .filter_map(|part| match part {
            SegmentPart::Parameter(p) if p.catch_all => Some(p.name.to_string()),
            _ => None,
        })
        .next()
    {
        if parts.len() > 1 {
            return Err(TemplateError::CatchAllNotAlone { name });
        }
    }

    let matcher = if parts.len() > 1 {
        Some(build_matcher(&parts))
    } else {
        None
    };
    Ok(Segment::new(parts, matcher))
}

fn parse_parameter(
    token: &str,
    segment: &str,
    registry: &ConstraintRegistry,
) -> Result<ParameterPart, TemplateError> {
    let (catch_all, body) = match token.strip_prefix('*') {
        Some(stripped) => (true, stripped),
        None => (false, token),
    };

    // Grammar: name[:constraint][=default]. The '=' that starts a default
    // is only recognized outside the constraint's parentheses, so
    // regex arguments may contain '='.
    let (name, constraint_token, default) = match body.split_once(':') {
        Some((name, rest)) => match top_level_eq(rest) {
            Some(eq) => (name, Some(&rest[..eq]), Some(rest[eq + 1..].to_string())),
            None => (name, Some(rest), None),
        },
        None => match body.split_once('=') {
            Some((name, default)) => (name, None, Some(default.to_string())),
            None => (body, None, None),
        },
    };

    if name.is_empty() {
        return Err(TemplateError::EmptyParameterName {
            segment: segment.to_string(),
        });
    }

    let constraint = constraint_token
        .map(|token| registry.resolve(token))
        .transpose()?;

    Ok(ParameterPart {
        name: Arc::from(name),
        constraint,
        default,
        catch_all,
    })
}

/// Byte offset of the first `=` outside parentheses, if any
fn top_level_eq(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, byte) in text.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b'=' if depth == 0 => return Some(offset),
            _ => {}
        }
    }
    None
}

/// Compile the matcher for a mixed literal/parameter segment
///
/// Literal runs match case-insensitively; every parameter captures at least
/// one character, non-final parameters lazily so literal separators bind as
/// early as possible.
fn build_matcher(parts: &[SegmentPart]) -> Regex {
    let last_param = parts
        .iter()
        .rposition(|part| matches!(part, SegmentPart::Parameter(_)));

    let mut pattern = String::from("(?i)^");
    for (index, part) in parts.iter().enumerate() {
        match part {
            SegmentPart::Literal(text) => pattern.push_str(&regex::escape(text)),
            SegmentPart::Parameter(_) => {
                pattern.push_str(if Some(index) == last_param {
                    "(.+)"
                } else {
                    "(.+?)"
                });
            }
        }
    }
    pattern.push('$');

    Regex::new(&pattern).expect("escaped segment pattern is always a valid regex")
}
