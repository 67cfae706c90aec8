use std::cmp::Ordering;

use super::{compare_templates, RouteEntry, RouteTable};
use crate::constraint::ConstraintRegistry;
use crate::template::RouteTemplate;

fn template(text: &str) -> RouteTemplate {
    RouteTemplate::parse(text, &ConstraintRegistry::default())
        .unwrap_or_else(|e| panic!("'{text}' should parse: {e}"))
}

fn entry(text: &str) -> RouteEntry<&'static str> {
    RouteEntry::new(template(text), "handler")
}

fn assert_sorts_before(earlier: &str, later: &str) {
    let x = entry(earlier);
    let y = entry(later);
    assert_eq!(
        x.compare(&y),
        Ordering::Less,
        "'{earlier}' should sort before '{later}'"
    );
    assert_eq!(
        y.compare(&x),
        Ordering::Greater,
        "'{later}' should sort after '{earlier}'"
    );
}

#[test]
fn test_explicit_orders_respected() {
    // (prefix_order, order) pairs for x and y, and the expected ordering.
    let cases = [
        ((1, 1), (2, 2), Ordering::Less),
        ((1, 2), (2, 1), Ordering::Less),
        ((2, 1), (1, 2), Ordering::Greater),
        ((0, 1), (0, 2), Ordering::Less),
        ((0, 2), (0, 1), Ordering::Greater),
        ((0, i32::MIN), (0, i32::MAX), Ordering::Less),
        ((0, i32::MAX), (0, i32::MIN), Ordering::Greater),
        ((i32::MIN, 0), (i32::MAX, 0), Ordering::Less),
        ((i32::MAX, 0), (i32::MIN, 0), Ordering::Greater),
    ];
    for ((px, ox), (py, oy), expected) in cases {
        let x = RouteEntry::with_orders(template("{x}"), "x", px, ox);
        let y = RouteEntry::with_orders(template("abc"), "y", py, oy);
        assert_eq!(
            x.compare(&y),
            expected,
            "orders ({px},{ox}) vs ({py},{oy})"
        );
    }
}

#[test]
fn test_explicit_order_beats_structure() {
    // The literal template is structurally more specific, but its explicit
    // prefix order pushes it after the catch-all.
    let literal = RouteEntry::with_orders(template("abc/def"), "literal", 1, 0);
    let catch_all = RouteEntry::with_orders(template("{*rest}"), "rest", 0, 0);
    assert_eq!(literal.compare(&catch_all), Ordering::Greater);
}

#[test]
fn test_equivalent_templates_compare_equal() {
    let x = entry("Employees/{id}");
    let y = entry("Employees/{id}");
    assert_eq!(x.compare(&y), Ordering::Equal);
}

#[test]
fn test_structural_specificity_matrix() {
    let pairs = [
        ("abc", "a{x}"),
        ("abc", "{x}c"),
        ("abc", "{x:int}"),
        ("abc", "{x}"),
        ("abc", "{*x}"),
        ("{x:int}", "{x}"),
        ("{x:int}", "{*x}"),
        ("a{x}", "{x}"),
        ("{x}c", "{x}"),
        ("a{x}", "{*x}"),
        ("{x}c", "{*x}"),
        ("{x}", "{*x}"),
        ("{*x:maxlength(10)}", "{*x}"),
        ("abc/def", "abc/{x:int}"),
        ("abc/def", "abc/{x}"),
        ("abc/def", "abc/{*x}"),
        ("abc/{x:int}", "abc/{x}"),
        ("abc/{x:int}", "abc/{*x}"),
        ("abc/{x}", "abc/{*x}"),
    ];
    for (earlier, later) in pairs {
        assert_sorts_before(earlier, later);
    }
}

#[test]
fn test_literal_text_does_not_decide_order() {
    // Distinct literals rank equal; lexical order carries no priority.
    assert_eq!(entry("abc").compare(&entry("def")), Ordering::Equal);
    assert_eq!(
        entry("abc/{x}").compare(&entry("xyz/{y}")),
        Ordering::Equal
    );
}

#[test]
fn test_equal_constraints_rank_equal() {
    // Constraint identity does not order; both are "constrained parameter".
    assert_eq!(
        entry("{x:alpha}").compare(&entry("{x:int}")),
        Ordering::Equal
    );
}

#[test]
fn test_shorter_template_sorts_first() {
    assert_sorts_before("abc", "abc/def");
    assert_sorts_before("abc/{x}", "abc/{x}/{y}");
    // The longer tail being a catch-all does not save it.
    assert_sorts_before("abc", "abc/{*rest}");
}

#[test]
fn test_defaulted_parameter_ranks_like_plain_parameter() {
    assert_eq!(entry("{x=5}").compare(&entry("{x}")), Ordering::Equal);
    assert_sorts_before("{x:int}", "{x=5}");
    assert_sorts_before("{x=5}", "{*x}");
}

#[test]
fn test_ordering_is_antisymmetric_and_transitive() {
    let catalog = [
        "abc",
        "abc/def",
        "abc/{x:int}",
        "abc/{x}",
        "abc/{*x}",
        "a{x}",
        "{x:int}",
        "{x:alpha}",
        "{x}",
        "{x=0}",
        "{*x:maxlength(10)}",
        "{*x}",
        "Employees/{id}",
        "Employees/{id}/Orders",
    ];
    let entries: Vec<_> = catalog.iter().map(|t| entry(t)).collect();

    for x in &entries {
        for y in &entries {
            assert_eq!(
                x.compare(y),
                y.compare(x).reverse(),
                "antisymmetry failed for '{}' vs '{}'",
                x.template().raw(),
                y.template().raw()
            );
            for z in &entries {
                if x.compare(y) != Ordering::Greater && y.compare(z) != Ordering::Greater {
                    assert_ne!(
                        x.compare(z),
                        Ordering::Greater,
                        "transitivity failed for '{}' <= '{}' <= '{}'",
                        x.template().raw(),
                        y.template().raw(),
                        z.template().raw()
                    );
                }
            }
        }
    }
}

#[test]
fn test_compare_templates_is_pure_over_parsed_forms() {
    let a = template("Employees/{id:int}");
    let b = template("Employees/{id}");
    assert_eq!(compare_templates(&a, &b), Ordering::Less);
    // Same inputs, same answer.
    assert_eq!(compare_templates(&a, &b), Ordering::Less);
}

#[test]
fn test_table_order_is_insertion_stable_for_equivalents() {
    let table = RouteTable::builder()
        .route("abc", "first")
        .route("def", "second")
        .build()
        .expect("valid templates");
    // "abc" and "def" are order-equivalent; stable sort keeps registration
    // order, so "abc" is tried (and here matched) first.
    let raws: Vec<&str> = table
        .entries()
        .iter()
        .map(|e| e.template().raw())
        .collect();
    assert_eq!(raws, vec!["abc", "def"]);
}
