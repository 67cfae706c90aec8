use odata_router::router::{RouteMatch, RouteTable};

/// Route events to the test writer; `RUST_LOG` controls verbosity.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn employee_table() -> RouteTable<&'static str> {
    init_tracing();
    RouteTable::builder()
        .route("Employees", "list_employees")
        .route("Employees/{id:int}", "employee_by_key")
        .route("Employees/{id}", "employee_by_name")
        .route("Employees/{id:int}/Orders", "employee_orders")
        .route("files/{*path}", "serve_file")
        .build()
        .expect("valid route templates")
}

fn assert_match(table: &RouteTable<&'static str>, path: &str, expected_handler: &str) {
    match table.match_path(path) {
        Some(RouteMatch { handler, .. }) => {
            assert_eq!(
                *handler, expected_handler,
                "Handler mismatch for '{}': expected '{}', got '{}'",
                path, expected_handler, handler
            );
        }
        None => {
            assert_eq!(
                expected_handler, "<none>",
                "Expected route to match for '{}'",
                path
            );
        }
    }
}

#[test]
fn test_int_constraint_wins_over_plain_parameter() {
    let table = employee_table();
    let m = table.match_path("Employees/5").expect("a match");
    assert_eq!(*m.handler, "employee_by_key");
    assert_eq!(m.get_param("id"), Some("5"));
}

#[test]
fn test_constraint_rejection_falls_through() {
    let table = employee_table();
    let m = table.match_path("Employees/abc").expect("a match");
    assert_eq!(*m.handler, "employee_by_name");
    assert_eq!(m.get_param("id"), Some("abc"));
}

#[test]
fn test_literal_segment_beats_parameters() {
    let table = employee_table();
    assert_match(&table, "Employees", "list_employees");
}

#[test]
fn test_nested_constrained_route() {
    let table = employee_table();
    let m = table.match_path("Employees/7/Orders").expect("a match");
    assert_eq!(*m.handler, "employee_orders");
    assert_eq!(m.get_param("id"), Some("7"));
}

#[test]
fn test_catch_all_binds_joined_remainder() {
    let table = employee_table();
    let m = table.match_path("files/a/b/c").expect("a match");
    assert_eq!(*m.handler, "serve_file");
    assert_eq!(m.get_param("path"), Some("a/b/c"));
}

#[test]
fn test_catch_all_accepts_empty_remainder() {
    let table = employee_table();
    let m = table.match_path("files").expect("a match");
    assert_eq!(*m.handler, "serve_file");
    assert_eq!(m.get_param("path"), Some(""));
}

#[test]
fn test_incompatible_segment_counts_yield_no_match() {
    let table = employee_table();
    assert_match(&table, "Employees/5/Orders/12", "<none>");
    assert_match(&table, "Customers", "<none>");
    assert_match(&table, "", "<none>");
}

#[test]
fn test_literal_matching_is_case_insensitive() {
    let table = employee_table();
    assert_match(&table, "employees/5", "employee_by_key");
    assert_match(&table, "EMPLOYEES", "list_employees");
}

#[test]
fn test_leading_and_trailing_slashes_are_ignored() {
    let table = employee_table();
    assert_match(&table, "/Employees/5/", "employee_by_key");
}

#[test]
fn test_root_template_matches_root_path() {
    let table = RouteTable::builder()
        .route("/", "root")
        .route("{x}", "single")
        .build()
        .expect("valid route templates");
    assert_match(&table, "/", "root");
    assert_match(&table, "anything", "single");
}

#[test]
fn test_mixed_segment_binds_each_parameter() {
    let table = RouteTable::builder()
        .route("release-v{major}.{minor}", "release")
        .build()
        .expect("valid route templates");
    let m = table.match_path("release-v1.42").expect("a match");
    assert_eq!(m.get_param("major"), Some("1"));
    assert_eq!(m.get_param("minor"), Some("42"));
    assert!(table.match_path("release-1.42").is_none());
}

#[test]
fn test_mixed_segment_constraint_rejection_falls_through() {
    let table = RouteTable::builder()
        .route("v{n:int}", "numbered")
        .route("v{n}", "named")
        .build()
        .expect("valid route templates");
    assert_match(&table, "v7", "numbered");
    assert_match(&table, "vNext", "named");
}

#[test]
fn test_trailing_default_binds_when_segment_absent() {
    let table = RouteTable::builder()
        .route("Employees/{id=0}", "employee")
        .build()
        .expect("valid route templates");

    let m = table.match_path("Employees").expect("a match");
    assert_eq!(m.get_param("id"), Some("0"));

    let m = table.match_path("Employees/9").expect("a match");
    assert_eq!(m.get_param("id"), Some("9"));
}

#[test]
fn test_explicit_order_overrides_structure_at_match_time() {
    // Business logic pins the parameterized route ahead of the literal one.
    let table = RouteTable::builder()
        .route_with_orders("{entity}", "generic", 0, 0)
        .route_with_orders("Employees", "special", 0, 1)
        .build()
        .expect("valid route templates");
    assert_match(&table, "Employees", "generic");
}

#[test]
fn test_constrained_catch_all_rejection_falls_through() {
    let table = RouteTable::builder()
        .route("files/{*path:maxlength(5)}", "short")
        .route("files/{*path}", "long")
        .build()
        .expect("valid route templates");
    assert_match(&table, "files/ab", "short");
    assert_match(&table, "files/a/b/c/d/e", "long");
}

#[test]
fn test_params_map_and_last_write_wins() {
    let table = RouteTable::builder()
        .route("{a}/{b}", "pair")
        .build()
        .expect("valid route templates");
    let m = table.match_path("x/y").expect("a match");
    let map = m.params_map();
    assert_eq!(map.get("a").map(String::as_str), Some("x"));
    assert_eq!(map.get("b").map(String::as_str), Some("y"));
    assert_eq!(m.get_param("missing"), None);
}
