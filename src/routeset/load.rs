use serde::{Deserialize, Serialize};

use crate::constraint::ConstraintRegistry;
use crate::errors::TemplateError;
use crate::router::{BuildErrorPolicy, RouteTable};

/// One route definition from a route set file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDef {
    /// The route template text
    pub template: String,
    /// Name of the handler this route dispatches to
    pub handler: String,
    /// Explicit prefix order (lower sorts first); defaults to 0
    #[serde(default)]
    pub prefix_order: i32,
    /// Explicit order (lower sorts first); defaults to 0
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Deserialize)]
struct RouteSetFile {
    routes: Vec<RouteDef>,
}

/// Load route definitions from a YAML or JSON file
///
/// The parser is chosen by extension: `.yaml`/`.yml` files parse as YAML,
/// anything else as JSON. Templates are not parsed here — feed the
/// definitions to [`build_table`] to get a matchable table.
pub fn load_route_set(file_path: &str) -> anyhow::Result<Vec<RouteDef>> {
    let content = std::fs::read_to_string(file_path)?;
    let set: RouteSetFile = if file_path.ends_with(".yaml") || file_path.ends_with(".yml") {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(set.routes)
}

/// Build a sorted [`RouteTable`] from loaded route definitions
///
/// Handler bindings are the handler name strings from the file. Malformed
/// templates follow `policy`: abort the build or skip the entry.
pub fn build_table(
    defs: Vec<RouteDef>,
    registry: ConstraintRegistry,
    policy: BuildErrorPolicy,
) -> Result<RouteTable<String>, TemplateError> {
    let mut builder = RouteTable::builder().registry(registry).on_error(policy);
    for def in defs {
        builder = builder.route_with_orders(def.template, def.handler, def.prefix_order, def.order);
    }
    builder.build()
}
