use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::info;

use super::RouteTable;

/// A hot-swappable handle to an immutable [`RouteTable`]
///
/// Request handlers never see a table mid-mutation: the table itself is
/// immutable, and replacing the route set means building a complete new
/// table and publishing it atomically. Readers take a cheap `Arc` snapshot
/// and keep matching against it even while a swap lands.
///
/// ```
/// use odata_router::router::{RouteTable, SharedRouteTable};
///
/// let table = RouteTable::builder()
///     .route("Employees/{id}", "get_employee")
///     .build()
///     .unwrap();
/// let shared = SharedRouteTable::new(table);
///
/// // Request path: snapshot, then match.
/// let snapshot = shared.load();
/// assert!(snapshot.match_path("Employees/5").is_some());
///
/// // Reload path: rebuild, then swap.
/// let rebuilt = RouteTable::builder()
///     .route("Employees/{id}", "get_employee")
///     .route("Employees", "list_employees")
///     .build()
///     .unwrap();
/// shared.swap(rebuilt);
/// assert!(shared.load().match_path("Employees").is_some());
/// ```
pub struct SharedRouteTable<H> {
    inner: ArcSwap<RouteTable<H>>,
}

impl<H> SharedRouteTable<H> {
    /// Wrap an already-built table
    pub fn new(table: RouteTable<H>) -> Self {
        Self {
            inner: ArcSwap::from_pointee(table),
        }
    }

    /// Take a snapshot of the current table
    ///
    /// The snapshot stays valid (and matchable) even if another thread
    /// swaps in a replacement table afterwards.
    #[must_use]
    pub fn load(&self) -> Arc<RouteTable<H>> {
        self.inner.load_full()
    }

    /// Atomically publish a rebuilt table, returning the previous one
    pub fn swap(&self, table: RouteTable<H>) -> Arc<RouteTable<H>> {
        let previous = self.inner.swap(Arc::new(table));
        info!(
            previous_route_count = previous.len(),
            route_count = self.inner.load().len(),
            "Route table swapped"
        );
        previous
    }
}
