//! Free-text filter over the connection list.

use proxy_admin_api::ProxyConnection;

/// Case-insensitive substring match against `domain`, `name` or `backend`.
/// The empty filter matches everything.
#[must_use]
pub fn matches(connection: &ProxyConnection, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let filter = filter.to_lowercase();
    connection.domain.to_lowercase().contains(&filter)
        || connection.name.to_lowercase().contains(&filter)
        || connection.backend.to_lowercase().contains(&filter)
}

/// Recompute the filtered view: the subset of `connections` matching
/// `filter`, in store order. Pure; called after every store mutation and
/// every filter change.
#[must_use]
pub fn recompute(connections: &[ProxyConnection], filter: &str) -> Vec<ProxyConnection> {
    connections
        .iter()
        .filter(|c| matches(c, filter))
        .cloned()
        .collect()
}
