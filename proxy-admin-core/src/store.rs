//! Authoritative client-side cache of proxy connections.

use proxy_admin_api::ProxyConnection;

/// Ordered collection of all connections known for the session.
///
/// Created empty, fully replaced by the list response on load, and mutated
/// afterwards only through server-confirmed outcomes. The editor session
/// never writes here directly; drafts stay detached copies until the server
/// echoes the saved record.
#[derive(Debug, Default)]
pub struct ConnectionStore {
    connections: Vec<ProxyConnection>,
}

impl ConnectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load semantics: the given sequence becomes the authoritative state,
    /// discarding any prior contents.
    pub fn replace_all(&mut self, connections: Vec<ProxyConnection>) {
        self.connections = connections;
    }

    /// Replace the entry with the same `id` in place, preserving its
    /// position; append when no entry matches. Unrelated entries are never
    /// reordered.
    pub fn upsert(&mut self, connection: ProxyConnection) {
        match self.connections.iter_mut().find(|c| c.id == connection.id) {
            Some(existing) => *existing = connection,
            None => self.connections.push(connection),
        }
    }

    /// Remove the entry with the given `id`. A missing id is a silent no-op
    /// so that two operators deleting concurrently both succeed.
    pub fn remove(&mut self, id: &str) {
        self.connections.retain(|c| c.id != id);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ProxyConnection> {
        self.connections.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn connections(&self) -> &[ProxyConnection] {
        &self.connections
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
