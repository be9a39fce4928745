//! Synchronization engine.
//!
//! Orchestrates create/update/delete/list calls against the remote API and
//! reconciles confirmed outcomes into the collection store, the filtered
//! view and the editor session. The store is mutated here and nowhere else,
//! and only after a fully parsed success response — a rejected or failed
//! operation leaves it untouched.
//!
//! Completion order is not assumed: reconciliation goes through the
//! `apply_*` methods, which resolve records by server-returned id. A driver
//! delivering a late completion (the operator closed the editor while the
//! request was in flight) calls them directly; a successful save still lands
//! in the store (server truth wins), while a stale rejection for a closed
//! session is dropped because there is no surface left to show it.

use std::sync::Arc;

use proxy_admin_api::{AdminApi, ApiError, Features, ProxyConnection, Validation};

use crate::editor::{EditorMode, EditorSession};
use crate::error::{CoreError, CoreResult};
use crate::filter;
use crate::store::ConnectionStore;
use crate::traits::{ConfirmDecision, ConfirmPrompt};

/// One-shot operator notification, surfaced by the presentation layer as a
/// transient toast. Nothing is logged persistently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success { subject: String, message: String },
    Error { subject: String, message: String },
}

impl Notification {
    fn success(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Success {
            subject: subject.into(),
            message: message.into(),
        }
    }

    fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// The state synchronization engine.
///
/// Owns the authoritative [`ConnectionStore`], the current filter text and
/// its derived view, the [`EditorSession`] and the server feature flags.
/// Driven by a single logical actor (the interactive session); requests are
/// async and never block the caller's loop.
pub struct SyncEngine {
    api: Arc<dyn AdminApi>,
    confirm: Arc<dyn ConfirmPrompt>,
    store: ConnectionStore,
    editor: EditorSession,
    features: Features,
    filter: String,
    view: Vec<ProxyConnection>,
}

impl SyncEngine {
    #[must_use]
    pub fn new(api: Arc<dyn AdminApi>, confirm: Arc<dyn ConfirmPrompt>) -> Self {
        Self {
            api,
            confirm,
            store: ConnectionStore::new(),
            editor: EditorSession::new(),
            features: Features::default(),
            filter: String::new(),
            view: Vec::new(),
        }
    }

    // ========== Read access ==========

    #[must_use]
    pub fn store(&self) -> &ConnectionStore {
        &self.store
    }

    /// The filtered view the operator is browsing. Derived state; recomputed
    /// after every store mutation and every filter change.
    #[must_use]
    pub fn view(&self) -> &[ProxyConnection] {
        &self.view
    }

    #[must_use]
    pub fn features(&self) -> &Features {
        &self.features
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[must_use]
    pub fn editor(&self) -> &EditorSession {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorSession {
        &mut self.editor
    }

    /// Resolve a presentation-layer index **within the filtered view** to
    /// the authoritative store entry. Positions in the view diverge from
    /// store positions as soon as a filter is set, so every edit/delete
    /// entry point goes through the stable id, never through a raw index
    /// into the store.
    #[must_use]
    pub fn connection_at(&self, view_index: usize) -> Option<&ProxyConnection> {
        self.view
            .get(view_index)
            .and_then(|c| self.store.get(&c.id))
    }

    // ========== Filter ==========

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        self.view = filter::recompute(self.store.connections(), &self.filter);
    }

    // ========== Editor session ==========

    pub fn open_create(&mut self) {
        self.editor.open_create();
    }

    /// Open an update session over a deep copy of the stored entry.
    pub fn open_update(&mut self, id: &str) -> CoreResult<()> {
        let connection = self
            .store
            .get(id)
            .ok_or_else(|| CoreError::ConnectionNotFound(id.to_string()))?;
        self.editor.open_update(connection);
        Ok(())
    }

    pub fn close_editor(&mut self) {
        self.editor.close();
    }

    // ========== Remote operations ==========

    /// Initial load: fetch the connection list and the feature flags as
    /// independent calls. Each populates its own state on success; a failure
    /// on one neither blocks nor corrupts the other.
    pub async fn load_all(&mut self) -> Vec<Notification> {
        let (connections, features) =
            tokio::join!(self.api.list_connections(), self.api.get_features());

        let mut notifications = Vec::new();

        match connections {
            Ok(list) => {
                log::debug!("loaded {} connections", list.len());
                self.store.replace_all(list);
                self.refresh_view();
            }
            Err(e) => {
                log::error!("failed to load connections: {e}");
                notifications.push(Notification::error(
                    "Connections",
                    format!("failed to load: {e}"),
                ));
            }
        }

        match features {
            Ok(f) => self.features = f,
            Err(e) => {
                log::error!("failed to load features: {e}");
                notifications.push(Notification::error(
                    "Features",
                    format!("failed to load: {e}"),
                ));
            }
        }

        notifications
    }

    /// Submit the open editor draft: `Create` POSTs, `Update` PUTs against
    /// the draft's identity.
    ///
    /// Success upserts the server-normalized record, closes the session and
    /// returns a success notification. A validation rejection stores the
    /// server's result into the still-open session — the operator corrects
    /// and resubmits — and the store stays untouched. A transport failure
    /// yields a generic failure notification with the draft retained.
    ///
    /// Errors only when no session is open.
    pub async fn submit(&mut self) -> CoreResult<Notification> {
        let (mode, draft) = match &self.editor {
            EditorSession::Open { mode, draft, .. } => (*mode, draft.clone()),
            EditorSession::Closed => return Err(CoreError::NoOpenEditor),
        };

        let result = match mode {
            EditorMode::Create => self.api.create_connection(&draft).await,
            EditorMode::Update => self.api.update_connection(&draft.id, &draft).await,
        };

        match result {
            Ok(saved) => Ok(self.apply_saved(mode, saved)),
            Err(ApiError::Rejected { validation }) => {
                Ok(self.apply_rejected(mode, &draft.name, validation))
            }
            Err(e) => {
                log::error!("failed to {} connection: {e}", mode.verb());
                Ok(Notification::error(
                    draft.name,
                    format!("failed to {}: {e}", mode.verb()),
                ))
            }
        }
    }

    /// Two-phase delete: ask the confirm prompt first; only an affirmative
    /// decision issues the request. Declining performs no request and no
    /// mutation and returns `None`.
    ///
    /// A connection already deleted on the server (404) counts as success —
    /// the store entry is removed either way.
    pub async fn remove(&mut self, id: &str) -> CoreResult<Option<Notification>> {
        let name = self
            .store
            .get(id)
            .map(|c| c.name.clone())
            .ok_or_else(|| CoreError::ConnectionNotFound(id.to_string()))?;

        let text = format!("Do you really want to delete {name} ?");
        if self.confirm.confirm("Delete Config", &text).await == ConfirmDecision::Declined {
            log::debug!("delete of {id} declined");
            return Ok(None);
        }

        match self.api.delete_connection(id).await {
            Ok(()) => Ok(Some(self.apply_removed(id, &name))),
            Err(e) => {
                log::error!("failed to delete connection {id}: {e}");
                Ok(Some(Notification::error(
                    name,
                    format!("failed to delete: {e}"),
                )))
            }
        }
    }

    // ========== Reconciliation ==========

    /// Reconcile a confirmed create/update. Upserts by the server-returned
    /// id, recomputes the view and closes the editor session. Applied even
    /// when the session already closed: the server has persisted the record,
    /// so the store must reflect it.
    pub fn apply_saved(&mut self, mode: EditorMode, saved: ProxyConnection) -> Notification {
        let name = saved.name.clone();
        self.store.upsert(saved);
        self.refresh_view();
        self.editor.close();
        Notification::success(name, format!("successfully {}", mode.past_tense()))
    }

    /// Reconcile a validation rejection. The store is never touched; the
    /// result lands in the open session. With no session open the result is
    /// dropped silently — there is no UI surface left to show it.
    pub fn apply_rejected(
        &mut self,
        mode: EditorMode,
        name: &str,
        validation: Validation,
    ) -> Notification {
        if self.editor.is_open() {
            log::warn!("connection {name} rejected by server validation");
            self.editor.set_validation(validation);
        } else {
            log::debug!("dropping stale validation result for {name}");
        }
        Notification::error(name, format!("failed to {}", mode.verb()))
    }

    /// Reconcile a confirmed delete. Tolerant of an entry already removed.
    pub fn apply_removed(&mut self, id: &str, name: &str) -> Notification {
        self.store.remove(id);
        self.refresh_view();
        Notification::success(name, "config deleted")
    }
}
