//! Editor session state machine.

use proxy_admin_api::{BasicAuthEntry, HeaderEntry, ProxyConnection, Validation};

/// Whether the open draft creates a new connection or updates an existing
/// one. Decides POST vs PUT on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Update,
}

impl EditorMode {
    /// Past-tense label for notifications ("successfully created").
    #[must_use]
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Create => "created",
            Self::Update => "updated",
        }
    }

    /// Infinitive label for failure notifications ("failed to create").
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
        }
    }
}

/// The in-progress create/update draft and its validation state.
///
/// Two states: `Closed`, or `Open` with a mode, a detached draft and the
/// last validation result. The draft is always a deep copy — editing it
/// never aliases a collection store entry. At most one session exists;
/// opening while open replaces the prior draft outright.
#[derive(Debug, Default)]
pub enum EditorSession {
    #[default]
    Closed,
    Open {
        mode: EditorMode,
        draft: ProxyConnection,
        validation: Validation,
    },
}

impl EditorSession {
    #[must_use]
    pub fn new() -> Self {
        Self::Closed
    }

    /// Open a create session over the blank template.
    pub fn open_create(&mut self) {
        *self = Self::Open {
            mode: EditorMode::Create,
            draft: ProxyConnection::default(),
            validation: Validation::default(),
        };
    }

    /// Open an update session over a deep copy of `connection`.
    pub fn open_update(&mut self, connection: &ProxyConnection) {
        *self = Self::Open {
            mode: EditorMode::Update,
            draft: connection.clone(),
            validation: Validation::default(),
        };
    }

    /// Cancel semantics: discard draft and validation unconditionally.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    #[must_use]
    pub fn mode(&self) -> Option<EditorMode> {
        match self {
            Self::Open { mode, .. } => Some(*mode),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub fn draft(&self) -> Option<&ProxyConnection> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut ProxyConnection> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub fn validation(&self) -> Option<&Validation> {
        match self {
            Self::Open { validation, .. } => Some(validation),
            Self::Closed => None,
        }
    }

    /// Replace the validation result with the server's rejection body.
    /// No-op when closed: there is no UI surface left to show it.
    pub fn set_validation(&mut self, result: Validation) {
        if let Self::Open { validation, .. } = self {
            *validation = result;
        }
    }

    /// Append a blank header row to the draft. Rows are unbounded and
    /// operator-driven.
    pub fn add_header_row(&mut self) {
        if let Some(draft) = self.draft_mut() {
            draft.headers.push(HeaderEntry::default());
        }
    }

    /// Append a blank basic-auth row to the draft.
    pub fn add_basic_auth_row(&mut self) {
        if let Some(draft) = self.draft_mut() {
            draft.basicauth.push(BasicAuthEntry::default());
        }
    }

    /// Append a blank IP restriction row to the draft.
    pub fn add_ip_restriction_row(&mut self) {
        if let Some(draft) = self.draft_mut() {
            draft.ip_restriction.ips.push(String::new());
        }
    }
}
