//! # proxy-admin-core
//!
//! Client-side state synchronization engine for the reverse-proxy admin UI.
//!
//! The engine keeps one in-memory collection of proxy connections consistent
//! with three collaborators:
//!
//! - the **server**, which is the source of truth and confirms every
//!   mutation,
//! - the **filtered view** the operator is browsing,
//! - the **editor session** whose draft may be rejected by server-side
//!   validation.
//!
//! The presentation layer (modals, toasts, loaders) stays outside this crate:
//! it drives [`SyncEngine`] operations, renders the state it owns, and shows
//! the [`Notification`] values the operations return.

pub mod editor;
pub mod error;
pub mod filter;
pub mod store;
pub mod sync;
pub mod traits;

// Re-export common types
pub use editor::{EditorMode, EditorSession};
pub use error::{CoreError, CoreResult};
pub use store::ConnectionStore;
pub use sync::{Notification, SyncEngine};
pub use traits::{ConfirmDecision, ConfirmPrompt};
