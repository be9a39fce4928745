//! # proxy-admin-api
//!
//! Wire types and HTTP client for the reverse-proxy admin configuration API.
//!
//! The API is a small JSON CRUD surface over named proxy connections:
//!
//! | Operation | Method | Path              |
//! |-----------|--------|-------------------|
//! | List      | GET    | `config/`         |
//! | Create    | POST   | `config/{id}`     |
//! | Update    | PUT    | `config/{id}`     |
//! | Delete    | DELETE | `config/{id}`     |
//! | Features  | GET    | `features`        |
//!
//! Create and update return the canonical, server-normalized record on
//! success (HTTP 200) and a structured [`Validation`] body on rejection
//! (HTTP ≥ 400). Delete treats HTTP 404 as success so that two operators
//! deleting the same connection concurrently both succeed.
//!
//! The mockable seam is the [`AdminApi`] trait; [`HttpAdminApi`] is the
//! production implementation over `reqwest`.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

// Re-export common types
pub use client::{AdminApi, AdminApiConfig, HttpAdminApi};
pub use error::{ApiError, ApiResult};
pub use types::{
    BasicAuthEntry, BasicAuthEntryErrors, Features, ForwardAuthFeature, HeaderEntry,
    HeaderEntryErrors, IpRestriction, IpRestrictionErrors, ProxyConnection, Validation,
    ValidationErrors,
};
