//! Admin API trait seam and the `reqwest` implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;

use crate::error::{ApiError, ApiResult};
use crate::http::{execute_request, parse_json};
use crate::types::{Features, ProxyConnection, Validation};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The remote configuration service, as seen by the client core.
///
/// Implemented by [`HttpAdminApi`] in production and by in-memory mocks in
/// tests. All operations are async and side-effect free on the client; the
/// server is the source of truth.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Fetch all proxy connections (`GET config/`).
    async fn list_connections(&self) -> ApiResult<Vec<ProxyConnection>>;

    /// Create a connection (`POST config/{id}`).
    ///
    /// The draft's id may be empty; the server assigns the identity and the
    /// returned record carries it.
    async fn create_connection(&self, draft: &ProxyConnection) -> ApiResult<ProxyConnection>;

    /// Update an existing connection (`PUT config/{id}`). Returns the
    /// server-normalized record.
    async fn update_connection(
        &self,
        id: &str,
        draft: &ProxyConnection,
    ) -> ApiResult<ProxyConnection>;

    /// Delete a connection (`DELETE config/{id}`). HTTP 404 counts as
    /// success: the record is gone either way.
    async fn delete_connection(&self, id: &str) -> ApiResult<()>;

    /// Fetch server feature flags (`GET features`).
    async fn get_features(&self) -> ApiResult<Features>;
}

/// Connection settings for [`HttpAdminApi`].
#[derive(Debug, Clone)]
pub struct AdminApiConfig {
    /// Base URL of the admin API, e.g. `http://127.0.0.1:8080/`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl AdminApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// `reqwest`-backed [`AdminApi`] implementation.
///
/// Every request carries `X-Requested-With: XMLHttpRequest` and a JSON
/// content type; the server rejects requests without them.
pub struct HttpAdminApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAdminApi {
    /// Build the client. Fails only when the underlying TLS backend cannot
    /// be initialized.
    pub fn new(config: AdminApiConfig) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::NetworkError {
                detail: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Shared POST/PUT flow: 200 carries the canonical record, ≥ 400 carries
    /// a validation body. A failure body that is not a validation body is a
    /// transport-class failure, not a rejection.
    async fn save(
        &self,
        method: Method,
        identity: &str,
        draft: &ProxyConnection,
    ) -> ApiResult<ProxyConnection> {
        let path = config_path(identity);
        let method_name = method.as_str().to_string();
        let request = self
            .client
            .request(method, self.url(&path))
            .json(draft);

        let (status, body) = execute_request(request, &method_name, &path).await?;
        match status {
            200 => parse_json(&body, "connection"),
            400.. => {
                let validation: Validation = parse_json(&body, "validation").map_err(|_| {
                    ApiError::Unexpected {
                        status,
                        body: body.clone(),
                    }
                })?;
                log::warn!("{method_name} {path} rejected by server validation");
                Err(ApiError::Rejected { validation })
            }
            _ => Err(ApiError::Unexpected { status, body }),
        }
    }
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn list_connections(&self) -> ApiResult<Vec<ProxyConnection>> {
        let path = "config/";
        let request = self.client.get(self.url(path));
        let (status, body) = execute_request(request, "GET", path).await?;
        match status {
            200 => parse_json(&body, "connection list"),
            _ => Err(ApiError::Unexpected { status, body }),
        }
    }

    async fn create_connection(&self, draft: &ProxyConnection) -> ApiResult<ProxyConnection> {
        // The identity segment is the draft id verbatim, empty included: the
        // server generates an identity when the segment is absent.
        self.save(Method::POST, &draft.id, draft).await
    }

    async fn update_connection(
        &self,
        id: &str,
        draft: &ProxyConnection,
    ) -> ApiResult<ProxyConnection> {
        self.save(Method::PUT, id, draft).await
    }

    async fn delete_connection(&self, id: &str) -> ApiResult<()> {
        let path = config_path(id);
        let request = self.client.delete(self.url(&path));
        let (status, body) = execute_request(request, "DELETE", &path).await?;
        match status {
            404 => {
                // Already gone, likely deleted by another operator.
                log::warn!("DELETE {path}: not found, treating as success");
                Ok(())
            }
            200..=299 => Ok(()),
            _ => Err(ApiError::Unexpected { status, body }),
        }
    }

    async fn get_features(&self) -> ApiResult<Features> {
        let path = "features";
        let request = self.client.get(self.url(path));
        let (status, body) = execute_request(request, "GET", path).await?;
        match status {
            200 => parse_json(&body, "features"),
            _ => Err(ApiError::Unexpected { status, body }),
        }
    }
}

fn config_path(identity: &str) -> String {
    format!("config/{identity}")
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{path}", base.trim_end_matches('/'))
}
