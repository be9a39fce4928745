//! Wire types for the admin configuration API.

use serde::{Deserialize, Serialize};

// ============ Proxy connection ============

/// One persisted proxy-route configuration entity.
///
/// `id` is assigned by the server on create and is the only stable identity;
/// `name` is a human label and is not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConnection {
    /// Server-assigned identity. Empty on a create draft.
    #[serde(default)]
    pub id: String,
    /// Display label.
    #[serde(default)]
    pub name: String,
    /// Routing match string (host rule).
    #[serde(default)]
    pub domain: String,
    /// Upstream target URL.
    #[serde(default)]
    pub backend: String,
    /// Route requests through the forward-auth middleware.
    #[serde(default)]
    pub forwardauth: bool,
    /// Serve the route over HTTPS.
    #[serde(default = "default_true")]
    pub https: bool,
    /// Redirect plain HTTP to HTTPS.
    #[serde(default = "default_true")]
    pub forcetls: bool,
    /// Send the HSTS header.
    #[serde(default = "default_true")]
    pub hsts: bool,
    /// Custom request headers. Duplicate names are allowed; conflict
    /// resolution is a server concern.
    #[serde(default)]
    pub headers: Vec<HeaderEntry>,
    /// Basic-auth credentials for the route.
    #[serde(default)]
    pub basicauth: Vec<BasicAuthEntry>,
    /// Source-IP restriction list.
    #[serde(rename = "ipRestriction", default)]
    pub ip_restriction: IpRestriction,
}

fn default_true() -> bool {
    true
}

impl Default for ProxyConnection {
    /// The blank editor template: TLS options enabled, everything else empty.
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            domain: String::new(),
            backend: String::new(),
            forwardauth: false,
            https: true,
            forcetls: true,
            hsts: true,
            headers: Vec::new(),
            basicauth: Vec::new(),
            ip_restriction: IpRestriction::default(),
        }
    }
}

/// A custom request header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// A basic-auth credential row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuthEntry {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Source-IP restriction: allowed ranges plus the proxy depth at which the
/// client IP is taken from `X-Forwarded-For`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRestriction {
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub ips: Vec<String>,
}

// ============ Validation ============

/// Server-reported per-field acceptance/rejection outcome for a submitted
/// connection. An empty message string means the field passed.
///
/// The default value is the all-clean state (`valid: true`, no messages);
/// a rejected submit replaces it wholesale with the server body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    #[serde(default)]
    pub errors: ValidationErrors,
}

impl Default for Validation {
    fn default() -> Self {
        Self {
            valid: true,
            errors: ValidationErrors::default(),
        }
    }
}

/// Field-scoped validation messages, keyed in parallel to the connection
/// shape. Row errors line up by index with the submitted rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub backend: String,
    /// Messages not attributable to a single field.
    #[serde(default)]
    pub generic: Vec<String>,
    #[serde(default)]
    pub headers: Vec<HeaderEntryErrors>,
    #[serde(default)]
    pub basicauth: Vec<BasicAuthEntryErrors>,
    #[serde(rename = "ipRestriction", default)]
    pub ip_restriction: IpRestrictionErrors,
}

/// Per-row messages for a header entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntryErrors {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Per-row messages for a basic-auth entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuthEntryErrors {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Messages for the IP restriction block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRestrictionErrors {
    #[serde(default)]
    pub depth: String,
    #[serde(default)]
    pub ips: Vec<String>,
}

// ============ Feature flags ============

/// Server feature flags fetched once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    #[serde(default)]
    pub forwardauth: ForwardAuthFeature,
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            forwardauth: ForwardAuthFeature::default(),
            version: default_version(),
        }
    }
}

fn default_version() -> String {
    "dev".to_string()
}

/// Forward-auth availability and its authorization endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardAuthFeature {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn connection_default_is_editor_template() {
        let c = ProxyConnection::default();
        assert!(c.id.is_empty());
        assert!(c.https && c.forcetls && c.hsts);
        assert!(!c.forwardauth);
        assert!(c.headers.is_empty());
        assert!(c.basicauth.is_empty());
        assert_eq!(c.ip_restriction.depth, 0);
    }

    #[test]
    fn connection_roundtrip_uses_wire_names() {
        let mut c = ProxyConnection {
            id: "abc123".into(),
            name: "alpha".into(),
            domain: "a.example.com".into(),
            backend: "http://10.0.0.1:8080".into(),
            ..ProxyConnection::default()
        };
        c.ip_restriction.ips.push("10.0.0.0/24".into());

        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["ipRestriction"]["ips"][0], "10.0.0.0/24");
        assert_eq!(json["forcetls"], true);

        let back: ProxyConnection = serde_json::from_value(json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn connection_parses_with_missing_optional_fields() {
        // Older list responses omit id, headers, basicauth and ipRestriction.
        let c: ProxyConnection = serde_json::from_str(
            r#"{"name":"alpha","domain":"a.com","backend":"http://10.0.0.1:8080"}"#,
        )
        .unwrap();
        assert!(c.id.is_empty());
        assert!(c.https);
        assert!(c.headers.is_empty());
        assert_eq!(c.ip_restriction, IpRestriction::default());
    }

    #[test]
    fn validation_default_is_clean() {
        let v = Validation::default();
        assert!(v.valid);
        assert!(v.errors.domain.is_empty());
        assert!(v.errors.generic.is_empty());
        assert!(v.errors.basicauth.is_empty());
    }

    #[test]
    fn validation_parses_rejection_body() {
        let v: Validation = serde_json::from_str(
            r#"{
                "valid": false,
                "errors": {
                    "domain": "not a valid domain name",
                    "generic": ["Basic auth contains invalid entries"],
                    "basicauth": [{"username": "String between 3 and 32 chars required", "password": ""}],
                    "ipRestriction": {"depth": "", "ips": ["not a valid IP"]}
                }
            }"#,
        )
        .unwrap();
        assert!(!v.valid);
        assert_eq!(v.errors.domain, "not a valid domain name");
        assert_eq!(v.errors.name, "");
        assert_eq!(v.errors.basicauth.len(), 1);
        assert_eq!(v.errors.ip_restriction.ips[0], "not a valid IP");
    }

    #[test]
    fn features_version_defaults_to_dev() {
        let f: Features =
            serde_json::from_str(r#"{"forwardauth":{"enabled":true,"url":"https://auth"}}"#)
                .unwrap();
        assert!(f.forwardauth.enabled);
        assert_eq!(f.version, "dev");
    }
}
