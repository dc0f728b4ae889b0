use serde::{Deserialize, Serialize};

/// Default port of the Proxmox VE API daemon.
pub(crate) const DEFAULT_API_PORT: u16 = 8006;

// ============ Realm Types ============

/// A configured authentication realm, as returned by the access API.
///
/// Records are read-only snapshots retrieved fresh on every call; the client
/// never caches them. Unknown backend fields are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmRecord {
    /// Realm identifier.
    ///
    /// `GET /access/domains/{realm}` omits this key in its payload, so the
    /// client fills it in from the request path before returning the record.
    #[serde(default)]
    pub realm: String,

    /// Realm kind, e.g. `pam`, `pve`, `ldap`, `ad`, `openid`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Short description of the realm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Hash of the realm's stored configuration. Used by the backend for
    /// optimistic-concurrency checks on updates; absent from list responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

// ============ Connection Types ============

/// Credentials for a Proxmox VE node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PveAuth {
    /// Ticket-based login via `POST /access/ticket`.
    Password { password: String },
    /// Pre-provisioned API token, sent as an `Authorization` header.
    /// No login round-trip is required.
    ApiToken { token_id: String, secret: String },
}

/// Connection parameters for a Proxmox VE node.
#[derive(Debug, Clone)]
pub struct PveConnection {
    /// Hostname or address of the node.
    pub host: String,
    /// API port, `8006` unless overridden.
    pub port: u16,
    /// Fully qualified user, e.g. `root@pam`.
    pub user: String,
    /// Password or API token credentials.
    pub auth: PveAuth,
    /// Verify the node's TLS certificate. Off by default since most
    /// installations run with self-signed certificates.
    pub validate_certs: bool,
}

impl PveConnection {
    /// Create connection parameters with the default port and certificate
    /// verification disabled.
    #[must_use]
    pub fn new(host: impl Into<String>, user: impl Into<String>, auth: PveAuth) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_API_PORT,
            user: user.into(),
            auth,
            validate_certs: false,
        }
    }
}
