//! Result document types.

use serde::{Deserialize, Serialize};

pub use proxmox_access_client::RealmRecord;

/// The module's result document.
///
/// `changed` is always `false`: the module only performs read-only queries
/// and never mutates remote state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealmInfo {
    pub changed: bool,
    /// Realms matching the query. Empty when the node has none configured,
    /// exactly one element when a `domain` was requested.
    pub proxmox_domains: Vec<RealmRecord>,
}

impl RealmInfo {
    #[must_use]
    pub fn new(proxmox_domains: Vec<RealmRecord>) -> Self {
        Self {
            changed: false,
            proxmox_domains,
        }
    }
}
