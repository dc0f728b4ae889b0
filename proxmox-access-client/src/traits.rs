use async_trait::async_trait;

use crate::error::Result;
use crate::types::RealmRecord;

/// Read access to the authentication realms of a Proxmox VE node.
///
/// This is the seam between the API client and its consumers: production
/// code uses [`PveClient`](crate::PveClient), tests substitute an in-memory
/// double without network access.
#[async_trait]
pub trait AccessApi: Send + Sync {
    /// Fetch a single realm by identifier.
    ///
    /// The returned record's `realm` field is always populated, even though
    /// the underlying endpoint omits it.
    async fn get_realm(&self, realm: &str) -> Result<RealmRecord>;

    /// List all configured realms, in whatever order the backend returns.
    ///
    /// May be empty. No filtering or sorting is applied.
    async fn list_realms(&self) -> Result<Vec<RealmRecord>>;
}
