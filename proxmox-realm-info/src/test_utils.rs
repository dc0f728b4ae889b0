//! Test helper module
//!
//! Provides a mock access API with call accounting, so tests can assert
//! that validation failures never reach the network.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use proxmox_access_client::{AccessApi, ClientError, RealmRecord};

/// In-memory stand-in for a node's realm listing.
pub struct MockAccessApi {
    realms: Vec<RealmRecord>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockAccessApi {
    pub fn with_realms(realms: Vec<RealmRecord>) -> Arc<Self> {
        Arc::new(Self {
            realms,
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::with_realms(Vec::new())
    }

    /// Every call fails, as a node that is unreachable or rejecting us.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            realms: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of API calls made through this handle.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccessApi for MockAccessApi {
    async fn get_realm(&self, realm: &str) -> Result<RealmRecord, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ClientError::Api {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }
        self.realms
            .iter()
            .find(|r| r.realm == realm)
            .cloned()
            .ok_or_else(|| ClientError::Api {
                // pveproxy reports unknown realms as a 500 with this message
                status: 500,
                message: format!("domain '{realm}' does not exist"),
            })
    }

    async fn list_realms(&self) -> Result<Vec<RealmRecord>, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ClientError::InvalidCredentials {
                message: "authentication failure".to_string(),
            });
        }
        Ok(self.realms.clone())
    }
}

/// Shorthand for a realm record fixture.
pub fn realm(id: &str, kind: &str) -> RealmRecord {
    RealmRecord {
        realm: id.to_string(),
        kind: kind.to_string(),
        comment: Some(String::new()),
        digest: None,
    }
}
