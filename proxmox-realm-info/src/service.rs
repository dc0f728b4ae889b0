//! Realm query service.

use std::sync::Arc;

use proxmox_access_client::{AccessApi, PveClient, RealmRecord};

use crate::error::{ModuleError, ModuleResult};
use crate::params::ModuleParams;
use crate::types::RealmInfo;

/// Read-only adapter over the access API realm endpoints.
///
/// Holds the API handle as `Arc<dyn AccessApi>` so tests can substitute an
/// in-memory double for [`PveClient`].
pub struct RealmInfoService {
    api: Arc<dyn AccessApi>,
}

impl RealmInfoService {
    /// Create a service instance over the given API handle.
    #[must_use]
    pub fn new(api: Arc<dyn AccessApi>) -> Self {
        Self { api }
    }

    /// Fetch a single realm.
    ///
    /// Any failure — unknown realm, transport fault, permission denial —
    /// surfaces as [`ModuleError::DomainLookup`] with its fixed user-facing
    /// message; the original cause stays chained underneath for diagnostics.
    pub async fn get_domain(&self, realm: &str) -> ModuleResult<RealmRecord> {
        match self.api.get_realm(realm).await {
            Ok(record) => Ok(record),
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Realm '{realm}' lookup failed: {e}");
                } else {
                    log::error!("Realm '{realm}' lookup failed: {e}");
                }
                Err(ModuleError::DomainLookup {
                    realm: realm.to_string(),
                    source: e,
                })
            }
        }
    }

    /// List all realms, in whatever order the backend returns them.
    ///
    /// Failures are wrapped into [`ModuleError::Client`] with the cause
    /// preserved, the same policy as the single-realm path.
    pub async fn get_domains(&self) -> ModuleResult<Vec<RealmRecord>> {
        Ok(self.api.list_realms().await?)
    }

    /// The module's entire decision logic: a named realm yields a
    /// single-element list, otherwise the full listing is passed through.
    pub async fn run(&self, domain: Option<&str>) -> ModuleResult<Vec<RealmRecord>> {
        match domain {
            Some(realm) => Ok(vec![self.get_domain(realm).await?]),
            None => self.get_domains().await,
        }
    }
}

/// Execute the module against an already-constructed API handle.
///
/// Parameters are validated before the handle is touched, so configuration
/// violations never reach the network.
pub async fn run_with_api(
    params: &ModuleParams,
    api: Arc<dyn AccessApi>,
) -> ModuleResult<RealmInfo> {
    params.validate()?;
    let service = RealmInfoService::new(api);
    let domains = service.run(params.domain.as_deref()).await?;
    Ok(RealmInfo::new(domains))
}

/// Execute one full module invocation: validate parameters, connect to the
/// node, run the query, shape the result document.
pub async fn run_module(params: &ModuleParams) -> ModuleResult<RealmInfo> {
    let conn = params.connection()?;
    let client = PveClient::connect(&conn).await?;
    run_with_api(params, Arc::new(client)).await
}
