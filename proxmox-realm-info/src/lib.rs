//! Proxmox VE Realm Info
//!
//! Queries the authentication-realm ("domain") listing of a Proxmox VE node
//! and returns it as a structured result document:
//! - **Parameter Resolver** ([`params`]): the invocation contract, including
//!   the `domain`/`realm`/`name` aliases and the credential constraints.
//! - **Domain Query Adapter** ([`service`]): one realm or all realms, over
//!   the injected [`AccessApi`](proxmox_access_client::AccessApi) handle.
//!
//! The module is strictly read-only; its result always reports
//! `changed: false`.

pub mod error;
pub mod params;
pub mod service;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{ModuleError, ModuleResult};
pub use params::ModuleParams;
pub use service::{RealmInfoService, run_module, run_with_api};
pub use types::{RealmInfo, RealmRecord};
