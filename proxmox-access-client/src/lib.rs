//! # proxmox-access-client
//!
//! An async client for the Proxmox VE `access` API, covering the
//! authentication-realm ("domain") endpoints.
//!
//! ## Authentication
//!
//! | Method | Mechanism |
//! |--------|-----------|
//! | Password | `POST /access/ticket` login, ticket sent as `PVEAuthCookie` |
//! | API token | `Authorization: PVEAPIToken=<user>!<tokenid>=<secret>` header |
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use proxmox_access_client::{AccessApi, PveAuth, PveClient, PveConnection};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let conn = PveConnection::new(
//!         "pve.example.com",
//!         "root@pam",
//!         PveAuth::Password {
//!             password: "secret".to_string(),
//!         },
//!     );
//!     let client = PveClient::connect(&conn).await?;
//!
//!     for realm in client.list_realms().await? {
//!         println!("{} ({})", realm.realm, realm.kind);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError). Transport
//! failures keep the underlying [`reqwest::Error`] reachable through
//! [`std::error::Error::source`] for diagnostics. The client performs no
//! retries; callers decide how to surface failures.

mod client;
mod error;
mod http;
mod traits;
mod types;
mod utils;

pub use client::PveClient;
pub use error::{ClientError, Result};
pub use traits::AccessApi;
pub use types::{PveAuth, PveConnection, RealmRecord};
