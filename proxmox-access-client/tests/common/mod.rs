//! Shared helpers for live-node integration tests.

#![allow(dead_code)]

use std::env;

use proxmox_access_client::{PveAuth, PveClient, PveConnection};

/// Skip the test when required environment variables are missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Build a client from `PVE_HOST`, `PVE_USER` and either `PVE_PASSWORD`
/// or `PVE_TOKEN_ID`/`PVE_TOKEN_SECRET`.
pub async fn connect_from_env() -> Option<PveClient> {
    let host = env::var("PVE_HOST").ok()?;
    let user = env::var("PVE_USER").ok()?;

    let auth = if let Ok(password) = env::var("PVE_PASSWORD") {
        PveAuth::Password { password }
    } else {
        PveAuth::ApiToken {
            token_id: env::var("PVE_TOKEN_ID").ok()?,
            secret: env::var("PVE_TOKEN_SECRET").ok()?,
        }
    };

    PveClient::connect(&PveConnection::new(host, user, auth))
        .await
        .ok()
}
