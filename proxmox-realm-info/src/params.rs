//! Module parameter contract.
//!
//! Mirrors the argument document the invoking framework hands over:
//! authentication fields plus the optional `domain` filter with its
//! `realm` and `name` aliases.

use serde::Deserialize;

use proxmox_access_client::{PveAuth, PveConnection};

use crate::error::{ModuleError, ModuleResult};

/// Input parameters for one module invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleParams {
    /// Hostname or address of the target node.
    pub api_host: String,

    /// API port override; the node default is used when absent.
    #[serde(default)]
    pub api_port: Option<u16>,

    /// Fully qualified user, e.g. `root@pam`.
    pub api_user: String,

    #[serde(default)]
    pub api_password: Option<String>,

    #[serde(default)]
    pub api_token_id: Option<String>,

    #[serde(default)]
    pub api_token_secret: Option<String>,

    /// Verify the node's TLS certificate.
    #[serde(default)]
    pub api_validate_certs: bool,

    /// Restrict results to a specific authentication realm.
    #[serde(default, alias = "realm", alias = "name")]
    pub domain: Option<String>,
}

impl ModuleParams {
    /// Check the credential constraints before any network call:
    /// one of password / token id is required, and a token id requires
    /// its secret.
    pub fn validate(&self) -> ModuleResult<()> {
        if self.api_password.is_none() && self.api_token_id.is_none() {
            return Err(ModuleError::Configuration(
                "one of the following is required: api_password, api_token_id".to_string(),
            ));
        }
        if self.api_token_id.is_some() != self.api_token_secret.is_some() {
            return Err(ModuleError::Configuration(
                "parameters are required together: api_token_id, api_token_secret".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve validated parameters into connection settings.
    ///
    /// Token credentials take precedence when both are supplied, matching
    /// the behavior of the collection this module descends from.
    pub fn connection(&self) -> ModuleResult<PveConnection> {
        self.validate()?;

        let auth = match (
            &self.api_token_id,
            &self.api_token_secret,
            &self.api_password,
        ) {
            (Some(token_id), Some(secret), _) => PveAuth::ApiToken {
                token_id: token_id.clone(),
                secret: secret.clone(),
            },
            (_, _, Some(password)) => PveAuth::Password {
                password: password.clone(),
            },
            // validate() rules this out, but keep the same diagnostic
            // rather than panicking.
            _ => {
                return Err(ModuleError::Configuration(
                    "one of the following is required: api_password, api_token_id".to_string(),
                ));
            }
        };

        let mut conn = PveConnection::new(&self.api_host, &self.api_user, auth);
        if let Some(port) = self.api_port {
            conn.port = port;
        }
        conn.validate_certs = self.api_validate_certs;
        Ok(conn)
    }
}
