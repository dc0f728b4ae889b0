//! Proxmox VE API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::http;
use crate::traits::AccessApi;
use crate::types::{PveAuth, PveConnection, RealmRecord};

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Authenticated client for a single Proxmox VE node.
///
/// Created via [`PveClient::connect`]. Each instance holds either a ticket
/// obtained from a password login or a pre-built API token header; there is
/// no other state and no caching.
pub struct PveClient {
    client: Client,
    /// `https://<host>:<port>/api2/json`
    base_url: String,
    /// `PVEAPIToken=...` header value for token auth.
    auth_header: Option<String>,
    /// Login ticket for password auth, sent as the `PVEAuthCookie` cookie.
    ticket: Option<String>,
}

impl PveClient {
    /// Connect to a node.
    ///
    /// Password auth performs the `POST /access/ticket` login up front, so a
    /// bad password surfaces as [`ClientError::InvalidCredentials`] here
    /// rather than on the first query. Token auth needs no round-trip and is
    /// validated by the first request instead.
    pub async fn connect(conn: &PveConnection) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .danger_accept_invalid_certs(!conn.validate_certs)
            .build()
            .map_err(|e| ClientError::Network { source: e })?;

        let base_url = format!("https://{}:{}/api2/json", conn.host, conn.port);

        let mut pve = Self {
            client,
            base_url,
            auth_header: None,
            ticket: None,
        };

        match &conn.auth {
            PveAuth::ApiToken { token_id, secret } => {
                pve.auth_header = Some(format!(
                    "PVEAPIToken={}!{}={}",
                    conn.user, token_id, secret
                ));
            }
            PveAuth::Password { password } => {
                pve.ticket = Some(pve.login(&conn.user, password).await?);
                log::debug!("Ticket login succeeded for {}", conn.user);
            }
        }

        Ok(pve)
    }

    /// Obtain a login ticket for password authentication.
    async fn login(&self, user: &str, password: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct TicketResponse {
            ticket: String,
        }

        let request = self
            .client
            .post(format!("{}/access/ticket", self.base_url))
            .form(&[("username", user), ("password", password)]);

        let body = http::execute(request, "POST", "/access/ticket").await?;
        let response: TicketResponse = http::parse_data(&body)?;
        Ok(response.ticket)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let request = match &self.auth_header {
            Some(header) => request.header("Authorization", header),
            None => request,
        };
        match &self.ticket {
            Some(ticket) => request.header("Cookie", format!("PVEAuthCookie={ticket}")),
            None => request,
        }
    }

    /// Execute an authenticated GET and unwrap the data envelope.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self
            .authorized(self.client.get(format!("{}{}", self.base_url, path)));
        let body = http::execute(request, "GET", path).await?;
        http::parse_data(&body)
    }
}

#[async_trait]
impl AccessApi for PveClient {
    async fn get_realm(&self, realm: &str) -> Result<RealmRecord> {
        let path = format!("/access/domains/{}", urlencoding::encode(realm));
        let mut record: RealmRecord = self.get(&path).await?;
        // The single-realm endpoint returns the config only; merge the
        // requested id back in.
        record.realm = realm.to_string();
        Ok(record)
    }

    async fn list_realms(&self) -> Result<Vec<RealmRecord>> {
        self.get("/access/domains").await
    }
}
