//! Low-level HTTP client for the Supabase-style REST backend.
//!
//! All domain adapters in this crate go through [`RemoteClient`], which
//! handles the `/rest/v1` URL scheme, auth headers, and the mapping from
//! transport failures to [`RemoteError`].

use log::debug;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use hencoop_core::errors::{RemoteError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the backend.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub base_url: String,
    /// Anonymous project API key, sent as the `apikey` header.
    pub api_key: String,
    /// Access token for the signed-in identity, sent as a bearer token.
    pub access_token: String,
}

/// HTTP client for the REST backend.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: Client,
    config: RemoteConfig,
}

impl RemoteClient {
    pub fn new(config: RemoteConfig) -> std::result::Result<Self, RemoteError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RemoteError::Internal(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            path
        )
    }

    /// Calls a named RPC function and decodes the JSON result.
    pub async fn rpc<P: Serialize, T: DeserializeOwned>(
        &self,
        function: &str,
        payload: &P,
    ) -> Result<T> {
        let url = self.rest_url(&format!("rpc/{function}"));
        debug!("RPC {}", function);
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.access_token)
            .json(payload)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_json(check_status(response).await?).await
    }

    /// Inserts a row into a table, ignoring the response body.
    pub async fn insert<B: Serialize>(&self, table: &str, body: &B) -> Result<()> {
        let url = self.rest_url(table);
        debug!("INSERT into {}", table);
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.api_key)
            .header("Prefer", "return=minimal")
            .bearer_auth(&self.config.access_token)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;
        check_status(response).await?;
        Ok(())
    }

    /// Patches rows matching a PostgREST filter, e.g. `id=eq.42`.
    pub async fn patch<B: Serialize>(&self, table: &str, filter: &str, body: &B) -> Result<()> {
        let url = format!("{}?{}", self.rest_url(table), filter);
        debug!("PATCH {} where {}", table, filter);
        let response = self
            .http
            .patch(&url)
            .header("apikey", &self.config.api_key)
            .header("Prefer", "return=minimal")
            .bearer_auth(&self.config.access_token)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;
        check_status(response).await?;
        Ok(())
    }

    /// Selects rows with a PostgREST query string and decodes the result.
    pub async fn select<T: DeserializeOwned>(&self, table: &str, query: &str) -> Result<T> {
        let url = format!("{}?{}", self.rest_url(table), query);
        debug!("SELECT from {} where {}", table, query);
        let response = self
            .http
            .get(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.access_token)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_json(check_status(response).await?).await
    }
}

fn map_transport_error(err: reqwest::Error) -> hencoop_core::Error {
    if err.is_timeout() || err.is_connect() {
        RemoteError::Unreachable(err.to_string()).into()
    } else if err.is_decode() {
        RemoteError::Decode(err.to_string()).into()
    } else {
        RemoteError::Internal(err.to_string()).into()
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    let err = if status == StatusCode::NOT_FOUND {
        RemoteError::NotFound(message)
    } else {
        RemoteError::Rejected {
            status: status.as_u16(),
            message,
        }
    };
    Err(err.into())
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| RemoteError::Decode(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_url_joins_without_double_slash() {
        let client = RemoteClient::new(RemoteConfig {
            base_url: "https://xyz.supabase.co/".to_string(),
            api_key: "anon".to_string(),
            access_token: "jwt".to_string(),
        })
        .unwrap();
        assert_eq!(
            client.rest_url("rpc/get_wallet_data"),
            "https://xyz.supabase.co/rest/v1/rpc/get_wallet_data"
        );
    }
}
