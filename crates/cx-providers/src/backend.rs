use std::time::Duration;

use cx_types::{CxUser, DataEnvelope, LoginCredentials};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ProviderError;

/// Where the external REST backend lives and which paths it exposes.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct BackendConfig {
    pub host_url: String,
    pub cx_users_path: String,
    pub registered_users_path: String,
    pub sign_in_path: String,
    /// The weekly summary is served by a separate reporting service, so it takes a full URL.
    pub weekly_summary_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host_url: "http://localhost:3001".into(),
            cx_users_path: "/cx-redbooth/connextar-users".into(),
            registered_users_path: "/account/registered-users".into(),
            sign_in_path: "/account/sign-in".into(),
            weekly_summary_url: "http://localhost:3001/generate-weekly-summary".into(),
            timeout_secs: 10,
        }
    }
}

/// Thin reqwest wrapper: one request per call, no retries.
#[derive(Clone, Debug)]
pub struct BackendClient {
    config: BackendConfig,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ProviderError::Client)?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.host_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ProviderError> {
        debug!("GET {url}");

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(source) => {
                warn!("GET {url} failed: {source}");
                return Err(ProviderError::Http { url, source });
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("GET {url} returned {status}");
            return Err(ProviderError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ProviderError::Decode { url, source })
    }

    /// `GET {host}{cx_users_path}` → `{ data: [CxUser] }`. A null `data` is an empty list.
    pub async fn fetch_cx_users(&self) -> Result<Vec<CxUser>, ProviderError> {
        let envelope: DataEnvelope<Option<Vec<CxUser>>> =
            self.get_json(self.url(&self.config.cx_users_path)).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// `GET {host}{registered_users_path}` → `[email]`.
    pub async fn fetch_registered_users(&self) -> Result<Vec<String>, ProviderError> {
        self.get_json(self.url(&self.config.registered_users_path))
            .await
    }

    /// `GET {weekly_summary_url}` → `{ data: { data: [...] } }`. Entries are passed through untyped.
    pub async fn fetch_weekly_summary(&self) -> Result<Vec<Value>, ProviderError> {
        let envelope: DataEnvelope<DataEnvelope<Option<Vec<Value>>>> =
            self.get_json(self.config.weekly_summary_url.clone()).await?;
        Ok(envelope.data.data.unwrap_or_default())
    }

    /// Delegates authentication to the sign-in provider.
    ///
    /// Any 2xx is a successful sign-in. A 4xx is a rejection carrying the provider's
    /// `error` or `message` text; everything else is reported as a transport problem.
    pub async fn sign_in(&self, credentials: &LoginCredentials) -> Result<(), ProviderError> {
        let url = self.url(&self.config.sign_in_path);
        debug!("POST {url} for {}", credentials.email);

        let response = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        if status.is_client_error() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = rejection_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("sign-in rejected").to_string());
            return Err(ProviderError::Rejected(message));
        }

        warn!("POST {url} returned {status}");
        Err(ProviderError::Status {
            url,
            status: status.as_u16(),
        })
    }
}

fn rejection_message(body: &Value) -> Option<String> {
    ["error", "message"].iter().find_map(|key| {
        body.get(*key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejection_prefers_error_over_message() {
        let body = json!({ "error": "Invalid password", "message": "Unauthorized" });
        assert_eq!(rejection_message(&body).as_deref(), Some("Invalid password"));
    }

    #[test]
    fn rejection_falls_back_to_message_and_skips_empty() {
        let body = json!({ "error": "", "message": "Account locked" });
        assert_eq!(rejection_message(&body).as_deref(), Some("Account locked"));
        assert_eq!(rejection_message(&Value::Null), None);
    }

    #[test]
    fn joins_host_and_path_without_double_slash() {
        let client = BackendClient::new(BackendConfig {
            host_url: "http://backend:4000/".into(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            client.url("/account/sign-in"),
            "http://backend:4000/account/sign-in"
        );
    }
}
