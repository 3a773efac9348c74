//! Remote parameter service client

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;
use tracing::warn;

use crate::config::PARAMETER_SERVICE_URL_ENV;
use crate::param::error::ParamError;

/// Trait for fetching parameters from a remote key/value service
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RemoteParams: Send + Sync {
    /// Fetches a single parameter by its remote key
    ///
    /// # Returns
    /// * `Ok(Some(value))` - The parameter exists and has a value
    /// * `Ok(None)` - The parameter is absent (treated as a miss, not an error)
    /// * `Err(ParamError)` - Transport failure
    async fn fetch(&self, remote_key: &str) -> Result<Option<String>, ParamError>;
}

/// Response from the parameter service API
#[derive(Debug, Deserialize)]
struct ParameterResponse {
    parameter: ParameterBody,
}

#[derive(Debug, Deserialize)]
struct ParameterBody {
    #[allow(dead_code)]
    name: Option<String>,
    value: Option<String>,
}

/// HTTP client for the remote parameter service
pub struct HttpParamClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpParamClient {
    /// Creates a new HttpParamClient with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("install-resolver")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client from the `PARAMETER_SERVICE_URL` environment variable.
    ///
    /// Fails fast when the variable is unset; a process configured for remote
    /// parameters must not serve traffic without a reachable service.
    pub fn from_env() -> Result<Self, ParamError> {
        match std::env::var(PARAMETER_SERVICE_URL_ENV) {
            Ok(url) if !url.is_empty() => Ok(Self::new(&url)),
            _ => Err(ParamError::MissingEnv(
                PARAMETER_SERVICE_URL_ENV.to_string(),
            )),
        }
    }

    fn parameter_url(&self, remote_key: &str) -> String {
        // Remote keys are path-shaped, e.g. "/install_scripts/environment"
        if remote_key.starts_with('/') {
            format!("{}/v1/parameters{}", self.base_url, remote_key)
        } else {
            format!("{}/v1/parameters/{}", self.base_url, remote_key)
        }
    }
}

#[async_trait::async_trait]
impl RemoteParams for HttpParamClient {
    async fn fetch(&self, remote_key: &str) -> Result<Option<String>, ParamError> {
        let url = self.parameter_url(remote_key);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            warn!("Parameter {} was not found in the parameter service", remote_key);
            return Ok(None);
        }

        if !status.is_success() {
            warn!("Parameter service returned status {}: {}", status, url);
            return Err(ParamError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body: ParameterResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                // A malformed body is recovered as a miss; the caller falls
                // back to its default value.
                warn!("Failed to parse parameter service response: {}", e);
                return Ok(None);
            }
        };

        Ok(body.parameter.value.filter(|v| !v.is_empty()))
    }
}
