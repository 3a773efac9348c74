use crate::param::error::ParamError;
use crate::param::store::ParamStore;

// =============================================================================
// Environment flags and parameter keys
// =============================================================================

/// Non-empty value switches the parameter store to remote mode
pub const USE_REMOTE_PARAMETERS_ENV: &str = "USE_REMOTE_PARAMETERS";

/// Base URL of the remote parameter service, required in remote mode
pub const PARAMETER_SERVICE_URL_ENV: &str = "PARAMETER_SERVICE_URL";

/// Release API base URL: env name and remote parameter key
pub const REPLICATED_API_URL_ENV: &str = "REPLICATED_API_URL";
pub const REPLICATED_API_URL_KEY: &str = "/install_scripts/replicated_api_url";

/// Deployment environment name: env name and remote parameter key
pub const ENVIRONMENT_ENV: &str = "ENVIRONMENT";
pub const ENVIRONMENT_KEY: &str = "/install_scripts/environment";

/// Default base URL for the release API
pub const DEFAULT_REPLICATED_API_URL: &str = "https://api.replicated.com/market";

/// Default deployment environment
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Runtime settings resolved through the parameter store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub replicated_api_url: String,
    pub environment: String,
}

impl Settings {
    /// Loads settings via [`ParamStore::lookup`], applying defaults for
    /// anything the backing store does not provide.
    pub async fn load(store: &ParamStore) -> Result<Self, ParamError> {
        let replicated_api_url = store
            .lookup(
                REPLICATED_API_URL_ENV,
                REPLICATED_API_URL_KEY,
                DEFAULT_REPLICATED_API_URL,
            )
            .await?;
        let environment = store
            .lookup(ENVIRONMENT_ENV, ENVIRONMENT_KEY, DEFAULT_ENVIRONMENT)
            .await?;

        Ok(Self {
            replicated_api_url,
            environment,
        })
    }
}
