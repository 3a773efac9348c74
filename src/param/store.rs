//! Two-tier parameter store with an in-memory overlay cache

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::config::USE_REMOTE_PARAMETERS_ENV;
use crate::param::error::ParamError;
use crate::param::remote::{HttpParamClient, RemoteParams};

/// Backing mode of a [`ParamStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamMode {
    /// Reads come from process environment variables
    Local,
    /// Reads come from the remote parameter service, through the overlay
    Remote,
}

/// Backing store selected at construction time
enum Backing {
    Local,
    Remote(Arc<dyn RemoteParams>),
}

/// Parameter store shared by the whole process.
///
/// The overlay maps remote keys to values regardless of mode. In remote mode
/// it acts as a read-through cache; in local mode reads bypass it entirely so
/// lookups always reflect the current environment.
pub struct ParamStore {
    backing: Backing,
    entries: Mutex<HashMap<String, String>>,
}

impl ParamStore {
    /// Builds a store from the `USE_REMOTE_PARAMETERS` environment flag.
    ///
    /// Remote mode requires a reachable parameter service configuration;
    /// errors from establishing the client propagate so startup fails fast.
    /// Safe to call again; each call starts with an empty overlay.
    pub fn init() -> Result<Self, ParamError> {
        match std::env::var(USE_REMOTE_PARAMETERS_ENV) {
            Ok(flag) if !flag.is_empty() => {
                debug!("Parameter store initialized in remote mode");
                Ok(Self::remote(Arc::new(HttpParamClient::from_env()?)))
            }
            _ => {
                debug!("Parameter store initialized in local mode");
                Ok(Self::local())
            }
        }
    }

    /// Creates a local-mode store reading from process environment variables
    pub fn local() -> Self {
        Self {
            backing: Backing::Local,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a remote-mode store backed by the given parameter service
    pub fn remote(client: Arc<dyn RemoteParams>) -> Self {
        Self {
            backing: Backing::Remote(client),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the backing mode of this store
    pub fn mode(&self) -> ParamMode {
        match self.backing {
            Backing::Local => ParamMode::Local,
            Backing::Remote(_) => ParamMode::Remote,
        }
    }

    /// Acquire the overlay lock with proper error handling
    fn lock_entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, ParamError> {
        self.entries.lock().map_err(|_| ParamError::LockPoisoned)
    }

    /// Looks up a parameter, falling back to `default` on a miss.
    ///
    /// Local mode reads the `env_name` environment variable directly; the
    /// overlay is not consulted. Remote mode checks the overlay first and on
    /// a miss fetches `remote_key` from the service, caching any hit. An
    /// absent remote parameter resolves to `default`, not an error.
    pub async fn lookup(
        &self,
        env_name: &str,
        remote_key: &str,
        default: &str,
    ) -> Result<String, ParamError> {
        match &self.backing {
            Backing::Local => Ok(std::env::var(env_name)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())),
            Backing::Remote(client) => {
                if let Some(cached) = self.get(remote_key)? {
                    return Ok(cached);
                }

                match client.fetch(remote_key).await? {
                    Some(value) => {
                        debug!("Caching parameter {}", remote_key);
                        self.set(remote_key, &value)?;
                        Ok(value)
                    }
                    None => Ok(default.to_string()),
                }
            }
        }
    }

    /// Returns the overlay value for `remote_key`. Never calls the service.
    pub fn get(&self, remote_key: &str) -> Result<Option<String>, ParamError> {
        Ok(self.lock_entries()?.get(remote_key).cloned())
    }

    /// Writes `value` into the overlay, regardless of mode
    pub fn set(&self, remote_key: &str, value: &str) -> Result<(), ParamError> {
        self.lock_entries()?
            .insert(remote_key.to_string(), value.to_string());
        Ok(())
    }
}
