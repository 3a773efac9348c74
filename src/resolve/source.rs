//! Release lookup trait backing the resolver

#[cfg(test)]
use mockall::automock;

use crate::resolve::error::SourceError;

/// Trait for querying released replicated versions
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Returns the version pinned for an app, if any.
    ///
    /// A pin is operator-enforced version locking; when present it overrides
    /// both the channel default and any request-supplied tag.
    async fn app_pinned_version(
        &self,
        app_id: &str,
        scope: &str,
    ) -> Result<Option<String>, SourceError>;

    /// Returns the current published version for a channel
    async fn channel_current_version(&self, channel: &str) -> Result<String, SourceError>;

    /// Checks whether a version string names a real replicated release
    async fn is_valid_replicated_version(&self, version: &str) -> Result<bool, SourceError>;
}
