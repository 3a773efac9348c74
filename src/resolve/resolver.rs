//! Precedence logic for resolving installer artifact versions

use tracing::{debug, warn};

use crate::resolve::error::SourceError;
use crate::resolve::semver::{is_range_spec, version_satisfies};
use crate::resolve::source::VersionSource;
use crate::resolve::types::ResolutionRequest;

/// Outcome of a resolution.
///
/// An unsatisfiable range request is a distinct outcome, never silently
/// replaced with an unrelated version; the boundary layer turns it into a
/// client-visible "no version found" response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The effective version to serve
    Version(String),
    /// No published version satisfies the requested range
    NoMatchingVersion { requested: String },
}

impl Resolution {
    /// Returns the resolved version, or None for a no-match outcome
    pub fn version(&self) -> Option<&str> {
        match self {
            Resolution::Version(v) => Some(v.as_str()),
            Resolution::NoMatchingVersion { .. } => None,
        }
    }
}

/// Resolves versions for the base installer and its ui/operator variants.
///
/// Precedence, highest first: an app pin, a request-supplied override
/// (exact tag or range), the channel's current published version. The base
/// override also constrains ui/operator unless they carry their own.
pub struct VersionResolver<S: VersionSource> {
    source: S,
}

impl<S: VersionSource> VersionResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolves the base installer version
    pub async fn replicated_version(
        &self,
        request: &ResolutionRequest,
    ) -> Result<Resolution, SourceError> {
        self.resolve(request, request.overrides.replicated_tag.as_deref())
            .await
    }

    /// Resolves the ui artifact version
    pub async fn replicated_ui_version(
        &self,
        request: &ResolutionRequest,
    ) -> Result<Resolution, SourceError> {
        let requested = request
            .overrides
            .replicated_ui_tag
            .as_deref()
            .or(request.overrides.replicated_tag.as_deref());
        self.resolve(request, requested).await
    }

    /// Resolves the operator artifact version
    pub async fn replicated_operator_version(
        &self,
        request: &ResolutionRequest,
    ) -> Result<Resolution, SourceError> {
        let requested = request
            .overrides
            .replicated_operator_tag
            .as_deref()
            .or(request.overrides.replicated_tag.as_deref());
        self.resolve(request, requested).await
    }

    /// Shared precedence walk; each tier either produces a definite outcome
    /// or falls through to the next.
    async fn resolve(
        &self,
        request: &ResolutionRequest,
        requested: Option<&str>,
    ) -> Result<Resolution, SourceError> {
        if let Some(pinned) = self
            .source
            .app_pinned_version(&request.app_id, &request.scope)
            .await?
        {
            debug!("App {} is pinned to replicated {}", request.app_id, pinned);
            return Ok(Resolution::Version(pinned));
        }

        if let Some(tag) = requested {
            if is_range_spec(tag) {
                let current = self
                    .source
                    .channel_current_version(&request.channel)
                    .await?;
                if version_satisfies(&current, tag) {
                    return Ok(Resolution::Version(current));
                }
                warn!(
                    "Channel {} current version {} does not satisfy requested range {}",
                    request.channel, current, tag
                );
                return Ok(Resolution::NoMatchingVersion {
                    requested: tag.to_string(),
                });
            }

            if self.source.is_valid_replicated_version(tag).await? {
                return Ok(Resolution::Version(tag.to_string()));
            }
            debug!("Ignoring unknown requested version {}", tag);
        }

        let current = self
            .source
            .channel_current_version(&request.channel)
            .await?;
        Ok(Resolution::Version(current))
    }
}
