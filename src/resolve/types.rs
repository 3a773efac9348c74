//! Request types consumed by the resolver

/// Version overrides supplied with a request.
///
/// Each field holds either an exact version tag ("2.6.0") or a range
/// expression (">=2.38.0"). The base `replicated_tag` also constrains the
/// ui/operator artifacts when their specific field is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub replicated_tag: Option<String>,
    pub replicated_ui_tag: Option<String>,
    pub replicated_operator_tag: Option<String>,
}

/// A single resolution request, discarded after producing a result
#[derive(Debug, Clone)]
pub struct ResolutionRequest {
    /// Release channel, e.g. "stable"
    pub channel: String,
    /// Application identifier
    pub app_id: String,
    /// App collection the pin lookup is scoped to, e.g. "stables"
    pub scope: String,
    pub overrides: Overrides,
}

impl ResolutionRequest {
    pub fn new(channel: &str, app_id: &str, scope: &str) -> Self {
        Self {
            channel: channel.to_string(),
            app_id: app_id.to_string(),
            scope: scope.to_string(),
            overrides: Overrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }
}
