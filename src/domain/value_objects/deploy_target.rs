//! Deployment target value object - which function app to ship to.

/// Application name used when neither the CLI nor config names one.
pub const DEFAULT_APP_NAME: &str = "az-ss-sync";

/// Resource group used when neither the CLI nor config names one.
pub const DEFAULT_RESOURCE_GROUP: &str = "phx-sh-automation-us-1";

/// The function app a deploy run operates on.
///
/// Built once at startup and read-only afterwards. Identifier syntax is
/// left to the platform; only emptiness is checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentTarget {
    pub app_name: String,
    pub resource_group: String,
}

impl DeploymentTarget {
    pub fn new(app_name: impl Into<String>, resource_group: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            resource_group: resource_group.into(),
        }
    }

    /// Resolve positional arguments against fallbacks.
    ///
    /// An absent *or empty* argument takes the fallback, so `deploy "" myrg`
    /// keeps the default app name.
    pub fn resolve(
        app_name: Option<&str>,
        resource_group: Option<&str>,
        fallback: &DeploymentTarget,
    ) -> Self {
        fn pick(arg: Option<&str>, fallback: &str) -> String {
            match arg {
                Some(value) if !value.is_empty() => value.to_string(),
                _ => fallback.to_string(),
            }
        }

        Self {
            app_name: pick(app_name, &fallback.app_name),
            resource_group: pick(resource_group, &fallback.resource_group),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.app_name.is_empty() && !self.resource_group.is_empty()
    }
}

impl Default for DeploymentTarget {
    fn default() -> Self {
        Self::new(DEFAULT_APP_NAME, DEFAULT_RESOURCE_GROUP)
    }
}
