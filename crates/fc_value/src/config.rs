//! Engine configuration.
//!
//! The only knob is the host profile. It can be set in code, loaded from a
//! serialized config, or read from `FC_HOST_PROFILE`.

use serde::{Deserialize, Serialize};

use crate::classify::{classify_with, Category, HostProfile};
use crate::clone::deep_clone_with;
use crate::merge::deep_extend_with;
use crate::Value;

/// Environment variable consulted by [`EngineConfig::from_env`].
pub const HOST_PROFILE_ENV: &str = "FC_HOST_PROFILE";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub host: HostProfile,
}

impl EngineConfig {
    #[must_use]
    pub fn with_host(mut self, host: HostProfile) -> Self {
        self.host = host;
        self
    }

    /// Read the host profile from `FC_HOST_PROFILE`.
    ///
    /// Unset or unrecognized values fall back to the standard profile.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(HOST_PROFILE_ENV).ok().as_deref())
    }

    fn from_env_value(raw: Option<&str>) -> Self {
        let host = match raw.map(str::parse::<HostProfile>) {
            Some(Ok(host)) => host,
            Some(Err(reason)) => {
                tracing::warn!(%reason, "ignoring {}", HOST_PROFILE_ENV);
                HostProfile::default()
            }
            None => HostProfile::default(),
        };
        EngineConfig { host }
    }
}

/// Classifier, cloner and merger bound to one configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Engine { config }
    }

    pub fn classify(&self, value: &Value) -> Category {
        classify_with(value, self.config.host)
    }

    pub fn deep_clone(&self, value: &Value) -> Value {
        deep_clone_with(value, self.config.host)
    }

    pub fn deep_extend<'t>(&self, target: &'t mut Value, sources: &[&Value]) -> &'t mut Value {
        deep_extend_with(target, sources, self.config.host)
    }
}
