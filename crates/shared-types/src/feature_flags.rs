use serde::{Deserialize, Serialize};

/// Feature flags controlling optional behavior.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false` so that a
/// missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Pause public service-request intake (the modal refuses to submit
    /// and asks customers to call instead).
    #[serde(default)]
    pub maintenance: bool,
    /// Serve the interactive API reference at `/docs`.
    #[serde(default)]
    pub docs: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}
