use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Bases preselected in the form at startup.
///
/// Both entries are optional; an absent entry leaves the corresponding group
/// with nothing selected, same as a fresh session.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Defaults {
    /// Radix preselected in the FROM group (2, 8, 10, or 16).
    #[serde(default)]
    pub from_base: Option<u32>,
    /// Radix preselected in the TO group (2, 8, 10, or 16).
    #[serde(default)]
    pub to_base: Option<u32>,
}

/// UI tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
