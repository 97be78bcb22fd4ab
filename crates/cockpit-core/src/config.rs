use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CockpitError, Result};

/// Top-level configuration for the cockpit ranking engine.
///
/// Loaded from `~/.cockpit/config.toml` by default. Score weights are fixed
/// in code; only the time-based policy constants live here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CockpitConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
}

impl CockpitConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CockpitConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CockpitError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Ranking policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Skip drafts whose `expires_at` is already in the past.
    pub drop_expired: bool,
    /// Wallet role labels that keep `Execute` on simulated actions.
    pub elevated_wallet_roles: Vec<String>,
    #[serde(default)]
    pub urgency: UrgencyPolicy,
    #[serde(default)]
    pub freshness: FreshnessPolicy,
    #[serde(default)]
    pub burst: BurstPolicy,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            drop_expired: false,
            elevated_wallet_roles: vec!["owner".to_string(), "admin".to_string()],
            urgency: UrgencyPolicy::default(),
            freshness: FreshnessPolicy::default(),
            burst: BurstPolicy::default(),
        }
    }
}

/// Urgency band horizons and implicit severity deadlines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrgencyPolicy {
    /// Deadlines closer than this land in the 90-100 band.
    pub top_band_hours: u32,
    /// Deadlines closer than this (and past the top band) land in 60-89.
    pub high_band_hours: u32,
    /// Implicit deadline after `event_time` for critical drafts without expiry.
    pub critical_deadline_hours: u32,
    /// Implicit deadline after `event_time` for high drafts without expiry.
    pub high_deadline_hours: u32,
}

impl Default for UrgencyPolicy {
    fn default() -> Self {
        Self {
            top_band_hours: 24,
            high_band_hours: 72,
            critical_deadline_hours: 24,
            high_deadline_hours: 72,
        }
    }
}

/// Freshness classification window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FreshnessPolicy {
    /// A draft is `expiring` once its expiry is this close.
    pub expiring_window_hours: u32,
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self {
            expiring_window_hours: 24,
        }
    }
}

/// Burst detection for clusters of similar events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstPolicy {
    /// Minimum drafts (including the draft itself) that form a burst.
    pub min_cluster_size: usize,
    /// Maximum `event_time` distance between cluster members.
    pub window_minutes: u32,
}

impl Default for BurstPolicy {
    fn default() -> Self {
        Self {
            min_cluster_size: 3,
            window_minutes: 60,
        }
    }
}
