//! CLI argument definitions for the cockpit harness.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use cockpit_core::types::{Freshness, Lane, Severity};

/// Cockpit - rank, gate and score DeFi actions.
#[derive(Parser, Debug)]
#[command(name = "cockpit", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank a batch of drafts and print the finalized actions as JSON.
    Rank {
        /// JSON file holding `{ "drafts": [...], "context": {...} }`.
        #[arg(short = 'i', long = "input")]
        input: PathBuf,

        /// Rank for a preview-tier user.
        #[arg(long = "preview")]
        preview: bool,

        /// Evaluation time (RFC 3339). Defaults to the current time.
        #[arg(long = "now")]
        now: Option<DateTime<Utc>>,

        /// Keep input order instead of sorting for the feed.
        #[arg(long = "unsorted")]
        unsorted: bool,

        /// Pretty-print the output.
        #[arg(long = "pretty")]
        pretty: bool,
    },
    /// Compute a single score from explicit inputs.
    Score {
        #[arg(long = "lane")]
        lane: Lane,

        #[arg(long = "severity")]
        severity: Severity,

        /// 0 to 100; out-of-range values are clamped.
        #[arg(long = "urgency", default_value_t = 0, allow_negative_numbers = true)]
        urgency: i64,

        #[arg(long = "freshness", default_value = "stable")]
        freshness: Freshness,

        /// 0 to 30; out-of-range values are clamped.
        #[arg(long = "relevance", default_value_t = 0, allow_negative_numbers = true)]
        relevance: i64,

        #[arg(long = "burst")]
        burst: bool,

        #[arg(long = "degraded")]
        degraded: bool,

        #[arg(long = "duplicate")]
        duplicate: bool,
    },
    /// Write the default configuration to the resolved config path.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long = "force")]
        force: bool,
    },
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > COCKPIT_CONFIG env var > ~/.cockpit/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("COCKPIT_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level. Returns `None` if not overridden.
    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".cockpit").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".cockpit").join("config.toml");
    }
    PathBuf::from("config.toml")
}
