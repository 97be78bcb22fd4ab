//! Cockpit application binary - command-line harness for the ranking engine.
//!
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML
//! 3. Initialize tracing (logs go to stderr, results to stdout)
//! 4. Report a config fallback, if any
//! 5. Run the requested command

mod cli;

use std::path::Path;

use chrono::Utc;
use clap::Parser;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use cockpit_core::config::CockpitConfig;
use cockpit_core::error::CockpitError;
use cockpit_core::types::{AdapterContext, RelevanceScore, UrgencyScore};
use cockpit_rank::validate::parse_batch_value;
use cockpit_rank::{sort_for_feed, Audience, RankingEngine, ScoreBreakdown, ScoreParams};

use cli::{CliArgs, Command};

/// Input file for `cockpit rank`.
#[derive(Debug, Deserialize)]
struct RankInput {
    drafts: Value,
    #[serde(default)]
    context: AdapterContext,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let config_path = args.resolve_config_path();
    let (config, config_error) = load_config(&config_path);

    let default_level = args
        .resolve_log_level()
        .unwrap_or_else(|| config.general.log_level.clone());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&default_level)),
        )
        .init();

    if let Some(err) = config_error {
        report_config_fallback(&config_path, &err);
    }

    match args.command {
        Command::Rank {
            input,
            preview,
            now,
            unsorted,
            pretty,
        } => {
            let audience = if preview {
                Audience::Preview
            } else {
                Audience::Full
            };
            let now = now.unwrap_or_else(Utc::now);
            let output = run_rank(&input, config, audience, now, !unsorted)?;
            print_json(&output, pretty)?;
        }
        Command::Score {
            lane,
            severity,
            urgency,
            freshness,
            relevance,
            burst,
            degraded,
            duplicate,
        } => {
            let params = ScoreParams {
                lane,
                severity,
                urgency_score: UrgencyScore::new(urgency),
                freshness,
                relevance_score: RelevanceScore::new(relevance),
                is_burst: burst,
                is_degraded: degraded,
                is_duplicate: duplicate,
            };
            let breakdown = ScoreBreakdown::of(&params);
            print_json(
                &json!({ "score": breakdown.total(), "breakdown": breakdown }),
                true,
            )?;
        }
        Command::InitConfig { force } => {
            if config_path.exists() && !force {
                warn!(
                    path = %config_path.display(),
                    "Config file already exists; pass --force to overwrite"
                );
                return Ok(());
            }
            CockpitConfig::default().save(&config_path)?;
        }
    }

    Ok(())
}

/// Load the config file, keeping any failure so it can be reported once the
/// subscriber is installed.
fn load_config(path: &Path) -> (CockpitConfig, Option<CockpitError>) {
    match CockpitConfig::load(path) {
        Ok(config) => (config, None),
        Err(err) => (CockpitConfig::default(), Some(err)),
    }
}

fn report_config_fallback(path: &Path, err: &CockpitError) {
    match err {
        CockpitError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "No config file found. Using defaults.");
        }
        _ => warn!(
            path = %path.display(),
            error = %err,
            "Failed to load config. Using defaults."
        ),
    }
}

fn run_rank(
    input: &Path,
    config: CockpitConfig,
    audience: Audience,
    now: chrono::DateTime<Utc>,
    sorted: bool,
) -> Result<Value, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(input)?;
    let RankInput { drafts, context } = serde_json::from_str(&content)?;
    let batch = parse_batch_value(drafts)?;

    info!(input = %input.display(), drafts = batch.drafts.len(), "Ranking input loaded");

    let engine = RankingEngine::new(config.ranking);
    let mut outcome = engine.rank_batch(batch, &context, now, audience);
    if sorted {
        sort_for_feed(&mut outcome.actions);
    }

    let rejected: Vec<Value> = outcome
        .rejected
        .iter()
        .map(|e| {
            json!({
                "index": e.index,
                "id": e.draft_id,
                "reason": e.issue.to_string(),
            })
        })
        .collect();

    Ok(json!({
        "evaluated_at": now,
        "audience": audience,
        "visible": outcome.visible_count(),
        "expired": outcome.expired,
        "actions": outcome.actions,
        "rejected": rejected,
    }))
}

fn print_json(value: &Value, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}
