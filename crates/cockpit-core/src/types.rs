use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Enums
// =============================================================================

/// Functional category of an action. Drives base priority.
///
/// Variant order is the feed tie-break order: `Protect < Earn < Watch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Lane {
    /// Security findings that protect funds.
    Protect,
    /// Yield and opportunity actions.
    Earn,
    /// Informational items worth keeping an eye on.
    Watch,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Protect, Lane::Earn, Lane::Watch];

    /// Lowercase tag matched against `AdapterContext::alert_tags`.
    pub fn tag(&self) -> &'static str {
        match self {
            Lane::Protect => "protect",
            Lane::Earn => "earn",
            Lane::Watch => "watch",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lane::Protect => write!(f, "Protect"),
            Lane::Earn => write!(f, "Earn"),
            Lane::Watch => write!(f, "Watch"),
        }
    }
}

impl std::str::FromStr for Lane {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Protect" => Ok(Lane::Protect),
            "Earn" => Ok(Lane::Earn),
            "Watch" => Ok(Lane::Watch),
            _ => Err(format!("Unknown lane: {}", s)),
        }
    }
}

/// Criticality of the underlying finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Med,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Med,
        Severity::Low,
    ];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::High => write!(f, "high"),
            Severity::Med => write!(f, "med"),
            Severity::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "med" => Ok(Severity::Med),
            "low" => Ok(Severity::Low),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// Recency classification relative to the user's last view and any expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    New,
    Updated,
    Expiring,
    Stable,
}

impl Freshness {
    pub const ALL: [Freshness; 4] = [
        Freshness::New,
        Freshness::Updated,
        Freshness::Expiring,
        Freshness::Stable,
    ];
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Freshness::New => write!(f, "new"),
            Freshness::Updated => write!(f, "updated"),
            Freshness::Expiring => write!(f, "expiring"),
            Freshness::Stable => write!(f, "stable"),
        }
    }
}

impl std::str::FromStr for Freshness {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Freshness::New),
            "updated" => Ok(Freshness::Updated),
            "expiring" => Ok(Freshness::Expiring),
            "stable" => Ok(Freshness::Stable),
            _ => Err(format!("Unknown freshness: {}", s)),
        }
    }
}

/// How the claim behind an action was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Confirmed on-chain fact.
    Confirmed,
    /// Result of a transaction simulation.
    Simulated,
    /// Inferred by a heuristic.
    Heuristic,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Confirmed => write!(f, "confirmed"),
            Provenance::Simulated => write!(f, "simulated"),
            Provenance::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Trust badge shown next to an action after provenance gating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustLabel {
    Verified,
    Simulated,
    Estimated,
    Unverified,
}

impl fmt::Display for TrustLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrustLabel::Verified => write!(f, "verified"),
            TrustLabel::Simulated => write!(f, "simulated"),
            TrustLabel::Estimated => write!(f, "estimated"),
            TrustLabel::Unverified => write!(f, "unverified"),
        }
    }
}

/// Call-to-action button kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CtaKind {
    Fix,
    Execute,
    Review,
}

impl fmt::Display for CtaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CtaKind::Fix => write!(f, "Fix"),
            CtaKind::Execute => write!(f, "Execute"),
            CtaKind::Review => write!(f, "Review"),
        }
    }
}

/// Quantitative callout shown on an action card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactChipKind {
    RiskDelta,
    GasEstUsd,
    TimeEstSec,
    UpsideEstUsd,
}

/// Upstream subsystem that produced a draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Security alerts and approval scanning.
    Security,
    /// Yield and airdrop opportunities.
    Opportunity,
    /// Tax-loss harvesting and reporting actions.
    Tax,
    /// Portfolio-level observations.
    Portfolio,
}

impl SourceKind {
    /// Lowercase tag matched against `AdapterContext::alert_tags`.
    pub fn tag(&self) -> &'static str {
        match self {
            SourceKind::Security => "security",
            SourceKind::Opportunity => "opportunity",
            SourceKind::Tax => "tax",
            SourceKind::Portfolio => "portfolio",
        }
    }
}

// =============================================================================
// Newtype Wrappers - Score inputs
// =============================================================================

/// Urgency contribution. Range: 0 to 100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UrgencyScore(u8);

impl UrgencyScore {
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> i32 {
        self.0 as i32
    }
}

/// Context relevance contribution. Range: 0 to 30.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RelevanceScore(u8);

impl RelevanceScore {
    pub const MAX: u8 = 30;

    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> i32 {
        self.0 as i32
    }
}

// =============================================================================
// Records
// =============================================================================

/// Call-to-action attached to a draft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub kind: CtaKind,
    pub href: String,
}

/// A single quantitative callout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactChip {
    pub kind: ImpactChipKind,
    pub value: f64,
}

/// Origin subsystem and its internal reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionSource {
    pub kind: SourceKind,
    pub ref_id: String,
}

/// An unranked candidate action produced by an upstream collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionDraft {
    pub id: String,
    pub lane: Lane,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub severity: Severity,
    pub provenance: Provenance,
    pub is_executable: bool,
    pub cta: Cta,
    #[serde(default)]
    pub impact_chips: Vec<ImpactChip>,
    pub event_time: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub source: ActionSource,
    #[serde(rename = "_created_at", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updated_at", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ActionDraft {
    /// Creation time, falling back to the event time when not recorded.
    pub fn created_or_event_time(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or(self.event_time)
    }
}

/// Per-request session context, read-only for a ranking pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterContext {
    /// When the user last viewed the feed.
    pub last_opened_at: Option<DateTime<Utc>>,
    /// Upstream sources are operating at reduced confidence.
    pub degraded_mode: bool,
    /// Reference ids the user has bookmarked.
    pub saved_ref_ids: BTreeSet<String>,
    /// Wallet address to role label.
    pub wallet_roles: BTreeMap<String, String>,
    /// Alert tags currently active for the user.
    pub alert_tags: BTreeSet<String>,
}

impl AdapterContext {
    pub fn is_saved(&self, ref_id: &str) -> bool {
        self.saved_ref_ids.contains(ref_id)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.alert_tags.contains(tag)
    }

    /// True if any wallet holds one of `roles` (ASCII case-insensitive).
    pub fn has_any_role(&self, roles: &[String]) -> bool {
        self.wallet_roles
            .values()
            .any(|held| roles.iter().any(|r| r.eq_ignore_ascii_case(held)))
    }
}
