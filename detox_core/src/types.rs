//! Core domain types for the detox engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Affliction identifiers and active affliction instances
//! - Classification outcomes for the condition and tolerance passes
//! - The per-call treatment result

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Affliction Types
// ============================================================================

/// Identifier naming one kind of affliction (case-sensitive).
///
/// Must match the host's affliction-definition identifiers exactly.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AfflictionId(String);

impl AfflictionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AfflictionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AfflictionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AfflictionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Host-assigned reference to one affliction instance on a subject.
///
/// Stays valid after other afflictions on the same subject are removed.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AfflictionHandle(pub u64);

/// One affliction currently attached to a subject's health record
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveAffliction {
    pub handle: AfflictionHandle,
    pub id: AfflictionId,
    /// Display label; empty means "use the catalog/default label"
    #[serde(default)]
    pub label: String,
}

// ============================================================================
// Classification Types
// ============================================================================

/// Outcome of the first (addiction/withdrawal) classification pass
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationOutcome {
    ExplicitAddiction,
    ExplicitWithdrawal,
    HeuristicMatch,
    Excluded,
    NotApplicable,
}

impl ClassificationOutcome {
    /// Whether an affliction with this outcome is cured by treatment
    pub fn is_treatable(self) -> bool {
        matches!(
            self,
            Self::ExplicitAddiction | Self::ExplicitWithdrawal | Self::HeuristicMatch
        )
    }
}

/// Outcome of the chemical-tolerance pass
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceOutcome {
    ToleranceRemovable,
    ToleranceProtected,
    NotTolerance,
}

impl ToleranceOutcome {
    pub fn is_removable(self) -> bool {
        self == Self::ToleranceRemovable
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Summary of one treatment pass. Built fresh per call, never persisted.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetoxResult {
    pub removed_count: usize,
    /// Labels of the addictions/withdrawals treated (tolerances are not listed)
    pub removed_labels: Vec<String>,
    pub any_removed: bool,
}

impl DetoxResult {
    /// The result for a subject with nothing to do
    pub fn empty() -> Self {
        Self::default()
    }
}
