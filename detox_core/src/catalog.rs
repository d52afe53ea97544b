//! Default catalog of known afflictions.
//!
//! The explicit tables name the base-game addictions, withdrawals and the
//! permanent afflictions that treatment must never touch. The naming markers
//! extend treatment to third-party content that follows the same convention.

use crate::config::CatalogConfig;
use crate::types::AfflictionId;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

/// Prefix carried by addiction ids (`Addiction_Alcohol`)
pub const ADDICTION_PREFIX: &str = "Addiction_";
/// Suffix carried by addiction ids (`LuciferiumAddiction`)
pub const ADDICTION_SUFFIX: &str = "Addiction";
/// Suffix carried by withdrawal ids (`AlcoholWithdrawal`)
pub const WITHDRAWAL_SUFFIX: &str = "Withdrawal";
/// Substring carried by chemical-tolerance ids
pub const TOLERANCE_MARKER: &str = "Tolerance";
/// Substring carried by ids tied to a permanent substance
pub const PERMANENT_SUBSTANCE_MARKER: &str = "Luciferium";

const ADDICTIONS: &[(&str, &str)] = &[
    ("Addiction_Alcohol", "Alcohol addiction"),
    ("Addiction_Smokeleaf", "Smokeleaf addiction"),
    ("Addiction_Psychite", "Psychite addiction"),
    ("Addiction_WakeUp", "Wake-up addiction"),
    ("Addiction_GoJuice", "Go-juice addiction"),
    ("Addiction_Flake", "Flake addiction"),
    ("Addiction_Yayo", "Yayo addiction"),
    ("Addiction_Beer", "Beer addiction"),
    ("Addiction_Ambrosia", "Ambrosia addiction"),
];

const WITHDRAWALS: &[(&str, &str)] = &[
    ("AlcoholWithdrawal", "Alcohol withdrawal"),
    ("SmokeleafWithdrawal", "Smokeleaf withdrawal"),
    ("PsychiteWithdrawal", "Psychite withdrawal"),
    ("WakeUpWithdrawal", "Wake-up withdrawal"),
    ("GoJuiceWithdrawal", "Go-juice withdrawal"),
    ("FlakeWithdrawal", "Flake withdrawal"),
    ("YayoWithdrawal", "Yayo withdrawal"),
    ("AmbrosiaWithdrawal", "Ambrosia withdrawal"),
];

// Luciferium mechanites can never be removed.
const EXCLUSIONS: &[(&str, &str)] = &[("LuciferiumAddiction", "Luciferium addiction")];

/// Cached default catalog - built once and never written afterwards
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Immutable rule tables used by the classifier
#[derive(Clone, Debug)]
pub struct Catalog {
    addictions: BTreeSet<AfflictionId>,
    withdrawals: BTreeSet<AfflictionId>,
    exclusions: BTreeSet<AfflictionId>,
    labels: HashMap<AfflictionId, String>,
}

/// Builds the built-in catalog from the literal tables
pub fn build_default_catalog() -> Catalog {
    let mut labels = HashMap::new();
    let mut table = |entries: &[(&str, &str)]| -> BTreeSet<AfflictionId> {
        entries
            .iter()
            .map(|(id, label)| {
                labels.insert(AfflictionId::from(*id), (*label).to_string());
                AfflictionId::from(*id)
            })
            .collect()
    };

    let addictions = table(ADDICTIONS);
    let withdrawals = table(WITHDRAWALS);
    let exclusions = table(EXCLUSIONS);

    Catalog {
        addictions,
        withdrawals,
        exclusions,
        labels,
    }
}

impl Catalog {
    /// Build the default catalog merged with ids supplied by configuration
    ///
    /// Called once at startup; the returned catalog is not modified afterwards.
    pub fn with_extensions(extra: &CatalogConfig) -> Self {
        let mut catalog = build_default_catalog();
        catalog
            .addictions
            .extend(extra.extra_addictions.iter().map(|s| AfflictionId::from(s.as_str())));
        catalog
            .withdrawals
            .extend(extra.extra_withdrawals.iter().map(|s| AfflictionId::from(s.as_str())));
        catalog
            .exclusions
            .extend(extra.extra_exclusions.iter().map(|s| AfflictionId::from(s.as_str())));
        catalog
    }

    pub fn is_explicit_addiction(&self, id: &AfflictionId) -> bool {
        self.addictions.contains(id)
    }

    pub fn is_explicit_withdrawal(&self, id: &AfflictionId) -> bool {
        self.withdrawals.contains(id)
    }

    pub fn is_excluded(&self, id: &AfflictionId) -> bool {
        self.exclusions.contains(id)
    }

    pub fn addictions(&self) -> impl Iterator<Item = &AfflictionId> {
        self.addictions.iter()
    }

    pub fn withdrawals(&self) -> impl Iterator<Item = &AfflictionId> {
        self.withdrawals.iter()
    }

    pub fn exclusions(&self) -> impl Iterator<Item = &AfflictionId> {
        self.exclusions.iter()
    }

    /// Curated label for a known id, or the id itself
    pub fn default_label(&self, id: &AfflictionId) -> String {
        self.labels
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.as_str().to_string())
    }

    /// Validate the catalog for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let tables = [
            ("addiction", &self.addictions),
            ("withdrawal", &self.withdrawals),
            ("exclusion", &self.exclusions),
        ];

        for (name, table) in &tables {
            if table.iter().any(|id| id.as_str().trim().is_empty()) {
                errors.push(format!("Catalog {} table has an empty ID", name));
            }
        }

        // The three tables are disjoint by contract
        for (i, (name_a, table_a)) in tables.iter().enumerate() {
            for (name_b, table_b) in tables.iter().skip(i + 1) {
                for id in table_a.intersection(table_b) {
                    errors.push(format!(
                        "ID '{}' appears in both the {} and {} tables",
                        id, name_a, name_b
                    ));
                }
            }
        }

        errors
    }
}
