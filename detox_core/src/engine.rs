//! Detox engine: scans a subject, plans removals, applies them.
//!
//! A treatment pass works on an owned snapshot of the subject's afflictions.
//! The complete removal plan is computed from that snapshot before the first
//! removal is requested, so the host collection is never mutated mid-scan.

use crate::catalog::{get_default_catalog, Catalog};
use crate::classifier::{classify, classify_tolerance};
use crate::notify::{deliver, Notice, Notifier, TracingNotifier};
use crate::report::collect_labels;
use crate::subject::Subject;
use crate::types::{
    ActiveAffliction, AfflictionHandle, ClassificationOutcome, DetoxResult, ToleranceOutcome,
};
use std::collections::HashSet;

/// Removals decided for one snapshot
#[derive(Clone, Debug, Default)]
pub struct RemovalPlan {
    /// Addictions and withdrawals, explicit or by naming convention
    pub conditions: Vec<ActiveAffliction>,
    /// Removable chemical tolerances not already listed in `conditions`
    pub tolerances: Vec<ActiveAffliction>,
}

impl RemovalPlan {
    /// Build the plan for a snapshot using the given catalog
    pub fn from_snapshot(catalog: &Catalog, snapshot: &[ActiveAffliction]) -> Self {
        let mut plan = RemovalPlan::default();
        let mut seen: HashSet<AfflictionHandle> = HashSet::new();

        for affliction in snapshot {
            let outcome = classify(catalog, &affliction.id);
            match outcome {
                ClassificationOutcome::ExplicitAddiction => {
                    tracing::debug!("Removing addiction: {}", affliction.id);
                }
                ClassificationOutcome::ExplicitWithdrawal => {
                    tracing::debug!("Removing withdrawal: {}", affliction.id);
                }
                ClassificationOutcome::HeuristicMatch => {
                    tracing::debug!("Removing modded addiction/withdrawal: {}", affliction.id);
                }
                ClassificationOutcome::Excluded => {
                    tracing::debug!("Skipping permanent affliction: {}", affliction.id);
                }
                ClassificationOutcome::NotApplicable => {}
            }
            if outcome.is_treatable() && seen.insert(affliction.handle) {
                plan.conditions.push(affliction.clone());
            }
        }

        for affliction in snapshot {
            match classify_tolerance(catalog, &affliction.id) {
                ToleranceOutcome::ToleranceRemovable => {
                    if seen.insert(affliction.handle) {
                        tracing::debug!("Removing tolerance: {}", affliction.id);
                        plan.tolerances.push(affliction.clone());
                    }
                }
                ToleranceOutcome::ToleranceProtected => {
                    tracing::debug!("Skipping permanent tolerance: {}", affliction.id);
                }
                ToleranceOutcome::NotTolerance => {}
            }
        }

        plan
    }

    /// Number of distinct afflictions to remove
    pub fn len(&self) -> usize {
        self.conditions.len() + self.tolerances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handles of every planned removal, conditions first
    pub fn handles(&self) -> impl Iterator<Item = AfflictionHandle> + '_ {
        self.conditions
            .iter()
            .chain(self.tolerances.iter())
            .map(|a| a.handle)
    }
}

static TRACING_NOTIFIER: TracingNotifier = TracingNotifier;

/// Runs treatment passes against a fixed catalog
#[derive(Clone, Copy)]
pub struct DetoxEngine<'a> {
    catalog: &'a Catalog,
    notifier: &'a dyn Notifier,
}

impl DetoxEngine<'static> {
    /// Engine over the built-in catalog, reporting through `tracing`
    pub fn with_defaults() -> Self {
        Self::new(get_default_catalog(), &TRACING_NOTIFIER)
    }
}

impl<'a> DetoxEngine<'a> {
    pub fn new(catalog: &'a Catalog, notifier: &'a dyn Notifier) -> Self {
        Self { catalog, notifier }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Compute the removal plan for a subject without touching it
    pub fn plan<S: Subject + ?Sized>(&self, subject: &S) -> RemovalPlan {
        if !subject.has_health_record() {
            return RemovalPlan::default();
        }
        RemovalPlan::from_snapshot(self.catalog, &subject.active_afflictions())
    }

    /// Cure every treatable affliction and removable tolerance on the subject
    ///
    /// Never fails: a subject without a health record yields the empty result
    /// and no removal calls.
    pub fn perform_detox<S: Subject + ?Sized>(&self, subject: &mut S) -> DetoxResult {
        if !subject.has_health_record() {
            tracing::warn!(
                "Attempted to detox '{}' without a health record",
                subject.name()
            );
            deliver(
                self.notifier,
                Notice::MissingHealthRecord {
                    subject: subject.name().to_string(),
                },
            );
            return DetoxResult::empty();
        }

        let snapshot = subject.active_afflictions();
        let plan = RemovalPlan::from_snapshot(self.catalog, &snapshot);

        for handle in plan.handles() {
            subject.remove_affliction(handle);
        }

        let result = DetoxResult {
            removed_count: plan.len(),
            removed_labels: collect_labels(self.catalog, &plan.conditions),
            any_removed: !plan.is_empty(),
        };

        let notice = if result.any_removed {
            tracing::info!(
                "Detoxed '{}': removed {} afflictions ({} tolerances)",
                subject.name(),
                result.removed_count,
                plan.tolerances.len()
            );
            Notice::DetoxComplete {
                subject: subject.name().to_string(),
                removed: result.removed_count,
            }
        } else {
            tracing::info!("No addictions found on '{}'", subject.name());
            Notice::NothingToTreat {
                subject: subject.name().to_string(),
            }
        };
        deliver(self.notifier, notice);

        result
    }

    /// Whether treatment would remove anything from the subject
    pub fn has_detoxifiable_conditions<S: Subject + ?Sized>(&self, subject: &S) -> bool {
        subject.has_health_record()
            && subject.active_afflictions().iter().any(|a| {
                classify(self.catalog, &a.id).is_treatable()
                    || classify_tolerance(self.catalog, &a.id).is_removable()
            })
    }
}
