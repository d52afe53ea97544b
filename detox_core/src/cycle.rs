//! The detox treatment cycle offered by a biosculpter pod.
//!
//! Wraps the engine with the cycle's configuration: whether the cycle can be
//! offered for a subject, the description shown before treatment, and the
//! letter issued when a completed cycle cured something.

use crate::config::{CycleConfig, MAX_DURATION_DAYS};
use crate::engine::DetoxEngine;
use crate::report::{describe_treatable, list_treatable_condition_names};
use crate::subject::Subject;
use crate::types::DetoxResult;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Typed answer to "can this cycle be offered, and what would it treat"
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CycleOffer {
    pub key: String,
    pub label: String,
    pub available: bool,
    pub treats: Vec<String>,
    pub description: String,
    /// Research projects that must be finished before the cycle can run
    pub required_research: Vec<String>,
    pub icon_path: String,
    pub operating_color: [f32; 3],
}

/// Player-facing letter sent after a successful cycle
#[derive(Clone, Debug, Serialize)]
pub struct TreatmentLetter {
    pub id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub subject: String,
    pub title: String,
    pub text: String,
}

/// Everything a completed cycle produced
#[derive(Clone, Debug, Serialize)]
pub struct CycleCompletion {
    pub result: DetoxResult,
    pub letter: Option<TreatmentLetter>,
}

pub struct DetoxCycle<'a> {
    config: &'a CycleConfig,
    engine: DetoxEngine<'a>,
}

impl<'a> DetoxCycle<'a> {
    pub fn new(config: &'a CycleConfig, engine: DetoxEngine<'a>) -> Self {
        Self { config, engine }
    }

    pub fn key(&self) -> &str {
        &self.config.key
    }

    /// Length of one cycle, clamped to `MAX_DURATION_DAYS`
    pub fn duration(&self) -> Duration {
        let days = self.config.duration_days.clamp(0.0, MAX_DURATION_DAYS);
        Duration::try_seconds((days * 86_400.0).round() as i64).unwrap_or(Duration::zero())
    }

    /// Whether the cycle should be available for this occupant
    pub fn can_use_on<S: Subject + ?Sized>(&self, subject: &S) -> bool {
        self.engine.has_detoxifiable_conditions(subject)
    }

    /// Cycle description tuned for a specific occupant
    pub fn describe<S: Subject + ?Sized>(&self, subject: &S) -> String {
        let names = list_treatable_condition_names(self.engine.catalog(), subject);
        self.description_for(&names)
    }

    pub fn offer<S: Subject + ?Sized>(&self, subject: &S) -> CycleOffer {
        let treats = list_treatable_condition_names(self.engine.catalog(), subject);
        CycleOffer {
            key: self.config.key.clone(),
            label: self.config.label.clone(),
            available: self.can_use_on(subject),
            description: self.description_for(&treats),
            treats,
            required_research: self.config.required_research.clone(),
            icon_path: self.config.icon_path.clone(),
            operating_color: self.config.operating_color,
        }
    }

    fn description_for(&self, names: &[String]) -> String {
        format!("{}\n\n{}", self.config.description, describe_treatable(names))
    }

    /// Run the treatment when the cycle finishes
    pub fn complete<S: Subject + ?Sized>(&self, subject: &mut S) -> CycleCompletion {
        let result = self.engine.perform_detox(subject);

        let letter = result.any_removed.then(|| TreatmentLetter {
            id: Uuid::new_v4(),
            issued_at: Utc::now(),
            subject: subject.name().to_string(),
            title: "Detox complete".into(),
            text: format!(
                "{} has completed a biosculpter detox cycle and is now free of drug addictions, \
                 withdrawal effects and chemical tolerances.",
                subject.name()
            ),
        });

        CycleCompletion { result, letter }
    }
}
