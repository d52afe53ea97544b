//! Host surfaces for the entity being treated.
//!
//! The engine only reads a snapshot of a subject's afflictions and requests
//! removals by handle. `Patient` is an in-memory implementation used by the
//! command-line harness and tests.

use crate::types::{ActiveAffliction, AfflictionHandle, AfflictionId};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Query and mutation surface a host exposes for one subject
pub trait Subject {
    /// Name used in logs and notices
    fn name(&self) -> &str;

    /// Whether the subject has a valid health record
    fn has_health_record(&self) -> bool;

    /// Owned snapshot of the currently active afflictions, in host order
    ///
    /// Empty when there is no health record.
    fn active_afflictions(&self) -> Vec<ActiveAffliction>;

    /// Remove one active affliction; called at most once per handle
    fn remove_affliction(&mut self, handle: AfflictionHandle);
}

/// Affliction entry as written in a subject fixture
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AfflictionEntry {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

/// Health record section of a subject fixture
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HealthEntry {
    #[serde(default)]
    pub afflictions: Vec<AfflictionEntry>,
}

/// Subject fixture as read from JSON
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    #[serde(default)]
    pub health: Option<HealthEntry>,
}

/// In-memory subject with an optional health record
#[derive(Clone, Debug)]
pub struct Patient {
    name: String,
    health: Option<Vec<ActiveAffliction>>,
    next_handle: u64,
}

impl Patient {
    /// Patient with an empty health record
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: Some(Vec::new()),
            next_handle: 0,
        }
    }

    /// Patient without any health record
    pub fn without_health(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: None,
            next_handle: 0,
        }
    }

    /// Attach an affliction and return its handle
    ///
    /// Ignored (returns `None`) when the patient has no health record.
    pub fn add_affliction(
        &mut self,
        id: impl Into<AfflictionId>,
        label: impl Into<String>,
    ) -> Option<AfflictionHandle> {
        let afflictions = self.health.as_mut()?;
        let handle = AfflictionHandle(self.next_handle);
        self.next_handle += 1;
        afflictions.push(ActiveAffliction {
            handle,
            id: id.into(),
            label: label.into(),
        });
        Some(handle)
    }

    /// Builder-style variant of `add_affliction` with an empty label
    pub fn with_affliction(mut self, id: &str) -> Self {
        self.add_affliction(id, "");
        self
    }

    /// Whether an affliction with this id is still attached
    pub fn has_affliction(&self, id: &str) -> bool {
        self.health
            .as_ref()
            .is_some_and(|list| list.iter().any(|a| a.id.as_str() == id))
    }

    /// Ids of the afflictions still attached, in order
    pub fn affliction_ids(&self) -> Vec<String> {
        self.health
            .iter()
            .flatten()
            .map(|a| a.id.as_str().to_string())
            .collect()
    }

    /// Build a patient from a parsed fixture
    pub fn from_record(record: PatientRecord) -> Result<Self> {
        if record.name.trim().is_empty() {
            return Err(Error::Subject("Patient has empty name".into()));
        }

        let Some(health) = record.health else {
            return Ok(Self::without_health(record.name));
        };

        let mut patient = Self::new(record.name);
        for entry in health.afflictions {
            if entry.id.is_empty() {
                return Err(Error::Subject(format!(
                    "Patient '{}' has an affliction with an empty id",
                    patient.name
                )));
            }
            patient.add_affliction(entry.id, entry.label);
        }

        Ok(patient)
    }

    /// Parse a patient from a JSON fixture string
    pub fn from_json(contents: &str) -> Result<Self> {
        let record: PatientRecord = serde_json::from_str(contents)?;
        Self::from_record(record)
    }

    /// Load a patient from a JSON fixture file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let patient = Self::from_json(&contents)?;
        tracing::debug!("Loaded patient '{}' from {:?}", patient.name, path);
        Ok(patient)
    }
}

impl Subject for Patient {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_health_record(&self) -> bool {
        self.health.is_some()
    }

    fn active_afflictions(&self) -> Vec<ActiveAffliction> {
        self.health.clone().unwrap_or_default()
    }

    fn remove_affliction(&mut self, handle: AfflictionHandle) {
        if let Some(afflictions) = self.health.as_mut() {
            afflictions.retain(|a| a.handle != handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_stay_valid_after_removal() {
        let mut patient = Patient::new("Ada");
        let first = patient.add_affliction("Addiction_Alcohol", "").unwrap();
        let second = patient.add_affliction("AlcoholWithdrawal", "").unwrap();
        let third = patient.add_affliction("Flu", "").unwrap();

        patient.remove_affliction(first);
        patient.remove_affliction(third);

        assert_eq!(patient.affliction_ids(), vec!["AlcoholWithdrawal"]);
        patient.remove_affliction(second);
        assert!(patient.affliction_ids().is_empty());
    }

    #[test]
    fn test_no_health_record_ignores_afflictions() {
        let mut patient = Patient::without_health("Ghost");
        assert!(patient.add_affliction("Addiction_Alcohol", "").is_none());
        assert!(!patient.has_health_record());
        assert!(patient.active_afflictions().is_empty());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "name": "Bo",
            "health": {
                "afflictions": [
                    { "id": "Addiction_Yayo", "label": "yayo addiction" },
                    { "id": "Flu" }
                ]
            }
        }"#;
        let patient = Patient::from_json(json).unwrap();
        let afflictions = patient.active_afflictions();
        assert_eq!(afflictions.len(), 2);
        assert_eq!(afflictions[0].label, "yayo addiction");
        assert_eq!(afflictions[1].label, "");
        assert_ne!(afflictions[0].handle, afflictions[1].handle);
    }

    #[test]
    fn test_from_json_without_health() {
        let patient = Patient::from_json(r#"{ "name": "Cy", "health": null }"#).unwrap();
        assert!(!patient.has_health_record());

        let patient = Patient::from_json(r#"{ "name": "Cy" }"#).unwrap();
        assert!(!patient.has_health_record());
    }

    #[test]
    fn test_from_json_rejects_empty_id() {
        let json = r#"{ "name": "Di", "health": { "afflictions": [ { "id": "" } ] } }"#;
        let err = Patient::from_json(json).unwrap_err();
        assert!(matches!(err, Error::Subject(_)));
    }
}
