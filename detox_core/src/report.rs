//! Human-readable listing of the conditions a treatment would cure.
//!
//! Uses the same classification as the engine's condition pass so the
//! preview matches what treatment removes. Tolerances are never listed.

use crate::catalog::Catalog;
use crate::classifier::classify;
use crate::subject::Subject;
use crate::types::ActiveAffliction;

/// Display label for an affliction: its own label, else the catalog's
pub fn resolve_label(catalog: &Catalog, affliction: &ActiveAffliction) -> String {
    if affliction.label.is_empty() {
        catalog.default_label(&affliction.id)
    } else {
        affliction.label.clone()
    }
}

/// Resolve labels, dropping exact duplicates and keeping first-seen order
pub(crate) fn collect_labels(catalog: &Catalog, afflictions: &[ActiveAffliction]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for affliction in afflictions {
        let label = resolve_label(catalog, affliction);
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

/// Names of the addictions and withdrawals treatment would cure
pub fn list_treatable_condition_names<S: Subject + ?Sized>(
    catalog: &Catalog,
    subject: &S,
) -> Vec<String> {
    if !subject.has_health_record() {
        return Vec::new();
    }

    let treatable: Vec<ActiveAffliction> = subject
        .active_afflictions()
        .into_iter()
        .filter(|a| classify(catalog, &a.id).is_treatable())
        .collect();

    collect_labels(catalog, &treatable)
}

/// One-line summary appended to a treatment description
pub fn describe_treatable(names: &[String]) -> String {
    if names.is_empty() {
        "No conditions to treat.".to_string()
    } else {
        format!("Will treat: {}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_default_catalog;
    use crate::engine::DetoxEngine;
    use crate::subject::Patient;

    #[test]
    fn test_lists_conditions_but_not_tolerances() {
        let patient = Patient::new("Ada")
            .with_affliction("Addiction_Alcohol")
            .with_affliction("AlcoholWithdrawal")
            .with_affliction("LuciferiumAddiction")
            .with_affliction("SomeMod_Tolerance");

        let names = list_treatable_condition_names(get_default_catalog(), &patient);

        assert_eq!(names, vec!["Alcohol addiction", "Alcohol withdrawal"]);
    }

    #[test]
    fn test_duplicate_labels_listed_once_in_first_seen_order() {
        let mut patient = Patient::new("Bo");
        patient.add_affliction("SpiceWithdrawal", "Spice withdrawal");
        patient.add_affliction("Addiction_Smokeleaf", "");
        patient.add_affliction("Spice2Withdrawal", "Spice withdrawal");

        let names = list_treatable_condition_names(get_default_catalog(), &patient);

        assert_eq!(names, vec!["Spice withdrawal", "Smokeleaf addiction"]);
    }

    #[test]
    fn test_own_label_wins_over_catalog_label() {
        let mut patient = Patient::new("Cy");
        patient.add_affliction("Addiction_Yayo", "yayo addiction (severe)");

        let names = list_treatable_condition_names(get_default_catalog(), &patient);

        assert_eq!(names, vec!["yayo addiction (severe)"]);
    }

    #[test]
    fn test_unknown_heuristic_id_falls_back_to_id() {
        let patient = Patient::new("Di").with_affliction("Addiction_Chocolate");
        let names = list_treatable_condition_names(get_default_catalog(), &patient);
        assert_eq!(names, vec!["Addiction_Chocolate"]);
    }

    #[test]
    fn test_no_health_record_lists_nothing() {
        let patient = Patient::without_health("Ghost");
        assert!(list_treatable_condition_names(get_default_catalog(), &patient).is_empty());
    }

    #[test]
    fn test_preview_matches_treatment_labels() {
        let engine = DetoxEngine::with_defaults();
        let mut patient = Patient::new("Ed")
            .with_affliction("FlakeWithdrawal")
            .with_affliction("Addiction_Flake")
            .with_affliction("PsychiteTolerance")
            .with_affliction("Flu");

        let preview = list_treatable_condition_names(engine.catalog(), &patient);
        let result = engine.perform_detox(&mut patient);

        assert_eq!(preview, result.removed_labels);
    }

    #[test]
    fn test_describe_treatable() {
        assert_eq!(describe_treatable(&[]), "No conditions to treat.");
        assert_eq!(
            describe_treatable(&["Alcohol addiction".into(), "Flake withdrawal".into()]),
            "Will treat: Alcohol addiction, Flake withdrawal"
        );
    }
}
