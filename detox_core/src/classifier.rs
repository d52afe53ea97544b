//! Pure classification of affliction ids against a catalog.
//!
//! Two independent passes:
//! - the condition pass decides addictions and withdrawals, explicit or by
//!   naming convention
//! - the tolerance pass decides chemical tolerances
//!
//! Exclusion is checked first in both passes and dominates every other rule.

use crate::catalog::{
    Catalog, ADDICTION_PREFIX, ADDICTION_SUFFIX, PERMANENT_SUBSTANCE_MARKER, TOLERANCE_MARKER,
    WITHDRAWAL_SUFFIX,
};
use crate::types::{AfflictionId, ClassificationOutcome, ToleranceOutcome};

/// Classify an id for the addiction/withdrawal pass
///
/// Precedence:
/// 1. excluded ids
/// 2. explicit addictions
/// 3. explicit withdrawals
/// 4. naming convention (`Addiction_*`, `*Withdrawal`, `*Addiction`)
pub fn classify(catalog: &Catalog, id: &AfflictionId) -> ClassificationOutcome {
    if catalog.is_excluded(id) {
        return ClassificationOutcome::Excluded;
    }
    if catalog.is_explicit_addiction(id) {
        return ClassificationOutcome::ExplicitAddiction;
    }
    if catalog.is_explicit_withdrawal(id) {
        return ClassificationOutcome::ExplicitWithdrawal;
    }
    if matches_naming_convention(id.as_str()) {
        return ClassificationOutcome::HeuristicMatch;
    }
    ClassificationOutcome::NotApplicable
}

/// Classify an id for the chemical-tolerance pass
pub fn classify_tolerance(catalog: &Catalog, id: &AfflictionId) -> ToleranceOutcome {
    let raw = id.as_str();
    if !raw.contains(TOLERANCE_MARKER) {
        return ToleranceOutcome::NotTolerance;
    }
    if catalog.is_excluded(id) || raw.contains(PERMANENT_SUBSTANCE_MARKER) {
        ToleranceOutcome::ToleranceProtected
    } else {
        ToleranceOutcome::ToleranceRemovable
    }
}

fn matches_naming_convention(raw: &str) -> bool {
    raw.starts_with(ADDICTION_PREFIX)
        || raw.ends_with(WITHDRAWAL_SUFFIX)
        || raw.ends_with(ADDICTION_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_default_catalog;
    use crate::config::CatalogConfig;

    fn outcome(id: &str) -> ClassificationOutcome {
        classify(get_default_catalog(), &id.into())
    }

    fn tolerance(id: &str) -> ToleranceOutcome {
        classify_tolerance(get_default_catalog(), &id.into())
    }

    #[test]
    fn test_explicit_tables() {
        assert_eq!(
            outcome("Addiction_Alcohol"),
            ClassificationOutcome::ExplicitAddiction
        );
        assert_eq!(
            outcome("PsychiteWithdrawal"),
            ClassificationOutcome::ExplicitWithdrawal
        );
    }

    #[test]
    fn test_naming_convention_matches_modded_ids() {
        assert_eq!(
            outcome("Addiction_Chocolate"),
            ClassificationOutcome::HeuristicMatch
        );
        assert_eq!(
            outcome("SpiceWithdrawal"),
            ClassificationOutcome::HeuristicMatch
        );
        assert_eq!(
            outcome("NeuroquakeAddiction"),
            ClassificationOutcome::HeuristicMatch
        );
    }

    #[test]
    fn test_unrelated_ids_are_not_applicable() {
        for id in ["Flu", "Malaria", "Addicted", "WithdrawalSyndrome", "", "addiction_x"] {
            assert_eq!(outcome(id), ClassificationOutcome::NotApplicable, "{}", id);
        }
    }

    #[test]
    fn test_exclusion_dominates_suffix_match() {
        // Ends with "Addiction" but must never be treated
        assert_eq!(outcome("LuciferiumAddiction"), ClassificationOutcome::Excluded);
    }

    #[test]
    fn test_exclusion_dominates_explicit_table() {
        let extra = CatalogConfig {
            extra_exclusions: vec!["Addiction_Alcohol".into()],
            ..Default::default()
        };
        let catalog = Catalog::with_extensions(&extra);
        assert_eq!(
            classify(&catalog, &"Addiction_Alcohol".into()),
            ClassificationOutcome::Excluded
        );
    }

    #[test]
    fn test_tolerance_pass() {
        assert_eq!(
            tolerance("SomeMod_Tolerance"),
            ToleranceOutcome::ToleranceRemovable
        );
        assert_eq!(
            tolerance("PsychiteTolerance"),
            ToleranceOutcome::ToleranceRemovable
        );
        assert_eq!(
            tolerance("Luciferium_Tolerance"),
            ToleranceOutcome::ToleranceProtected
        );
        assert_eq!(tolerance("AlcoholWithdrawal"), ToleranceOutcome::NotTolerance);
        assert_eq!(tolerance("tolerance"), ToleranceOutcome::NotTolerance);
    }

    #[test]
    fn test_excluded_tolerance_is_protected() {
        let extra = CatalogConfig {
            extra_exclusions: vec!["GlitterworldTolerance".into()],
            ..Default::default()
        };
        let catalog = Catalog::with_extensions(&extra);
        assert_eq!(
            classify_tolerance(&catalog, &"GlitterworldTolerance".into()),
            ToleranceOutcome::ToleranceProtected
        );
    }
}
