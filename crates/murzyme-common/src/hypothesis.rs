//! Hypothesis records: one mechanistic proposal for an enzyme reaction,
//! described by its proposal flags, structural context and experimental
//! observations.
//!
//! Records are plain values. Callers build one per comparison request and
//! hand out shared references; nothing in the workspace mutates a record
//! after construction.

use serde::{Deserialize, Serialize};

/// A complete mechanistic proposal. Every field is required when decoding
/// JSON; defaulting missing form values is the job of [`crate::form`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HypothesisRecord {
    pub proposal: ProposalFeatures,
    pub structural: StructuralFeatures,
    pub experimental: ExperimentalFeatures,
}

/// What the hypothesis itself claims about the mechanism.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalFeatures {
    /// Requires a conformational change of the enzyme
    pub shape_change: bool,
    /// Steps must happen in a fixed serial order
    pub serial: bool,
    /// Invokes an elaborate multi-component machinery
    pub complexity: bool,
    /// Number of discrete mechanistic steps
    pub mechanistic_steps: u32,
    /// The proposed events are probabilistically favourable
    pub probability: bool,
    /// Requires stable intermediates
    pub intermediates: bool,
    /// Requires long-distance outer-sphere electron transfer
    pub long_distance_electron_transfer: bool,
    /// Requires a high-affinity enzyme-substrate complex
    pub high_affinity_complex: bool,
    /// Substrate is bound at the active site during catalysis
    pub substrate_bound: bool,
}

/// Structural context of the active site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralFeatures {
    pub active_site_access: ActiveSiteAccess,
    pub substrate_size: SubstrateSize,
}

/// Experimental observations the hypothesis must be consistent with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentalFeatures {
    pub selectivity: bool,
    pub specificity: bool,
    pub diversity: bool,
    pub non_integer_stoichiometry: bool,
    pub variable_stoichiometry: bool,
    /// Observed Km is below the dissociation constant Kd
    pub km_less_than_kd: bool,
    pub diffusion_limited: bool,
    pub zeroth_order_kinetics: bool,
    /// Turnover in s⁻¹
    pub catalytic_rate: f64,
    pub kinetic_isotope_effect: KineticIsotopeEffect,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveSiteAccess {
    #[default]
    Limited,
    Unlimited,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstrateSize {
    #[default]
    Small,
    Large,
}

/// Intrinsic kinetic isotope effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KineticIsotopeEffect {
    #[default]
    Low,
    High,
}

impl KineticIsotopeEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::High => "HIGH",
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_reset_state() {
        let r = HypothesisRecord::default();
        assert_eq!(r.proposal.mechanistic_steps, 0);
        assert!(!r.proposal.shape_change);
        assert_eq!(r.structural.active_site_access, ActiveSiteAccess::Limited);
        assert_eq!(r.structural.substrate_size, SubstrateSize::Small);
        assert_eq!(r.experimental.kinetic_isotope_effect, KineticIsotopeEffect::Low);
        assert_eq!(r.experimental.catalytic_rate, 0.0);
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(HypothesisRecord::default()).unwrap();
        assert_eq!(value["proposal"]["longDistanceElectronTransfer"], false);
        assert_eq!(value["proposal"]["mechanisticSteps"], 0);
        assert_eq!(value["structural"]["activeSiteAccess"], "limited");
        assert_eq!(value["structural"]["substrateSize"], "small");
        assert_eq!(value["experimental"]["kmLessThanKd"], false);
        assert_eq!(value["experimental"]["kineticIsotopeEffect"], "LOW");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut value = serde_json::to_value(HypothesisRecord::default()).unwrap();
        value["experimental"]
            .as_object_mut()
            .unwrap()
            .remove("catalyticRate");
        let parsed: Result<HypothesisRecord, _> = serde_json::from_value(value);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let mut value = serde_json::to_value(HypothesisRecord::default()).unwrap();
        value["experimental"]["kineticIsotopeEffect"] = "MEDIUM".into();
        let parsed: Result<HypothesisRecord, _> = serde_json::from_value(value);
        assert!(parsed.is_err());
    }
}
