//! Consistency rubric: eight fixed rules a hypothesis is tested against.
//!
//! Rules are independent. Every violated rule adds one failure, so a record
//! can fail anywhere from none to all eight.

use serde::{Deserialize, Serialize};

use murzyme_common::{ActiveSiteAccess, HypothesisRecord, KineticIsotopeEffect, SubstrateSize};

/// Number of rules in the rubric.
pub const TOTAL_CHECKS: u32 = 8;

/// Turnover above this (s⁻¹) exceeds the diffusion limit.
pub const DIFFUSION_CEILING: f64 = 1e9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyRule {
    LimitedAccessWithoutSelectivity,
    LimitedAccessWithoutSpecificity,
    NonSelectiveFractionalStoichiometry,
    KmBelowKd,
    LargeSubstrate,
    ZerothOrderKinetics,
    RateAboveDiffusionLimit,
    BoundSubstrateHighKie,
}

impl ConsistencyRule {
    pub const ALL: [ConsistencyRule; TOTAL_CHECKS as usize] = [
        Self::LimitedAccessWithoutSelectivity,
        Self::LimitedAccessWithoutSpecificity,
        Self::NonSelectiveFractionalStoichiometry,
        Self::KmBelowKd,
        Self::LargeSubstrate,
        Self::ZerothOrderKinetics,
        Self::RateAboveDiffusionLimit,
        Self::BoundSubstrateHighKie,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::LimitedAccessWithoutSelectivity => "limited_access_without_selectivity",
            Self::LimitedAccessWithoutSpecificity => "limited_access_without_specificity",
            Self::NonSelectiveFractionalStoichiometry => "non_selective_fractional_stoichiometry",
            Self::KmBelowKd => "km_below_kd",
            Self::LargeSubstrate => "large_substrate",
            Self::ZerothOrderKinetics => "zeroth_order_kinetics",
            Self::RateAboveDiffusionLimit => "rate_above_diffusion_limit",
            Self::BoundSubstrateHighKie => "bound_substrate_high_kie",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::LimitedAccessWithoutSelectivity => "Limited active-site access requires observed selectivity",
            Self::LimitedAccessWithoutSpecificity => "Limited active-site access requires observed specificity",
            Self::NonSelectiveFractionalStoichiometry => "A non-selective enzyme cannot show non-integer stoichiometry",
            Self::KmBelowKd => "Km below Kd is inconsistent",
            Self::LargeSubstrate => "A large substrate is inconsistent",
            Self::ZerothOrderKinetics => "Zeroth-order kinetics is inconsistent",
            Self::RateAboveDiffusionLimit => "Catalytic rate cannot exceed 1e9 per second",
            Self::BoundSubstrateHighKie => "A bound substrate cannot show a high intrinsic kinetic isotope effect",
        }
    }

    /// True when the record breaks this rule.
    pub fn violated_by(&self, r: &HypothesisRecord) -> bool {
        let limited = r.structural.active_site_access == ActiveSiteAccess::Limited;
        let e = &r.experimental;
        match self {
            Self::LimitedAccessWithoutSelectivity => limited && !e.selectivity,
            Self::LimitedAccessWithoutSpecificity => limited && !e.specificity,
            Self::NonSelectiveFractionalStoichiometry => !e.selectivity && e.non_integer_stoichiometry,
            Self::KmBelowKd => e.km_less_than_kd,
            Self::LargeSubstrate => r.structural.substrate_size == SubstrateSize::Large,
            Self::ZerothOrderKinetics => e.zeroth_order_kinetics,
            Self::RateAboveDiffusionLimit => e.catalytic_rate > DIFFUSION_CEILING,
            Self::BoundSubstrateHighKie => {
                r.proposal.substrate_bound && e.kinetic_isotope_effect == KineticIsotopeEffect::High
            }
        }
    }
}

/// Outcome of checking one record against the rubric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyResult {
    pub failed_checks: u32,
    pub total_checks: u32,
    /// Violated rules in rubric order
    pub violations: Vec<ConsistencyRule>,
}

impl ConsistencyResult {
    pub fn passed(&self) -> u32 {
        self.total_checks.saturating_sub(self.failed_checks)
    }

    /// Share of passed checks as a whole percentage, halves rounded up.
    pub fn consistency_percent(&self) -> u32 {
        (100.0 * f64::from(self.passed()) / f64::from(self.total_checks)).round() as u32
    }
}

/// Run every rule against the record.
pub fn check(record: &HypothesisRecord) -> ConsistencyResult {
    let violations: Vec<ConsistencyRule> = ConsistencyRule::ALL
        .iter()
        .copied()
        .filter(|rule| rule.violated_by(record))
        .collect();

    ConsistencyResult {
        failed_checks: violations.len() as u32,
        total_checks: TOTAL_CHECKS,
        violations,
    }
}
