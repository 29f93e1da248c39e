//! Shared fixtures for Murzyme tests.
//!
//! The named records mirror the hand-checked pair used when the comparison
//! page was first validated: a maximally elaborate proposal that contradicts
//! every observation, and a minimal one that fits all of them.

use murzyme_common::{
    ActiveSiteAccess, ExperimentalFeatures, HypothesisRecord, KineticIsotopeEffect,
    ProposalFeatures, StructuralFeatures, SubstrateSize,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// All seven simplicity predicates satisfied, two mechanistic steps.
pub fn minimal_proposal() -> ProposalFeatures {
    ProposalFeatures {
        shape_change: false,
        serial: false,
        complexity: false,
        mechanistic_steps: 2,
        probability: true,
        intermediates: false,
        long_distance_electron_transfer: false,
        high_affinity_complex: false,
        substrate_bound: false,
    }
}

/// No simplicity predicate satisfied, three mechanistic steps.
pub fn elaborate_proposal() -> ProposalFeatures {
    ProposalFeatures {
        shape_change: true,
        serial: true,
        complexity: true,
        mechanistic_steps: 3,
        probability: false,
        intermediates: true,
        long_distance_electron_transfer: true,
        high_affinity_complex: true,
        substrate_bound: true,
    }
}

/// Simple proposal that passes all eight consistency rules.
pub fn consistent_hypothesis() -> HypothesisRecord {
    HypothesisRecord {
        proposal: minimal_proposal(),
        structural: StructuralFeatures {
            active_site_access: ActiveSiteAccess::Unlimited,
            substrate_size: SubstrateSize::Small,
        },
        experimental: ExperimentalFeatures {
            selectivity: true,
            specificity: true,
            diversity: false,
            non_integer_stoichiometry: false,
            variable_stoichiometry: false,
            km_less_than_kd: false,
            diffusion_limited: false,
            zeroth_order_kinetics: false,
            catalytic_rate: 1e6,
            kinetic_isotope_effect: KineticIsotopeEffect::Low,
        },
    }
}

/// Elaborate proposal that fails all eight consistency rules.
pub fn inconsistent_hypothesis() -> HypothesisRecord {
    HypothesisRecord {
        proposal: elaborate_proposal(),
        structural: StructuralFeatures {
            active_site_access: ActiveSiteAccess::Limited,
            substrate_size: SubstrateSize::Large,
        },
        experimental: ExperimentalFeatures {
            selectivity: false,
            specificity: false,
            diversity: true,
            non_integer_stoichiometry: true,
            variable_stoichiometry: false,
            km_less_than_kd: true,
            diffusion_limited: false,
            zeroth_order_kinetics: true,
            catalytic_rate: 1.5e9,
            kinetic_isotope_effect: KineticIsotopeEffect::High,
        },
    }
}

/// Deterministic random hypothesis records for property checks.
pub struct RecordGenerator {
    rng: StdRng,
}

impl RecordGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn record(&mut self) -> HypothesisRecord {
        let rng = &mut self.rng;
        HypothesisRecord {
            proposal: ProposalFeatures {
                shape_change: rng.gen(),
                serial: rng.gen(),
                complexity: rng.gen(),
                mechanistic_steps: rng.gen_range(0..8),
                probability: rng.gen(),
                intermediates: rng.gen(),
                long_distance_electron_transfer: rng.gen(),
                high_affinity_complex: rng.gen(),
                substrate_bound: rng.gen(),
            },
            structural: StructuralFeatures {
                active_site_access: if rng.gen() { ActiveSiteAccess::Limited } else { ActiveSiteAccess::Unlimited },
                substrate_size: if rng.gen() { SubstrateSize::Small } else { SubstrateSize::Large },
            },
            experimental: ExperimentalFeatures {
                selectivity: rng.gen(),
                specificity: rng.gen(),
                diversity: rng.gen(),
                non_integer_stoichiometry: rng.gen(),
                variable_stoichiometry: rng.gen(),
                km_less_than_kd: rng.gen(),
                diffusion_limited: rng.gen(),
                zeroth_order_kinetics: rng.gen(),
                // Straddles the 1e9 s⁻¹ diffusion ceiling
                catalytic_rate: 10f64.powf(rng.gen_range(0.0..10.0)),
                kinetic_isotope_effect: if rng.gen() { KineticIsotopeEffect::Low } else { KineticIsotopeEffect::High },
            },
        }
    }

    pub fn pairs(&mut self, n: usize) -> Vec<(HypothesisRecord, HypothesisRecord)> {
        (0..n).map(|_| (self.record(), self.record())).collect()
    }
}
