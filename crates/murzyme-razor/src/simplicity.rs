//! Occam's-razor comparison of two hypotheses.
//!
//! Each side earns one point per satisfied simplicity predicate on its
//! proposal, plus one point for strictly fewer mechanistic steps than the
//! other side. The side with more points is the simpler hypothesis.

use serde::{Deserialize, Serialize};
use std::fmt;

use murzyme_common::{HypothesisRecord, ProposalFeatures};

/// Number of per-record simplicity predicates.
pub const SIMPLICITY_PREDICATES: u32 = 7;

/// Which of the two compared hypotheses is simpler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Simpler {
    A,
    B,
    Tie,
}

impl Simpler {
    pub fn label(&self) -> &'static str {
        match self {
            Self::A => "Model A",
            Self::B => "Model B",
            Self::Tie => "Both Models are equally simple",
        }
    }

    /// The verdict with the two sides exchanged.
    pub fn swapped(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
            Self::Tie => Self::Tie,
        }
    }
}

impl fmt::Display for Simpler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Simplicity points per side, including the mechanistic-steps point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplicityScore {
    pub a: u32,
    pub b: u32,
}

impl SimplicityScore {
    pub fn verdict(&self) -> Simpler {
        match self.a.cmp(&self.b) {
            std::cmp::Ordering::Greater => Simpler::A,
            std::cmp::Ordering::Less => Simpler::B,
            std::cmp::Ordering::Equal => Simpler::Tie,
        }
    }
}

/// Count the simplicity predicates a proposal satisfies (0..=7).
pub fn simplicity_points(p: &ProposalFeatures) -> u32 {
    let predicates = [
        !p.shape_change,
        !p.serial,
        !p.complexity,
        p.probability,
        !p.intermediates,
        !p.long_distance_electron_transfer,
        !p.high_affinity_complex,
    ];
    predicates.iter().filter(|&&ok| ok).count() as u32
}

/// Score both sides. Equal step counts award no steps point.
pub fn score(a: &HypothesisRecord, b: &HypothesisRecord) -> SimplicityScore {
    let mut points_a = simplicity_points(&a.proposal);
    let mut points_b = simplicity_points(&b.proposal);

    let (steps_a, steps_b) = (a.proposal.mechanistic_steps, b.proposal.mechanistic_steps);
    if steps_a < steps_b {
        points_a += 1;
    } else if steps_b < steps_a {
        points_b += 1;
    }

    SimplicityScore { a: points_a, b: points_b }
}

/// Decide which hypothesis is simpler.
pub fn compare(a: &HypothesisRecord, b: &HypothesisRecord) -> Simpler {
    score(a, b).verdict()
}

#[cfg(test)]
mod tests {
    use super::*;
    use murzyme_test_utils::{elaborate_proposal, minimal_proposal};

    fn with_proposal(proposal: ProposalFeatures) -> HypothesisRecord {
        HypothesisRecord { proposal, ..Default::default() }
    }

    #[test]
    fn test_minimal_proposal_scores_all_predicates() {
        assert_eq!(simplicity_points(&minimal_proposal()), SIMPLICITY_PREDICATES);
    }

    #[test]
    fn test_elaborate_proposal_scores_nothing() {
        assert_eq!(simplicity_points(&elaborate_proposal()), 0);
    }

    #[test]
    fn test_substrate_bound_does_not_affect_simplicity() {
        let mut p = minimal_proposal();
        p.substrate_bound = true;
        assert_eq!(simplicity_points(&p), SIMPLICITY_PREDICATES);
    }

    #[test]
    fn test_fewer_steps_wins_the_steps_point() {
        let a = with_proposal(elaborate_proposal());
        let b = with_proposal(minimal_proposal());
        let s = score(&a, &b);
        assert_eq!(s, SimplicityScore { a: 0, b: 8 });
        assert_eq!(s.verdict(), Simpler::B);
    }

    #[test]
    fn test_equal_steps_award_no_point() {
        let a = with_proposal(minimal_proposal());
        let b = with_proposal(minimal_proposal());
        assert_eq!(score(&a, &b), SimplicityScore { a: 7, b: 7 });
        assert_eq!(compare(&a, &b), Simpler::Tie);
    }

    #[test]
    fn test_steps_point_breaks_a_tie() {
        let mut pa = minimal_proposal();
        pa.mechanistic_steps = 1;
        let a = with_proposal(pa);
        let b = with_proposal(minimal_proposal());
        assert_eq!(compare(&a, &b), Simpler::A);
        assert_eq!(compare(&b, &a), Simpler::B);
    }

    #[test]
    fn test_intermediates_scored_alike_on_both_sides() {
        let mut p = minimal_proposal();
        p.intermediates = true;
        let a = with_proposal(p.clone());
        let b = with_proposal(minimal_proposal());
        assert_eq!(compare(&a, &b), Simpler::B);
        assert_eq!(compare(&b, &a), Simpler::A);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Simpler::A.to_string(), "Model A");
        assert_eq!(Simpler::Tie.swapped(), Simpler::Tie);
        assert_eq!(Simpler::B.swapped(), Simpler::A);
    }
}
