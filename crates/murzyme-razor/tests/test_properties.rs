//! Behavioural properties of the comparison engine over seeded random records.
//!
//! Run with: cargo test --package murzyme-razor --test test_properties

use murzyme_common::{ActiveSiteAccess, HypothesisRecord, KineticIsotopeEffect, SubstrateSize};
use murzyme_razor::simplicity::{score, simplicity_points};
use murzyme_razor::{analyse, check, compare, Simpler};
use murzyme_test_utils::{
    consistent_hypothesis, elaborate_proposal, inconsistent_hypothesis, minimal_proposal, RecordGenerator,
};

const SAMPLES: usize = 500;

#[test]
fn test_failed_checks_stay_within_rubric() {
    let mut gen = RecordGenerator::seeded(7);
    for _ in 0..SAMPLES {
        let result = check(&gen.record());
        assert_eq!(result.total_checks, 8);
        assert!(result.failed_checks <= 8);
        assert_eq!(result.violations.len() as u32, result.failed_checks);
        assert!(result.consistency_percent() <= 100);
    }
}

#[test]
fn test_tie_is_symmetric_and_wins_are_antisymmetric() {
    let mut gen = RecordGenerator::seeded(11);
    let mut seen = [0usize; 3];
    for (a, b) in gen.pairs(SAMPLES) {
        let forward = compare(&a, &b);
        let backward = compare(&b, &a);
        assert_eq!(backward, forward.swapped(), "a = {a:?}\nb = {b:?}");
        seen[match forward {
            Simpler::A => 0,
            Simpler::B => 1,
            Simpler::Tie => 2,
        }] += 1;
    }
    // The generator exercises all three outcomes
    assert!(seen.iter().all(|&n| n > 0), "outcomes seen: {seen:?}");
}

#[test]
fn test_repeated_calls_are_identical() {
    let mut gen = RecordGenerator::seeded(23);
    for (a, b) in gen.pairs(100) {
        assert_eq!(compare(&a, &b), compare(&a, &b));
        assert_eq!(check(&a), check(&a));
        assert_eq!(analyse(&a, &b), analyse(&a, &b));
    }
}

#[test]
fn test_steps_point_goes_only_to_strictly_fewer_steps() {
    let mut gen = RecordGenerator::seeded(31);
    for (a, b) in gen.pairs(SAMPLES) {
        let s = score(&a, &b);
        let base_a = simplicity_points(&a.proposal);
        let base_b = simplicity_points(&b.proposal);
        let (steps_a, steps_b) = (a.proposal.mechanistic_steps, b.proposal.mechanistic_steps);
        assert_eq!(s.a, base_a + u32::from(steps_a < steps_b));
        assert_eq!(s.b, base_b + u32::from(steps_b < steps_a));
    }
}

#[test]
fn test_minimal_proposal_scores_seven_points() {
    let record = HypothesisRecord { proposal: minimal_proposal(), ..Default::default() };
    assert_eq!(simplicity_points(&record.proposal), 7);
}

#[test]
fn test_fewer_steps_and_all_predicates_beat_elaborate_proposal() {
    let a = HypothesisRecord { proposal: elaborate_proposal(), ..Default::default() };
    let b = HypothesisRecord { proposal: minimal_proposal(), ..Default::default() };
    assert_eq!(a.proposal.mechanistic_steps, 3);
    assert_eq!(b.proposal.mechanistic_steps, 2);
    assert_eq!(compare(&a, &b), Simpler::B);
}

#[test]
fn test_fully_inconsistent_record_scores_zero_percent() {
    let r = inconsistent_hypothesis();
    assert_eq!(r.structural.active_site_access, ActiveSiteAccess::Limited);
    assert_eq!(r.structural.substrate_size, SubstrateSize::Large);
    assert_eq!(r.experimental.kinetic_isotope_effect, KineticIsotopeEffect::High);

    let result = check(&r);
    assert_eq!((result.failed_checks, result.total_checks), (8, 8));
    assert_eq!(result.consistency_percent(), 0);
}

#[test]
fn test_fully_consistent_record_scores_hundred_percent() {
    let result = check(&consistent_hypothesis());
    assert_eq!((result.failed_checks, result.total_checks), (0, 8));
    assert_eq!(result.consistency_percent(), 100);
}
