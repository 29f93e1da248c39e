//! Decoding of the model-comparison form.
//!
//! The comparison page posts one flat string field per input, keyed
//! `"{side}-{FieldName}"` (e.g. `A-ShapeChange`, `B-IntKIE`). Selects carry
//! `0`/`1`, the step count and catalytic rate are free numeric inputs.
//! Missing or blank inputs fall back to the reset state of the form; a value
//! that is present but unreadable is rejected with the offending key.

use std::collections::HashMap;
use std::fmt;

use crate::error::{MurzymeError, Result};
use crate::hypothesis::{
    ActiveSiteAccess, ExperimentalFeatures, HypothesisRecord, KineticIsotopeEffect,
    ProposalFeatures, StructuralFeatures, SubstrateSize,
};

/// Which of the two compared models a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormSide {
    A,
    B,
}

impl FormSide {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for FormSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Field names in page order.
pub const FIELD_NAMES: [&str; 21] = [
    "ShapeChange",
    "Serial",
    "Complexity",
    "MechanisticSteps",
    "Probability",
    "Intermediates",
    "LongDistanceOSET",
    "HighAffinityESComplex",
    "SubstrateBound",
    "ActiveSiteAccess",
    "SubstrateSize",
    "Selectivity",
    "Specificity",
    "Diversity",
    "NonIntStoichiometry",
    "VariableStoichiometry",
    "KmKd",
    "DiffusionLimits",
    "ZerothOrderKinetics",
    "CatalyticRate",
    "IntKIE",
];

/// Reads one side's fields out of the flat form map.
struct SideReader<'a> {
    fields: &'a HashMap<String, String>,
    side: FormSide,
}

impl<'a> SideReader<'a> {
    fn key(&self, name: &str) -> String {
        format!("{}-{}", self.side, name)
    }

    fn raw(&self, name: &str) -> Option<(String, &'a str)> {
        let key = self.key(name);
        let value = self.fields.get(&key)?.trim();
        if value.is_empty() {
            None
        } else {
            Some((key, value))
        }
    }

    fn int(&self, name: &str) -> Result<i64> {
        match self.raw(name) {
            None => Ok(0),
            Some((key, value)) => value
                .parse::<i64>()
                .map_err(|_| MurzymeError::invalid_field(key, format!("expected an integer, got {value:?}"))),
        }
    }

    /// `1` is set, any other integer is unset.
    fn flag(&self, name: &str) -> Result<bool> {
        Ok(self.int(name)? == 1)
    }

    fn steps(&self, name: &str) -> Result<u32> {
        let n = self.int(name)?;
        u32::try_from(n).map_err(|_| {
            MurzymeError::invalid_field(self.key(name), format!("expected a non-negative step count, got {n}"))
        })
    }

    fn rate(&self, name: &str) -> Result<f64> {
        let Some((key, value)) = self.raw(name) else {
            return Ok(0.0);
        };
        value
            .parse::<f64>()
            .map_err(|_| MurzymeError::invalid_field(key, format!("expected a number, got {value:?}")))
    }

    fn kie(&self, name: &str) -> Result<KineticIsotopeEffect> {
        match self.raw(name) {
            None => Ok(KineticIsotopeEffect::Low),
            Some((_, v)) if v.eq_ignore_ascii_case("LOW") => Ok(KineticIsotopeEffect::Low),
            Some((_, v)) if v.eq_ignore_ascii_case("HIGH") => Ok(KineticIsotopeEffect::High),
            Some((key, v)) => Err(MurzymeError::invalid_field(key, format!("expected LOW or HIGH, got {v:?}"))),
        }
    }
}

/// Build one side's hypothesis record from the flat form fields.
pub fn record_from_fields(fields: &HashMap<String, String>, side: FormSide) -> Result<HypothesisRecord> {
    let r = SideReader { fields, side };

    let proposal = ProposalFeatures {
        shape_change: r.flag("ShapeChange")?,
        serial: r.flag("Serial")?,
        complexity: r.flag("Complexity")?,
        mechanistic_steps: r.steps("MechanisticSteps")?,
        probability: r.flag("Probability")?,
        intermediates: r.flag("Intermediates")?,
        long_distance_electron_transfer: r.flag("LongDistanceOSET")?,
        high_affinity_complex: r.flag("HighAffinityESComplex")?,
        substrate_bound: r.flag("SubstrateBound")?,
    };

    let structural = StructuralFeatures {
        active_site_access: if r.int("ActiveSiteAccess")? == 0 {
            ActiveSiteAccess::Limited
        } else {
            ActiveSiteAccess::Unlimited
        },
        substrate_size: if r.int("SubstrateSize")? == 0 {
            SubstrateSize::Small
        } else {
            SubstrateSize::Large
        },
    };

    let experimental = ExperimentalFeatures {
        selectivity: r.flag("Selectivity")?,
        specificity: r.flag("Specificity")?,
        diversity: r.flag("Diversity")?,
        non_integer_stoichiometry: r.flag("NonIntStoichiometry")?,
        variable_stoichiometry: r.flag("VariableStoichiometry")?,
        km_less_than_kd: r.flag("KmKd")?,
        diffusion_limited: r.flag("DiffusionLimits")?,
        zeroth_order_kinetics: r.flag("ZerothOrderKinetics")?,
        catalytic_rate: r.rate("CatalyticRate")?,
        kinetic_isotope_effect: r.kie("IntKIE")?,
    };

    Ok(HypothesisRecord { proposal, structural, experimental })
}

/// Build both compared records (model A, model B) from one form submission.
pub fn pair_from_fields(fields: &HashMap<String, String>) -> Result<(HypothesisRecord, HypothesisRecord)> {
    let a = record_from_fields(fields, FormSide::A)?;
    let b = record_from_fields(fields, FormSide::B)?;
    Ok((a, b))
}

/// Encode a record back into form values, keyed by bare field name.
/// Used to re-populate the page after a submission.
pub fn record_to_values(record: &HypothesisRecord) -> HashMap<&'static str, String> {
    let bit = |b: bool| (if b { "1" } else { "0" }).to_string();
    let p = &record.proposal;
    let s = &record.structural;
    let e = &record.experimental;

    HashMap::from([
        ("ShapeChange", bit(p.shape_change)),
        ("Serial", bit(p.serial)),
        ("Complexity", bit(p.complexity)),
        ("MechanisticSteps", p.mechanistic_steps.to_string()),
        ("Probability", bit(p.probability)),
        ("Intermediates", bit(p.intermediates)),
        ("LongDistanceOSET", bit(p.long_distance_electron_transfer)),
        ("HighAffinityESComplex", bit(p.high_affinity_complex)),
        ("SubstrateBound", bit(p.substrate_bound)),
        ("ActiveSiteAccess", bit(s.active_site_access == ActiveSiteAccess::Unlimited)),
        ("SubstrateSize", bit(s.substrate_size == SubstrateSize::Large)),
        ("Selectivity", bit(e.selectivity)),
        ("Specificity", bit(e.specificity)),
        ("Diversity", bit(e.diversity)),
        ("NonIntStoichiometry", bit(e.non_integer_stoichiometry)),
        ("VariableStoichiometry", bit(e.variable_stoichiometry)),
        ("KmKd", bit(e.km_less_than_kd)),
        ("DiffusionLimits", bit(e.diffusion_limited)),
        ("ZerothOrderKinetics", bit(e.zeroth_order_kinetics)),
        ("CatalyticRate", e.catalytic_rate.to_string()),
        ("IntKIE", e.kinetic_isotope_effect.as_str().to_string()),
    ])
}
