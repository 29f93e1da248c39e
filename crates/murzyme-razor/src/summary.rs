//! Combined verdict for a pair of hypotheses.
//!
//! Runs the simplicity comparison once and the consistency rubric on each
//! side, then derives the conclusion and the text summary shown to the user.

use serde::{Deserialize, Serialize};
use tracing::debug;

use murzyme_common::HypothesisRecord;

use crate::consistency::{check, ConsistencyResult};
use crate::simplicity::{score, Simpler, SimplicityScore};

/// Consistency outcome of one side, with the derived percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelReport {
    #[serde(flatten)]
    pub consistency: ConsistencyResult,
    pub passed_checks: u32,
    pub consistency_percent: u32,
}

impl ModelReport {
    pub fn from_result(consistency: ConsistencyResult) -> Self {
        Self {
            passed_checks: consistency.passed(),
            consistency_percent: consistency.consistency_percent(),
            consistency,
        }
    }

    /// e.g. `Consistency: 63% (5/8 checks passed)`
    pub fn status_line(&self) -> String {
        format!(
            "Consistency: {}% ({}/{} checks passed)",
            self.consistency_percent, self.passed_checks, self.consistency.total_checks
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    /// A is simpler and strictly more consistent
    PreferA,
    /// B is simpler and strictly more consistent
    PreferB,
    EquallySimple,
    /// The simpler model is not the more consistent one
    FurtherInvestigation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelAnalysis {
    pub simplicity: SimplicityScore,
    pub simpler: Simpler,
    pub model_a: ModelReport,
    pub model_b: ModelReport,
}

/// Evaluate a pair of hypotheses.
pub fn analyse(a: &HypothesisRecord, b: &HypothesisRecord) -> ModelAnalysis {
    let simplicity = score(a, b);
    let simpler = simplicity.verdict();
    let model_a = ModelReport::from_result(check(a));
    let model_b = ModelReport::from_result(check(b));

    debug!(
        points_a = simplicity.a,
        points_b = simplicity.b,
        failed_a = model_a.consistency.failed_checks,
        failed_b = model_b.consistency.failed_checks,
        "analysed hypothesis pair"
    );

    ModelAnalysis { simplicity, simpler, model_a, model_b }
}

impl ModelAnalysis {
    pub fn conclusion(&self) -> Conclusion {
        let pct_a = self.model_a.consistency_percent;
        let pct_b = self.model_b.consistency_percent;
        match self.simpler {
            Simpler::A if pct_a > pct_b => Conclusion::PreferA,
            Simpler::B if pct_b > pct_a => Conclusion::PreferB,
            Simpler::Tie => Conclusion::EquallySimple,
            _ => Conclusion::FurtherInvestigation,
        }
    }

    pub fn conclusion_text(&self) -> String {
        match self.conclusion() {
            Conclusion::PreferA | Conclusion::PreferB => format!(
                "{} is both simpler and more consistent with known data, making it the preferred choice according to Occam's Razor.",
                self.simpler.label()
            ),
            Conclusion::EquallySimple => "Both models are equally simple. Consider consistency scores to determine which aligns better with experimental data.".to_string(),
            Conclusion::FurtherInvestigation => format!(
                "The simpler model ({}) doesn't have the highest consistency score. Further investigation is recommended.",
                self.simpler.label()
            ),
        }
    }

    /// `Simpler Model: ...` headline.
    pub fn headline(&self) -> String {
        format!("Simpler Model: {}", self.simpler.label())
    }

    pub fn render_text(&self) -> String {
        let simpler_line = match self.simpler {
            Simpler::Tie => "- Both models are equally simple (based on simplicity criteria)".to_string(),
            side => format!("- {} is simpler (based on simplicity criteria)", side.label()),
        };

        let mut text = String::from("Analysis Summary:\n\n");
        text.push_str(&simpler_line);
        text.push('\n');
        for (name, report) in [("Model A", &self.model_a), ("Model B", &self.model_b)] {
            text.push_str(&format!(
                "- {name} passed {} out of {} consistency checks\n",
                report.passed_checks, report.consistency.total_checks
            ));
        }
        text.push_str("\nConclusion: ");
        text.push_str(&self.conclusion_text());
        text
    }
}
