//! Model comparison API: runs the razor engine on a pair of hypotheses.

use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use murzyme_common::{form::pair_from_fields, HypothesisRecord};
use murzyme_razor::{analyse, Conclusion, ConsistencyRule, ModelAnalysis};

use crate::error::ApiError;
use crate::state::SharedState;

/// A pair of fully specified hypotheses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub a: HypothesisRecord,
    pub b: HypothesisRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResponse {
    #[serde(flatten)]
    pub analysis: ModelAnalysis,
    pub conclusion: Conclusion,
    pub headline: String,
    pub summary: String,
}

impl ComparisonResponse {
    pub fn build(a: &HypothesisRecord, b: &HypothesisRecord) -> Self {
        let analysis = analyse(a, b);
        info!(
            simpler = %analysis.simpler,
            failed_a = analysis.model_a.consistency.failed_checks,
            failed_b = analysis.model_b.consistency.failed_checks,
            "compared hypotheses"
        );
        Self {
            conclusion: analysis.conclusion(),
            headline: analysis.headline(),
            summary: analysis.render_text(),
            analysis,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RuleInfo {
    pub id: &'static str,
    pub description: &'static str,
}

/// POST /api/models/compare: compare two structured records
pub async fn api_compare(
    State(_state): State<SharedState>,
    Json(req): Json<CompareRequest>,
) -> Json<ComparisonResponse> {
    Json(ComparisonResponse::build(&req.a, &req.b))
}

/// POST /api/models/compare/form: compare two records given as flat page fields
pub async fn api_compare_form(
    State(_state): State<SharedState>,
    Json(fields): Json<HashMap<String, serde_json::Value>>,
) -> Result<Json<ComparisonResponse>, ApiError> {
    let fields = stringify_fields(fields);
    let (a, b) = pair_from_fields(&fields)?;
    Ok(Json(ComparisonResponse::build(&a, &b)))
}

/// GET /api/models/rules: list the consistency rubric
pub async fn api_rules() -> Json<Vec<RuleInfo>> {
    Json(
        ConsistencyRule::ALL
            .iter()
            .map(|r| RuleInfo { id: r.id(), description: r.description() })
            .collect(),
    )
}

/// Scripts post either strings or bare numbers; the form decoder reads strings.
fn stringify_fields(fields: HashMap<String, serde_json::Value>) -> HashMap<String, String> {
    fields
        .into_iter()
        .filter_map(|(k, v)| {
            let s = match v {
                serde_json::Value::Null => return None,
                serde_json::Value::String(s) => s,
                serde_json::Value::Bool(b) => (if b { "1" } else { "0" }).to_string(),
                other => other.to_string(),
            };
            Some((k, s))
        })
        .collect()
}
