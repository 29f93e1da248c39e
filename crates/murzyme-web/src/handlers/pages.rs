//! Model comparison page: side-by-side form for two hypotheses and the results panel.

use std::collections::HashMap;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

use murzyme_common::form::{pair_from_fields, record_to_values, FormSide};
use murzyme_common::HypothesisRecord;

use crate::handlers::models::ComparisonResponse;
use crate::state::SharedState;

#[derive(Clone, Copy)]
enum Input {
    /// Select with labels for 0 and 1
    Choice(&'static str, &'static str),
    Number(&'static str),
    Kie,
}

struct FieldSpec {
    name: &'static str,
    label: &'static str,
    input: Input,
}

const YES_NO: Input = Input::Choice("No", "Yes");

const fn field(name: &'static str, label: &'static str, input: Input) -> FieldSpec {
    FieldSpec { name, label, input }
}

const PROPOSAL_FIELDS: [FieldSpec; 9] = [
    field("ShapeChange", "Shape change", YES_NO),
    field("Serial", "Serial steps", YES_NO),
    field("Complexity", "Complexity", YES_NO),
    field("MechanisticSteps", "Mechanistic steps", Input::Number("1")),
    field("Probability", "Probable", YES_NO),
    field("Intermediates", "Intermediates", YES_NO),
    field("LongDistanceOSET", "Long-distance OSET", YES_NO),
    field("HighAffinityESComplex", "High-affinity ES complex", YES_NO),
    field("SubstrateBound", "Substrate bound", YES_NO),
];

const STRUCTURAL_FIELDS: [FieldSpec; 2] = [
    field("ActiveSiteAccess", "Active-site access", Input::Choice("Limited", "Unlimited")),
    field("SubstrateSize", "Substrate size", Input::Choice("Small", "Large")),
];

const EXPERIMENTAL_FIELDS: [FieldSpec; 10] = [
    field("Selectivity", "Selectivity", YES_NO),
    field("Specificity", "Specificity", YES_NO),
    field("Diversity", "Diversity", YES_NO),
    field("NonIntStoichiometry", "Non-integer stoichiometry", YES_NO),
    field("VariableStoichiometry", "Variable stoichiometry", YES_NO),
    field("KmKd", "Km &lt; Kd", YES_NO),
    field("DiffusionLimits", "Diffusion limited", YES_NO),
    field("ZerothOrderKinetics", "Zeroth-order kinetics", YES_NO),
    field("CatalyticRate", "Catalytic rate (s⁻¹)", Input::Number("any")),
    field("IntKIE", "Intrinsic KIE", Input::Kie),
];

/// GET /models: comparison form in its reset state
pub async fn models_page(State(_state): State<SharedState>) -> Html<String> {
    let reset = HypothesisRecord::default();
    let mut values = prefixed_values(FormSide::A, &reset);
    values.extend(prefixed_values(FormSide::B, &reset));
    Html(render_models_page(&values, None, None))
}

/// POST /models: run the comparison and show the results panel
pub async fn models_submit(
    State(_state): State<SharedState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    match pair_from_fields(&fields) {
        Ok((a, b)) => {
            let result = ComparisonResponse::build(&a, &b);
            let mut values = prefixed_values(FormSide::A, &a);
            values.extend(prefixed_values(FormSide::B, &b));
            Html(render_models_page(&values, Some(&result), None)).into_response()
        }
        Err(e) => {
            warn!("rejected comparison form: {e}");
            let page = render_models_page(&fields, None, Some(&e.to_string()));
            (StatusCode::BAD_REQUEST, Html(page)).into_response()
        }
    }
}

fn prefixed_values(side: FormSide, record: &HypothesisRecord) -> HashMap<String, String> {
    record_to_values(record)
        .into_iter()
        .map(|(name, v)| (format!("{side}-{name}"), v))
        .collect()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_input(side: FormSide, spec: &FieldSpec, values: &HashMap<String, String>) -> String {
    let key = format!("{side}-{}", spec.name);
    let current = values.get(&key).map(|v| v.trim()).unwrap_or_default();

    let control = match spec.input {
        Input::Choice(off, on) => {
            let selected_on = current == "1";
            format!(
                r#"<select id="{key}" name="{key}"><option value="0"{}>{off}</option><option value="1"{}>{on}</option></select>"#,
                if selected_on { "" } else { " selected" },
                if selected_on { " selected" } else { "" },
            )
        }
        Input::Number(step) => {
            let value = if current.is_empty() { "0" } else { current };
            format!(
                r#"<input type="number" id="{key}" name="{key}" min="0" step="{step}" value="{}">"#,
                escape_html(value)
            )
        }
        Input::Kie => {
            let high = current.eq_ignore_ascii_case("HIGH");
            format!(
                r#"<select id="{key}" name="{key}"><option value="LOW"{}>LOW</option><option value="HIGH"{}>HIGH</option></select>"#,
                if high { "" } else { " selected" },
                if high { " selected" } else { "" },
            )
        }
    };

    format!(
        r#"<div class="form-row"><label for="{key}">{}</label>{control}</div>"#,
        spec.label
    )
}

fn render_side(side: FormSide, values: &HashMap<String, String>) -> String {
    let section = |title: &str, specs: &[FieldSpec]| -> String {
        let rows: String = specs.iter().map(|s| render_input(side, s, values)).collect();
        format!(r#"<fieldset><legend>{title}</legend>{rows}</fieldset>"#)
    };
    format!(
        r#"<div class="model-card"><h2>Model {side}</h2>{}{}{}</div>"#,
        section("Proposal", &PROPOSAL_FIELDS[..]),
        section("Structural", &STRUCTURAL_FIELDS[..]),
        section("Experimental", &EXPERIMENTAL_FIELDS[..]),
    )
}

fn render_results(result: &ComparisonResponse) -> String {
    let analysis = &result.analysis;
    let model = |name: &str, id: &str, report: &murzyme_razor::ModelReport| -> String {
        let violations: String = if report.consistency.violations.is_empty() {
            r#"<li class="text-muted">No rules violated.</li>"#.to_string()
        } else {
            report
                .consistency
                .violations
                .iter()
                .map(|r| format!("<li>{}</li>", r.description()))
                .collect()
        };
        format!(
            r#"<div class="model-result">
                <h3>{name}</h3>
                <p id="{id}-score">{}</p>
                <div class="progress"><div id="{id}-bar" class="progress-bar" style="width: {}%"></div></div>
                <ul class="violations">{violations}</ul>
            </div>"#,
            report.status_line(),
            report.consistency_percent,
        )
    };

    format!(
        r#"<section id="results-container">
            <h2 id="simpler-model-result">{}</h2>
            {}
            {}
            <pre id="analysis-summary-text">{}</pre>
        </section>"#,
        escape_html(&result.headline),
        model("Model A", "model-a", &analysis.model_a),
        model("Model B", "model-b", &analysis.model_b),
        escape_html(&result.summary),
    )
}

pub(crate) fn render_models_page(
    values: &HashMap<String, String>,
    result: Option<&ComparisonResponse>,
    error: Option<&str>,
) -> String {
    let error_panel = error
        .map(|e| format!(r#"<div class="alert alert-danger">{}</div>"#, escape_html(e)))
        .unwrap_or_default();
    let results_panel = result.map(render_results).unwrap_or_default();

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Model Similarity — Murzymes</title>
</head>
<body>
<main class="container">
    <h1>Model Similarity</h1>
    <p class="text-muted">Compare two mechanistic hypotheses by simplicity and consistency with experimental observations.</p>
    {error_panel}
    <form method="post" action="/models">
        <div class="model-grid">
            {}
            {}
        </div>
        <button type="submit" id="compare-models-btn">Compare Models</button>
        <a href="/models" id="reset-models-btn">Reset</a>
    </form>
    {results_panel}
</main>
</body>
</html>"#,
        render_side(FormSide::A, values),
        render_side(FormSide::B, values),
    )
}
