//! The demo request shipped for `murzyme-compare` stays readable and gives the documented verdict.

use std::path::PathBuf;

use murzyme_common::MurzymeConfig;
use murzyme_razor::{Conclusion, Simpler};
use murzyme_web::handlers::models::{CompareRequest, ComparisonResponse};

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

#[test]
fn test_demo_request_prefers_model_b() {
    let content = std::fs::read_to_string(repo_root().join("demos/compare-request.json")).unwrap();
    let req: CompareRequest = serde_json::from_str(&content).unwrap();

    let result = ComparisonResponse::build(&req.a, &req.b);
    assert_eq!(result.analysis.simpler, Simpler::B);
    assert_eq!(result.analysis.model_a.consistency.failed_checks, 8);
    assert_eq!(result.analysis.model_b.consistency.failed_checks, 0);
    assert_eq!(result.conclusion, Conclusion::PreferB);
}

#[test]
fn test_example_config_parses() {
    let config = MurzymeConfig::load_from(repo_root().join("murzyme.example.toml")).unwrap();
    assert_eq!(config.server.port, 3001);
    assert!(config.server.permissive_cors);
}
