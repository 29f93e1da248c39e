//! Compare two hypotheses from a JSON file without starting the server.
//!
//! The file holds `{ "a": <HypothesisRecord>, "b": <HypothesisRecord> }`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use murzyme_web::handlers::models::{CompareRequest, ComparisonResponse};
use murzyme_web::telemetry::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "murzyme-compare", version, about = "Occam's-razor comparison of two mechanism hypotheses")]
struct Args {
    /// JSON file with the two hypotheses
    request: PathBuf,

    /// Print the full analysis as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing("warn")?;
    let args = Args::parse();
    print!("{}", run(&args)?);
    Ok(())
}

/// Read the request file and render the comparison.
fn run(args: &Args) -> anyhow::Result<String> {
    let content = std::fs::read_to_string(&args.request)
        .with_context(|| format!("reading {}", args.request.display()))?;
    let req: CompareRequest = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", args.request.display()))?;

    let result = ComparisonResponse::build(&req.a, &req.b);
    if args.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&result)?));
    }
    Ok(format!(
        "{}\n\nModel A: {}\nModel B: {}\n\n{}\n",
        result.headline,
        result.analysis.model_a.status_line(),
        result.analysis.model_b.status_line(),
        result.summary,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use murzyme_test_utils::{consistent_hypothesis, inconsistent_hypothesis};
    use tempfile::NamedTempFile;

    fn request_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn args(file: &NamedTempFile, json: bool) -> Args {
        Args { request: file.path().to_path_buf(), json }
    }

    fn sample() -> NamedTempFile {
        let req = CompareRequest { a: inconsistent_hypothesis(), b: consistent_hypothesis() };
        request_file(&serde_json::to_string(&req).unwrap())
    }

    #[test]
    fn test_text_output_layout() {
        let out = run(&args(&sample(), false)).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Simpler Model: Model B");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Model A: Consistency: 0% (0/8 checks passed)");
        assert_eq!(lines[3], "Model B: Consistency: 100% (8/8 checks passed)");
        assert_eq!(lines[5], "Analysis Summary:");
    }

    #[test]
    fn test_json_output() {
        let out = run(&args(&sample(), true)).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["conclusion"], "prefer_b");
    }

    #[test]
    fn test_missing_file_fails() {
        let args = Args { request: "does/not/exist.json".into(), json: false };
        let err = run(&args).unwrap_err();
        assert!(err.to_string().starts_with("reading does/not/exist.json"));
    }

    #[test]
    fn test_malformed_file_fails() {
        let file = request_file(r#"{ "a": {} }"#);
        let err = run(&args(&file, false)).unwrap_err();
        assert!(err.to_string().starts_with("parsing "));
    }
}
