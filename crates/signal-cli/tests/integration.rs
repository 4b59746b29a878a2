//! Integration test: load an ontology from disk, analyze documents, render output.

use signal_core::{Ontology, PredictionPolicy};
use signal_render::{JsonlWriter, render_human, render_json};
use signal_score::Analyzer;
use std::fs;
use std::path::Path;
use std::process::Command;

const SAMPLE_ONTOLOGY: &str = include_str!("../data/ontology.json");

const JOB: &str = "Senior Cloud Engineer\n\
    We need AWS and Azure deployment experience, Kubernetes and Terraform.\n\
    Continuous integration pipelines and security compliance are a plus.\n\
    Apply at https://jobs.example.com/123 or talent@example.com";

const RESUME: &str = "Jane Doe | jane@example.org\n\
    Platform engineer (2018-2024): built Kubernetes clusters on AWS,\n\
    owned continuous integration with GitHub Actions, SOC2 security reviews.";

fn write_fixture(root: &Path) {
    fs::write(root.join("ontology.json"), SAMPLE_ONTOLOGY).unwrap();
    fs::write(root.join("job.txt"), JOB).unwrap();
    fs::write(root.join("resume.txt"), RESUME).unwrap();
}

fn signal(root: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_signal"))
        .current_dir(root)
        .env_remove("SIGNAL_ONTOLOGY")
        .env_remove("SIGNAL_CONFIG")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn sample_ontology_loads_cleanly() {
    let ontology = Ontology::from_json_str(SAMPLE_ONTOLOGY).unwrap();
    assert_eq!(ontology.domain_count(), 6);
    assert_eq!(ontology.group_count(), 3);
    assert!(ontology.dangling_references().is_empty());
}

#[test]
fn analyze_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let ontology = Ontology::load(&dir.path().join("ontology.json")).unwrap();
    let result = Analyzer::new(&ontology).analyze(RESUME, JOB).unwrap();

    assert_eq!(
        result.predicted_group.as_deref(),
        Some("Cloud & Platform Engineers")
    );
    assert_eq!(result.critical_domains.len(), 3);
    assert!(result.suggested_titles.contains(&"Cloud Engineer".to_string()));

    let cloud_gaps = &result.domain_gaps["Cloud Infrastructure"];
    assert_eq!(cloud_gaps, &vec!["azure", "deployment", "terraform"]);
    assert!(!result.domain_gaps.contains_key("Software Delivery"));

    for score in result.domain_scores.values() {
        assert!((0.0..=100.0).contains(score));
    }
    assert!(result.overall_score > 0.0 && result.overall_score < 100.0);
}

#[test]
fn every_renderer_accepts_the_result() {
    let ontology = Ontology::from_json_str(SAMPLE_ONTOLOGY).unwrap();
    let result = Analyzer::new(&ontology).analyze(RESUME, JOB).unwrap();

    let human = render_human(&result).unwrap();
    assert!(human.contains("Cloud & Platform Engineers"));

    let json: serde_json::Value = serde_json::from_str(&render_json(&result).unwrap()).unwrap();
    assert_eq!(json["predicted_group"], "Cloud & Platform Engineers");

    let jsonl = JsonlWriter::new()
        .policy(PredictionPolicy::JobVocabulary)
        .render(&result)
        .unwrap();
    let lines: Vec<&str> = jsonl.trim().lines().collect();
    assert_eq!(lines.len(), result.domain_scores.len() + 2);
    for line in &lines {
        let parsed: Result<serde_json::Value, _> = serde_json::from_str(line);
        assert!(parsed.is_ok(), "Invalid JSON: {line}");
    }
}

#[test]
fn binary_renders_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let output = signal(
        dir.path(),
        &[
            "analyze", "--resume", "resume.txt", "--job", "job.txt", "--format", "jsonl", "-q",
        ],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let header: serde_json::Value =
        serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(header["PredictedGroup"], "Cloud & Platform Engineers");
    assert_eq!(header["Policy"], "job-vocabulary");
}

#[test]
fn binary_reports_insufficient_input() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    fs::write(dir.path().join("empty.txt"), "").unwrap();

    let output = signal(
        dir.path(),
        &["analyze", "--resume", "empty.txt", "--job", "job.txt"],
    );
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Insufficient input"));
}

#[test]
fn binary_fails_without_ontology() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("job.txt"), JOB).unwrap();
    fs::write(dir.path().join("resume.txt"), RESUME).unwrap();

    let output = signal(
        dir.path(),
        &["analyze", "--resume", "resume.txt", "--job", "job.txt"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ontology unavailable"));
}

#[test]
fn binary_fails_on_malformed_ontology() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    fs::write(dir.path().join("ontology.json"), "{\"SignalDomains\": {}}").unwrap();

    let output = signal(
        dir.path(),
        &["analyze", "--resume", "resume.txt", "--job", "job.txt"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ontology unavailable"));
    assert!(stderr.contains("SOC_Groups"));
}

#[test]
fn binary_scores_signal_strength() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let output = signal(
        dir.path(),
        &["strength", "--resume", "resume.txt", "--job", "job.txt", "-q"],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Signal strength score: 50.0%"));
    assert!(stdout.contains("Domains matched:       3 of 6 (50.0%)"));
    let cloud = stdout
        .lines()
        .find(|l| l.starts_with("Cloud Infrastructure"))
        .unwrap();
    assert!(cloud.ends_with("Azure deployment, Terraform"));
}

#[test]
fn binary_strength_honours_config_weights() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    fs::write(
        dir.path().join("scoring.json"),
        r#"{"weights": {"mli": 0.0, "signal_strength": 1.0}}"#,
    )
    .unwrap();

    let output = signal(
        dir.path(),
        &[
            "strength", "--resume", "resume.txt", "--job", "job.txt", "--config", "scoring.json",
            "--format", "json", "-q",
        ],
    );
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["matched_domains"], 3);
    assert_eq!(report["score"], 50.0);
    assert_eq!(report["domains"][2]["match_ratio"], 1.0);
}

#[test]
fn binary_strength_rejects_bad_config() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    fs::write(dir.path().join("scoring.json"), r#"{"weights": {"mli": -1}}"#).unwrap();

    let output = signal(
        dir.path(),
        &["strength", "--resume", "resume.txt", "--job", "job.txt", "--config", "scoring.json"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid scoring config"));
}

#[test]
fn binary_inspects_ontology() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let output = signal(dir.path(), &["inspect"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Signal domains: 6"));
    assert!(stdout.contains("Occupational groups: 3"));
    assert!(!stdout.contains("Unknown domain references"));
    assert!(!stdout.contains("Unreachable keywords"));
}

#[test]
fn inspect_lists_unreachable_keywords() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("ontology.json"),
        r#"{"SignalDomains": {"Security": ["SOC2 audits", "cross-functional", "as code"]},
            "SOC_Groups": {}}"#,
    )
    .unwrap();

    let output = signal(dir.path(), &["inspect"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Unreachable keywords"));
    assert!(stdout.contains("Security: soc2"));
    assert!(stdout.contains("Security: cross-functional"));
    assert!(stdout.contains("Security: as"));
    assert!(!stdout.contains("Security: audits"));
    assert!(!stdout.contains("Security: code"));
}
