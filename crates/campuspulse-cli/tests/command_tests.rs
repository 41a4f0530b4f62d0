// Rust guideline compliant 2026-10-16

//! Integration tests for CLI commands.

use campuspulse_app::{AppError, ErrorCode, ListOptions, RepoContext, SortField};
use campuspulse_cli::commands::{self, submit::SubmitArgs};
use campuspulse_cli::create_formatter;
use campuspulse_core::{Category, OutputFormat, PriorityLevel, Status, StressLevel};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, RepoContext) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let formatter = create_formatter(OutputFormat::Plain, false, false);
    commands::init::execute(Some(temp_dir.path()), formatter.as_ref()).expect("init");
    let repo = RepoContext::discover(Some(temp_dir.path())).expect("discover");
    (temp_dir, repo)
}

fn submit_json(repo: &RepoContext, args: SubmitArgs) -> Value {
    let formatter = create_formatter(OutputFormat::Json, false, false);
    let output = commands::submit::execute(repo, args, formatter.as_ref()).expect("submit");
    serde_json::from_str(&output).expect("valid JSON")
}

fn report(description: &str, category: Category, stress: StressLevel, student: &str) -> SubmitArgs {
    SubmitArgs {
        description: description.to_string(),
        category,
        stress,
        student: Some(student.to_string()),
        anonymous: false,
        department: Some("Student Affairs".to_string()),
    }
}

#[test]
fn test_init_creates_correct_structure() {
    let (temp_dir, repo) = setup();
    let data_dir = temp_dir.path().join(".campuspulse");

    assert!(data_dir.exists());
    assert_eq!(fs::read_to_string(repo.issues_path()).unwrap(), "");

    let config_content = fs::read_to_string(repo.config_path()).unwrap();
    assert!(config_content.contains("default_department"));
    assert!(config_content.contains("recent_limit"));
}

#[test]
fn test_commands_require_initialized_repo() {
    let temp_dir = TempDir::new().unwrap();
    let err = RepoContext::discover(Some(temp_dir.path())).unwrap_err();
    assert!(matches!(err, AppError::RepoNotInitialized { .. }));
    assert!(err.to_string().contains("cpulse init"));
}

#[test]
fn test_submit_assigns_priority_and_appends_line() {
    let (_tmp, repo) = setup();

    let value = submit_json(
        &repo,
        report(
            "Feeling overwhelmed with exams and having severe panic attacks.",
            Category::MentalHealth,
            StressLevel::High,
            "ROLL001",
        ),
    );
    assert_eq!(value["result"]["priority"], "Critical");
    assert_eq!(value["result"]["status"], "Pending");

    let content = fs::read_to_string(repo.issues_path()).unwrap();
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_submit_blank_description_is_rejected() {
    let (_tmp, repo) = setup();
    let formatter = create_formatter(OutputFormat::Json, false, false);

    let result = commands::submit::execute(
        &repo,
        report("   ", Category::Academic, StressLevel::Low, "ROLL001"),
        formatter.as_ref(),
    );

    let err = result.unwrap_err();
    assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::InvalidInput(_))));
    assert_eq!(fs::read_to_string(repo.issues_path()).unwrap(), "");
}

#[test]
fn test_classify_is_a_dry_run() {
    let formatter = create_formatter(OutputFormat::Plain, false, false);
    let output = commands::classify::execute(
        "My leg is in severe pain after the fall",
        Category::Facilities,
        StressLevel::Low,
        formatter.as_ref(),
    );
    assert_eq!(output, "Urgent\turgent keyword\tpain\n");
}

#[test]
fn test_mine_shows_only_own_reports_newest_first() {
    let (_tmp, repo) = setup();

    submit_json(&repo, report("Need a transcript copy", Category::Academic, StressLevel::Low, "ROLL001"));
    submit_json(&repo, report("Library too noisy", Category::Facilities, StressLevel::Low, "ROLL002"));

    let formatter = create_formatter(OutputFormat::Json, false, false);
    let output =
        commands::mine::execute(&repo, Some("ROLL001".to_string()), None, formatter.as_ref()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["result"]["total"], 1);
    assert_eq!(value["result"]["issues"][0]["student_id"], "ROLL001");
}

#[test]
fn test_mine_respects_limit() {
    let (_tmp, repo) = setup();
    for i in 0..4 {
        submit_json(
            &repo,
            report(&format!("Report number {}", i), Category::Academic, StressLevel::Low, "ROLL001"),
        );
    }

    let formatter = create_formatter(OutputFormat::Json, false, false);
    let output =
        commands::mine::execute(&repo, Some("ROLL001".to_string()), Some(2), formatter.as_ref()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["result"]["total"], 2);
}

#[test]
fn test_mine_trims_student_like_submit() {
    let (_tmp, repo) = setup();
    submit_json(&repo, report("Need a transcript copy", Category::Academic, StressLevel::Low, " ROLL001 "));

    let formatter = create_formatter(OutputFormat::Json, false, false);
    let output =
        commands::mine::execute(&repo, Some(" ROLL001".to_string()), None, formatter.as_ref()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["result"]["total"], 1);
    assert_eq!(value["result"]["issues"][0]["student_id"], "ROLL001");
}

#[test]
fn test_mine_rejects_blank_student() {
    let (_tmp, repo) = setup();
    let formatter = create_formatter(OutputFormat::Json, false, false);

    let err = commands::mine::execute(&repo, Some("   ".to_string()), None, formatter.as_ref()).unwrap_err();
    let app_error = err.downcast_ref::<AppError>().expect("blank student is an input error");
    assert_eq!(app_error.code(), ErrorCode::InvalidInput);
}

#[test]
fn test_feed_masks_anonymous_reporters() {
    let (_tmp, repo) = setup();

    let mut anonymous = report("Facing harassment near the gate", Category::Hostel, StressLevel::Low, "ROLL001");
    anonymous.anonymous = true;
    submit_json(&repo, anonymous);
    submit_json(&repo, report("Need a transcript copy", Category::Academic, StressLevel::Low, "ROLL002"));

    let formatter = create_formatter(OutputFormat::Json, false, false);
    let options = ListOptions {
        sort: Some(SortField::Priority),
        ..ListOptions::default()
    };
    let output = commands::feed::execute(&repo, &options, formatter.as_ref()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["result"]["total"], 2);
    assert_eq!(value["result"]["issues"][0]["priority"], "Critical");
    assert_eq!(value["result"]["issues"][0]["student_id"], "Anonymous");
    assert!(!output.contains("ROLL001"));
}

#[test]
fn test_feed_filters_by_priority() {
    let (_tmp, repo) = setup();
    submit_json(&repo, report("There was a fire in the lab", Category::Facilities, StressLevel::Low, "ROLL001"));
    submit_json(&repo, report("Need a transcript copy", Category::Academic, StressLevel::Low, "ROLL002"));

    let formatter = create_formatter(OutputFormat::Json, false, false);
    let options = ListOptions {
        priority: Some(PriorityLevel::Normal),
        ..ListOptions::default()
    };
    let output = commands::feed::execute(&repo, &options, formatter.as_ref()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["result"]["total"], 1);
    assert_eq!(value["result"]["issues"][0]["student_id"], "ROLL002");
}

#[test]
fn test_set_status_then_show() {
    let (_tmp, repo) = setup();
    let submitted = submit_json(
        &repo,
        report("Broken AC in library common area.", Category::Facilities, StressLevel::Low, "ROLL001"),
    );
    let id = submitted["result"]["id"].as_str().unwrap().to_string();

    let formatter = create_formatter(OutputFormat::Json, false, false);
    commands::set_status::execute(&repo, &id, Status::InProgress, formatter.as_ref()).unwrap();

    let output = commands::show::execute(&repo, &id[..7], formatter.as_ref()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["result"]["status"], "In Progress");
    assert_eq!(value["result"]["priority"], "Urgent");
}

#[test]
fn test_set_status_to_same_status_fails() {
    let (_tmp, repo) = setup();
    let submitted = submit_json(
        &repo,
        report("Library too noisy", Category::Facilities, StressLevel::Low, "ROLL001"),
    );
    let id = submitted["result"]["id"].as_str().unwrap().to_string();

    let formatter = create_formatter(OutputFormat::Json, false, false);
    let err = commands::set_status::execute(&repo, &id, Status::Pending, formatter.as_ref()).unwrap_err();
    let app_error = err.downcast_ref::<AppError>().expect("application error");
    assert_eq!(app_error.code(), campuspulse_app::ErrorCode::InvalidTransition);
}

#[test]
fn test_stats_counts_and_rate() {
    let (_tmp, repo) = setup();
    let formatter = create_formatter(OutputFormat::Json, false, false);

    let empty = commands::stats::execute(&repo, formatter.as_ref()).unwrap();
    let value: Value = serde_json::from_str(&empty).unwrap();
    assert!(value["result"]["resolution_rate"].is_null());

    let submitted = submit_json(
        &repo,
        report("There was a fire in the lab", Category::Facilities, StressLevel::Low, "ROLL001"),
    );
    let id = submitted["result"]["id"].as_str().unwrap().to_string();
    commands::set_status::execute(&repo, &id, Status::Resolved, formatter.as_ref()).unwrap();

    let output = commands::stats::execute(&repo, formatter.as_ref()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["result"]["total"], 1);
    assert_eq!(value["result"]["critical"], 1);
    assert_eq!(value["result"]["resolution_rate"], 100);
}
