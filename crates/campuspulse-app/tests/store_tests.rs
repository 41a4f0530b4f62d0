// Rust guideline compliant 2026-10-16

use campuspulse_app::fsm::update_status_at;
use campuspulse_app::submit::submit_at;
use campuspulse_app::{
    list_issues, visible_to, AppError, ErrorCode, ListOptions, RepoContext, SortField,
    SubmitRequest, Viewer,
};
use campuspulse_core::{
    Category, Config, DashboardStats, Issue, PriorityLevel, Status, Storage, StressLevel,
    ANONYMOUS_LABEL,
};
use std::fs::OpenOptions;
use std::io::Write;
use std::thread;
use tempfile::TempDir;

fn setup() -> (TempDir, RepoContext) {
    let temp_dir = TempDir::new().unwrap();
    let repo = RepoContext::initialize(Some(temp_dir.path())).unwrap();
    (temp_dir, repo)
}

fn stored(storage: &Storage, id: &str) -> Issue {
    storage
        .load_all()
        .unwrap()
        .into_iter()
        .find(|issue| issue.id == id)
        .expect("issue should be stored")
}

fn request(student: &str, description: &str, category: Category, stress: StressLevel) -> SubmitRequest {
    SubmitRequest {
        student_id: Some(student.to_string()),
        department: Some("Student Affairs".to_string()),
        ..SubmitRequest::new(description, category, stress)
    }
}

#[test]
fn test_submit_persists_classified_issue() {
    let (_tmp, repo) = setup();
    let storage = repo.open_storage().unwrap();
    let config = Config::default();

    let issue = submit_at(
        &storage,
        request(
            "ROLL001",
            "Feeling overwhelmed with exams and having severe panic attacks.",
            Category::MentalHealth,
            StressLevel::High,
        ),
        &config,
        1_700_000_000,
    )
    .unwrap();

    assert_eq!(issue.priority, PriorityLevel::Critical);
    assert_eq!(issue.status, Status::Pending);
    assert!(issue.id.starts_with("iss-"));

    let stored = stored(&storage, &issue.id);
    assert_eq!(stored, issue);
}

#[test]
fn test_submit_uses_config_defaults() {
    let (_tmp, repo) = setup();
    let storage = repo.open_storage().unwrap();
    let config = Config::default();

    let issue = submit_at(
        &storage,
        SubmitRequest::new("Broken AC in library common area.", Category::Facilities, StressLevel::Low),
        &config,
        1_700_000_000,
    )
    .unwrap();

    assert_eq!(issue.student_id, config.default_student_id);
    assert_eq!(issue.department, config.default_department);
    assert_eq!(issue.priority, PriorityLevel::Urgent);
}

#[test]
fn test_submit_rejects_blank_description() {
    let (_tmp, repo) = setup();
    let storage = repo.open_storage().unwrap();

    let result = submit_at(
        &storage,
        request("ROLL001", "   \n\t", Category::Academic, StressLevel::Low),
        &Config::default(),
        1_700_000_000,
    );

    let err = result.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);
    assert!(storage.load_all().unwrap().is_empty());
}

#[test]
fn test_submit_rejects_blank_department() {
    let (_tmp, repo) = setup();
    let storage = repo.open_storage().unwrap();
    let mut req = request("ROLL001", "Wifi is down", Category::Hostel, StressLevel::Low);
    req.department = Some("  ".to_string());

    let result = submit_at(&storage, req, &Config::default(), 1_700_000_000);
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_identical_submissions_get_distinct_ids() {
    let (_tmp, repo) = setup();
    let storage = repo.open_storage().unwrap();
    let config = Config::default();

    let first = submit_at(
        &storage,
        request("ROLL001", "Wifi is down", Category::Hostel, StressLevel::Low),
        &config,
        1_700_000_000,
    )
    .unwrap();
    let second = submit_at(
        &storage,
        request("ROLL001", "Wifi is down", Category::Hostel, StressLevel::Low),
        &config,
        1_700_000_000,
    )
    .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(storage.load_all().unwrap().len(), 2);
}

#[test]
fn test_status_update_keeps_priority() {
    let (_tmp, repo) = setup();
    let storage = repo.open_storage().unwrap();

    let issue = submit_at(
        &storage,
        request(
            "ROLL002",
            "Water leakage in Block B Room 302 causing electrical sparks.",
            Category::Hostel,
            StressLevel::Medium,
        ),
        &Config::default(),
        1_700_000_000,
    )
    .unwrap();
    assert_eq!(issue.priority, PriorityLevel::Urgent);

    let updated = update_status_at(&storage, &issue.id, Status::Resolved, 1_700_000_500).unwrap();
    assert_eq!(updated.status, Status::Resolved);
    assert_eq!(updated.priority, PriorityLevel::Urgent);
    assert_eq!(updated.updated_at, 1_700_000_500);
    assert_eq!(updated.created_at, 1_700_000_000);

    let reopened = update_status_at(&storage, &issue.id, Status::Pending, 1_700_000_900).unwrap();
    assert_eq!(reopened.status, Status::Pending);
    assert_eq!(reopened.priority, PriorityLevel::Urgent);
}

#[test]
fn test_status_update_accepts_partial_id() {
    let (_tmp, repo) = setup();
    let storage = repo.open_storage().unwrap();
    let issue = submit_at(
        &storage,
        request("ROLL001", "Library too noisy", Category::Facilities, StressLevel::Low),
        &Config::default(),
        1_700_000_000,
    )
    .unwrap();

    let partial = &issue.id["iss-".len().."iss-".len() + 4];
    let updated = update_status_at(&storage, partial, Status::InProgress, 1_700_000_100).unwrap();
    assert_eq!(updated.id, issue.id);
    assert_eq!(updated.status, Status::InProgress);
}

#[test]
fn test_same_status_update_is_rejected() {
    let (_tmp, repo) = setup();
    let storage = repo.open_storage().unwrap();
    let issue = submit_at(
        &storage,
        request("ROLL001", "Library too noisy", Category::Facilities, StressLevel::Low),
        &Config::default(),
        1_700_000_000,
    )
    .unwrap();

    let err = update_status_at(&storage, &issue.id, Status::Pending, 1_700_000_100).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTransition);

    let stored = stored(&storage, &issue.id);
    assert_eq!(stored.updated_at, 1_700_000_000);
}

#[test]
fn test_status_update_unknown_id() {
    let (_tmp, repo) = setup();
    let storage = repo.open_storage().unwrap();

    let err = update_status_at(&storage, "iss-ffffff", Status::Resolved, 1).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[test]
fn test_student_feed_and_admin_feed() {
    let (_tmp, repo) = setup();
    let storage = repo.open_storage().unwrap();
    let config = Config::default();

    let mut anonymous = request("ROLL001", "Facing harassment in the hostel", Category::Hostel, StressLevel::Low);
    anonymous.is_anonymous = true;
    submit_at(&storage, anonymous, &config, 1_700_000_000).unwrap();
    submit_at(
        &storage,
        request("ROLL002", "Need a transcript copy", Category::Academic, StressLevel::Low),
        &config,
        1_700_000_100,
    )
    .unwrap();

    let issues = storage.load_all().unwrap();

    let mine = visible_to(issues.clone(), &Viewer::Student("ROLL001".to_string()));
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].student_id, "ROLL001");

    let options = ListOptions {
        sort: Some(SortField::Priority),
        ..ListOptions::default()
    };
    let feed = list_issues(visible_to(issues, &Viewer::Admin), &options);
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].priority, PriorityLevel::Critical);
    assert_eq!(feed[0].student_id, ANONYMOUS_LABEL);
    assert_eq!(feed[1].student_id, "ROLL002");
}

#[test]
fn test_stats_over_store() {
    let (_tmp, repo) = setup();
    let storage = repo.open_storage().unwrap();
    let config = Config::default();

    let issue = submit_at(
        &storage,
        request("ROLL001", "Fire alarm keeps ringing", Category::Hostel, StressLevel::Low),
        &config,
        1_700_000_000,
    )
    .unwrap();
    submit_at(
        &storage,
        request("ROLL002", "Need a transcript copy", Category::Academic, StressLevel::Low),
        &config,
        1_700_000_100,
    )
    .unwrap();
    update_status_at(&storage, &issue.id, Status::Resolved, 1_700_000_200).unwrap();

    let stats = DashboardStats::from_issues(&storage.load_all().unwrap());
    assert_eq!(stats.total, 2);
    assert_eq!(stats.resolved, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.critical, 1);
    assert_eq!(stats.resolution_rate, Some(50));
}

#[test]
fn test_damaged_record_does_not_block_the_store() {
    let (_tmp, repo) = setup();
    let storage = repo.open_storage().unwrap();
    let config = Config::default();

    let first = submit_at(
        &storage,
        request("ROLL001", "Need a transcript copy", Category::Academic, StressLevel::Low),
        &config,
        1_700_000_000,
    )
    .unwrap();

    let mut damaged = serde_json::to_value(&first).unwrap();
    damaged["id"] = "iss-0d0d0d".into();
    damaged["department"] = "".into();
    let mut file = OpenOptions::new().append(true).open(repo.issues_path()).unwrap();
    writeln!(file, "{}", damaged).unwrap();

    let second = submit_at(
        &storage,
        request("ROLL002", "Library too noisy", Category::Facilities, StressLevel::Low),
        &config,
        1_700_000_100,
    )
    .unwrap();
    update_status_at(&storage, &first.id, Status::InProgress, 1_700_000_200).unwrap();

    let ids: Vec<_> = storage.load_all().unwrap().into_iter().map(|issue| issue.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn test_concurrent_submissions_are_all_persisted() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 10;

    let (_tmp, repo) = setup();

    let handles: Vec<_> = (0..THREADS)
        .map(|worker| {
            let storage = repo.open_storage().unwrap();
            thread::spawn(move || {
                let config = Config::default();
                for n in 0..PER_THREAD {
                    let student = format!("ROLL{:03}", worker);
                    let description = format!("Report {} from worker {}", n, worker);
                    submit_at(
                        &storage,
                        request(&student, &description, Category::Academic, StressLevel::Low),
                        &config,
                        1_700_000_000,
                    )
                    .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let issues = repo.open_storage().unwrap().load_all().unwrap();
    assert_eq!(issues.len(), THREADS * PER_THREAD);

    let mut ids: Vec<_> = issues.iter().map(|issue| issue.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), THREADS * PER_THREAD, "IDs should be unique");
}
