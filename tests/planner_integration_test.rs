use chrono::NaiveDate;
use degreewise_planner::core::ConfigProvider;
use degreewise_planner::{
    FixedClock, LocalStorage, PlannerEngine, PlannerError, PlanningPipeline, PlanningReport,
    TomlConfig,
};
use tempfile::TempDir;

const AUDIT: &str = r#"{
    "completedCourses": [{"code": "CS 101", "credits": 4}],
    "remainingCourses": [
        {"code": "CS 310", "credits": 3},
        {"code": "CS 330", "credits": 4},
        {"code": "MATH 340", "credits": 4},
        {"code": "PHYS 210", "credits": 4},
        {"code": "HIST 101", "credits": 3}
    ],
    "creditsEarned": 60,
    "creditsApplied": 75,
    "creditsNeeded": 45,
    "creditsRequired": 120,
    "overallGPA": 3.25
}"#;

fn config_for(dir: &TempDir, extra: &str) -> TomlConfig {
    let record_path = dir.path().join("audit.json");
    let output_path = dir.path().join("plans");
    let toml_content = format!(
        "[record]\npath = {:?}\n\n[output]\npath = {:?}\n{}",
        record_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
        extra
    );
    TomlConfig::from_toml_str(&toml_content).unwrap()
}

fn march_15() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
}

#[tokio::test]
async fn test_end_to_end_planning_run() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("audit.json"), AUDIT).unwrap();

    let config = config_for(&temp_dir, "");
    let output_storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = PlanningPipeline::new(
        LocalStorage::new(".".to_string()),
        output_storage,
        config,
        march_15(),
    );

    let output_path = PlannerEngine::new(pipeline).run().await.unwrap();
    assert!(output_path.ends_with("planning_report.json"));

    let plans_dir = temp_dir.path().join("plans");
    let report: PlanningReport =
        serde_json::from_slice(&std::fs::read(plans_dir.join("planning_report.json")).unwrap())
            .unwrap();

    // 45 credits left with Fall credits in progress: Spring 2025 start, three terms
    assert_eq!(report.graduation, "May 2026");
    assert_eq!(report.summary.required, 120.0);
    assert_eq!(report.schedules.len(), 3);
    assert!(report.schedules.iter().all(|p| p.total_credits >= 15.0));

    let top_plan = std::fs::read_to_string(plans_dir.join("semester_plan.csv")).unwrap();
    assert_eq!(
        top_plan,
        "Course,Credits\nCS 310,3.0\nCS 330,4.0\nMATH 340,4.0\nPHYS 210,4.0\n"
    );

    let options = std::fs::read_to_string(plans_dir.join("schedule_options.csv")).unwrap();
    assert!(options.starts_with("Option,Courses,Total Credits\n"));
    assert_eq!(options.lines().count(), 4);
}

#[tokio::test]
async fn test_run_with_unreachable_floor_still_reports() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("audit.json"), AUDIT).unwrap();

    let config = config_for(&temp_dir, "\n[schedule]\ncredit_floor = 30\n");
    let output_storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = PlanningPipeline::new(
        LocalStorage::new(".".to_string()),
        output_storage,
        config,
        march_15(),
    );

    PlannerEngine::new(pipeline).run().await.unwrap();

    let plans_dir = temp_dir.path().join("plans");
    assert!(plans_dir.join("planning_report.json").exists());
    assert!(!plans_dir.join("semester_plan.csv").exists());
}

#[tokio::test]
async fn test_invalid_record_fails_with_input_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("audit.json"),
        r#"{"creditsEarned": -5, "creditsApplied": 10}"#,
    )
    .unwrap();

    let config = config_for(&temp_dir, "");
    let output_storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = PlanningPipeline::new(
        LocalStorage::new(".".to_string()),
        output_storage,
        config,
        march_15(),
    );

    let result = PlannerEngine::new(pipeline).run().await;
    assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));
    assert!(!temp_dir.path().join("plans").exists());
}

#[tokio::test]
async fn test_converter_error_payload() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("audit.json"), "ERROR").unwrap();

    let config = config_for(&temp_dir, "");
    let output_storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = PlanningPipeline::new(
        LocalStorage::new(".".to_string()),
        output_storage,
        config,
        march_15(),
    );

    let result = PlannerEngine::new(pipeline).run().await;
    assert!(matches!(result, Err(PlannerError::RecordFormat { .. })));
}
