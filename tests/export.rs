use chrono::NaiveDate;
use tempfile::tempdir;
use ttrack::libs::export::{ExportFormat, Exporter};
use ttrack::libs::task::{Priority, Task, TaskStatus};

fn sample_tasks() -> Vec<Task> {
    let mut first = Task::new("Pay bills", "Electricity", NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(), Priority::High);
    first.id = Some(1);
    first.created_at = Some("2025-01-01 09:00:00".to_string());

    let mut second = Task::new("Walk the dog", "", NaiveDate::from_ymd_opt(2099, 2, 1).unwrap(), Priority::Low);
    second.id = Some(2);
    second.status = TaskStatus::Completed;

    vec![first, second]
}

#[test]
fn test_json_export_writes_all_tasks() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let written = Exporter::new(ExportFormat::Json, Some(path.clone())).export(&sample_tasks()).unwrap();
    assert_eq!(written, path);

    let contents = std::fs::read_to_string(&path).unwrap();
    let records: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["title"], "Pay bills");
    assert_eq!(records[0]["priority"], "High");
    assert_eq!(records[1]["status"], "Completed");
}

#[test]
fn test_csv_export_has_header_and_one_line_per_task() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.csv");

    Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&sample_tasks()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "id,title,description,due_date,priority,status,created_at");
    assert!(lines[1].starts_with("1,Pay bills,"));
    assert!(lines[2].contains("Walk the dog"));
}
