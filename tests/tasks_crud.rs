#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use ttrack::db::tasks::Tasks;
    use ttrack::libs::task::{Priority, Task, TaskFilter, TaskStatus};

    struct TaskTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext { _temp_dir: temp_dir }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_then_fetch_returns_the_task(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task = Task::new("Pay bills", "Electricity and water", date(2099, 1, 1), Priority::High);
        let id = tasks.create(&task).unwrap();
        assert!(id >= 1);

        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, Some(id));
        assert_eq!(all[0].title, "Pay bills");
        assert_eq!(all[0].description, "Electricity and water");
        assert_eq!(all[0].due_date, date(2099, 1, 1));
        assert_eq!(all[0].priority, Priority::High);
        assert_eq!(all[0].status, TaskStatus::Pending);
        assert!(all[0].created_at.is_some());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_orders_by_due_date_ascending(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        // The store accepts past dates; the not-in-the-past rule lives in the
        // add flow, not here.
        for due in [date(2024, 3, 1), date(2024, 1, 1), date(2024, 2, 1)] {
            tasks.create(&Task::new("Task", "", due, Priority::Medium)).unwrap();
        }

        let all = tasks.fetch(TaskFilter::All).unwrap();
        let dates: Vec<NaiveDate> = all.iter().map(|t| t.due_date).collect();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 2, 1), date(2024, 3, 1)]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_status_filters_partition_the_full_list(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        for i in 1..=4 {
            tasks
                .create(&Task::new(&format!("Task {}", i), "", date(2099, 6, i), Priority::Medium))
                .unwrap();
        }
        let all = tasks.fetch(TaskFilter::All).unwrap();
        tasks.complete(all[0].id.unwrap()).unwrap();
        tasks.complete(all[1].id.unwrap()).unwrap();

        let pending = tasks.fetch(TaskFilter::Status(TaskStatus::Pending)).unwrap();
        let in_progress = tasks.fetch(TaskFilter::Status(TaskStatus::InProgress)).unwrap();
        let completed = tasks.fetch(TaskFilter::Status(TaskStatus::Completed)).unwrap();

        assert!(pending.iter().all(|t| t.status == TaskStatus::Pending));
        assert!(completed.iter().all(|t| t.status == TaskStatus::Completed));
        assert_eq!(pending.len(), 2);
        assert_eq!(in_progress.len(), 0);
        assert_eq!(completed.len(), 2);
        assert_eq!(pending.len() + in_progress.len() + completed.len(), all.len());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_completed_filter_returns_exactly_the_completed_task(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let first = tasks.create(&Task::new("First", "", date(2099, 1, 1), Priority::Low)).unwrap();
        let second = tasks.create(&Task::new("Second", "", date(2099, 2, 1), Priority::Low)).unwrap();
        tasks.complete(first).unwrap();

        let completed = tasks.fetch(TaskFilter::Status(TaskStatus::Completed)).unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, Some(first));

        let pending = tasks.fetch(TaskFilter::Status(TaskStatus::Pending)).unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, Some(second));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_overwrites_fields_but_not_status(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks
            .create(&Task::new("Original", "Original comment", date(2099, 1, 1), Priority::Low))
            .unwrap();
        tasks.complete(id).unwrap();

        let updated = Task::new("Updated", "New comment", date(2099, 5, 5), Priority::High);
        tasks.update(id, &updated).unwrap();

        let task = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(task.title, "Updated");
        assert_eq!(task.description, "New comment");
        assert_eq!(task.due_date, date(2099, 5, 5));
        assert_eq!(task.priority, Priority::High);
        // Update never touches the status column.
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_missing_id_fails_and_leaves_table_unchanged(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.create(&Task::new("Keep me", "", date(2099, 1, 1), Priority::Medium)).unwrap();

        let ghost = Task::new("Ghost", "", date(2099, 9, 9), Priority::High);
        assert!(tasks.update(id + 1000, &ghost).is_err());

        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Keep me");
        assert_eq!(all[0].due_date, date(2099, 1, 1));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_is_idempotent(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.create(&Task::new("Repeatable", "", date(2099, 1, 1), Priority::Medium)).unwrap();

        tasks.complete(id).unwrap();
        assert_eq!(tasks.get_by_id(id).unwrap().unwrap().status, TaskStatus::Completed);

        // Second call matches the same row again and succeeds.
        tasks.complete(id).unwrap();
        assert_eq!(tasks.get_by_id(id).unwrap().unwrap().status, TaskStatus::Completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_removes_the_row_and_repeating_fails(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.create(&Task::new("Disposable", "", date(2099, 1, 1), Priority::Medium)).unwrap();

        tasks.delete(id).unwrap();
        assert!(tasks.get_by_id(id).unwrap().is_none());
        assert_eq!(tasks.fetch(TaskFilter::All).unwrap().len(), 0);

        assert!(tasks.delete(id).is_err());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_are_never_reused(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let first = tasks.create(&Task::new("First", "", date(2099, 1, 1), Priority::Medium)).unwrap();
        tasks.delete(first).unwrap();

        let second = tasks.create(&Task::new("Second", "", date(2099, 1, 2), Priority::Medium)).unwrap();
        assert!(second > first);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_on_missing_id_fails(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        assert!(tasks.complete(42).is_err());
    }
}
