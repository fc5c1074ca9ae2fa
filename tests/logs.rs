#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use circadian::db::logs::Logs;
    use circadian::libs::log_entry::{LogDetails, LogEntry, LogFilter, LogKind, MealComposition, MealType, WorkoutType};
    use circadian::libs::time_of_day::TimeOfDay;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct LogsTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for LogsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            LogsTestContext { _temp_dir: temp_dir }
        }
    }

    fn entry(kind: LogKind, time: &str, d: u32, note: Option<&str>) -> LogEntry {
        LogEntry::new(kind, TimeOfDay::parse(time).unwrap(), NaiveDate::from_ymd_opt(2025, 3, d).unwrap(), note)
    }

    #[test_context(LogsTestContext)]
    #[test]
    fn test_insert_and_fetch(_ctx: &mut LogsTestContext) {
        let logs = Logs::new().unwrap();

        let id = logs.insert("logs-insert", &entry(LogKind::Meal, "12:15", 1, Some("salad"))).unwrap();
        let stored = logs.fetch("logs-insert", LogFilter::All).unwrap();

        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, Some(id));
        assert_eq!(stored[0].kind, LogKind::Meal);
        assert_eq!(stored[0].time.to_string(), "12:15");
        assert_eq!(stored[0].note.as_deref(), Some("salad"));
        assert!(stored[0].timestamp.is_some());
        assert_eq!(stored[0].details, LogDetails::default());
    }

    #[test_context(LogsTestContext)]
    #[test]
    fn test_details_are_stored(_ctx: &mut LogsTestContext) {
        let logs = Logs::new().unwrap();
        let lunch = entry(LogKind::Meal, "12:30", 1, None).with_details(LogDetails {
            meal_type: Some(MealType::Lunch),
            meal_composition: Some(MealComposition::ProteinHeavy),
            calories: Some(720),
            ..LogDetails::default()
        });
        let run = entry(LogKind::Workout, "18:00", 1, None).with_details(LogDetails {
            workout_type: Some(WorkoutType::Cardio),
            duration: Some(40),
            ..LogDetails::default()
        });
        logs.insert("logs-details", &lunch).unwrap();
        logs.insert("logs-details", &run).unwrap();

        let stored = logs.fetch("logs-details", LogFilter::All).unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].details, lunch.details);
        assert_eq!(stored[1].details, run.details);
        assert_eq!(stored[1].details.sleep_quality, None);
    }

    #[test_context(LogsTestContext)]
    #[test]
    fn test_fetch_by_date_and_order(_ctx: &mut LogsTestContext) {
        let logs = Logs::new().unwrap();
        logs.insert("logs-date", &entry(LogKind::Sleep, "23:00", 2, None)).unwrap();
        logs.insert("logs-date", &entry(LogKind::Meal, "08:00", 2, None)).unwrap();
        logs.insert("logs-date", &entry(LogKind::Workout, "18:00", 1, None)).unwrap();

        let day_two = logs.fetch("logs-date", LogFilter::ByDate(NaiveDate::from_ymd_opt(2025, 3, 2).unwrap())).unwrap();
        let kinds: Vec<LogKind> = day_two.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![LogKind::Meal, LogKind::Sleep]);

        let all = logs.fetch("logs-date", LogFilter::All).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].kind, LogKind::Workout);
    }

    #[test_context(LogsTestContext)]
    #[test]
    fn test_entries_are_per_user(_ctx: &mut LogsTestContext) {
        let logs = Logs::new().unwrap();
        logs.insert("logs-user-a", &entry(LogKind::Meal, "08:00", 1, None)).unwrap();
        let id = logs.insert("logs-user-b", &entry(LogKind::Meal, "09:00", 1, None)).unwrap();

        assert_eq!(logs.fetch("logs-user-a", LogFilter::All).unwrap().len(), 1);
        // Deleting another user's entry is a no-op.
        assert_eq!(logs.delete("logs-user-a", id).unwrap(), 0);
        assert_eq!(logs.delete("logs-user-b", id).unwrap(), 1);
        assert!(logs.fetch("logs-user-b", LogFilter::All).unwrap().is_empty());
    }
}
