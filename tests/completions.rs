#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use circadian::db::completions::Completions;
    use circadian::libs::schedule::ActivityKind;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CompletionsTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for CompletionsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CompletionsTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(CompletionsTestContext)]
    #[test]
    fn test_mark_and_unmark(_ctx: &mut CompletionsTestContext) {
        let completions = Completions::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        completions.mark("done-user", date, ActivityKind::Breakfast).unwrap();
        completions.mark("done-user", date, ActivityKind::WakeUp).unwrap();
        completions.mark("done-user", date, ActivityKind::WakeUp).unwrap();

        let done: Vec<ActivityKind> = completions.fetch("done-user", date).unwrap().into_iter().collect();
        assert_eq!(done, vec![ActivityKind::WakeUp, ActivityKind::Breakfast]);

        assert!(completions.unmark("done-user", date, ActivityKind::WakeUp).unwrap());
        assert!(!completions.unmark("done-user", date, ActivityKind::WakeUp).unwrap());
        assert_eq!(completions.fetch("done-user", date).unwrap().len(), 1);
    }

    #[test_context(CompletionsTestContext)]
    #[test]
    fn test_marks_are_per_day(_ctx: &mut CompletionsTestContext) {
        let completions = Completions::new().unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();

        completions.mark("days-user", monday, ActivityKind::Workout).unwrap();

        assert!(completions.fetch("days-user", monday).unwrap().contains(&ActivityKind::Workout));
        assert!(completions.fetch("days-user", tuesday).unwrap().is_empty());
    }
}
