#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use circadian::libs::chronotype::ChronotypeProfile;
    use circadian::libs::config::ClockFormat;
    use circadian::libs::export::{ExportData, ExportFormat, Exporter};
    use circadian::libs::log_entry::{LogDetails, LogEntry, LogKind, MealComposition, MealType, SleepQuality};
    use circadian::libs::schedule::derive_schedule;
    use circadian::libs::time_of_day::TimeOfDay;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test]
    fn test_default_file_name() {
        let exporter = Exporter::new(ExportFormat::Json, ExportData::Logs, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("circadian_logs_"));
        assert!(name.ends_with(".json"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_schedule_csv(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("schedule.csv");
        let schedule = derive_schedule(&ChronotypeProfile::new()).unwrap();

        Exporter::new(ExportFormat::Csv, ExportData::Schedule, Some(path.clone()))
            .write_schedule(&schedule, ClockFormat::H24)
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "#,Activity,Time,Display Time,Dial Angle");
        assert_eq!(lines[1], "1,Wake Up,07:00,07:00,105.0");
        assert_eq!(lines[6], "6,Sleep,22:00,22:00,330.0");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_schedule_json(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("schedule.json");
        let schedule = derive_schedule(&ChronotypeProfile::new().with_sleep_time("00:30")).unwrap();

        Exporter::new(ExportFormat::Json, ExportData::Schedule, Some(path.clone()))
            .write_schedule(&schedule, ClockFormat::H12)
            .unwrap();

        let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 6);
        assert_eq!(rows[0]["activity"], "Sleep");
        assert_eq!(rows[0]["display_time"], "12:30 AM");
        assert_eq!(rows[5]["activity"], "Dinner");
        assert_eq!(rows[5]["time"], "21:30");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_logs_csv_with_deviation(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("logs.csv");
        let schedule = derive_schedule(&ChronotypeProfile::new()).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let mut entry = LogEntry::new(LogKind::Meal, TimeOfDay::parse("07:45").unwrap(), date, Some("eggs"));
        entry.id = Some(3);

        Exporter::new(ExportFormat::Csv, ExportData::Logs, Some(path.clone()))
            .write_logs(&[entry], Some(&schedule))
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "id,date,kind,time,deviation,meal_type,meal_composition,calories,workout_type,duration,sleep_quality,note"
        );
        assert_eq!(lines[1], "3,2025-03-01,Meal,07:45,+15m,,,,,,,eggs");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_logs_json_with_details(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("logs.json");
        let schedule = derive_schedule(&ChronotypeProfile::new()).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let snack = LogEntry::new(LogKind::Meal, TimeOfDay::parse("16:00").unwrap(), date, None).with_details(LogDetails {
            meal_type: Some(MealType::Snack),
            meal_composition: Some(MealComposition::FiberHeavy),
            calories: Some(180),
            ..LogDetails::default()
        });
        let sleep = LogEntry::new(LogKind::Sleep, TimeOfDay::parse("23:00").unwrap(), date, None).with_details(LogDetails {
            sleep_quality: Some(SleepQuality::Deep),
            ..LogDetails::default()
        });

        Exporter::new(ExportFormat::Json, ExportData::Logs, Some(path.clone()))
            .write_logs(&[snack, sleep], Some(&schedule))
            .unwrap();

        let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(rows[0]["meal_type"], "Snack");
        assert_eq!(rows[0]["meal_composition"], "Fiber-heavy");
        assert_eq!(rows[0]["calories"], 180);
        assert_eq!(rows[0]["deviation"], "");
        assert_eq!(rows[1]["sleep_quality"], "Deep");
        assert!(rows[1]["calories"].is_null());
    }
}
