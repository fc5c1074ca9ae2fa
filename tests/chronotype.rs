#[cfg(test)]
mod tests {
    use circadian::libs::chronotype::{classify, score, Chronotype, ChronotypeProfile, Signal};
    use circadian::libs::error::CoreError;

    fn answers(wake: &str, sleep: &str, best: &str, difficulty: u8, mental: &str) -> ChronotypeProfile {
        ChronotypeProfile::new()
            .with_wake_time(wake)
            .with_sleep_time(sleep)
            .with_best_time(best)
            .with_wake_difficulty(difficulty)
            .with_mental_work_time(mental)
    }

    #[test]
    fn test_morning_lark() {
        let profile = answers("05:30", "21:00", "08:00", 5, "09:00");
        assert_eq!(score(&profile).unwrap().total, 7);
        assert_eq!(classify(&profile).unwrap(), Chronotype::MorningLark);
    }

    #[test]
    fn test_night_owl() {
        let profile = answers("10:00", "23:30", "20:00", 1, "19:00");
        assert_eq!(score(&profile).unwrap().total, -6);
        assert_eq!(classify(&profile).unwrap(), Chronotype::NightOwl);
    }

    #[test]
    fn test_intermediate_type() {
        let profile = answers("07:30", "22:30", "13:00", 3, "13:00");
        assert_eq!(score(&profile).unwrap().total, 1);
        assert_eq!(classify(&profile).unwrap(), Chronotype::IntermediateType);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(Chronotype::from_score(5), Chronotype::MorningLark);
        assert_eq!(Chronotype::from_score(4), Chronotype::IntermediateType);
        assert_eq!(Chronotype::from_score(-4), Chronotype::IntermediateType);
        assert_eq!(Chronotype::from_score(-5), Chronotype::NightOwl);
    }

    #[test]
    fn test_breakdown_lists_every_signal_in_order() {
        let breakdown = score(&answers("05:30", "21:00", "08:00", 5, "09:00")).unwrap();
        let signals: Vec<Signal> = breakdown.contributions.iter().map(|c| c.signal).collect();
        assert_eq!(
            signals,
            vec![Signal::WakeHour, Signal::SleepHour, Signal::BestHour, Signal::WakeDifficulty, Signal::MentalWorkHour]
        );
        let deltas: Vec<i32> = breakdown.contributions.iter().map(|c| c.delta).collect();
        assert_eq!(deltas, vec![2, 1, 2, 1, 1]);
        assert_eq!(breakdown.contributions[0].answer, "05:30");
        assert_eq!(breakdown.chronotype(), Chronotype::MorningLark);
    }

    #[test]
    fn test_hour_is_not_minute_adjusted() {
        // 06:59 is still hour 6; 21:59 is still hour 21.
        let early = score(&answers("06:59", "21:59", "11:59", 3, "11:59")).unwrap();
        let deltas: Vec<i32> = early.contributions.iter().map(|c| c.delta).collect();
        assert_eq!(deltas, vec![2, 1, 2, 0, 1]);

        let late = score(&answers("09:00", "23:00", "16:00", 2, "16:00")).unwrap();
        assert_eq!(late.total, -1 - 2 - 1 - 1 - 1);
    }

    #[test]
    fn test_wake_and_sleep_default_when_absent() {
        let profile = ChronotypeProfile::new()
            .with_best_time("12:00")
            .with_wake_difficulty(3)
            .with_mental_work_time("12:00");
        // 07:00 -> +1, 22:00 -> -1, best +1, difficulty 0, mental 0
        assert_eq!(score(&profile).unwrap().total, 1);

        let blank = profile.clone().with_wake_time("").with_sleep_time("");
        assert_eq!(score(&blank).unwrap(), score(&profile).unwrap());
    }

    #[test]
    fn test_missing_required_fields() {
        let full = answers("07:00", "22:00", "10:00", 3, "10:00");

        let mut missing_best = full.clone();
        missing_best.best_time = None;
        assert_eq!(classify(&missing_best), Err(CoreError::MissingRequiredField("bestTime")));

        let mut missing_mental = full.clone();
        missing_mental.mental_work_time = Some(String::new());
        assert_eq!(classify(&missing_mental), Err(CoreError::MissingRequiredField("mentalWorkTime")));

        let mut missing_difficulty = full;
        missing_difficulty.wake_difficulty = None;
        assert_eq!(classify(&missing_difficulty), Err(CoreError::MissingRequiredField("wakeDifficulty")));
    }

    #[test]
    fn test_missing_field_reported_before_parse_errors() {
        let mut profile = answers("7am", "22:00", "10:00", 3, "10:00");
        profile.best_time = None;
        assert_eq!(classify(&profile), Err(CoreError::MissingRequiredField("bestTime")));
    }

    #[test]
    fn test_invalid_time_propagates_unmodified() {
        assert_eq!(
            classify(&answers("7:30", "22:00", "10:00", 3, "10:00")),
            Err(CoreError::InvalidTimeFormat("7:30".to_string()))
        );
        assert_eq!(
            classify(&answers("07:30", "22:00", "10:00", 3, "24:00")),
            Err(CoreError::InvalidTimeFormat("24:00".to_string()))
        );
    }

    #[test]
    fn test_wake_difficulty_out_of_range() {
        assert_eq!(
            classify(&answers("07:00", "22:00", "10:00", 0, "10:00")),
            Err(CoreError::WakeDifficultyOutOfRange(0))
        );
        assert_eq!(
            classify(&answers("07:00", "22:00", "10:00", 6, "10:00")),
            Err(CoreError::WakeDifficultyOutOfRange(6))
        );
    }

    #[test]
    fn test_document_shape() {
        let json = r#"{"wakeTime":"05:30","sleepTime":"21:00","bestTime":"08:00","wakeDifficulty":5,"mentalWorkTime":"09:00"}"#;
        let profile: ChronotypeProfile = serde_json::from_str(json).unwrap();
        assert_eq!(classify(&profile).unwrap(), Chronotype::MorningLark);
        assert_eq!(serde_json::to_string(&Chronotype::NightOwl).unwrap(), "\"Night Owl\"");
    }
}
