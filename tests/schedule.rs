#[cfg(test)]
mod tests {
    use circadian::libs::chronotype::ChronotypeProfile;
    use circadian::libs::error::CoreError;
    use circadian::libs::schedule::{derive_schedule, ActivityKind, IdealSchedule};
    use circadian::libs::time_of_day::TimeOfDay;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    fn schedule(wake: &str, sleep: &str) -> IdealSchedule {
        derive_schedule(&ChronotypeProfile::new().with_wake_time(wake).with_sleep_time(sleep)).unwrap()
    }

    fn pairs(schedule: &IdealSchedule) -> Vec<(ActivityKind, String)> {
        schedule.iter().map(|a| (a.kind, a.time.to_string())).collect()
    }

    #[test]
    fn test_standard_day() {
        assert_eq!(
            pairs(&schedule("07:00", "22:00")),
            vec![
                (ActivityKind::WakeUp, "07:00".to_string()),
                (ActivityKind::Breakfast, "07:30".to_string()),
                (ActivityKind::Lunch, "11:30".to_string()),
                (ActivityKind::Workout, "14:00".to_string()),
                (ActivityKind::Dinner, "19:00".to_string()),
                (ActivityKind::Sleep, "22:00".to_string()),
            ]
        );
    }

    #[test]
    fn test_defaults_match_standard_day() {
        assert_eq!(derive_schedule(&ChronotypeProfile::new()).unwrap(), schedule("07:00", "22:00"));
        let blank = ChronotypeProfile::new().with_wake_time("").with_sleep_time("");
        assert_eq!(derive_schedule(&blank).unwrap(), schedule("07:00", "22:00"));
    }

    #[test]
    fn test_other_answers_are_ignored() {
        let profile = ChronotypeProfile::new().with_best_time("garbage").with_wake_difficulty(9);
        assert!(derive_schedule(&profile).is_ok());
    }

    #[test]
    fn test_sleep_after_midnight_wraps_dinner() {
        let day = schedule("08:00", "00:30");
        assert_eq!(day.get(ActivityKind::Dinner), Some(t("21:30")));
        assert_eq!(day.iter().next().map(|a| a.kind), Some(ActivityKind::Sleep));
        assert_eq!(day.iter().last().map(|a| a.kind), Some(ActivityKind::Dinner));
    }

    #[test]
    fn test_sorted_by_minute_of_day() {
        let day = schedule("21:00", "03:00");
        let minutes: Vec<i64> = day.iter().map(|a| a.time.to_minutes()).collect();
        let mut sorted = minutes.clone();
        sorted.sort();
        assert_eq!(minutes, sorted);
        assert_eq!(day.get(ActivityKind::Workout), Some(t("04:00")));
    }

    #[test]
    fn test_ties_keep_declaration_order() {
        // Sleep equals wake.
        let day = schedule("07:00", "07:00");
        let kinds: Vec<ActivityKind> = day.iter().filter(|a| a.time == t("07:00")).map(|a| a.kind).collect();
        assert_eq!(kinds, vec![ActivityKind::WakeUp, ActivityKind::Sleep]);

        // Dinner lands on workout: 07:00 + 420 = 17:00 - 180 = 14:00.
        let day = schedule("07:00", "17:00");
        let kinds: Vec<ActivityKind> = day.iter().filter(|a| a.time == t("14:00")).map(|a| a.kind).collect();
        assert_eq!(kinds, vec![ActivityKind::Workout, ActivityKind::Dinner]);
    }

    #[test]
    fn test_idempotent() {
        let profile = ChronotypeProfile::new().with_wake_time("06:15").with_sleep_time("23:45");
        assert_eq!(derive_schedule(&profile).unwrap(), derive_schedule(&profile).unwrap());
    }

    #[test]
    fn test_invalid_anchor_fails_whole_schedule() {
        let profile = ChronotypeProfile::new().with_wake_time("07:00").with_sleep_time("12:60");
        assert_eq!(derive_schedule(&profile), Err(CoreError::InvalidTimeFormat("12:60".to_string())));
    }

    #[test]
    fn test_sleep_and_awake_durations() {
        let day = schedule("07:00", "23:00");
        assert_eq!(day.sleep_minutes(), 480);
        assert_eq!(day.awake_minutes(), 960);
        assert!((day.sleep_share() - 33.333).abs() < 0.01);
        assert_eq!(day.meals().count(), 3);
    }

    #[test]
    fn test_around_and_next_after() {
        let day = schedule("07:00", "22:00");

        let now: Vec<ActivityKind> = day.around(t("07:15"), 30).iter().map(|a| a.kind).collect();
        assert_eq!(now, vec![ActivityKind::WakeUp, ActivityKind::Breakfast]);
        assert!(day.around(t("16:30"), 30).is_empty());

        assert_eq!(day.next_after(t("07:00")).map(|a| a.kind), Some(ActivityKind::Breakfast));
        assert_eq!(day.next_after(t("12:00")).map(|a| a.kind), Some(ActivityKind::Workout));
        // After sleep the next activity is tomorrow's wake-up.
        assert_eq!(day.next_after(t("23:00")).map(|a| a.kind), Some(ActivityKind::WakeUp));
    }

    #[test]
    fn test_activity_kind_parsing() {
        assert_eq!("wake".parse::<ActivityKind>(), Ok(ActivityKind::WakeUp));
        assert_eq!("Wake Up".parse::<ActivityKind>(), Ok(ActivityKind::WakeUp));
        assert_eq!("DINNER".parse::<ActivityKind>(), Ok(ActivityKind::Dinner));
        assert!("brunch".parse::<ActivityKind>().is_err());
    }
}
