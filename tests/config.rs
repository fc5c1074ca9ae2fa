#[cfg(test)]
mod tests {
    use circadian::libs::config::{ClockFormat, Config, DisplayConfig, UserConfig, DEFAULT_UID};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.user.is_none());
        assert!(config.display.is_none());
        assert_eq!(config.uid(), DEFAULT_UID);
        assert_eq!(config.display().clock, ClockFormat::H12);
        assert_eq!(config.display().now_window, 30);
    }

    #[test]
    fn test_json_shape() {
        let config = Config {
            user: Some(UserConfig { uid: "ada".to_string() }),
            display: Some(DisplayConfig {
                clock: ClockFormat::H24,
                now_window: 15,
            }),
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["user"]["uid"], "ada");
        assert_eq!(value["display"]["clock"], "h24");

        let empty = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(empty, serde_json::json!({}));
    }

    // Save, read and delete share one data directory, so they run as one test.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_read_delete(_ctx: &mut ConfigTestContext) {
        let config = Config {
            user: Some(UserConfig { uid: "grace".to_string() }),
            display: Some(DisplayConfig {
                clock: ClockFormat::H24,
                now_window: 45,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.uid(), "grace");
        assert_eq!(loaded.display(), config.display());

        assert!(Config::delete().unwrap());
        assert!(!Config::delete().unwrap());
        assert_eq!(Config::read().unwrap().uid(), DEFAULT_UID);
    }
}
