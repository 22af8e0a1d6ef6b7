//! Configuration validation integration tests
//!
//! These tests verify that configuration validates correctly and fails
//! appropriately for invalid configurations.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::NamedTempFile;
    use threat_sentinel::config::models::{
        AlertingConfig, AuditConfig, ClassifierConfig, LoggingConfig, SentinelConfig,
    };
    use threat_sentinel::config::{Config, Validate};
    use threat_sentinel::{ContentRiskClassifier, ContentSubmission, RiskLevel};

    // ==================== SentinelConfig Validation ====================

    #[test]
    fn test_default_config_is_valid() {
        assert!(SentinelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_jitter_out_of_range() {
        let config = ClassifierConfig {
            confidence_jitter: 150.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("jitter"));
    }

    #[test]
    fn test_flag_probability_out_of_range() {
        let config = ClassifierConfig {
            image_flag_probability: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_limits_rejected() {
        let alerting = AlertingConfig {
            history_limit: 0,
            ..Default::default()
        };
        assert!(alerting.validate().is_err());
        assert!(AuditConfig { max_entries: 0 }.validate().is_err());
    }

    #[test]
    fn test_huge_image_ceiling_rejected() {
        let mut config = Config::default();
        config.sentinel.classifier.image_score_ceiling = u32::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_log_filter_rejected() {
        let logging = LoggingConfig {
            level: "info,[".to_string(),
            json: false,
        };
        assert!(logging.validate().is_err());
    }

    // ==================== Loading ====================

    #[tokio::test]
    async fn test_yaml_round_trip() {
        let mut config = Config::default();
        config.sentinel.alerting.min_risk_level = RiskLevel::Medium;
        config.sentinel.classifier.seed = Some(3);

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(config.to_yaml().unwrap().as_bytes()).unwrap();

        let loaded = Config::from_file(file.path()).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_env_value_at_default_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"alerting:\n  min_risk_level: medium\n").unwrap();

        let env = |name: &str| (name == "SENTINEL_ALERT_MIN_RISK").then(|| "high".to_string());
        let config = Config::load_with(Some(file.path()), env).await.unwrap();
        assert_eq!(config.alerting().min_risk_level, RiskLevel::High);
    }

    #[tokio::test]
    async fn test_seed_in_config_makes_classifier_reproducible() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"classifier:\n  seed: 11\n").unwrap();
        let config = Config::from_file(file.path()).await.unwrap();

        let submission = ContentSubmission::text("I am angry", "1");
        let a = ContentRiskClassifier::with_config(config.classifier())
            .classify(&submission)
            .await;
        let b = ContentRiskClassifier::with_config(config.classifier())
            .classify(&submission)
            .await;
        assert_eq!(a.confidence, b.confidence);
    }

    #[tokio::test]
    async fn test_zero_jitter_is_deterministic() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"classifier:\n  confidence_jitter: 0.0\n").unwrap();
        let config = Config::from_file(file.path()).await.unwrap();

        let classifier = ContentRiskClassifier::with_config(config.classifier());
        let assessment = classifier
            .classify(&ContentSubmission::text("angry and frustrated", "1"))
            .await;
        assert_eq!(assessment.confidence, 16);
    }
}
