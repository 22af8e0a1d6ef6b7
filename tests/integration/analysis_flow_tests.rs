//! Submission flow integration tests
//!
//! Submissions through the analysis service, the alerts they raise and the
//! audit entries they leave behind.

#[cfg(test)]
mod tests {
    use crate::common::pinned_service;
    use threat_sentinel::config::AlertingConfig;
    use threat_sentinel::monitoring::{AlertStatusFilter, SystemLogLevel};
    use threat_sentinel::{
        AlertFilter, AlertSeverity, Config, ContentSubmission, RiskLevel, Sentinel,
        SentinelError, ThreatCategory,
    };

    #[tokio::test]
    async fn test_terrorism_raises_critical_alert() {
        let service = pinned_service(&Config::default(), vec![0.5]);
        let outcome = service
            .submit(ContentSubmission::text(
                "the terrorist plans to bomb the building",
                "2",
            ))
            .await
            .unwrap();

        assert_eq!(outcome.assessment.risk_level, RiskLevel::High);
        assert_eq!(outcome.alerts.len(), 1);
        let alert = &outcome.alerts[0];
        assert_eq!(alert.category, Some(ThreatCategory::Terrorism));
        assert_eq!(alert.severity, AlertSeverity::Critical);
        assert_eq!(alert.analysis_id, outcome.assessment.id);
        assert_eq!(
            alert.message,
            "Potential terrorist threat identified - immediate review required"
        );
    }

    #[tokio::test]
    async fn test_medium_risk_alerts_only_when_configured() {
        let mut config = Config::default();
        let text = "I feel hopeless and so alone";

        let quiet = pinned_service(&config, vec![0.5]);
        let outcome = quiet.submit(ContentSubmission::text(text, "3")).await.unwrap();
        assert_eq!(outcome.assessment.risk_level, RiskLevel::Medium);
        assert!(outcome.alerts.is_empty());

        config.sentinel.alerting = AlertingConfig {
            min_risk_level: RiskLevel::Medium,
            ..Default::default()
        };
        let loud = pinned_service(&config, vec![0.5]);
        let outcome = loud.submit(ContentSubmission::text(text, "3")).await.unwrap();
        assert_eq!(outcome.alerts.len(), 1);
        assert_eq!(outcome.alerts[0].category, None);
        assert_eq!(outcome.alerts[0].severity, AlertSeverity::Medium);
    }

    #[tokio::test]
    async fn test_triage_after_submissions() {
        let service = pinned_service(&Config::default(), vec![0.5]);
        for text in [
            "kill them with a gun",
            "bomb and explosive",
            "a nice walk in the park",
        ] {
            service
                .submit(ContentSubmission::text(text, "1"))
                .await
                .unwrap();
        }

        let alerts = service.alerts();
        assert_eq!(alerts.unacknowledged_count(), 2);

        let terrorism = alerts.filter(&AlertFilter::default().with_category(ThreatCategory::Terrorism));
        assert_eq!(terrorism.len(), 1);
        alerts.acknowledge(&terrorism[0].id).unwrap();

        let pending = alerts
            .filter(&AlertFilter::default().with_status(AlertStatusFilter::Unacknowledged));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].category, Some(ThreatCategory::Violence));

        assert_eq!(alerts.acknowledge_all(), 1);
        assert_eq!(alerts.unacknowledged_count(), 0);
    }

    #[tokio::test]
    async fn test_audit_trail() {
        let service = pinned_service(&Config::default(), vec![0.5]);
        service
            .submit(ContentSubmission::text("murder and revenge", "1"))
            .await
            .unwrap();
        service
            .submit(ContentSubmission::text("hello", "2"))
            .await
            .unwrap();

        let audit = service.audit();
        assert_eq!(audit.len(), 3);
        assert_eq!(audit.by_user("1").len(), 2);
        assert_eq!(audit.by_level(SystemLogLevel::Info).len(), 1);
        assert_eq!(audit.by_level(SystemLogLevel::Warning).len(), 2);
    }

    #[tokio::test]
    async fn test_rejects_blank_content() {
        let service = pinned_service(&Config::default(), vec![0.5]);
        let result = service.submit(ContentSubmission::text("", "1")).await;
        match result {
            Err(err @ SentinelError::Validation(_)) => assert!(err.is_client_error()),
            other => panic!("expected validation error, got {:?}", other.map(|o| o.assessment)),
        }
    }

    #[tokio::test]
    async fn test_seeded_sentinel_flow() {
        let sentinel = Sentinel::with_seed_data(Config::default()).await.unwrap();
        let before = sentinel.analysis().results().len();

        sentinel
            .analysis()
            .submit(ContentSubmission::text("jihad", "2"))
            .await
            .unwrap();

        let results = sentinel.analysis().results();
        assert_eq!(results.len(), before + 1);
        assert_eq!(results[0].keywords, vec!["jihad"]);
        // seed data already holds three pending alerts; "jihad" alone is medium risk
        assert_eq!(sentinel.analysis().alerts().unacknowledged_count(), 3);

        let highlighted = sentinel.analysis().highlighted("1").unwrap();
        assert_eq!(
            highlighted,
            "I <mark>hate</mark> everyone and want to <mark>hurt</mark> them all"
        );
    }
}
