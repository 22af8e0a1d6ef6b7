//! Report generation and export integration tests

#[cfg(test)]
mod tests {
    use crate::common::AssessmentFactory;
    use chrono::{Duration, TimeZone, Utc};
    use threat_sentinel::{
        Config, DateRange, ReportFormat, ReportGenerator, ReportRequest, ReportType, RiskLevel,
        Sentinel, ThreatCategory,
    };

    fn seed_window() -> DateRange {
        DateRange::new(
            Utc.with_ymd_and_hms(2025, 1, 14, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 15, 23, 59, 59).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_threat_summary_over_seed_data() {
        let sentinel = Sentinel::with_seed_data(Config::default()).await.unwrap();
        let report = sentinel.generate_report(
            ReportType::ThreatSummary,
            ReportRequest::new("Jan 14-15", "tester", seed_window(), ReportFormat::Json),
        );

        assert_eq!(report.data["total_analyses"], 5);
        assert_eq!(report.data["risk_distribution"]["high"], 2);
        assert_eq!(report.data["alerts"]["total"], 4);
        assert_eq!(report.data["alerts"]["unacknowledged"], 3);
    }

    #[tokio::test]
    async fn test_export_each_format() {
        let dir = tempfile::tempdir().unwrap();
        let sentinel = Sentinel::with_seed_data(Config::default()).await.unwrap();

        for (format, ext) in [
            (ReportFormat::Pdf, "pdf"),
            (ReportFormat::Csv, "csv"),
            (ReportFormat::Json, "json"),
        ] {
            let report = sentinel.generate_report(
                ReportType::SystemHealth,
                ReportRequest::new("System Health", "tester", seed_window(), format),
            );
            let path = report.export(dir.path()).await.unwrap();

            assert_eq!(
                path.file_name().unwrap().to_string_lossy(),
                format!("System_Health.{}", ext)
            );
            let body = tokio::fs::read_to_string(&path).await.unwrap();
            let data: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(data, report.data);
        }
    }

    #[tokio::test]
    async fn test_seed_reports_export() {
        let dir = tempfile::tempdir().unwrap();
        let sentinel = Sentinel::with_seed_data(Config::default()).await.unwrap();

        for report in sentinel.reports() {
            let path = report.export(dir.path()).await.unwrap();
            assert!(path.starts_with(dir.path()));
            assert!(path.exists());
        }
    }

    #[tokio::test]
    async fn test_dashboard_after_submission() {
        let sentinel = Sentinel::with_seed_data(Config::default()).await.unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let before = sentinel.dashboard(now);

        sentinel
            .analysis()
            .submit(threat_sentinel::ContentSubmission::text(
                "kill with a knife",
                "1",
            ))
            .await
            .unwrap();

        let after = sentinel.dashboard(now);
        assert_eq!(after.total_analyses, before.total_analyses + 1);
        assert_eq!(after.high_risk_detected, before.high_risk_detected + 1);
        assert_eq!(after.threat_types.violence, before.threat_types.violence + 1);
        assert_eq!(after.active_users, 3);
    }

    #[test]
    fn test_threat_summary_window_edges() {
        let now = Utc::now();
        let mut future = AssessmentFactory::with_level(RiskLevel::High, vec![ThreatCategory::Suicide]);
        future.timestamp = now + Duration::hours(1);
        let analyses = vec![
            AssessmentFactory::at(now - Duration::days(7)),
            AssessmentFactory::at(now - Duration::days(8)),
            future,
        ];

        let report = ReportGenerator::threat_summary(
            ReportRequest::new(
                "Last week",
                "tester",
                DateRange::last_days(now, 7).unwrap(),
                ReportFormat::Json,
            ),
            &analyses,
            &[],
        );

        assert_eq!(report.data["total_analyses"], 1);
        assert_eq!(report.data["alerts"]["total"], 0);
    }

    #[test]
    fn test_report_window_rejects_unusable_spans() {
        let now = Utc::now();
        for days in [-3, 100_000_000_000, i64::MAX] {
            let err = DateRange::last_days(now, days).unwrap_err();
            assert!(err.is_client_error(), "{} days: {}", days, err);
        }
        assert!(DateRange::last_days(now, 36_500).is_ok());
    }
}
