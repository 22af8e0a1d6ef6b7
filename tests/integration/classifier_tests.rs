//! Classification integration tests
//!
//! Behavior of the public classifier over text and image submissions.

#[cfg(test)]
mod tests {
    use crate::common::assertions::AssessmentAssertions;
    use crate::common::pinned_classifier;
    use threat_sentinel::core::security::keywords::{HIGH_RISK_KEYWORDS, MEDIUM_RISK_KEYWORDS};
    use threat_sentinel::core::security::{KeywordScan, SeededRandom};
    use threat_sentinel::{
        ContentKind, ContentRiskClassifier, ContentSubmission, RiskLevel, ThreatCategory,
        highlight_keywords,
    };
    use std::sync::Arc;

    // ==================== Text path ====================

    #[tokio::test]
    async fn test_clean_text_is_low_risk() {
        let classifier = pinned_classifier(vec![0.5]);
        for text in [
            "Having a great day with friends!",
            "Lunch at noon?",
            "",
            "The quarterly numbers look good",
        ] {
            let assessment = classifier.classify(&ContentSubmission::text(text, "1")).await;
            assert_eq!(assessment.risk_level, RiskLevel::Low, "{:?}", text);
            assert!(assessment.detected_threats.is_empty());
            assert!(assessment.keywords.is_empty());
        }
    }

    #[tokio::test]
    async fn test_matching_is_case_insensitive_substring() {
        let classifier = pinned_classifier(vec![0.0]);
        let assessment = classifier
            .classify(&ContentSubmission::text("SKILLED ATTACKER", "1"))
            .await;

        assert_eq!(assessment.keywords, vec!["kill", "attack"]);
        assert_eq!(assessment.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_thresholds_are_exact() {
        // one medium keyword: 15
        assert_eq!(KeywordScan::scan("so sad").risk_score, 15);
        assert_eq!(RiskLevel::from_score(15), RiskLevel::Low);
        // one high keyword: 30
        assert_eq!(KeywordScan::scan("revenge").risk_score, 30);
        assert_eq!(RiskLevel::from_score(30), RiskLevel::Medium);
        // two high keywords: 60
        assert_eq!(KeywordScan::scan("revenge and harm").risk_score, 60);
        assert_eq!(RiskLevel::from_score(60), RiskLevel::High);

        assert_eq!(RiskLevel::from_score(24), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(25), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(59), RiskLevel::Medium);
    }

    #[test]
    fn test_score_is_monotonic_in_matches() {
        let mut text = String::new();
        let mut last = 0;
        for keyword in HIGH_RISK_KEYWORDS.iter().chain(MEDIUM_RISK_KEYWORDS) {
            text.push_str(keyword);
            text.push(' ');
            let score = KeywordScan::scan(&text).risk_score;
            assert!(score >= last, "score dropped after adding {:?}", keyword);
            last = score;
        }
    }

    #[tokio::test]
    async fn test_confidence_stays_in_range_for_repeated_keywords() {
        let all_keywords = HIGH_RISK_KEYWORDS
            .iter()
            .chain(MEDIUM_RISK_KEYWORDS)
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        let adversarial = all_keywords.repeat(30);

        for sample in [0.0, 0.5, 0.999] {
            let classifier = pinned_classifier(vec![sample]);
            for kind in [ContentKind::Text, ContentKind::Image] {
                let submission = match kind {
                    ContentKind::Text => ContentSubmission::text(adversarial.clone(), "1"),
                    ContentKind::Image => ContentSubmission::image("kill.png", "1"),
                };
                let assessment = classifier.classify(&submission).await;
                assessment.assert_confidence_in_range();
            }
        }
    }

    #[tokio::test]
    async fn test_violence_only_categories() {
        let classifier = pinned_classifier(vec![0.5]);
        let assessment = classifier
            .classify(&ContentSubmission::text("I want to kill and hurt them", "1"))
            .await;

        assessment.assert_categories(&[ThreatCategory::Violence]);
    }

    #[tokio::test]
    async fn test_reference_sentence() {
        let classifier = ContentRiskClassifier::new();
        let assessment = classifier
            .classify(&ContentSubmission::text(
                "I hate everyone and want to hurt them all",
                "1",
            ))
            .await;

        assessment.assert_at_least(RiskLevel::Medium);
        assert!(assessment.has_threat(ThreatCategory::Violence));
        assert_eq!(assessment.keywords, vec!["hate", "hurt"]);
        assert_eq!(assessment.user_id, "1");
        assert!(assessment.processed);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let classifier = ContentRiskClassifier::new();
        let submission = ContentSubmission::text("same text", "1");
        let a = classifier.classify(&submission).await;
        let b = classifier.classify(&submission).await;
        assert_ne!(a.id, b.id);
    }

    // ==================== Image path ====================

    #[tokio::test]
    async fn test_image_placeholder_unflagged() {
        // bump 0, confidence 73, flag draw above probability
        let classifier = pinned_classifier(vec![0.0, 0.73, 0.9]);
        let assessment = classifier
            .classify(&ContentSubmission::image("cat.jpg", "1"))
            .await;

        assert_eq!(assessment.content, "[Image uploaded: cat.jpg]");
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert_eq!(assessment.confidence, 73);
        assert!(assessment.detected_threats.is_empty());
        assert!(assessment.keywords.is_empty());
    }

    #[tokio::test]
    async fn test_image_placeholder_flagged() {
        let classifier = pinned_classifier(vec![0.5, 0.2, 0.1]);
        let assessment = classifier
            .classify(&ContentSubmission::image("cat.jpg", "1"))
            .await;

        assessment.assert_categories(&[ThreatCategory::Violence]);
        assert_eq!(
            assessment.keywords,
            vec!["weapon detected", "suspicious object"]
        );
        // bump of 20 alone stays low
        assert_eq!(assessment.risk_level, RiskLevel::Low);
    }

    #[tokio::test]
    async fn test_seeded_classifier_is_reproducible() {
        let run = || async {
            let classifier =
                ContentRiskClassifier::new().with_random_source(Arc::new(SeededRandom::new(7)));
            let mut out = Vec::new();
            for name in ["a.png", "b.png", "c.png"] {
                let a = classifier.classify(&ContentSubmission::image(name, "1")).await;
                out.push((a.risk_level, a.confidence, a.detected_threats));
            }
            out
        };
        assert_eq!(run().await, run().await);
    }

    // ==================== Highlighting ====================

    #[tokio::test]
    async fn test_highlight_classified_keywords() {
        let classifier = pinned_classifier(vec![0.5]);
        let assessment = classifier
            .classify(&ContentSubmission::text(
                "I hate everyone and want to hurt them all",
                "1",
            ))
            .await;

        assert_eq!(
            highlight_keywords(&assessment.content, &assessment.keywords),
            "I <mark>hate</mark> everyone and want to <mark>hurt</mark> them all"
        );
    }

    #[test]
    fn test_highlight_second_pass_double_wraps() {
        let once = highlight_keywords("bomb", &["bomb"]);
        let twice = highlight_keywords(&once, &["bomb"]);
        assert_eq!(twice, "<mark><mark>bomb</mark></mark>");
    }
}
