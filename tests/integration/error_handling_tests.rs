//! Error handling integration tests

#[cfg(test)]
mod tests {
    use threat_sentinel::{Config, Sentinel, SentinelError};

    #[test]
    fn test_error_display() {
        assert_eq!(
            SentinelError::not_found("alert 9").to_string(),
            "Not found: alert 9"
        );
        assert_eq!(
            SentinelError::validation("content must not be empty").to_string(),
            "Validation error: content must not be empty"
        );
    }

    #[test]
    fn test_client_errors() {
        assert!(SentinelError::validation("x").is_client_error());
        assert!(SentinelError::not_found("x").is_client_error());
        assert!(!SentinelError::config("x").is_client_error());
    }

    #[test]
    fn test_io_error_converts() {
        fn open() -> threat_sentinel::Result<String> {
            Ok(std::fs::read_to_string("/nonexistent/threat-sentinel")?)
        }
        assert!(matches!(open(), Err(SentinelError::Io(_))));
    }

    #[tokio::test]
    async fn test_unknown_ids() {
        let sentinel = Sentinel::with_seed_data(Config::default()).await.unwrap();
        assert!(matches!(
            sentinel.analysis().alerts().acknowledge("999"),
            Err(SentinelError::NotFound(_))
        ));
        assert!(matches!(
            sentinel.analysis().result("999"),
            Err(SentinelError::NotFound(_))
        ));
    }
}
