// ═══════════════════════════════════════════════════════════════════
// Settings Tests — defaults, JSON loading, environment, validation
// ═══════════════════════════════════════════════════════════════════

use transaction_feed_core::errors::CoreError;
use transaction_feed_core::models::settings::{Settings, API_URL_ENV, TIMEOUT_ENV};
use transaction_feed_core::TransactionFeed;

mod defaults {
    use super::*;

    #[test]
    fn default_values() {
        let s = Settings::default();
        assert_eq!(s.api_url, "http://localhost:3000/api/transactions");
        assert_eq!(s.timeout_secs, 30);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn new_overrides_url_only() {
        let s = Settings::new("https://bank.example/tx");
        assert_eq!(s.api_url, "https://bank.example/tx");
        assert_eq!(s.timeout_secs, 30);
    }
}

mod json {
    use super::*;

    #[test]
    fn full_document() {
        let s = Settings::from_json(r#"{ "api_url": "https://bank.example/tx", "timeout_secs": 10 }"#)
            .unwrap();
        assert_eq!(s.api_url, "https://bank.example/tx");
        assert_eq!(s.timeout_secs, 10);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let s = Settings::from_json(r#"{ "timeout_secs": 5 }"#).unwrap();
        assert_eq!(s.api_url, Settings::default().api_url);
        assert_eq!(s.timeout_secs, 5);
    }

    #[test]
    fn invalid_json_is_config_error() {
        assert!(matches!(Settings::from_json("{"), Err(CoreError::Config(_))));
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(matches!(
            Settings::from_json(r#"{ "timeout_secs": 0 }"#),
            Err(CoreError::Config(_))
        ));
    }
}

mod validation {
    use super::*;

    #[test]
    fn empty_url_rejected() {
        let s = Settings::new("   ");
        assert!(matches!(s.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn non_http_url_rejected() {
        let s = Settings::new("file:///etc/passwd");
        assert!(matches!(s.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn zero_timeout_rejected() {
        let s = Settings {
            timeout_secs: 0,
            ..Settings::default()
        };
        assert!(matches!(s.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn feed_construction_validates() {
        assert!(TransactionFeed::new(&Settings::new("")).is_err());
        assert!(TransactionFeed::new(&Settings::default()).is_ok());
    }
}

// Environment variables are process-wide, so every env case runs in this
// one test to avoid racing with itself.
#[test]
fn from_env_overrides_and_rejects() {
    std::env::remove_var(API_URL_ENV);
    std::env::remove_var(TIMEOUT_ENV);
    assert_eq!(Settings::from_env().unwrap(), Settings::default());

    std::env::set_var(API_URL_ENV, "https://bank.example/api/transactions");
    std::env::set_var(TIMEOUT_ENV, " 12 ");
    let s = Settings::from_env().unwrap();
    assert_eq!(s.api_url, "https://bank.example/api/transactions");
    assert_eq!(s.timeout_secs, 12);
    // Process variables win over any `.env` file.
    assert_eq!(Settings::from_dotenv().unwrap(), s);

    std::env::set_var(TIMEOUT_ENV, "soon");
    assert!(matches!(Settings::from_env(), Err(CoreError::Config(_))));

    std::env::set_var(TIMEOUT_ENV, "12");
    std::env::set_var(API_URL_ENV, "bank.example");
    assert!(matches!(Settings::from_env(), Err(CoreError::Config(_))));

    std::env::remove_var(API_URL_ENV);
    std::env::remove_var(TIMEOUT_ENV);
}
