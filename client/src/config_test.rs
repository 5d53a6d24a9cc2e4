use super::*;

#[test]
fn blank_input_yields_defaults() {
    assert_eq!(SiteConfig::from_json("").unwrap(), SiteConfig::default());
    assert_eq!(SiteConfig::from_json("  \n ").unwrap(), SiteConfig::default());
}

#[test]
fn defaults_match_page_timings() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.nav_scroll_throttle_ms, 100);
    assert_eq!(cfg.back_to_top_throttle_ms, 200);
    assert_eq!(cfg.back_to_top_threshold_px, 500.0);
    assert_eq!(cfg.parallax_throttle_ms, 10);
    assert_eq!(cfg.submit_latency_ms, 1500);
    assert_eq!(cfg.success_banner_ms, 5000);
    assert_eq!(cfg.counter_duration_ms, 2000);
    assert_eq!(cfg.counter_steps, 60);
    assert_eq!(cfg.reveal_stagger_ms, 100);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = SiteConfig::from_json(r#"{ "submit_latency_ms": 10, "log_level": "debug" }"#).unwrap();
    assert_eq!(cfg.submit_latency_ms, 10);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.counter_steps, 60);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = SiteConfig::from_json("{ nope").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("site config parse failed"));
}

#[test]
fn mistyped_field_is_a_parse_error() {
    let err = SiteConfig::from_json(r#"{ "counter_steps": "many" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn zero_counter_steps_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "counter_steps": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroCounterSteps));
}
