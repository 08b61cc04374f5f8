#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_shipped_site() {
    let config = FxConfig::default();
    assert_eq!(config.cursor_easing, 0.15);
    assert_eq!(config.scroll_progress_throttle_ms, 10);
    assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.typing_text, "Shaikh");
    assert_eq!(config.particle_count_narrow, 25);
    assert_eq!(config.particle_count_wide, 50);
    assert_eq!(config.active_section_offset_px, 150.0);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = FxConfig::from_json(r#"{ "typing_text": "Ada", "submit_latency_ms": 10 }"#)
        .expect("override should parse");
    assert_eq!(config.typing_text, "Ada");
    assert_eq!(config.submit_latency_ms, 10);
    assert_eq!(config.typing_step_ms, 150);
    assert_eq!(config.filter_transition_ms, 300);
}

#[test]
fn unknown_keys_are_ignored() {
    let config = FxConfig::from_json(r#"{ "sparkles": true }"#).expect("unknown keys allowed");
    assert_eq!(config, FxConfig::default());
}

#[test]
fn malformed_block_is_a_config_error() {
    let err = FxConfig::from_json("{ typing_text: ").expect_err("should fail");
    assert!(matches!(err, FxError::Config(_)));
}

#[test]
fn sanitized_clamps_degenerate_values() {
    let config = FxConfig::from_json(
        r#"{ "cursor_easing": 7.5, "reveal_threshold": -1, "theme_storage_key": "  ", "typing_step_ms": 0 }"#,
    )
    .expect("override should parse");
    assert_eq!(config.cursor_easing, 1.0);
    assert_eq!(config.reveal_threshold, 0.0);
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.typing_step_ms, 1);
}
