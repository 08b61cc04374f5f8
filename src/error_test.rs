use super::*;

#[test]
fn config_error_converts_from_serde() {
    let Err(err) = serde_json::from_str::<serde_json::Value>("{") else {
        panic!("truncated JSON should not parse");
    };
    let fx: FxError = err.into();
    assert!(matches!(fx, FxError::Config(_)));
    assert!(fx.to_string().starts_with("invalid effect configuration"));
}

#[test]
fn display_includes_context() {
    let err = FxError::Storage("quota exceeded".to_owned());
    assert_eq!(err.to_string(), "preference store unavailable: quota exceeded");

    let err = FxError::Environment("window");
    assert_eq!(err.to_string(), "browser environment unavailable: window");
}
