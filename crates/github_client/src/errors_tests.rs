use super::*;

#[test]
fn test_api_error_display() {
    let error = Error::ApiError("connection reset".to_string());
    assert_eq!(error.to_string(), "API request failed: connection reset");
}

#[test]
fn test_auth_error_display() {
    let error = Error::AuthError("bad token".to_string());
    assert_eq!(
        error.to_string(),
        "Failed to authenticate or initialize GitHub client: bad token"
    );
}

#[test]
fn test_deserialization_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error = Error::from(serde_error);
    assert!(matches!(error, Error::Deserialization(_)));
    assert!(error.to_string().starts_with("Failed to deserialize"));
}

#[test]
fn test_not_found_display() {
    assert_eq!(Error::NotFound.to_string(), "Resource not found");
}

#[test]
fn test_not_found_is_distinct_from_permission_denied() {
    // The reconciler's default-state fallback depends on this distinction.
    let not_found = Error::NotFound;
    let denied = Error::PermissionDenied("forbidden".to_string());

    assert!(matches!(not_found, Error::NotFound));
    assert!(!matches!(denied, Error::NotFound));
}

#[test]
fn test_permission_denied_display() {
    let error = Error::PermissionDenied("Must have admin rights".to_string());
    assert_eq!(
        error.to_string(),
        "Permission denied: Must have admin rights"
    );
}

#[test]
fn test_rate_limit_display() {
    assert_eq!(Error::RateLimitExceeded.to_string(), "Rate limit exceeded");
}
