use super::*;

// =============================================================
// Session check classification
// =============================================================

#[test]
fn session_check_401_is_unauthenticated() {
    assert_eq!(classify_session_check(401), ApiError::Unauthenticated);
}

#[test]
fn session_check_403_is_unauthenticated() {
    assert_eq!(classify_session_check(403), ApiError::Unauthenticated);
}

#[test]
fn session_check_500_is_network() {
    assert!(matches!(classify_session_check(500), ApiError::Network(_)));
}

// =============================================================
// Login classification
// =============================================================

#[test]
fn login_rejection_statuses_are_invalid_credentials() {
    for status in [400, 401, 403] {
        assert_eq!(classify_login(status), ApiError::InvalidCredentials);
    }
}

#[test]
fn login_server_error_is_network() {
    assert!(matches!(classify_login(502), ApiError::Network(_)));
}

// =============================================================
// Register classification
// =============================================================

#[test]
fn register_conflict_keeps_server_message() {
    let err = classify_register(409, Some("Email already registered".to_owned()));
    assert_eq!(err, ApiError::Validation("Email already registered".to_owned()));
}

#[test]
fn register_bad_request_without_message_gets_fallback() {
    let err = classify_register(400, None);
    let ApiError::Validation(message) = err else {
        panic!("expected validation error");
    };
    assert!(!message.is_empty());
}

#[test]
fn register_server_error_is_network() {
    assert!(matches!(classify_register(500, None), ApiError::Network(_)));
}
