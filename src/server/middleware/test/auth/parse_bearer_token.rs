use super::*;

/// Tests a well-formed bearer header.
///
/// Expected: Ok with the credential after the prefix
#[test]
fn returns_token_after_prefix() {
    assert_eq!(parse_bearer_token(Some("Bearer abc123")), Ok("abc123"));
}

/// Tests that whitespace around the credential is trimmed.
///
/// Expected: Ok with the trimmed credential
#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(parse_bearer_token(Some("Bearer   abc123  ")), Ok("abc123"));
}

/// Tests an absent header.
///
/// Expected: Err(AuthError::MissingCredential)
#[test]
fn rejects_absent_header() {
    assert_eq!(parse_bearer_token(None), Err(AuthError::MissingCredential));
}

/// Tests empty and whitespace-only headers.
///
/// Expected: Err(AuthError::MissingCredential)
#[test]
fn rejects_blank_header() {
    for value in ["", "   ", "\t"] {
        assert_eq!(
            parse_bearer_token(Some(value)),
            Err(AuthError::MissingCredential)
        );
    }
}

/// Tests headers without the exact `Bearer ` prefix.
///
/// Expected: Err(AuthError::MalformedCredential)
#[test]
fn rejects_other_schemes() {
    for value in ["Basic dXNlcjpwdw==", "bearer abc123", "Bearerabc123", "abc123"] {
        assert_eq!(
            parse_bearer_token(Some(value)),
            Err(AuthError::MalformedCredential)
        );
    }
}

/// Tests a bearer prefix with no credential after it.
///
/// Expected: Err(AuthError::MalformedCredential)
#[test]
fn rejects_empty_credential() {
    assert_eq!(
        parse_bearer_token(Some("Bearer    ")),
        Err(AuthError::MalformedCredential)
    );
}
