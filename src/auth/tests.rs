//! Tests for the auth module

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_scheme_literals() {
    assert_eq!(AuthScheme::Basic.as_str(), "Basic");
    assert_eq!(AuthScheme::Token.as_str(), "Token");
    assert_eq!(AuthScheme::Jwt.as_str(), "JWT");
}

#[test]
fn test_scheme_default_is_jwt() {
    assert_eq!(AuthScheme::default(), AuthScheme::Jwt);
}

#[test]
fn test_scheme_serde() {
    assert_eq!(
        serde_json::to_string(&AuthScheme::Jwt).unwrap(),
        r#""JWT""#
    );
    assert_eq!(
        serde_json::from_str::<AuthScheme>(r#""Token""#).unwrap(),
        AuthScheme::Token
    );
}

#[test]
fn test_header_value_format() {
    let creds = Credentials::new(AuthScheme::Token, "secret-token");
    assert_eq!(creds.header_value().unwrap(), "Token secret-token");

    let creds = Credentials::new(AuthScheme::Jwt, "abc.def.ghi");
    assert_eq!(creds.header_value().unwrap(), "JWT abc.def.ghi");
}

#[test]
fn test_empty_token_produces_no_header() {
    assert_eq!(Credentials::none().header_value(), None);
    assert_eq!(
        Credentials::new(AuthScheme::Token, "").header_value(),
        None
    );
}

#[test]
fn test_whitespace_token_produces_no_header() {
    let creds = Credentials::new(AuthScheme::Token, "   \t ");
    assert_eq!(creds.header_value(), None);
}

#[test]
fn test_token_sent_verbatim() {
    // The emptiness check trims, the wire value does not.
    let creds = Credentials::new(AuthScheme::Token, " padded ");
    assert_eq!(creds.header_value().unwrap(), "Token  padded ");
}
