// Integration tests for the authentication service
// Tests JWT token encoding, decoding, and caching

use base64::{Engine as _, engine::general_purpose::STANDARD};
use villadesk_auth::service::auth::{
    decode_jwt_token, decode_jwt_token_cached, encode_jwt_token, invalidate_token,
};

// Generate a valid base64 secret key for testing
fn test_secret_key() -> String {
    STANDARD.encode("test-secret-key-that-is-long-enough-for-hs256-algorithm")
}

#[test]
fn test_encode_decode_jwt_token() {
    let secret = test_secret_key();
    let user_id = "owner-account-1";
    let expire_seconds = 3600;

    let token = encode_jwt_token(user_id, &secret, expire_seconds);
    assert!(token.is_ok());
    let token = token.unwrap();

    let decoded = decode_jwt_token(&token, &secret);
    assert!(decoded.is_ok());
    let decoded = decoded.unwrap();

    assert_eq!(decoded.claims.sub, user_id);
}

#[test]
fn test_token_expiration() {
    let secret = test_secret_key();

    // Create token that expired 120 seconds ago (2 minutes in the past).
    // This exceeds the default JWT validation leeway of 60 seconds.
    let token = encode_jwt_token("owner-account-1", &secret, -120).unwrap();

    let decoded = decode_jwt_token(&token, &secret);
    assert!(
        decoded.is_err(),
        "Token expired beyond leeway should fail validation"
    );
}

#[test]
fn test_invalid_secret_key() {
    let secret1 = test_secret_key();
    let secret2 = STANDARD.encode("different-secret-key-for-testing-purposes-here");

    let token = encode_jwt_token("owner-account-1", &secret1, 3600).unwrap();

    let decoded = decode_jwt_token(&token, &secret2);
    assert!(decoded.is_err());
}

#[test]
fn test_cached_token_validation() {
    let secret = test_secret_key();
    let user_id = "cached-owner";

    let token = encode_jwt_token(user_id, &secret, 3600).unwrap();

    // First call - cache miss, performs validation
    let result1 = decode_jwt_token_cached(&token, &secret);
    assert!(result1.is_ok());
    assert_eq!(result1.unwrap().claims.sub, user_id);

    // Second call - should hit cache
    let result2 = decode_jwt_token_cached(&token, &secret);
    assert!(result2.is_ok());
    assert_eq!(result2.unwrap().claims.sub, user_id);

    // After invalidation the token still decodes through the slow path
    invalidate_token(&token);
    let result3 = decode_jwt_token_cached(&token, &secret);
    assert!(result3.is_ok());
}

#[test]
fn test_tampered_token_rejected() {
    let secret = test_secret_key();
    let mut token = encode_jwt_token("owner-account-1", &secret, 3600).unwrap();

    // Flip a character in the signature segment
    let last = token.pop().unwrap();
    token.push(if last == 'a' { 'b' } else { 'a' });

    assert!(decode_jwt_token(&token, &secret).is_err());
}
