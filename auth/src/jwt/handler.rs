use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// JWT token handler for encoding and decoding tokens.
///
/// Generic over the claims type to allow services to define their own token payload.
/// Uses HS256 (HMAC with SHA-256).
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a JWT token.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode (must implement Serialize)
    ///
    /// # Returns
    /// JWT token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// The `exp` claim is mandatory; `nbf` is checked when present. No leeway
    /// is granted on either timestamp.
    ///
    /// # Arguments
    /// * `token` - JWT token string to decode
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Expired` - The `exp` timestamp has passed
    /// * `NotYetActive` - The `nbf` timestamp is in the future
    /// * `Malformed` - Signature, header or payload did not validate
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.validate_nbf = true;

        let token_data =
            decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                ErrorKind::ImmatureSignature => JwtError::NotYetActive,
                _ => JwtError::Malformed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;
    use crate::jwt::Claims;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    fn claims() -> Claims {
        Claims::for_user("user123", "alice", "admin", Duration::hours(24))
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(SECRET);
        let claims = claims();

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);

        let decoded: Claims = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_garbage_is_malformed() {
        let handler = JwtHandler::new(SECRET);

        let result = handler.decode::<Claims>("invalid.token.here");
        assert!(matches!(result, Err(JwtError::Malformed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret_is_malformed() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1.encode(&claims()).expect("Failed to encode token");

        let result = handler2.decode::<Claims>(&token);
        assert!(matches!(result, Err(JwtError::Malformed(_))));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(SECRET);
        let now = Utc::now().timestamp();
        let claims = claims()
            .with_issued_at(now - 2 * 3600)
            .with_expiration(now - 3600);

        let token = handler.encode(&claims).unwrap();

        assert_eq!(handler.decode::<Claims>(&token), Err(JwtError::Expired));
    }

    #[test]
    fn test_decode_just_expired_token_without_leeway() {
        let handler = JwtHandler::new(SECRET);
        let claims = claims().with_expiration(Utc::now().timestamp() - 5);

        let token = handler.encode(&claims).unwrap();

        assert_eq!(handler.decode::<Claims>(&token), Err(JwtError::Expired));
    }

    #[test]
    fn test_decode_token_not_yet_active() {
        let handler = JwtHandler::new(SECRET);
        let claims = claims().with_not_before(Utc::now().timestamp() + 3600);

        let token = handler.encode(&claims).unwrap();

        assert_eq!(handler.decode::<Claims>(&token), Err(JwtError::NotYetActive));
    }

    #[test]
    fn test_decode_tampered_payload_is_malformed() {
        let handler = JwtHandler::new(SECRET);
        let token = handler.encode(&claims()).unwrap();
        let forged = handler
            .encode(&claims().with_expiration(Utc::now().timestamp() + 999_999))
            .unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        let spliced = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);

        assert!(matches!(
            handler.decode::<Claims>(&spliced),
            Err(JwtError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_missing_claims_is_malformed() {
        #[derive(Serialize)]
        struct Partial {
            exp: i64,
        }

        let handler = JwtHandler::new(SECRET);
        let token = handler
            .encode(&Partial {
                exp: Utc::now().timestamp() + 3600,
            })
            .unwrap();

        assert!(matches!(
            handler.decode::<Claims>(&token),
            Err(JwtError::Malformed(_))
        ));
    }
}
