//! Main token service implementation

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{LinkClaims, SessionClaims, TokenPurpose};
use crate::domain::value_objects::UserProfile;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service issuing and validating signed, time-limited tokens
///
/// Stateless: the only state is the signing key material derived from
/// configuration at startup. Validation distinguishes an expired token
/// (correct signature, past expiry) from an invalid one (malformed or
/// bad signature); callers branch on the two separately.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        // No leeway: an email link is expired the second its window closes
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed link token claiming the given email address
    pub fn issue_link_token(&self, email: &str, purpose: TokenPurpose) -> DomainResult<String> {
        let claims = LinkClaims::new(
            email,
            purpose,
            &self.config.issuer,
            self.config.link_token_expiry_seconds,
        );
        self.encode_jwt(&claims)
    }

    /// Issues a session token carrying the sanitized user projection
    pub fn issue_session_token(&self, profile: UserProfile) -> DomainResult<String> {
        let claims = SessionClaims::new(
            profile,
            &self.config.issuer,
            self.config.session_token_expiry_seconds,
        );
        self.encode_jwt(&claims)
    }

    /// Validates a link token and returns its claims
    ///
    /// Three distinguishable outcomes:
    /// * `Ok(claims)` - signature and expiry check out, purpose matches
    /// * `Err(TokenError::TokenExpired)` - correctly signed but past expiry
    /// * `Err(TokenError::InvalidToken)` - malformed, tampered, or issued
    ///   for a different purpose
    pub fn validate_link_token(
        &self,
        token: &str,
        expected_purpose: TokenPurpose,
    ) -> DomainResult<LinkClaims> {
        let token_data = decode::<LinkClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| map_decode_error(&e))?;

        if token_data.claims.purpose != expected_purpose {
            return Err(DomainError::Token(TokenError::InvalidToken));
        }

        Ok(token_data.claims)
    }

    /// Validates a session token and returns its claims
    pub fn validate_session_token(&self, token: &str) -> DomainResult<SessionClaims> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| map_decode_error(&e))?;
        Ok(token_data.claims)
    }

    /// Encodes a token for transport in a URL path segment
    pub fn encode_for_link(&self, token: &str) -> String {
        hex::encode(token.as_bytes())
    }

    /// Decodes a hex-encoded token received from a link
    pub fn decode_from_link(&self, token_hex: &str) -> DomainResult<String> {
        let bytes =
            hex::decode(token_hex).map_err(|_| DomainError::Token(TokenError::InvalidToken))?;
        String::from_utf8(bytes).map_err(|_| DomainError::Token(TokenError::InvalidToken))
    }

    fn encode_jwt<C: serde::Serialize>(&self, claims: &C) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}

fn map_decode_error(err: &jsonwebtoken::errors::Error) -> DomainError {
    if err.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
        DomainError::Token(TokenError::TokenExpired)
    } else {
        DomainError::Token(TokenError::InvalidToken)
    }
}
