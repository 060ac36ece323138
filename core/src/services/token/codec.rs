//! JWT claims encoding and decoding

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ch_shared::config::JwtConfig;

use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, TokenError};

/// Session token type carried in the `type` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    #[serde(rename = "ACCESS")]
    Access,
    #[serde(rename = "REFRESH")]
    Refresh,
}

/// JWT claims for session tokens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user id
    pub sub: String,

    /// Token type, distinguishing access from refresh tokens
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// Role of the subject at issuance time
    pub role: String,

    /// Issued-at timestamp (Unix seconds)
    pub iat: i64,

    /// Expiry timestamp (Unix seconds)
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims for a token with the given lifetime in seconds
    pub fn new(
        user_id: Uuid,
        role: UserRole,
        token_type: TokenType,
        ttl_seconds: i64,
        issuer: &str,
    ) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user_id.to_string(),
            token_type,
            role: role.as_str().to_string(),
            iat: now,
            exp: now + ttl_seconds,
            iss: issuer.to_string(),
        }
    }

    /// Parses the subject claim back into a user id
    pub fn user_id(&self) -> Result<Uuid, DomainError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::TokenMalformed.into())
    }
}

/// Encodes and decodes session token claims with an HMAC shared secret
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Creates a codec from the JWT configuration
    pub fn new(config: &JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Encodes claims into a signed JWT
    pub fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }

    /// Decodes and verifies a JWT, returning the claims
    ///
    /// Expired tokens map to `TokenExpired`; every other failure (bad
    /// signature, wrong issuer, garbage input) maps to `TokenMalformed`.
    pub fn decode(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::TokenExpired)
                } else {
                    DomainError::Token(TokenError::TokenMalformed)
                }
            })?;

        Ok(token_data.claims)
    }

    /// Decodes a JWT and enforces the expected token type
    pub fn decode_expected(
        &self,
        token: &str,
        expected: TokenType,
    ) -> Result<Claims, DomainError> {
        let claims = self.decode(token)?;
        if claims.token_type != expected {
            return Err(TokenError::TokenWrongType.into());
        }
        Ok(claims)
    }
}
