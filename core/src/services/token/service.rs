//! Session token service: issuance, validation, refresh and logout

use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use ch_shared::config::JwtConfig;

use crate::domain::entities::user::User;
use crate::domain::value_objects::TokenPair;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::UserRepository;
use crate::stores::KeyValueStore;

use super::codec::{Claims, TokenCodec, TokenType};

/// Service managing JWT session token pairs and the refresh token registry
///
/// The registry keeps one entry per user (`refresh_token:<user_id>`) holding
/// the SHA-256 hash of the currently valid refresh token. Issuing a new pair
/// overwrites the entry, which revokes the previous refresh token.
pub struct SessionTokenService<U, K>
where
    U: UserRepository,
    K: KeyValueStore,
{
    users: Arc<U>,
    store: Arc<K>,
    codec: TokenCodec,
    config: JwtConfig,
}

impl<U, K> SessionTokenService<U, K>
where
    U: UserRepository,
    K: KeyValueStore,
{
    /// Creates a new session token service
    pub fn new(users: Arc<U>, store: Arc<K>, config: JwtConfig) -> Self {
        let codec = TokenCodec::new(&config);
        Self {
            users,
            store,
            codec,
            config,
        }
    }

    fn registry_key(user_id: Uuid) -> String {
        format!("refresh_token:{}", user_id)
    }

    fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Issues a new access/refresh token pair for a user
    ///
    /// The refresh token hash overwrites the user's registry entry, so any
    /// previously issued refresh token stops validating.
    pub async fn issue_token_pair(&self, user: &User) -> DomainResult<TokenPair> {
        let access_claims = Claims::new(
            user.id,
            user.role,
            TokenType::Access,
            self.config.access_token_expiry,
            &self.config.issuer,
        );
        let refresh_claims = Claims::new(
            user.id,
            user.role,
            TokenType::Refresh,
            self.config.refresh_token_expiry,
            &self.config.issuer,
        );

        let access_token = self.codec.encode(&access_claims)?;
        let refresh_token = self.codec.encode(&refresh_claims)?;

        self.store
            .set(
                &Self::registry_key(user.id),
                &Self::hash_token(&refresh_token),
                self.config.refresh_token_expiry as u64,
            )
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to register refresh token: {}", e),
            })?;

        info!(user_id = %user.id, "Issued session token pair");

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry,
            self.config.refresh_token_expiry,
        ))
    }

    /// Validates an access token and returns its claims
    pub fn validate_access(&self, token: &str) -> DomainResult<Claims> {
        self.codec.decode_expected(token, TokenType::Access)
    }

    /// Validates a refresh token against signature, expiry, type and registry
    ///
    /// A structurally valid refresh token whose hash no longer matches the
    /// registry entry (or whose entry is gone) is `TokenRevoked`.
    pub async fn validate_refresh(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.codec.decode_expected(token, TokenType::Refresh)?;
        let user_id = claims.user_id()?;

        let registered = self
            .store
            .get(&Self::registry_key(user_id))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Refresh token registry lookup failed: {}", e),
            })?;

        match registered {
            Some(hash) if hash == Self::hash_token(token) => Ok(claims),
            _ => Err(TokenError::TokenRevoked.into()),
        }
    }

    /// Exchanges a valid refresh token for a new access token
    ///
    /// The refresh token itself is returned unchanged and stays valid until
    /// its own expiry or until a new pair is issued.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let claims = self.validate_refresh(refresh_token).await?;
        let user_id = claims.user_id()?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.is_active() {
            return Err(AuthError::AccountInactive.into());
        }

        let access_claims = Claims::new(
            user.id,
            user.role,
            TokenType::Access,
            self.config.access_token_expiry,
            &self.config.issuer,
        );
        let access_token = self.codec.encode(&access_claims)?;

        let refresh_remaining = claims.exp - chrono::Utc::now().timestamp();

        info!(user_id = %user.id, "Refreshed access token");

        Ok(TokenPair::new(
            access_token,
            refresh_token.to_string(),
            self.config.access_token_expiry,
            refresh_remaining,
        ))
    }

    /// Ends the user's session by deleting the refresh token registry entry
    ///
    /// Outstanding access tokens stay valid until they expire; there is no
    /// access token denylist.
    pub async fn logout(&self, user_id: Uuid) -> DomainResult<()> {
        self.store
            .delete(&Self::registry_key(user_id))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to remove refresh token: {}", e),
            })?;

        info!(user_id = %user_id, "User logged out");
        Ok(())
    }
}
