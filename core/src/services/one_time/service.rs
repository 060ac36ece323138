//! One-time token issuance, consumption and MFA code verification

use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use ch_shared::config::OneTimeTokenConfig;

use crate::domain::entities::one_time_token::{OneTimeToken, OneTimeTokenPurpose};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::stores::KeyValueStore;

const TOKEN_LENGTH: usize = 32;
const MFA_CODE_DIGITS: u32 = 6;

/// Manages single-use tokens in the TTL store
///
/// Reset/verification tokens are keyed by their value (`ott:<token>`) so
/// consumption is a lookup by the presented secret. MFA codes are keyed by
/// subject (`mfa:<user_id>`): one pending code per user, checkable and
/// invalidatable without knowing the code.
pub struct OneTimeTokenManager<K: KeyValueStore> {
    store: Arc<K>,
    config: OneTimeTokenConfig,
}

impl<K: KeyValueStore> OneTimeTokenManager<K> {
    /// Creates a new manager over the given store
    pub fn new(store: Arc<K>, config: OneTimeTokenConfig) -> Self {
        Self { store, config }
    }

    fn token_key(token: &str) -> String {
        format!("ott:{}", token)
    }

    fn mfa_key(subject: Uuid) -> String {
        format!("mfa:{}", subject)
    }

    fn ttl_for(&self, purpose: OneTimeTokenPurpose) -> i64 {
        match purpose {
            OneTimeTokenPurpose::PasswordReset => self.config.password_reset_ttl,
            OneTimeTokenPurpose::EmailVerification => self.config.email_verification_ttl,
            OneTimeTokenPurpose::MfaCode => self.config.mfa_code_ttl,
        }
    }

    fn generate_token() -> String {
        let mut rng = OsRng;
        (0..TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.gen_range(0..62);
                match idx {
                    0..10 => (b'0' + idx) as char,
                    10..36 => (b'a' + idx - 10) as char,
                    36..62 => (b'A' + idx - 36) as char,
                    _ => unreachable!(),
                }
            })
            .collect()
    }

    fn generate_mfa_code() -> String {
        let mut rng = OsRng;
        format!("{:06}", rng.gen_range(0..10u32.pow(MFA_CODE_DIGITS)))
    }

    async fn put_record(&self, key: &str, record: &OneTimeToken, ttl: i64) -> DomainResult<()> {
        let json = serde_json::to_string(record).map_err(|e| DomainError::Internal {
            message: format!("Failed to serialize token record: {}", e),
        })?;
        self.store
            .set(key, &json, ttl.max(0) as u64)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to store token record: {}", e),
            })
    }

    fn parse_record(json: &str) -> DomainResult<OneTimeToken> {
        serde_json::from_str(json).map_err(|e| DomainError::Internal {
            message: format!("Corrupt token record: {}", e),
        })
    }

    /// Issues a new single-use token for the given subject and purpose
    ///
    /// MFA issuance replaces any pending code for the subject; reset and
    /// verification tokens coexist with earlier ones until they expire.
    pub async fn issue(
        &self,
        subject: Uuid,
        purpose: OneTimeTokenPurpose,
    ) -> DomainResult<String> {
        let ttl = self.ttl_for(purpose);
        let token = match purpose {
            OneTimeTokenPurpose::MfaCode => Self::generate_mfa_code(),
            _ => Self::generate_token(),
        };
        let record = OneTimeToken::new(token.clone(), purpose, subject, ttl);

        let key = match purpose {
            OneTimeTokenPurpose::MfaCode => Self::mfa_key(subject),
            _ => Self::token_key(&token),
        };
        self.put_record(&key, &record, ttl).await?;

        info!(subject = %subject, purpose = ?purpose, "Issued one-time token");
        Ok(token)
    }

    /// Consumes a token, returning its subject
    ///
    /// The removal is atomic: of several concurrent presenters of the same
    /// token exactly one succeeds. A token issued for a different purpose is
    /// reinserted untouched and reported as `OneTimeTokenWrongPurpose`.
    pub async fn consume(
        &self,
        token: &str,
        purpose: OneTimeTokenPurpose,
    ) -> DomainResult<Uuid> {
        let key = Self::token_key(token);
        let json = self
            .store
            .take(&key)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Token store lookup failed: {}", e),
            })?
            .ok_or(TokenError::OneTimeTokenNotFoundOrExpired)?;

        let record = Self::parse_record(&json)?;

        if record.is_expired() {
            // Already removed by the take; nothing to restore
            return Err(TokenError::OneTimeTokenNotFoundOrExpired.into());
        }

        if record.purpose != purpose {
            let remaining = (record.expires_at - chrono::Utc::now()).num_seconds();
            self.put_record(&key, &record, remaining).await?;
            warn!(
                subject = %record.subject,
                expected = ?purpose,
                actual = ?record.purpose,
                "One-time token presented for wrong purpose"
            );
            return Err(TokenError::OneTimeTokenWrongPurpose.into());
        }

        info!(subject = %record.subject, purpose = ?purpose, "Consumed one-time token");
        Ok(record.subject)
    }

    /// Verifies a pending MFA code for the subject
    ///
    /// The comparison is constant-time. The code is deleted only on a match;
    /// a mismatch leaves it pending until its TTL runs out.
    pub async fn verify_mfa(&self, subject: Uuid, code: &str) -> DomainResult<()> {
        let key = Self::mfa_key(subject);
        let json = self
            .store
            .get(&key)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("MFA code lookup failed: {}", e),
            })?
            .ok_or(TokenError::OneTimeTokenNotFoundOrExpired)?;

        let record = Self::parse_record(&json)?;

        if record.is_expired() {
            let _ = self.store.delete(&key).await;
            return Err(TokenError::OneTimeTokenNotFoundOrExpired.into());
        }

        if !constant_time_eq(record.token.as_bytes(), code.as_bytes()) {
            warn!(subject = %subject, "MFA code mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        self.store
            .delete(&key)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to clear MFA code: {}", e),
            })?;

        info!(subject = %subject, "MFA code verified");
        Ok(())
    }

    /// Checks whether the subject has a pending MFA code
    pub async fn has_pending_mfa(&self, subject: Uuid) -> DomainResult<bool> {
        self.store
            .get(&Self::mfa_key(subject))
            .await
            .map(|v| v.is_some())
            .map_err(|e| DomainError::Internal {
                message: format!("MFA code lookup failed: {}", e),
            })
    }

    /// Invalidates any pending MFA code for the subject
    pub async fn invalidate_mfa(&self, subject: Uuid) -> DomainResult<()> {
        self.store
            .delete(&Self::mfa_key(subject))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to clear MFA code: {}", e),
            })?;
        Ok(())
    }
}
