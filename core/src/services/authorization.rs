//! Role-based authorization policies over validated token claims
//!
//! These helpers are pure functions: the caller validates the token first,
//! then applies the policy appropriate for the operation.

use uuid::Uuid;

use crate::domain::entities::user::UserRole;
use crate::errors::{AuthError, DomainResult};
use crate::services::token::Claims;

/// Require the claims to carry exactly the given role
pub fn require_role(claims: &Claims, role: UserRole) -> DomainResult<()> {
    if claims.role == role.as_str() {
        Ok(())
    } else {
        Err(AuthError::InsufficientPermissions.into())
    }
}

/// Require the claims to carry one of the given roles
pub fn require_any_role(claims: &Claims, roles: &[UserRole]) -> DomainResult<()> {
    if roles.iter().any(|r| claims.role == r.as_str()) {
        Ok(())
    } else {
        Err(AuthError::InsufficientPermissions.into())
    }
}

/// Allow the subject itself, or any caller holding the given role
///
/// Used for owner-or-admin style endpoints such as profile access.
pub fn require_self_or_role(claims: &Claims, subject: Uuid, role: UserRole) -> DomainResult<()> {
    if claims.sub == subject.to_string() || claims.role == role.as_str() {
        Ok(())
    } else {
        Err(AuthError::InsufficientPermissions.into())
    }
}
