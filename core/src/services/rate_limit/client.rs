//! Client identity resolution and endpoint classification

use uuid::Uuid;

/// Endpoint tier selecting the per-window capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointClass {
    /// Login, token and password endpoints
    Auth,
    /// Unauthenticated browse endpoints
    Public,
    /// Administrative endpoints
    Admin,
    /// Everything else
    Default,
}

impl EndpointClass {
    /// Stable string form used in counter keys
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointClass::Auth => "auth",
            EndpointClass::Public => "public",
            EndpointClass::Admin => "admin",
            EndpointClass::Default => "default",
        }
    }
}

/// Classifies a request path into an endpoint tier
pub fn classify_endpoint(path: &str) -> EndpointClass {
    if path.starts_with("/api/auth/") {
        EndpointClass::Auth
    } else if path.starts_with("/api/public/") {
        EndpointClass::Public
    } else if path.starts_with("/api/admin/") {
        EndpointClass::Admin
    } else {
        EndpointClass::Default
    }
}

/// Request attributes used to derive the rate limit counter key
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Authenticated user, when a valid access token was presented
    pub user_id: Option<Uuid>,
    /// API key from the request headers
    pub api_key: Option<String>,
    /// Raw X-Forwarded-For header value
    pub forwarded_for: Option<String>,
    /// Peer socket address
    pub peer_addr: String,
}

impl RequestContext {
    /// Derives the client key: authenticated user, then API key, then IP
    ///
    /// With a forwarded-for header the first (client-most) entry wins,
    /// otherwise the peer address is used.
    pub fn client_key(&self) -> String {
        if let Some(user_id) = self.user_id {
            return format!("user:{}", user_id);
        }
        if let Some(ref api_key) = self.api_key {
            return format!("api:{}", api_key);
        }
        let ip = self
            .forwarded_for
            .as_deref()
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.peer_addr);
        format!("ip:{}", ip)
    }
}
