//! Session state: roles, the signed-in session, and the process-wide store

use std::fmt;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::claims;
use crate::error::Result;
use crate::types::TokenPair;

/// Roles recognized by the Campus backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Mentor,
    Student,
}

impl Role {
    /// Parse a role claim. Returns None for unknown values.
    pub fn from_claim(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(Role::Admin),
            "MENTOR" => Some(Role::Mentor),
            "STUDENT" => Some(Role::Student),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Mentor => "MENTOR",
            Role::Student => "STUDENT",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Client-held proof of authentication.
///
/// The role is decoded from the access token exactly once, when the session
/// is constructed; it is never re-derived from another source afterwards.
#[derive(Debug, Clone)]
pub struct Session {
    /// Access token attached to authenticated requests
    pub access: String,
    /// Refresh token (held for the session; this client never refreshes)
    pub refresh: String,
    /// Role claim decoded from the access token
    pub role: Role,
    /// User id claim, when present
    pub user_id: Option<i64>,
    /// Access token expiry, when present
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Build a session from a freshly issued token pair.
    ///
    /// Fails with `ApiError::Authentication` when the access token cannot be
    /// decoded or carries no usable role claim; no partial session exists in
    /// that case.
    pub fn from_tokens(tokens: TokenPair) -> Result<Self> {
        let claims = claims::decode(&tokens.access)?;
        Ok(Self {
            access: tokens.access,
            refresh: tokens.refresh,
            role: claims.role,
            user_id: claims.user_id,
            expires_at: claims.expires_at,
        })
    }
}

/// Process-wide holder of the current session.
///
/// Cloning shares the underlying slot. `set` replaces token and role
/// together, so no reader ever observes a token without its matching role.
/// Written only by the sign-in/sign-out paths; everything else reads.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current session atomically.
    pub fn set(&self, session: Session) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(session);
        }
    }

    /// Snapshot of the current session. A poisoned lock reads as signed out.
    pub fn get(&self) -> Option<Session> {
        self.inner.read().map(|slot| slot.clone()).unwrap_or_default()
    }

    /// Access token of the current session, if any.
    pub fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .map(|slot| slot.as_ref().map(|s| s.access.clone()))
            .unwrap_or_default()
    }

    /// Role of the current session, if any.
    pub fn role(&self) -> Option<Role> {
        self.inner
            .read()
            .map(|slot| slot.as_ref().map(|s| s.role))
            .unwrap_or_default()
    }

    pub fn is_signed_in(&self) -> bool {
        self.role().is_some()
    }

    /// Drop all session state. Idempotent.
    pub fn clear(&self) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = None;
        }
    }
}
