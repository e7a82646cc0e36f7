//! Session context
//!
//! Decodes the backend's JWT to learn who is signed in and what they may do.
//! The signature is NOT verified: claims only drive the UI and client-side
//! gates, the backend enforces authorization on every request.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use shared::error::{AppError, AppResult};
use shared::models::{
    CHECKOUT_ROLES, MealType, PROPERTY_ADMIN_ROLES, Role, USER_ADMIN_ROLES, UserAssignment,
    has_any_role,
};

/// JWT payload issued by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    #[serde(deserialize_with = "string_or_number")]
    pub sub: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    /// Expiry, seconds since epoch
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub resort_id: Option<i64>,
    #[serde(default)]
    pub restaurant_id: Option<i64>,
    #[serde(default)]
    pub meal_type: Option<MealType>,
}

impl Claims {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp.is_some_and(|exp| exp <= now.timestamp())
    }

    pub fn assignment(&self) -> UserAssignment {
        UserAssignment {
            resort_id: self.resort_id,
            restaurant_id: self.restaurant_id,
            meal_type: self.meal_type,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(i64),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}

/// Decode the payload segment of a JWT without verifying it
pub fn decode_claims(token: &str) -> AppResult<Claims> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(AppError::invalid_token("Token must have three segments"));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AppError::invalid_token(format!("Invalid token payload encoding: {}", e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::invalid_token(format!("Invalid token claims: {}", e)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Uninitialized,
    /// Token lookup / validation in progress
    Loading,
    Authenticated,
    Anonymous,
}

/// Who is signed in, owned by the client (no globals)
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    state: SessionState,
    token: Option<String>,
    claims: Option<Claims>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.claims.as_ref().map(|c| c.role)
    }

    /// Mark the session as loading (token lookup started)
    pub fn begin(&mut self) {
        self.state = SessionState::Loading;
    }

    /// Adopt `token` as the current session
    ///
    /// On any failure the session ends up `Anonymous`.
    pub fn establish(&mut self, token: &str) -> AppResult<&Claims> {
        self.establish_at(token, Utc::now())
    }

    pub fn establish_at(&mut self, token: &str, now: DateTime<Utc>) -> AppResult<&Claims> {
        let claims = match decode_claims(token) {
            Ok(claims) => claims,
            Err(e) => {
                self.clear();
                return Err(e);
            }
        };
        if claims.is_expired_at(now) {
            tracing::info!(user = %claims.username, "Session token expired");
            self.clear();
            return Err(AppError::token_expired());
        }

        tracing::debug!(user = %claims.username, role = %claims.role, "Session established");
        self.state = SessionState::Authenticated;
        self.token = Some(token.trim().to_string());
        Ok(self.claims.insert(claims))
    }

    /// Restore a previously stored token, if any
    pub fn restore(&mut self, token: Option<&str>) -> SessionState {
        self.begin();
        match token {
            Some(token) => {
                if let Err(e) = self.establish(token) {
                    tracing::warn!(error = %e, "Stored session token rejected");
                }
            }
            None => self.clear(),
        }
        self.state
    }

    pub fn sign_out(&mut self) {
        self.clear();
    }

    /// Whether the current token's `exp` has passed at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.claims.as_ref().is_some_and(|c| c.is_expired_at(now))
    }

    /// Drop an authenticated session whose token expired; true if dropped
    pub fn expire_at(&mut self, now: DateTime<Utc>) -> bool {
        if !self.is_authenticated() || !self.is_expired_at(now) {
            return false;
        }
        if let Some(claims) = &self.claims {
            tracing::info!(user = %claims.username, "Session token expired");
        }
        self.clear();
        true
    }

    fn clear(&mut self) {
        self.state = SessionState::Anonymous;
        self.token = None;
        self.claims = None;
    }

    pub fn has_any_role(&self, allowed: &[Role]) -> bool {
        self.has_any_role_at(allowed, Utc::now())
    }

    /// An expired token grants no role, even before [`Self::expire_at`] runs
    pub fn has_any_role_at(&self, allowed: &[Role], now: DateTime<Utc>) -> bool {
        self.is_authenticated() && !self.is_expired_at(now) && has_any_role(self.role(), allowed)
    }

    pub fn can_check_out(&self) -> bool {
        self.has_any_role(CHECKOUT_ROLES)
    }

    pub fn can_manage_users(&self) -> bool {
        self.has_any_role(USER_ADMIN_ROLES)
    }

    /// Resorts, rooms and outlets
    pub fn can_manage_property(&self) -> bool {
        self.has_any_role(PROPERTY_ADMIN_ROLES)
    }
}
