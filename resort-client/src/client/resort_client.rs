// resort-client/src/client/resort_client.rs
// ResortClient - transport + session + gateways

use std::sync::Arc;

use chrono::Utc;
use shared::dining::MealSchedule;
use shared::models::Role;
use tokio::sync::RwLock;

use super::http::{HttpClient, NetworkHttpClient};
use crate::api::{
    AnalyticsApi, AuthApi, CheckInsApi, ResortsApi, RestaurantsApi, RoomsApi, UsersApi,
};
use crate::config::ClientConfig;
use crate::session::{Claims, SessionContext, SessionState};
use crate::ClientResult;

/// Resort backend client
///
/// Cheap to clone; clones share the transport and the session.
pub struct ResortClient<C> {
    http: Arc<C>,
    session: Arc<RwLock<SessionContext>>,
    schedule: MealSchedule,
}

impl<C> Clone for ResortClient<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            session: Arc::clone(&self.session),
            schedule: self.schedule.clone(),
        }
    }
}

impl ResortClient<NetworkHttpClient> {
    /// Build a network client and restore the configured token, if any
    pub async fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let http = NetworkHttpClient::new(config)?;
        let client = Self::new(http).with_schedule(config.schedule.clone());
        client.restore_session(config.token.as_deref()).await;
        Ok(client)
    }
}

impl<C: HttpClient> ResortClient<C> {
    pub fn new(http: C) -> Self {
        Self {
            http: Arc::new(http),
            session: Arc::new(RwLock::new(SessionContext::new())),
            schedule: MealSchedule::default(),
        }
    }

    pub fn with_schedule(mut self, schedule: MealSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn schedule(&self) -> &MealSchedule {
        &self.schedule
    }

    // ========== Session ==========

    /// Snapshot of the current session
    pub async fn session(&self) -> SessionContext {
        self.session.read().await.clone()
    }

    /// Role of the signed-in user; an expired session is dropped first
    pub async fn role(&self) -> Option<Role> {
        let mut session = self.session.write().await;
        if session.expire_at(Utc::now()) {
            self.http.set_token(None).await;
        }
        if session.is_authenticated() {
            session.role()
        } else {
            None
        }
    }

    /// Log in and adopt the returned token
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<Claims> {
        self.session.write().await.begin();

        let resp = match self.auth().login(username, password).await {
            Ok(resp) => resp,
            Err(e) => {
                self.session.write().await.sign_out();
                self.http.set_token(None).await;
                tracing::warn!(username = %username, error = %e, "Login failed");
                return Err(e);
            }
        };

        let established = self
            .session
            .write()
            .await
            .establish(&resp.token)
            .map(Claims::clone);
        let claims = match established {
            Ok(claims) => claims,
            Err(e) => {
                self.http.set_token(None).await;
                tracing::warn!(username = %username, error = %e, "Login returned unusable token");
                return Err(e.into());
            }
        };
        self.http.set_token(Some(resp.token)).await;
        tracing::info!(username = %claims.username, role = %claims.role, "Logged in");
        Ok(claims)
    }

    /// Restore a stored token (from config or a previous run)
    pub async fn restore_session(&self, token: Option<&str>) -> SessionState {
        let mut session = self.session.write().await;
        let state = session.restore(token);
        self.http
            .set_token(session.token().map(str::to_string))
            .await;
        state
    }

    pub async fn logout(&self) {
        self.session.write().await.sign_out();
        self.http.set_token(None).await;
        tracing::info!("Logged out");
    }

    // ========== Gateways ==========

    pub fn auth(&self) -> AuthApi<'_, C> {
        AuthApi::new(&self.http)
    }

    pub fn resorts(&self) -> ResortsApi<'_, C> {
        ResortsApi::new(&self.http)
    }

    pub fn rooms(&self) -> RoomsApi<'_, C> {
        RoomsApi::new(&self.http)
    }

    pub fn restaurants(&self) -> RestaurantsApi<'_, C> {
        RestaurantsApi::new(&self.http)
    }

    pub fn users(&self) -> UsersApi<'_, C> {
        UsersApi::new(&self.http)
    }

    pub fn check_ins(&self) -> CheckInsApi<'_, C> {
        CheckInsApi::new(&self.http)
    }

    pub fn analytics(&self) -> AnalyticsApi<'_, C> {
        AnalyticsApi::new(&self.http)
    }
}
