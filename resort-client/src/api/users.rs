use shared::models::{
    User, UserCreate, UserStatus, UserStatusUpdate, UserUpdate, validate_activation,
};
use shared::response::ApiResponse;

use super::{into_data, into_unit};
use crate::ClientResult;
use crate::client::HttpClient;

/// `/users`
pub struct UsersApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> UsersApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<User>> {
        let resp: ApiResponse<Vec<User>> = self.http.get("users").await?;
        into_data(resp, "users")
    }

    pub async fn get(&self, id: i64) -> ClientResult<User> {
        let resp: ApiResponse<User> = self.http.get(&format!("users/{}", id)).await?;
        into_data(resp, "user")
    }

    /// Creating an already-active user is held to the activation rules
    pub async fn create(&self, data: &UserCreate) -> ClientResult<User> {
        if data.status == UserStatus::Active {
            validate_activation(data.role, &data.assignment)?;
        }
        let resp: ApiResponse<User> = self.http.post("users", data).await?;
        into_data(resp, "user")
    }

    /// Update a user
    ///
    /// A role or assignment change to an active user must leave it valid
    /// for activation.
    pub async fn update(&self, id: i64, data: &UserUpdate) -> ClientResult<User> {
        if data.touches_assignment() {
            let user = self.get(id).await?;
            if user.is_active() {
                if let Err(e) = user.merged(data).validate_activation() {
                    tracing::debug!(user_id = id, error = %e, "Update rejected locally");
                    return Err(e.into());
                }
            }
        }
        let resp: ApiResponse<User> = self.http.put(&format!("users/{}", id), data).await?;
        into_data(resp, "user")
    }

    /// Change a user's status
    ///
    /// Activation is checked against the user's current role and
    /// assignment before the request is sent.
    pub async fn set_status(&self, id: i64, status: UserStatus) -> ClientResult<User> {
        if status == UserStatus::Active {
            let user = self.get(id).await?;
            if let Err(e) = user.validate_activation() {
                tracing::debug!(user_id = id, error = %e, "Activation rejected locally");
                return Err(e.into());
            }
        }
        let body = UserStatusUpdate { status };
        let resp: ApiResponse<User> = self
            .http
            .patch(&format!("users/{}/status", id), &body)
            .await?;
        into_data(resp, "user")
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let resp = self.http.delete(&format!("users/{}", id)).await?;
        into_unit(resp)
    }
}
