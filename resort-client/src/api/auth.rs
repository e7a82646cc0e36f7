use shared::client::{LoginRequest, LoginResponse};
use shared::models::User;
use shared::response::ApiResponse;

use super::into_data;
use crate::ClientResult;
use crate::client::HttpClient;

/// `/auth`
pub struct AuthApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> AuthApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// Exchange credentials for a token. Does not touch the session.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp: ApiResponse<LoginResponse> = self.http.post("auth/login", &req).await?;
        into_data(resp, "login")
    }

    pub async fn me(&self) -> ClientResult<User> {
        let resp: ApiResponse<User> = self.http.get("auth/me").await?;
        into_data(resp, "user")
    }
}
