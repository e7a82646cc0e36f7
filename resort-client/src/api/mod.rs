//! Typed REST gateways
//!
//! One thin wrapper per backend resource. Every response is the
//! `{ success, data, error?, message? }` envelope; gateways unwrap it and
//! hold no state of their own.

mod analytics;
mod auth;
mod check_ins;
mod resorts;
mod restaurants;
mod rooms;
mod users;

pub use analytics::AnalyticsApi;
pub use auth::AuthApi;
pub use check_ins::CheckInsApi;
pub use resorts::ResortsApi;
pub use restaurants::RestaurantsApi;
pub use rooms::RoomsApi;
pub use users::UsersApi;

use shared::error::ErrorCode;
use shared::response::ApiResponse;

use crate::{ClientError, ClientResult};

/// Unwrap the payload of a successful envelope
pub(crate) fn into_data<T>(resp: ApiResponse<T>, what: &str) -> ClientResult<T> {
    match resp.into_result() {
        Ok(Some(data)) => Ok(data),
        Ok(None) => Err(ClientError::InvalidResponse(format!("Missing {} data", what))),
        Err(message) => Err(api_error(message)),
    }
}

/// Accept a successful envelope, payload or not
pub(crate) fn into_unit(resp: ApiResponse<serde_json::Value>) -> ClientResult<()> {
    resp.into_result().map(|_| ()).map_err(api_error)
}

fn api_error(message: String) -> ClientError {
    ClientError::Api {
        code: i32::from(ErrorCode::Unknown.code()),
        message,
        details: None,
    }
}
