use chrono::NaiveDate;
use shared::models::{CheckIn, CheckInRequest, CheckOutRequest, MealType, RoomCheckInStatus};
use shared::response::ApiResponse;

use super::into_data;
use crate::client::HttpClient;
use crate::{ClientError, ClientResult};

/// `/checkins`
pub struct CheckInsApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> CheckInsApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// Per-room checked-in flags for one meal at a resort
    pub async fn room_status(
        &self,
        resort_id: i64,
        meal: MealType,
    ) -> ClientResult<Vec<RoomCheckInStatus>> {
        let path = format!(
            "checkins/room-status?resortId={}&mealType={}",
            resort_id,
            meal.as_str()
        );
        let resp: ApiResponse<Vec<RoomCheckInStatus>> = self.http.get(&path).await?;
        into_data(resp, "room status")
    }

    /// Rooms currently checked in for `meal`
    pub async fn checked_in_count(&self, resort_id: i64, meal: MealType) -> ClientResult<u32> {
        let statuses = self.room_status(resort_id, meal).await?;
        count(statuses.iter().filter(|s| s.checked_in).count())
    }

    /// All of today's check-ins at a resort
    pub async fn today(&self, resort_id: i64) -> ClientResult<Vec<CheckIn>> {
        let resp: ApiResponse<Vec<CheckIn>> = self
            .http
            .get(&format!("checkins/today?resortId={}", resort_id))
            .await?;
        into_data(resp, "check-ins")
    }

    pub async fn today_count(&self, resort_id: i64) -> ClientResult<u32> {
        let records = self.today(resort_id).await?;
        count(records.len())
    }

    /// Check-ins at a resort on a given service date
    pub async fn list(&self, resort_id: i64, date: NaiveDate) -> ClientResult<Vec<CheckIn>> {
        let path = format!(
            "checkins?resortId={}&date={}",
            resort_id,
            date.format("%Y-%m-%d")
        );
        let resp: ApiResponse<Vec<CheckIn>> = self.http.get(&path).await?;
        into_data(resp, "check-ins")
    }

    pub async fn check_in(&self, req: &CheckInRequest) -> ClientResult<CheckIn> {
        let resp: ApiResponse<CheckIn> = self.http.post("checkins/check-in", req).await?;
        into_data(resp, "check-in")
    }

    pub async fn check_out(&self, req: &CheckOutRequest) -> ClientResult<CheckIn> {
        let resp: ApiResponse<CheckIn> = self.http.post("checkins/check-out", req).await?;
        into_data(resp, "check-in")
    }
}

fn count(n: usize) -> ClientResult<u32> {
    u32::try_from(n).map_err(|_| ClientError::InvalidResponse("Count overflow".into()))
}
