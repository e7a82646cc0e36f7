use chrono::NaiveDate;
use shared::dining::CheckInSummary;
use shared::response::ApiResponse;

use super::into_data;
use crate::ClientResult;
use crate::client::HttpClient;

/// `/analytics`
pub struct AnalyticsApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> AnalyticsApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// Check-in summary for a resort over `[from, to]`
    pub async fn summary(
        &self,
        resort_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ClientResult<CheckInSummary> {
        let path = format!(
            "analytics/summary?resortId={}&from={}&to={}",
            resort_id,
            from.format("%Y-%m-%d"),
            to.format("%Y-%m-%d")
        );
        let resp: ApiResponse<CheckInSummary> = self.http.get(&path).await?;
        into_data(resp, "summary")
    }
}
