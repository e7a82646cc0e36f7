use shared::models::{Resort, ResortCreate, ResortUpdate};
use shared::response::ApiResponse;

use super::{into_data, into_unit};
use crate::ClientResult;
use crate::client::HttpClient;

/// `/resorts`
pub struct ResortsApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> ResortsApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<Resort>> {
        let resp: ApiResponse<Vec<Resort>> = self.http.get("resorts").await?;
        into_data(resp, "resorts")
    }

    pub async fn get(&self, id: i64) -> ClientResult<Resort> {
        let resp: ApiResponse<Resort> = self.http.get(&format!("resorts/{}", id)).await?;
        into_data(resp, "resort")
    }

    pub async fn create(&self, data: &ResortCreate) -> ClientResult<Resort> {
        let resp: ApiResponse<Resort> = self.http.post("resorts", data).await?;
        into_data(resp, "resort")
    }

    pub async fn update(&self, id: i64, data: &ResortUpdate) -> ClientResult<Resort> {
        let resp: ApiResponse<Resort> = self.http.put(&format!("resorts/{}", id), data).await?;
        into_data(resp, "resort")
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let resp = self.http.delete(&format!("resorts/{}", id)).await?;
        into_unit(resp)
    }
}
