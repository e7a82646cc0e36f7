use shared::models::{
    Restaurant, RestaurantCreate, RestaurantStatus, RestaurantStatusUpdate, RestaurantUpdate,
};
use shared::response::ApiResponse;

use super::{into_data, into_unit};
use crate::ClientResult;
use crate::client::HttpClient;

/// `/restaurants` (outlets)
pub struct RestaurantsApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> RestaurantsApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<Restaurant>> {
        let resp: ApiResponse<Vec<Restaurant>> = self.http.get("restaurants").await?;
        into_data(resp, "restaurants")
    }

    pub async fn list_by_resort(&self, resort_id: i64) -> ClientResult<Vec<Restaurant>> {
        let resp: ApiResponse<Vec<Restaurant>> = self
            .http
            .get(&format!("resorts/{}/restaurants", resort_id))
            .await?;
        into_data(resp, "restaurants")
    }

    pub async fn get(&self, id: i64) -> ClientResult<Restaurant> {
        let resp: ApiResponse<Restaurant> = self.http.get(&format!("restaurants/{}", id)).await?;
        into_data(resp, "restaurant")
    }

    pub async fn create(&self, data: &RestaurantCreate) -> ClientResult<Restaurant> {
        let resp: ApiResponse<Restaurant> = self.http.post("restaurants", data).await?;
        into_data(resp, "restaurant")
    }

    pub async fn update(&self, id: i64, data: &RestaurantUpdate) -> ClientResult<Restaurant> {
        let resp: ApiResponse<Restaurant> =
            self.http.put(&format!("restaurants/{}", id), data).await?;
        into_data(resp, "restaurant")
    }

    /// Open or close an outlet
    pub async fn set_status(&self, id: i64, status: RestaurantStatus) -> ClientResult<Restaurant> {
        let body = RestaurantStatusUpdate { status };
        let resp: ApiResponse<Restaurant> = self
            .http
            .patch(&format!("restaurants/{}/status", id), &body)
            .await?;
        into_data(resp, "restaurant")
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let resp = self.http.delete(&format!("restaurants/{}", id)).await?;
        into_unit(resp)
    }
}
