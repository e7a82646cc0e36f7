use shared::models::{Room, RoomCreate, RoomUpdate};
use shared::response::ApiResponse;

use super::{into_data, into_unit};
use crate::ClientResult;
use crate::client::HttpClient;

/// `/rooms` and `/resorts/:id/rooms`
pub struct RoomsApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> RoomsApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn list_by_resort(&self, resort_id: i64) -> ClientResult<Vec<Room>> {
        let resp: ApiResponse<Vec<Room>> =
            self.http.get(&format!("resorts/{}/rooms", resort_id)).await?;
        into_data(resp, "rooms")
    }

    /// Number of rooms at a resort
    pub async fn room_count(&self, resort_id: i64) -> ClientResult<u32> {
        let rooms = self.list_by_resort(resort_id).await?;
        u32::try_from(rooms.len())
            .map_err(|_| crate::ClientError::InvalidResponse("Room count overflow".into()))
    }

    pub async fn get(&self, id: i64) -> ClientResult<Room> {
        let resp: ApiResponse<Room> = self.http.get(&format!("rooms/{}", id)).await?;
        into_data(resp, "room")
    }

    pub async fn create(&self, data: &RoomCreate) -> ClientResult<Room> {
        let resp: ApiResponse<Room> = self.http.post("rooms", data).await?;
        into_data(resp, "room")
    }

    pub async fn update(&self, id: i64, data: &RoomUpdate) -> ClientResult<Room> {
        let resp: ApiResponse<Room> = self.http.put(&format!("rooms/{}", id), data).await?;
        into_data(resp, "room")
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let resp = self.http.delete(&format!("rooms/{}", id)).await?;
        into_unit(resp)
    }
}
