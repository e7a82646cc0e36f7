//! Room Model

use serde::{Deserialize, Serialize};

/// Coarse room flag kept by the backend.
///
/// Per-meal occupancy is derived from check-in records, not from this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
}

/// Room entity
///
/// `room_number` is unique within a resort only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub resort_id: i64,
    pub room_number: String,
    #[serde(default)]
    pub status: RoomStatus,
}

/// Create room payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreate {
    pub resort_id: i64,
    pub room_number: String,
}

/// Update room payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RoomStatus>,
}

/// Per-room entry of `GET /checkins/room-status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomCheckInStatus {
    pub room_id: i64,
    #[serde(default)]
    pub room_number: Option<String>,
    pub checked_in: bool,
}
