//! Restaurant (Outlet) Model

use serde::{Deserialize, Serialize};

/// Outlet status as stored by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RestaurantStatus {
    #[default]
    Open,
    Close,
}

/// Restaurant entity (an outlet inside one resort)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub resort_id: i64,
    #[serde(default)]
    pub status: RestaurantStatus,
}

impl Restaurant {
    pub fn is_open(&self) -> bool {
        self.status == RestaurantStatus::Open
    }
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub resort_id: i64,
    #[serde(default)]
    pub status: RestaurantStatus,
}

/// Update restaurant payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resort_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RestaurantStatus>,
}

/// Status change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantStatusUpdate {
    pub status: RestaurantStatus,
}
