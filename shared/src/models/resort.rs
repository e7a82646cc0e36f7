//! Resort Model

use serde::{Deserialize, Serialize};

/// Resort entity (owns rooms and outlets)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resort {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create resort payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResortCreate {
    pub name: String,
    pub location: String,
}

/// Update resort payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResortUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
