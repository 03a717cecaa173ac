use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of the `rooms` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoomRow {
    pub id: i32,
    pub room_number: String,
    pub room_type: String,
    /// vacant, occupied or maintenance
    pub status: String,
}

/// A row of the `repairs` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RepairRow {
    pub id: i32,
    pub room_id: Option<i32>,
    pub repair_type: String,
    /// pending, in_progress or completed
    pub status: String,
    pub description: Option<String>,
}
