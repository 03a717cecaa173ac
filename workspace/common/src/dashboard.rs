use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Headline counters shown on the dashboard and the system settings card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SystemStats {
    pub total_rooms: u64,
    pub occupied_rooms: u64,
    pub total_tenants: u64,
    pub pending_repairs: u64,
}

impl SystemStats {
    pub fn vacant_rooms(&self) -> u64 {
        self.total_rooms.saturating_sub(self.occupied_rooms)
    }
}
