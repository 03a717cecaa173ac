use std::sync::Arc;

use common::SystemStats;
use compute::Occupancy;
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::form::{Outcome, ViewScope};
use crate::session::Session;

/// Headline counters and the occupancy card.
pub struct DashboardController {
    session: Arc<Session>,
    stats: Mutex<Option<SystemStats>>,
    scope: ViewScope,
}

impl DashboardController {
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            stats: Mutex::new(None),
            scope: ViewScope::new(),
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }

    /// Last stats that loaded, `None` before the first success.
    pub fn stats(&self) -> Option<SystemStats> {
        *self.stats.lock()
    }

    /// Occupancy card contents; an empty card until stats load.
    pub fn occupancy(&self) -> Occupancy {
        self.stats()
            .map(|stats| Occupancy::from(&stats))
            .unwrap_or_default()
    }

    /// Reloads the counters. A failure leaves the previous numbers on screen.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Outcome<SystemStats>> {
        let result = self.session.client().system_stats().await;
        if !self.scope.is_mounted() {
            debug!("stats arrived after unmount, discarding");
            return Ok(Outcome::Discarded);
        }

        match result {
            Ok(stats) => {
                *self.stats.lock() = Some(stats);
                info!(
                    total_rooms = stats.total_rooms,
                    occupied_rooms = stats.occupied_rooms,
                    "Loaded dashboard stats"
                );
                Ok(Outcome::Applied(stats))
            }
            Err(e) => {
                warn!("Failed to load dashboard stats, keeping previous values: {}", e);
                self.session.notify_error("dashboard.loadError");
                Err(e)
            }
        }
    }
}
