use common::SystemStats;

/// `round(occupied / total * 100)`, with an empty building reading 0%.
pub fn occupancy_percentage(occupied: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    (occupied as f64 / total as f64 * 100.0).round() as u64
}

/// Everything the occupancy card renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Occupancy {
    pub occupied: u64,
    pub total: u64,
}

impl Occupancy {
    pub fn new(occupied: u64, total: u64) -> Self {
        Self { occupied, total }
    }

    /// Big number on the card, e.g. `42/50`.
    pub fn headline(&self) -> String {
        format!("{}/{}", self.occupied, self.total)
    }

    pub fn percentage(&self) -> u64 {
        occupancy_percentage(self.occupied, self.total)
    }

    /// Width of the progress bar fill in percent, always within 0..=100.
    pub fn bar_width(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.occupied as f64 / self.total as f64 * 100.0).clamp(0.0, 100.0)
    }
}

impl From<&SystemStats> for Occupancy {
    fn from(stats: &SystemStats) -> Self {
        Self::new(stats.occupied_rooms, stats.total_rooms)
    }
}
