use std::collections::HashMap;

/// Resolves translation keys such as `system.saveSuccess` to display text.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// In-memory key/value catalogue. Missing keys translate to themselves so a
/// gap in the catalogue shows up on screen instead of as an empty label.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// English texts for every key the console emits.
    pub fn english() -> Self {
        let mut catalog = Self::new();
        for (key, text) in ENGLISH {
            catalog.insert(*key, *text);
        }
        catalog
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, text)| (key.into(), text.into()))
                .collect(),
        }
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

const ENGLISH: &[(&str, &str)] = &[
    ("system.saveSuccess", "Settings saved"),
    ("system.saveError", "Could not save settings"),
    ("system.loadError", "Could not load settings"),
    ("system.clearCacheSuccess", "Cache cleared"),
    ("profile.saveSuccess", "Profile updated"),
    ("profile.saveError", "Could not update profile"),
    ("profile.loadError", "Could not load profile"),
    ("profile.genericError", "Something went wrong, please try again"),
    ("profile.userNotFound", "No tenant record is linked to this account"),
    ("dashboard.occupancy", "Occupancy"),
    ("dashboard.loadError", "Could not load dashboard statistics"),
    ("reports.comingSoon", "Coming soon"),
    ("reports.occupancy.title", "Occupancy Report"),
    ("reports.occupancy.desc", "Monthly occupancy rate"),
    ("reports.occupancy.label", "Occupancy"),
    ("reports.revenue.title", "Revenue Report"),
    ("reports.revenue.desc", "Monthly revenue"),
    ("reports.revenue.label", "Revenue"),
    ("reports.rooms.title", "Room Types"),
    ("reports.rooms.desc", "Rooms by type"),
    ("reports.rooms.label", "Rooms"),
    ("reports.repairs.title", "Repair Types"),
    ("reports.repairs.desc", "Repair requests by type"),
    ("reports.repairs.label", "Repairs"),
    ("reports.events.title", "Events"),
    ("reports.events.desc", "Dormitory events"),
    ("reports.events.label", "Events"),
    ("month.Jan", "Jan"),
    ("month.Feb", "Feb"),
    ("month.Mar", "Mar"),
    ("month.Apr", "Apr"),
    ("month.May", "May"),
    ("month.Jun", "Jun"),
    ("month.Jul", "Jul"),
    ("month.Aug", "Aug"),
    ("month.Sep", "Sep"),
    ("month.Oct", "Oct"),
    ("month.Nov", "Nov"),
    ("month.Dec", "Dec"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_echoes() {
        let catalog = Catalog::new().with("profile.saveSuccess", "บันทึกแล้ว");
        assert_eq!(catalog.translate("profile.saveSuccess"), "บันทึกแล้ว");
        assert_eq!(catalog.translate("profile.unknown"), "profile.unknown");
    }

    #[test]
    fn test_english_covers_report_keys() {
        let catalog = Catalog::english();
        for id in common::ReportId::ALL {
            assert_ne!(catalog.translate(&id.title_key()), id.title_key());
        }
    }
}
