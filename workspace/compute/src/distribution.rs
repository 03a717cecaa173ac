use std::collections::HashMap;
use std::fmt;

use common::DistributionBucket;
use tracing::debug;

use crate::error::{ComputeError, Result};

/// Slice colours, handed out by first-seen order and wrapped around.
pub const PALETTE: [&str; 6] = [
    "#3b82f6", "#10b981", "#f59e0b", "#6366f1", "#ec4899", "#64748b",
];

/// Backend table a distribution can be computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceTable {
    Rooms,
    Repairs,
}

impl SourceTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTable::Rooms => "rooms",
            SourceTable::Repairs => "repairs",
        }
    }
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column a distribution groups on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupField {
    RoomType,
    RoomStatus,
    RepairType,
    RepairStatus,
}

impl GroupField {
    pub fn column(&self) -> &'static str {
        match self {
            GroupField::RoomType => "room_type",
            GroupField::RepairType => "repair_type",
            GroupField::RoomStatus | GroupField::RepairStatus => "status",
        }
    }

    pub fn table(&self) -> SourceTable {
        match self {
            GroupField::RoomType | GroupField::RoomStatus => SourceTable::Rooms,
            GroupField::RepairType | GroupField::RepairStatus => SourceTable::Repairs,
        }
    }

    /// Fails when the column belongs to a different table.
    pub fn check_table(&self, table: SourceTable) -> Result<()> {
        if self.table() == table {
            Ok(())
        } else {
            Err(ComputeError::FieldNotInTable {
                table: table.as_str(),
                field: self.column(),
            })
        }
    }
}

/// Groups `values` by exact string equality and counts them.
///
/// Buckets come out in first-seen order and bucket `i` gets
/// `PALETTE[i % PALETTE.len()]`. The counts always sum to the number of
/// values consumed.
pub fn aggregate<I, S>(values: I) -> Vec<DistributionBucket>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<DistributionBucket> = Vec::new();

    for value in values {
        let value = value.as_ref();
        match positions.get(value) {
            Some(&index) => buckets[index].count += 1,
            None => {
                let index = buckets.len();
                positions.insert(value.to_string(), index);
                buckets.push(DistributionBucket::new(
                    value,
                    1,
                    PALETTE[index % PALETTE.len()],
                ));
            }
        }
    }

    debug!(buckets = buckets.len(), total = total(&buckets), "aggregated distribution");
    buckets
}

/// Sum of all bucket counts.
pub fn total(buckets: &[DistributionBucket]) -> u64 {
    buckets.iter().map(|bucket| bucket.count).sum()
}

/// Pie slice label: `"{label}: {percent}%"`, percent rounded to a whole number.
pub fn slice_label(bucket: &DistributionBucket, total: u64) -> String {
    let percent = if total == 0 {
        0.0
    } else {
        bucket.count as f64 / total as f64 * 100.0
    };
    format!("{}: {:.0}%", bucket.label, percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let buckets = aggregate(["A", "A", "B"]);
        assert_eq!(
            buckets,
            vec![
                DistributionBucket::new("A", 2, "#3b82f6"),
                DistributionBucket::new("B", 1, "#10b981"),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let buckets = aggregate(Vec::<String>::new());
        assert!(buckets.is_empty());
        assert_eq!(total(&buckets), 0);
    }

    #[test]
    fn test_palette_wraps() {
        let labels: Vec<String> = (0..8).map(|i| format!("type-{i}")).collect();
        let buckets = aggregate(&labels);
        assert_eq!(buckets.len(), 8);
        assert_eq!(buckets[6].color, PALETTE[0]);
        assert_eq!(buckets[7].color, PALETTE[1]);
    }

    #[test]
    fn test_counts_sum_to_rows() {
        let rows = ["Plumbing", "HVAC", "Plumbing", "plumbing", "HVAC", "Other", "Plumbing"];
        let buckets = aggregate(rows);
        assert_eq!(total(&buckets), rows.len() as u64);
        // Grouping is case sensitive
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0].label, "Plumbing");
        assert_eq!(buckets[0].count, 3);
    }

    #[test]
    fn test_field_table_check() {
        assert!(GroupField::RoomType.check_table(SourceTable::Rooms).is_ok());
        assert_eq!(
            GroupField::RepairType.check_table(SourceTable::Rooms),
            Err(ComputeError::FieldNotInTable {
                table: "rooms",
                field: "repair_type"
            })
        );
    }

    #[test]
    fn test_slice_label() {
        let bucket = DistributionBucket::new("Suite", 1, PALETTE[0]);
        assert_eq!(slice_label(&bucket, 4), "Suite: 25%");
        assert_eq!(slice_label(&bucket, 0), "Suite: 0%");
    }
}
