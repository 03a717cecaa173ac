//! Sample data rendered before (or instead of) live data.

use common::{DistributionBucket, SeriesPoint, TimeFrame};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const OCCUPANCY: [f64; 12] = [
    85.0, 88.0, 90.0, 92.0, 95.0, 94.0, 92.0, 90.0, 93.0, 94.0, 96.0, 89.0,
];

const REVENUE: [f64; 12] = [
    42500.0, 44000.0, 45000.0, 46000.0, 47500.0, 47000.0, 46000.0, 45000.0, 46500.0, 47000.0,
    48000.0, 44500.0,
];

fn monthly(values: &[f64; 12]) -> Vec<SeriesPoint> {
    MONTHS
        .iter()
        .zip(values.iter())
        .map(|(month, value)| SeriesPoint::new(*month, *value))
        .collect()
}

/// Monthly occupancy in percent.
pub fn monthly_occupancy() -> Vec<SeriesPoint> {
    monthly(&OCCUPANCY)
}

/// Monthly revenue in major currency units.
pub fn monthly_revenue() -> Vec<SeriesPoint> {
    monthly(&REVENUE)
}

pub fn room_types() -> Vec<DistributionBucket> {
    vec![
        DistributionBucket::new("Standard Single", 35, "#3b82f6"),
        DistributionBucket::new("Standard Double", 25, "#10b981"),
        DistributionBucket::new("Deluxe Single", 20, "#f59e0b"),
        DistributionBucket::new("Deluxe Double", 15, "#6366f1"),
        DistributionBucket::new("Suite", 5, "#ec4899"),
    ]
}

pub fn repair_types() -> Vec<DistributionBucket> {
    vec![
        DistributionBucket::new("Plumbing", 38, "#3b82f6"),
        DistributionBucket::new("Electrical", 25, "#10b981"),
        DistributionBucket::new("Furniture", 15, "#f59e0b"),
        DistributionBucket::new("HVAC", 12, "#6366f1"),
        DistributionBucket::new("Other", 10, "#ec4899"),
    ]
}

/// Keeps the trailing points the time frame asks for.
pub fn window(points: Vec<SeriesPoint>, time_frame: TimeFrame) -> Vec<SeriesPoint> {
    match time_frame.trailing_months() {
        Some(months) if months < points.len() => points[points.len() - months..].to_vec(),
        _ => points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PALETTE;

    #[test]
    fn test_series_cover_a_year() {
        assert_eq!(monthly_occupancy().len(), 12);
        assert_eq!(monthly_revenue()[11], SeriesPoint::new("Dec", 44500.0));
    }

    #[test]
    fn test_sample_colours_follow_palette() {
        for buckets in [room_types(), repair_types()] {
            for (index, bucket) in buckets.iter().enumerate() {
                assert_eq!(bucket.color, PALETTE[index]);
            }
        }
    }

    #[test]
    fn test_window() {
        let quarter = window(monthly_revenue(), TimeFrame::Quarter);
        let labels: Vec<_> = quarter.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Oct", "Nov", "Dec"]);
        assert_eq!(window(monthly_revenue(), TimeFrame::Month).len(), 1);
        assert_eq!(window(monthly_revenue(), TimeFrame::Year).len(), 12);
        assert_eq!(window(monthly_revenue(), TimeFrame::Custom).len(), 12);
    }
}
