use crate::UnknownName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// The report tabs available on the reports page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportId {
    #[default]
    Occupancy,
    Revenue,
    Rooms,
    Repairs,
    Events,
}

impl ReportId {
    pub const ALL: [ReportId; 5] = [
        ReportId::Occupancy,
        ReportId::Revenue,
        ReportId::Rooms,
        ReportId::Repairs,
        ReportId::Events,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportId::Occupancy => "occupancy",
            ReportId::Revenue => "revenue",
            ReportId::Rooms => "rooms",
            ReportId::Repairs => "repairs",
            ReportId::Events => "events",
        }
    }

    /// Translation key of the report title, e.g. `reports.rooms.title`.
    pub fn title_key(&self) -> String {
        format!("reports.{}.title", self.as_str())
    }

    /// Translation key of the report description.
    pub fn description_key(&self) -> String {
        format!("reports.{}.desc", self.as_str())
    }

    /// Translation key of the series / slice label.
    pub fn label_key(&self) -> String {
        format!("reports.{}.label", self.as_str())
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportId {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownName::new("report", s))
    }
}

/// Period the report covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    Month,
    Quarter,
    #[default]
    Year,
    Custom,
}

impl TimeFrame {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFrame::Month => "month",
            TimeFrame::Quarter => "quarter",
            TimeFrame::Year => "year",
            TimeFrame::Custom => "custom",
        }
    }

    /// Number of trailing monthly points a series shows, `None` for all of them.
    pub fn trailing_months(&self) -> Option<usize> {
        match self {
            TimeFrame::Month => Some(1),
            TimeFrame::Quarter => Some(3),
            TimeFrame::Year | TimeFrame::Custom => None,
        }
    }
}

impl FromStr for TimeFrame {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(TimeFrame::Month),
            "quarter" => Ok(TimeFrame::Quarter),
            "year" => Ok(TimeFrame::Year),
            "custom" => Ok(TimeFrame::Custom),
            _ => Err(UnknownName::new("time frame", s)),
        }
    }
}

/// What the reports page is currently showing. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportSelection {
    pub report_id: ReportId,
    pub time_frame: TimeFrame,
}

/// One slice of a proportion chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DistributionBucket {
    pub label: String,
    pub count: u64,
    /// Hex colour token, e.g. `#3b82f6`.
    pub color: String,
}

impl DistributionBucket {
    pub fn new(label: impl Into<String>, count: u64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            count,
            color: color.into(),
        }
    }
}

/// One bar of a monthly series. `label` is the untranslated month
/// abbreviation (`Jan`, `Feb`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Where the data behind a rendered report came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DataOrigin {
    /// Freshly aggregated from the backend tables.
    Live,
    /// Sample or previously shown data kept because no live data was available.
    Fallback { reason: String },
}

impl DataOrigin {
    pub fn fallback(reason: impl Into<String>) -> Self {
        DataOrigin::Fallback {
            reason: reason.into(),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, DataOrigin::Live)
    }
}
