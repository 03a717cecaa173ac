//! Reports page: report cards, the active chart and where its data came from.

use std::collections::HashMap;
use std::sync::Arc;

use common::{DataOrigin, DistributionBucket, ReportId, ReportSelection, SeriesPoint, TimeFrame};
use compute::distribution::{self, slice_label};
use compute::format::{month_key, percent_tick, CurrencyFormatter};
use compute::{aggregate, sample, GroupField, SourceTable};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use crate::client::DataClient;
use crate::error::Result;
use crate::form::{Outcome, ViewScope};
use crate::session::Session;

/// Value axis of a monthly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesAxis {
    Percent,
    Currency,
}

/// Where a report's numbers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSource {
    /// Counted live from a backend table.
    Distribution {
        table: SourceTable,
        field: GroupField,
    },
    /// Monthly series. No backend table feeds these yet.
    Series { axis: SeriesAxis },
    ComingSoon,
}

/// The catalogue every report id resolves through.
pub fn source_for(id: ReportId) -> ReportSource {
    match id {
        ReportId::Occupancy => ReportSource::Series {
            axis: SeriesAxis::Percent,
        },
        ReportId::Revenue => ReportSource::Series {
            axis: SeriesAxis::Currency,
        },
        ReportId::Rooms => ReportSource::Distribution {
            table: SourceTable::Rooms,
            field: GroupField::RoomType,
        },
        ReportId::Repairs => ReportSource::Distribution {
            table: SourceTable::Repairs,
            field: GroupField::RepairType,
        },
        ReportId::Events => ReportSource::ComingSoon,
    }
}

fn sample_series(id: ReportId) -> Vec<SeriesPoint> {
    match id {
        ReportId::Occupancy => sample::monthly_occupancy(),
        ReportId::Revenue => sample::monthly_revenue(),
        ReportId::Rooms | ReportId::Repairs | ReportId::Events => Vec::new(),
    }
}

fn sample_distribution(id: ReportId) -> Vec<DistributionBucket> {
    match id {
        ReportId::Rooms => sample::room_types(),
        ReportId::Repairs => sample::repair_types(),
        ReportId::Occupancy | ReportId::Revenue | ReportId::Events => Vec::new(),
    }
}

/// Reads every row of `table` and counts the values of `field`.
pub async fn fetch_distribution(
    client: &dyn DataClient,
    table: SourceTable,
    field: GroupField,
) -> Result<Vec<DistributionBucket>> {
    field.check_table(table)?;

    let values: Vec<String> = match table {
        SourceTable::Rooms => client
            .list_rooms()
            .await?
            .into_iter()
            .map(|row| match field {
                GroupField::RoomType => row.room_type,
                _ => row.status,
            })
            .collect(),
        SourceTable::Repairs => client
            .list_repairs()
            .await?
            .into_iter()
            .map(|row| match field {
                GroupField::RepairType => row.repair_type,
                _ => row.status,
            })
            .collect(),
    };

    debug!(%table, column = field.column(), rows = values.len(), "fetched distribution rows");
    Ok(aggregate(values))
}

/// A report tab as listed at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCard {
    pub id: ReportId,
    pub title: String,
    pub description: String,
    pub active: bool,
}

/// Everything needed to draw the active report.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportView {
    Distribution {
        title: String,
        buckets: Vec<DistributionBucket>,
        /// `"{label}: {percent}%"` per bucket
        slice_labels: Vec<String>,
        origin: DataOrigin,
    },
    Series {
        title: String,
        label: String,
        axis: SeriesAxis,
        points: Vec<SeriesPoint>,
        month_ticks: Vec<String>,
        value_ticks: Vec<String>,
        origin: DataOrigin,
    },
    ComingSoon {
        title: String,
        message: String,
    },
}

impl ReportView {
    pub fn origin(&self) -> Option<&DataOrigin> {
        match self {
            ReportView::Distribution { origin, .. } | ReportView::Series { origin, .. } => {
                Some(origin)
            }
            ReportView::ComingSoon { .. } => None,
        }
    }
}

struct Shown {
    buckets: Vec<DistributionBucket>,
    origin: DataOrigin,
}

struct ReportsState {
    selection: ReportSelection,
    distributions: HashMap<ReportId, Shown>,
    /// Bumped per refresh so a slow response cannot overwrite a newer one.
    generation: u64,
}

pub struct ReportsController {
    session: Arc<Session>,
    formatter: CurrencyFormatter,
    state: Mutex<ReportsState>,
    scope: ViewScope,
}

impl ReportsController {
    /// Starts on the default selection with sample distributions.
    pub fn new(session: Arc<Session>) -> Result<Self> {
        let formatter = CurrencyFormatter::new(&session.config().currency)?;

        let distributions = [ReportId::Rooms, ReportId::Repairs]
            .into_iter()
            .map(|id| {
                let shown = Shown {
                    buckets: sample_distribution(id),
                    origin: DataOrigin::fallback("sample data"),
                };
                (id, shown)
            })
            .collect();

        Ok(Self {
            session,
            formatter,
            state: Mutex::new(ReportsState {
                selection: ReportSelection::default(),
                distributions,
                generation: 0,
            }),
            scope: ViewScope::new(),
        })
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }

    pub fn selection(&self) -> ReportSelection {
        self.state.lock().selection
    }

    /// Switches tabs. Data is re-fetched only when the selection actually
    /// changes to a report backed by a table.
    pub async fn select_report(&self, id: ReportId) -> ReportView {
        let changed = {
            let mut state = self.state.lock();
            let changed = state.selection.report_id != id;
            state.selection.report_id = id;
            changed
        };

        if changed && matches!(source_for(id), ReportSource::Distribution { .. }) {
            self.refresh().await;
        }
        self.view()
    }

    /// Only narrows or widens the series window; nothing is fetched.
    pub fn set_time_frame(&self, time_frame: TimeFrame) -> ReportView {
        self.state.lock().selection.time_frame = time_frame;
        self.view()
    }

    /// Fetches the active report's data. Empty results and failures keep
    /// whatever is currently shown and mark it as fallback data.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Outcome<DataOrigin> {
        let (id, generation) = {
            let mut state = self.state.lock();
            state.generation += 1;
            (state.selection.report_id, state.generation)
        };

        let (table, field) = match source_for(id) {
            ReportSource::Distribution { table, field } => (table, field),
            ReportSource::Series { .. } => {
                warn!(report = %id, "No live source for report, showing sample series");
                return Outcome::Applied(DataOrigin::fallback(format!("no live source for {id}")));
            }
            ReportSource::ComingSoon => return Outcome::Ignored,
        };

        let result = fetch_distribution(self.session.client(), table, field).await;
        if !self.scope.is_mounted() {
            debug!(report = %id, "report data arrived after unmount, discarding");
            return Outcome::Discarded;
        }

        let mut state = self.state.lock();
        if state.generation != generation {
            debug!(report = %id, "newer refresh in flight, discarding");
            return Outcome::Discarded;
        }

        let origin = match result {
            Ok(buckets) if !buckets.is_empty() => {
                info!(report = %id, buckets = buckets.len(), "Loaded live report data");
                state.distributions.insert(
                    id,
                    Shown {
                        buckets,
                        origin: DataOrigin::Live,
                    },
                );
                return Outcome::Applied(DataOrigin::Live);
            }
            Ok(_) => {
                warn!(report = %id, "No rows in {}, keeping current data", table);
                DataOrigin::fallback(format!("no rows in {table}"))
            }
            Err(e) => {
                warn!(report = %id, "Failed to load report data, keeping current data: {}", e);
                DataOrigin::fallback(e.to_string())
            }
        };

        if let Some(shown) = state.distributions.get_mut(&id) {
            shown.origin = origin.clone();
        }
        Outcome::Applied(origin)
    }

    pub fn cards(&self) -> Vec<ReportCard> {
        let active = self.selection().report_id;
        ReportId::ALL
            .into_iter()
            .map(|id| ReportCard {
                id,
                title: self.session.t(&id.title_key()),
                description: self.session.t(&id.description_key()),
                active: id == active,
            })
            .collect()
    }

    /// Value-axis tick for a series point.
    pub fn format_tick(&self, axis: SeriesAxis, value: f64) -> String {
        match axis {
            SeriesAxis::Percent => percent_tick(value),
            SeriesAxis::Currency => self
                .formatter
                .tick(Decimal::from_f64_retain(value).unwrap_or_default()),
        }
    }

    pub fn view(&self) -> ReportView {
        let selection = self.selection();
        let id = selection.report_id;
        let title = self.session.t(&id.title_key());

        match source_for(id) {
            ReportSource::Distribution { .. } => {
                let (buckets, origin) = {
                    let state = self.state.lock();
                    match state.distributions.get(&id) {
                        Some(shown) => (shown.buckets.clone(), shown.origin.clone()),
                        None => (sample_distribution(id), DataOrigin::fallback("sample data")),
                    }
                };
                let total = distribution::total(&buckets);
                let slice_labels = buckets
                    .iter()
                    .map(|bucket| slice_label(bucket, total))
                    .collect();
                ReportView::Distribution {
                    title,
                    buckets,
                    slice_labels,
                    origin,
                }
            }
            ReportSource::Series { axis } => {
                let points = sample::window(sample_series(id), selection.time_frame);
                let month_ticks = points
                    .iter()
                    .map(|point| self.session.t(&month_key(&point.label)))
                    .collect();
                let value_ticks = points
                    .iter()
                    .map(|point| self.format_tick(axis, point.value))
                    .collect();
                ReportView::Series {
                    title,
                    label: self.session.t(&id.label_key()),
                    axis,
                    points,
                    month_ticks,
                    value_ticks,
                    origin: DataOrigin::fallback(format!("no live source for {id}")),
                }
            }
            ReportSource::ComingSoon => ReportView::ComingSoon {
                title,
                message: self.session.t("reports.comingSoon"),
            },
        }
    }
}
