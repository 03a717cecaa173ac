use anyhow::Result;
use common::{DataOrigin, ReportId, TimeFrame};
use console::{ConsoleConfig, Identity, ReportView, ReportsController, Session};
use std::sync::Arc;
use tracing::{debug, info};

/// Plain-text rendering of a report view, one line per slice or month.
pub(crate) fn render(view: &ReportView) -> String {
    let mut lines = Vec::new();
    match view {
        ReportView::Distribution {
            title,
            buckets,
            slice_labels,
            origin,
        } => {
            lines.push(title.clone());
            for (bucket, label) in buckets.iter().zip(slice_labels) {
                lines.push(format!("  {label} ({}, {})", bucket.count, bucket.color));
            }
            lines.push(origin_line(origin));
        }
        ReportView::Series {
            title,
            label,
            month_ticks,
            value_ticks,
            origin,
            ..
        } => {
            lines.push(format!("{title} ({label})"));
            for (month, value) in month_ticks.iter().zip(value_ticks) {
                lines.push(format!("  {month}: {value}"));
            }
            lines.push(origin_line(origin));
        }
        ReportView::ComingSoon { title, message } => {
            lines.push(title.clone());
            lines.push(format!("  {message}"));
        }
    }
    lines.push(String::new());
    lines.join("\n")
}

fn origin_line(origin: &DataOrigin) -> String {
    match origin {
        DataOrigin::Live => "source: live".to_string(),
        DataOrigin::Fallback { reason } => format!("source: sample data ({reason})"),
    }
}

pub async fn show_report(report_id: &str, time_frame: &str, token: Option<String>) -> Result<()> {
    let report_id: ReportId = report_id.parse()?;
    let time_frame: TimeFrame = time_frame.parse()?;

    let config = ConsoleConfig::from_environment();
    debug!("Using API at {}", config.api_base_url);
    let session = Arc::new(Session::connect(config, Identity::default(), token)?);
    let reports = ReportsController::new(session)?;

    reports.set_time_frame(time_frame);
    let view = reports.select_report(report_id).await;
    info!("Rendered report {} for {}", report_id, time_frame.as_str());

    print!("{}", render(&view));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::DistributionBucket;

    #[test]
    fn test_render_distribution() {
        let view = ReportView::Distribution {
            title: "Room Types".to_string(),
            buckets: vec![DistributionBucket::new("Suite", 2, "#3b82f6")],
            slice_labels: vec!["Suite: 100%".to_string()],
            origin: DataOrigin::Live,
        };
        assert_eq!(
            render(&view),
            "Room Types\n  Suite: 100% (2, #3b82f6)\nsource: live\n"
        );
    }

    #[test]
    fn test_render_coming_soon() {
        let view = ReportView::ComingSoon {
            title: "Events".to_string(),
            message: "Coming soon".to_string(),
        };
        assert_eq!(render(&view), "Events\n  Coming soon\n");
    }
}
