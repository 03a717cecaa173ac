//! Common transport-layer types shared between the backend service and the
//! console. These structs mirror the backend handlers' request/response
//! payloads so the console can deserialize API responses without
//! duplicating shapes.

mod dashboard;
mod profile;
mod reports;
mod rows;
mod settings;

pub use dashboard::SystemStats;
pub use profile::{ProfileField, TenantDto, TenantProfile};
pub use reports::{DataOrigin, DistributionBucket, ReportId, ReportSelection, SeriesPoint, TimeFrame};
pub use rows::{RepairRow, RoomRow};
pub use settings::{SystemSettings, TariffField};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Error body returned by the backend for non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Machine readable error code
    pub code: String,
    /// Always false
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            success: false,
        }
    }
}

/// Raised when a name coming from a form, a query string or the CLI does not
/// match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownName {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownName {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
