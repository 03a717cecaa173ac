//! Pure computations behind the console: reducing fetched rows into chart
//! buckets, occupancy maths, tariff input parsing, chart/currency formatting
//! and the sample series shown when no live data exists.

pub mod distribution;
pub mod error;
pub mod format;
pub mod occupancy;
pub mod sample;
pub mod tariff;

pub use distribution::{aggregate, GroupField, SourceTable, PALETTE};
pub use error::{ComputeError, Result};
pub use occupancy::{occupancy_percentage, Occupancy};
pub use tariff::parse_tariff;
