//! Client-side core of the DormDesk console.
//!
//! Everything a screen needs besides drawing: the settings and profile
//! forms, the reports page and the dashboard. Controllers are plain
//! `Send + Sync` structs that a UI layer owns, feeds user input into and
//! renders from. They reach the backend only through a [`DataClient`] held
//! by the per-login [`Session`].

pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod i18n;
pub mod notify;
pub mod profile;
pub mod reports;
pub mod session;
pub mod settings;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{DataClient, HttpDataClient};
pub use config::ConsoleConfig;
pub use dashboard::DashboardController;
pub use error::{ConsoleError, Result};
pub use form::{FormPhase, Outcome, ViewScope};
pub use i18n::{Catalog, Translator};
pub use notify::{Notifier, Toast, ToastKind};
pub use profile::ProfileEditor;
pub use reports::{ReportView, ReportsController};
pub use session::{Identity, Session};
pub use settings::SettingsSynchronizer;
pub use storage::LocalStorage;
