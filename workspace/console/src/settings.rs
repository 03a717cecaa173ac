//! Tariff settings form.

use std::str::FromStr;
use std::sync::Arc;

use common::{SystemSettings, TariffField};
use compute::{parse_tariff, ComputeError};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use tracing::{debug, error, info, instrument, warn};

use crate::error::Result;
use crate::form::{FormModel, FormPhase, Outcome, ViewScope};
use crate::session::Session;

/// Keeps the settings form in step with the stored settings record.
///
/// The form starts on [`SystemSettings::default`] and only leaves it once a
/// load succeeds. Saving always writes all four tariffs; the last writer wins.
pub struct SettingsSynchronizer {
    session: Arc<Session>,
    form: Mutex<FormModel<SystemSettings>>,
    scope: ViewScope,
}

impl SettingsSynchronizer {
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            form: Mutex::new(FormModel::new(SystemSettings::default())),
            scope: ViewScope::new(),
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }

    pub fn draft(&self) -> SystemSettings {
        *self.form.lock().draft()
    }

    pub fn baseline(&self) -> SystemSettings {
        *self.form.lock().baseline()
    }

    pub fn phase(&self) -> FormPhase {
        self.form.lock().phase()
    }

    pub fn is_dirty(&self) -> bool {
        self.form.lock().is_dirty()
    }

    /// Fetches the stored settings. On failure the form keeps what it had,
    /// which before the first successful load are the defaults.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Outcome<SystemSettings>> {
        let result = self.session.client().load_settings().await;
        if !self.scope.is_mounted() {
            debug!("settings arrived after unmount, discarding");
            return Ok(Outcome::Discarded);
        }

        match result {
            Ok(settings) => {
                self.form.lock().load(settings);
                info!("Loaded system settings");
                Ok(Outcome::Applied(settings))
            }
            Err(e) if e.is_not_found() => {
                debug!("No stored settings yet, keeping defaults");
                Err(e)
            }
            Err(e) => {
                warn!("Failed to load system settings, keeping current values: {}", e);
                self.session.notify_error("system.loadError");
                Err(e)
            }
        }
    }

    /// Stores the parsed value of `raw` in the draft and returns it.
    /// Unparseable or negative input becomes zero.
    pub fn update_draft(&self, field: TariffField, raw: &str) -> Decimal {
        let value = parse_tariff(raw);
        debug!(field = %field, raw, %value, "tariff edited");
        self.form.lock().edit(|draft| draft.set(field, value));
        value
    }

    /// [`update_draft`](Self::update_draft) by field name (`waterRate` or
    /// `water_rate`).
    pub fn update_draft_by_name(&self, name: &str, raw: &str) -> Result<Decimal> {
        let field = TariffField::from_str(name).map_err(ComputeError::from)?;
        Ok(self.update_draft(field, raw))
    }

    /// Upserts the draft. A save requested while another one is in flight is
    /// ignored without touching the backend.
    #[instrument(skip(self))]
    pub async fn save(&self) -> Result<Outcome<SystemSettings>> {
        let draft = {
            let mut form = self.form.lock();
            form.begin_save()
        };
        let Some(draft) = draft else {
            debug!("Save already in progress, ignoring submit");
            return Ok(Outcome::Ignored);
        };

        let result = self.session.client().save_settings(&draft).await;
        if !self.scope.is_mounted() {
            debug!("save finished after unmount, discarding");
            return Ok(Outcome::Discarded);
        }

        match result {
            Ok(saved) => {
                self.form.lock().finish_ok(&draft, saved);
                info!("System settings saved");
                self.session.notify_success("system.saveSuccess");
                Ok(Outcome::Applied(saved))
            }
            Err(e) => {
                self.form.lock().finish_err();
                error!("Failed to save system settings: {}", e);
                self.session.notify_error("system.saveError");
                Err(e)
            }
        }
    }
}
