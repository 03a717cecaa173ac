//! Tenant profile form.

use std::str::FromStr;
use std::sync::Arc;

use common::{ProfileField, TenantProfile};
use compute::ComputeError;
use parking_lot::Mutex;
use tracing::{debug, error, info, instrument, warn};

use crate::error::{ConsoleError, Result};
use crate::form::{FormModel, FormPhase, Outcome, ViewScope};
use crate::session::Session;

/// Edits the tenant record that belongs to the session's identity.
pub struct ProfileEditor {
    session: Arc<Session>,
    form: Mutex<FormModel<TenantProfile>>,
    scope: ViewScope,
}

impl ProfileEditor {
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            form: Mutex::new(FormModel::new(TenantProfile::default())),
            scope: ViewScope::new(),
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }

    pub fn draft(&self) -> TenantProfile {
        self.form.lock().draft().clone()
    }

    pub fn baseline(&self) -> TenantProfile {
        self.form.lock().baseline().clone()
    }

    pub fn phase(&self) -> FormPhase {
        self.form.lock().phase()
    }

    /// Avatar fallback for the stored profile.
    pub fn initials(&self) -> String {
        self.form.lock().baseline().initials()
    }

    fn login_email(&self) -> Option<&str> {
        self.session.identity().email.as_deref()
    }

    /// Fills the form from the tenant record. Without a linked record only
    /// the login email is shown.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Outcome<TenantProfile>> {
        let Some(tenant_id) = self.session.identity().tenant_id else {
            let profile = TenantProfile {
                email: self.login_email().unwrap_or_default().to_string(),
                ..TenantProfile::default()
            };
            debug!("No tenant record linked, showing login email only");
            self.form.lock().load(profile.clone());
            return Ok(Outcome::Applied(profile));
        };

        let result = self.session.client().load_tenant(tenant_id).await;
        if !self.scope.is_mounted() {
            debug!("tenant arrived after unmount, discarding");
            return Ok(Outcome::Discarded);
        }

        match result {
            Ok(tenant) => {
                let profile = tenant.to_profile(self.login_email());
                self.form.lock().load(profile.clone());
                info!(%tenant_id, "Loaded tenant profile");
                Ok(Outcome::Applied(profile))
            }
            Err(e) => {
                warn!(%tenant_id, "Failed to load tenant profile: {}", e);
                self.session.notify_error("profile.loadError");
                Err(e)
            }
        }
    }

    pub fn update_field(&self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        self.form.lock().edit(|draft| draft.set(field, value));
    }

    pub fn update_field_by_name(&self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = ProfileField::from_str(name).map_err(ComputeError::from)?;
        self.update_field(field, value);
        Ok(())
    }

    /// Writes every editable field to the tenant record. Fails before any
    /// remote call when the session has no tenant record.
    #[instrument(skip(self))]
    pub async fn save(&self) -> Result<Outcome<TenantProfile>> {
        let Some(tenant_id) = self.session.identity().tenant_id else {
            warn!("Profile save without a linked tenant record");
            self.session.notify_error("profile.userNotFound");
            return Err(ConsoleError::MissingIdentity);
        };

        let draft = {
            let mut form = self.form.lock();
            form.begin_save()
        };
        let Some(draft) = draft else {
            debug!("Save already in progress, ignoring submit");
            return Ok(Outcome::Ignored);
        };

        let result = self.session.client().update_profile(tenant_id, &draft).await;
        if !self.scope.is_mounted() {
            debug!("profile save finished after unmount, discarding");
            return Ok(Outcome::Discarded);
        }

        match result {
            Ok(tenant) => {
                let saved = tenant.to_profile(self.login_email());
                self.form.lock().finish_ok(&draft, saved.clone());
                info!(%tenant_id, updated_at = %tenant.updated_at, "Tenant profile updated");
                self.session.notify_success("profile.saveSuccess");
                Ok(Outcome::Applied(saved))
            }
            Err(e) => {
                self.form.lock().finish_err();
                error!(%tenant_id, "Failed to update tenant profile: {}", e);
                let key = match e {
                    ConsoleError::Api { .. } => "profile.saveError",
                    _ => "profile.genericError",
                };
                self.session.notify_error(key);
                Err(e)
            }
        }
    }
}
