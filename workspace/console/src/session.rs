//! Per-login context handed to every controller.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::client::{DataClient, HttpDataClient};
use crate::config::ConsoleConfig;
use crate::error::Result;
use crate::i18n::{Catalog, Translator};
use crate::notify::Notifier;
use crate::storage::LocalStorage;

/// Who is logged in. Either part may be unknown: staff accounts have an
/// email but no tenant record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: Option<String>,
    pub tenant_id: Option<Uuid>,
}

impl Identity {
    pub fn new(email: Option<String>, tenant_id: Option<Uuid>) -> Self {
        Self { email, tenant_id }
    }
}

/// Replaces ambient globals: the data client, translator, notification
/// queue and local storage all live here and are owned by whoever builds
/// the session.
pub struct Session {
    config: ConsoleConfig,
    client: Arc<dyn DataClient>,
    translator: Arc<dyn Translator>,
    notifier: Notifier,
    storage: Mutex<LocalStorage>,
    identity: Identity,
}

impl Session {
    pub fn new(
        config: ConsoleConfig,
        client: Arc<dyn DataClient>,
        translator: Arc<dyn Translator>,
        identity: Identity,
    ) -> Self {
        Self {
            config,
            client,
            translator,
            notifier: Notifier::new(),
            storage: Mutex::new(LocalStorage::new()),
            identity,
        }
    }

    /// HTTP-backed session with the English catalogue. A bearer token is
    /// attached when `token` is given and also stored under the configured
    /// auth-token key.
    pub fn connect(config: ConsoleConfig, identity: Identity, token: Option<String>) -> Result<Self> {
        let mut client = HttpDataClient::new(&config)?;
        if let Some(token) = &token {
            client = client.with_token(token.clone());
        }

        let session = Self::new(
            config,
            Arc::new(client),
            Arc::new(Catalog::english()),
            identity,
        );
        if let Some(token) = token {
            session
                .storage
                .lock()
                .set(session.config.auth_token_key.clone(), token);
        }
        Ok(session)
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn client(&self) -> &dyn DataClient {
        self.client.as_ref()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn t(&self, key: &str) -> String {
        self.translator.translate(key)
    }

    pub fn notify_success(&self, key: &str) {
        self.notifier.show_success(self.t(key));
    }

    pub fn notify_error(&self, key: &str) {
        self.notifier.show_error(self.t(key));
    }

    /// Runs `f` with the session storage locked.
    pub fn with_storage<R>(&self, f: impl FnOnce(&mut LocalStorage) -> R) -> R {
        f(&mut self.storage.lock())
    }

    /// Wipes local storage except the auth token, so the user stays logged in.
    pub fn clear_cache(&self) -> usize {
        let removed = self
            .storage
            .lock()
            .clear_except(&[self.config.auth_token_key.as_str()]);
        info!(removed, "local cache cleared");
        self.notify_success("system.clearCacheSuccess");
        removed
    }
}
