//! In-memory [`DataClient`] for controller tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use common::{RepairRow, RoomRow, SystemSettings, SystemStats, TenantDto, TenantProfile};
use parking_lot::Mutex;
use tokio::sync::Notify;
use uuid::Uuid;

use crate::client::DataClient;
use crate::config::ConsoleConfig;
use crate::error::{ConsoleError, Result};
use crate::i18n::Catalog;
use crate::session::{Identity, Session};

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Api(u16),
    Decode,
}

impl Failure {
    fn error(self) -> ConsoleError {
        match self {
            Failure::Api(status) => ConsoleError::Api {
                status,
                code: "FAKE_ERROR".to_string(),
                message: "injected failure".to_string(),
            },
            Failure::Decode => ConsoleError::Decode("injected failure".to_string()),
        }
    }
}

#[derive(Default)]
struct Tables {
    settings: Option<SystemSettings>,
    tenants: HashMap<Uuid, TenantDto>,
    rooms: Vec<RoomRow>,
    repairs: Vec<RepairRow>,
    stats: SystemStats,
}

#[derive(Default)]
pub struct FakeClient {
    tables: Mutex<Tables>,
    calls: Mutex<Vec<&'static str>>,
    failure: Mutex<Option<Failure>>,
    gate: Option<Arc<Notify>>,
    read_hold: Mutex<Option<Arc<Notify>>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes wait for a permit on the returned handle before completing.
    pub fn gated() -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let client = Self {
            gate: Some(gate.clone()),
            ..Self::default()
        };
        (client, gate)
    }

    pub fn with_settings(self, settings: SystemSettings) -> Self {
        self.tables.lock().settings = Some(settings);
        self
    }

    pub fn with_tenant(self, tenant: TenantDto) -> Self {
        self.tables.lock().tenants.insert(tenant.id, tenant);
        self
    }

    pub fn with_rooms(self, rooms: Vec<RoomRow>) -> Self {
        self.tables.lock().rooms = rooms;
        self
    }

    pub fn with_repairs(self, repairs: Vec<RepairRow>) -> Self {
        self.tables.lock().repairs = repairs;
        self
    }

    pub fn with_stats(self, stats: SystemStats) -> Self {
        self.tables.lock().stats = stats;
        self
    }

    pub fn set_rooms(&self, rooms: Vec<RoomRow>) {
        self.tables.lock().rooms = rooms;
    }

    /// The next room or repair listing waits for a permit on the returned
    /// handle before reading its table; later listings are not held.
    pub fn hold_next_read(&self) -> Arc<Notify> {
        let hold = Arc::new(Notify::new());
        *self.read_hold.lock() = Some(hold.clone());
        hold
    }

    pub fn fail_with(&self, failure: Option<Failure>) {
        *self.failure.lock() = failure;
    }

    pub fn calls(&self, name: &str) -> usize {
        self.calls.lock().iter().filter(|call| **call == name).count()
    }

    pub fn stored_settings(&self) -> Option<SystemSettings> {
        self.tables.lock().settings
    }

    pub fn tenant(&self, id: Uuid) -> Option<TenantDto> {
        self.tables.lock().tenants.get(&id).cloned()
    }

    fn enter(&self, name: &'static str) -> Result<()> {
        self.calls.lock().push(name);
        match *self.failure.lock() {
            Some(failure) => Err(failure.error()),
            None => Ok(()),
        }
    }

    async fn wait_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }

    async fn wait_read_hold(&self) {
        let hold = self.read_hold.lock().take();
        if let Some(hold) = hold {
            hold.notified().await;
        }
    }
}

#[async_trait]
impl DataClient for FakeClient {
    async fn load_settings(&self) -> Result<SystemSettings> {
        self.enter("load_settings")?;
        self.tables.lock().settings.ok_or(ConsoleError::Api {
            status: 404,
            code: "SETTINGS_NOT_FOUND".to_string(),
            message: "not saved yet".to_string(),
        })
    }

    async fn save_settings(&self, settings: &SystemSettings) -> Result<SystemSettings> {
        self.enter("save_settings")?;
        self.wait_gate().await;
        self.tables.lock().settings = Some(*settings);
        Ok(*settings)
    }

    async fn load_tenant(&self, tenant_id: Uuid) -> Result<TenantDto> {
        self.enter("load_tenant")?;
        self.tenant(tenant_id).ok_or(ConsoleError::Api {
            status: 404,
            code: "TENANT_NOT_FOUND".to_string(),
            message: "no such tenant".to_string(),
        })
    }

    async fn update_profile(&self, tenant_id: Uuid, profile: &TenantProfile) -> Result<TenantDto> {
        self.enter("update_profile")?;
        self.wait_gate().await;
        let mut tables = self.tables.lock();
        let tenant = tables
            .tenants
            .get_mut(&tenant_id)
            .ok_or(ConsoleError::Api {
                status: 404,
                code: "TENANT_NOT_FOUND".to_string(),
                message: "no such tenant".to_string(),
            })?;
        tenant.first_name = profile.first_name.clone();
        tenant.last_name = profile.last_name.clone();
        tenant.phone = profile.phone.clone();
        tenant.address = profile.address.clone();
        // Blank emails are stored as NULL, like the backend does
        let email = profile.email.trim();
        tenant.email = (!email.is_empty()).then(|| email.to_string());
        tenant.updated_at = Utc::now();
        Ok(tenant.clone())
    }

    async fn list_rooms(&self) -> Result<Vec<RoomRow>> {
        self.enter("list_rooms")?;
        self.wait_read_hold().await;
        Ok(self.tables.lock().rooms.clone())
    }

    async fn list_repairs(&self) -> Result<Vec<RepairRow>> {
        self.enter("list_repairs")?;
        self.wait_read_hold().await;
        Ok(self.tables.lock().repairs.clone())
    }

    async fn system_stats(&self) -> Result<SystemStats> {
        self.enter("system_stats")?;
        Ok(self.tables.lock().stats)
    }
}

/// Session over `client` with the English catalogue.
pub fn session_with(client: FakeClient, identity: Identity) -> (Arc<Session>, Arc<FakeClient>) {
    let client = Arc::new(client);
    let session = Session::new(
        ConsoleConfig::default(),
        client.clone(),
        Arc::new(Catalog::english()),
        identity,
    );
    (Arc::new(session), client)
}

pub fn tenant(first_name: &str, email: Option<&str>) -> TenantDto {
    let now = Utc::now();
    TenantDto {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: "Jaidee".to_string(),
        phone: "0812345678".to_string(),
        address: "99 Sukhumvit Rd".to_string(),
        email: email.map(str::to_string),
        room_id: Some(1),
        created_at: now,
        updated_at: now,
    }
}

pub fn room(id: i32, room_type: &str, status: &str) -> RoomRow {
    RoomRow {
        id,
        room_number: format!("A{}", 100 + id),
        room_type: room_type.to_string(),
        status: status.to_string(),
    }
}

pub fn repair(id: i32, repair_type: &str, status: &str) -> RepairRow {
    RepairRow {
        id,
        room_id: Some(1),
        repair_type: repair_type.to_string(),
        status: status.to_string(),
        description: None,
    }
}
