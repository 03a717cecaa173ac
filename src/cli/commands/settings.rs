use anyhow::{Context, Result};
use common::{SystemSettings, TariffField};
use console::{ConsoleConfig, Identity, Session, SettingsSynchronizer};
use std::sync::Arc;
use tracing::{info, warn};

fn connect(token: Option<String>) -> Result<Arc<Session>> {
    let session = Session::connect(ConsoleConfig::from_environment(), Identity::default(), token)?;
    Ok(Arc::new(session))
}

fn print_settings(settings: &SystemSettings) {
    for field in TariffField::ALL {
        println!("{:<16} {}", field.as_str(), settings.get(field));
    }
}

pub async fn show_settings(token: Option<String>) -> Result<()> {
    let sync = SettingsSynchronizer::new(connect(token)?);

    if let Err(e) = sync.load().await {
        if !e.is_not_found() {
            return Err(e).context("loading settings");
        }
        warn!("No settings stored yet, showing defaults");
    }

    print_settings(&sync.draft());
    Ok(())
}

pub async fn update_setting(field: &str, value: &str, token: Option<String>) -> Result<()> {
    let session = connect(token)?;
    let sync = SettingsSynchronizer::new(session.clone());

    // The other three tariffs must be the stored ones, not the defaults
    if let Err(e) = sync.load().await {
        if !e.is_not_found() {
            return Err(e).context("loading settings before update");
        }
    }

    let parsed = sync.update_draft_by_name(field, value)?;
    if !sync.is_dirty() {
        info!("{} is already {}, nothing to save", field, parsed);
        print_settings(&sync.baseline());
        return Ok(());
    }
    info!("Setting {} to {}", field, parsed);

    sync.save().await.context("saving settings")?;
    for toast in session.notifier().drain() {
        println!("{}", toast.message);
    }
    print_settings(&sync.baseline());
    Ok(())
}
