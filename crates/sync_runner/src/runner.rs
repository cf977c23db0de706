use chrono::NaiveDate;

use base::errors::{SyncError, SyncResult};
use base::requests::ureq::{UreqRequestApi, DEFAULT_CONNECTION_TTL};
use base::secrets::SecretProvider;
use distributor_api::{ApiData, DistributorGateway};
use order_sync::{FileLocalStore, RunSummary, SyncEngine};

use crate::settings::Settings;

/// One synchronization pass as configured by `settings`: connect to the local
/// store, run the engine, disconnect.
pub fn run_sync<P>(settings: &Settings, secrets: &P, today: NaiveDate) -> SyncResult<RunSummary>
where
    P: SecretProvider + ?Sized,
{
    let auth_token = secrets
        .secret(&settings.token_secret_name)
        .map_err(|err| SyncError::config_with_source("distributor api token is unavailable", err))?;

    let gateway = DistributorGateway::new(
        ApiData {
            url: settings.api_url.clone(),
            path: settings.api_path.clone(),
            auth_token,
        },
        settings.logger_target.clone(),
        UreqRequestApi::with_timeouts(DEFAULT_CONNECTION_TTL, settings.request_timeout),
    );

    let mut store = FileLocalStore::open(&settings.local_store_dir)
        .map_err(|err| SyncError::connection("local store connection exception", err))?
        .with_target_logger(settings.logger_target.clone());

    log::info!(
        target: settings.logger_target.as_str(),
        "connected to local store {}",
        store.dir().display()
    );

    let summary = SyncEngine::new(&gateway, &mut store, settings.logger_target.clone())
        .run(settings.operation, today)?;

    store
        .close()
        .map_err(|err| SyncError::connection("local store close connection exception", err))?;

    Ok(summary)
}
