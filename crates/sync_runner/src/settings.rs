use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use base::entities::{LoggerTarget, DEFAULT_LOGGER_TARGET, TARGET_LOGGER_ENV};
use base::errors::{SyncError, SyncResult};
use base::requests::ureq::DEFAULT_REQUEST_TIMEOUT;
use distributor_api::gateway::DEFAULT_API_PATH;
use order_sync::RunMode;

pub const OPERATION_ENV: &str = "OPERATION";
pub const DISTRIBUTOR_API_URL_ENV: &str = "DISTRIBUTOR_API_URL";
pub const DISTRIBUTOR_API_PATH_ENV: &str = "DISTRIBUTOR_API_PATH";
pub const DISTRIBUTOR_API_TOKEN_ENV_ENV: &str = "DISTRIBUTOR_API_TOKEN_ENV";
pub const LOCAL_STORE_DIR_ENV: &str = "LOCAL_STORE_DIR";
pub const REQUEST_TIMEOUT_SECS_ENV: &str = "REQUEST_TIMEOUT_SECS";
pub const NOTIFIER_WEBHOOK_URL_ENV: &str = "NOTIFIER_WEBHOOK_URL";
pub const NOTIFIER_SUBJECT_ENV: &str = "NOTIFIER_SUBJECT";
pub const RUN_LOG_FILE_ENV: &str = "RUN_LOG_FILE";

pub const DEFAULT_TOKEN_SECRET_NAME: &str = "DISTRIBUTOR_API_TOKEN";
pub const DEFAULT_NOTIFIER_SUBJECT: &str = "Distributor sync";
pub const DEFAULT_RUN_LOG_FILE: &str = "logs/sync_runner.log";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NotifierSettings {
    pub webhook_url: String,
    pub subject: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Settings {
    pub operation: RunMode,
    pub api_url: String,
    pub api_path: String,
    /// Name of the secret that holds the API token, not the token itself.
    pub token_secret_name: String,
    pub local_store_dir: PathBuf,
    pub request_timeout: Duration,
    pub notifier: Option<NotifierSettings>,
    pub run_log_file: PathBuf,
    pub logger_target: LoggerTarget,
}

fn required<F>(var: &F, name: &str) -> SyncResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    var(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| SyncError::config(format!("setting {} is missing", name)))
}

fn optional<F>(var: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    var(name)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl Settings {
    /// Loads the settings file into the process environment (values already
    /// set in the environment win) and reads the settings from there.
    pub fn load(path: &Path) -> SyncResult<Self> {
        dotenv::from_path(path).map_err(|err| {
            SyncError::config_with_source(
                format!("settings file {} is unreadable", path.display()),
                err.into(),
            )
        })?;

        Self::from_vars(|name| dotenv::var(name).ok())
    }

    pub fn from_vars<F>(var: F) -> SyncResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let operation = RunMode::from_str(&required(&var, OPERATION_ENV)?)
            .map_err(|err| SyncError::config_with_source("unknown operation in settings", err))?;

        let request_timeout = match var(REQUEST_TIMEOUT_SECS_ENV) {
            Some(secs) => Duration::from_secs(secs.trim().parse::<u64>().map_err(|err| {
                SyncError::config_with_source(
                    format!("{} must be a number of seconds", REQUEST_TIMEOUT_SECS_ENV),
                    err.into(),
                )
            })?),
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        let notifier_subject = optional(&var, NOTIFIER_SUBJECT_ENV, DEFAULT_NOTIFIER_SUBJECT);

        let notifier = var(NOTIFIER_WEBHOOK_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .map(|webhook_url| NotifierSettings {
                webhook_url,
                subject: notifier_subject,
            });

        Ok(Self {
            operation,
            api_url: required(&var, DISTRIBUTOR_API_URL_ENV)?,
            api_path: optional(&var, DISTRIBUTOR_API_PATH_ENV, DEFAULT_API_PATH),
            token_secret_name: optional(
                &var,
                DISTRIBUTOR_API_TOKEN_ENV_ENV,
                DEFAULT_TOKEN_SECRET_NAME,
            ),
            local_store_dir: PathBuf::from(required(&var, LOCAL_STORE_DIR_ENV)?),
            request_timeout,
            notifier,
            run_log_file: PathBuf::from(optional(&var, RUN_LOG_FILE_ENV, DEFAULT_RUN_LOG_FILE)),
            logger_target: optional(&var, TARGET_LOGGER_ENV, DEFAULT_LOGGER_TARGET),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        move |name| vars.get(name).cloned()
    }

    #[test]
    #[allow(non_snake_case)]
    fn from_vars__minimal_settings__fills_defaults() {
        let settings = Settings::from_vars(vars(&[
            (OPERATION_ENV, "Download"),
            (DISTRIBUTOR_API_URL_ENV, "https://hills.local"),
            (LOCAL_STORE_DIR_ENV, "/var/lib/store"),
        ]))
        .unwrap();

        assert_eq!(settings.operation, RunMode::Download);
        assert_eq!(settings.api_path, DEFAULT_API_PATH);
        assert_eq!(settings.token_secret_name, DEFAULT_TOKEN_SECRET_NAME);
        assert_eq!(settings.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(settings.notifier, None);
        assert_eq!(settings.run_log_file, PathBuf::from(DEFAULT_RUN_LOG_FILE));
        assert_eq!(settings.logger_target, DEFAULT_LOGGER_TARGET);
    }

    #[test]
    #[allow(non_snake_case)]
    fn from_vars__webhook_configured__enables_notifier_with_subject() {
        let settings = Settings::from_vars(vars(&[
            (OPERATION_ENV, "upload"),
            (DISTRIBUTOR_API_URL_ENV, "https://hills.local"),
            (LOCAL_STORE_DIR_ENV, "/var/lib/store"),
            (NOTIFIER_WEBHOOK_URL_ENV, "https://hooks.local/sync"),
            (NOTIFIER_SUBJECT_ENV, "Hills"),
            (REQUEST_TIMEOUT_SECS_ENV, "5"),
        ]))
        .unwrap();

        assert_eq!(settings.operation, RunMode::Upload);
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
        assert_eq!(
            settings.notifier,
            Some(NotifierSettings {
                webhook_url: String::from("https://hooks.local/sync"),
                subject: String::from("Hills"),
            })
        );
    }

    #[test]
    #[allow(non_snake_case)]
    fn from_vars__unknown_operation__returns_config_error() {
        let err = Settings::from_vars(vars(&[
            (OPERATION_ENV, "sync"),
            (DISTRIBUTOR_API_URL_ENV, "https://hills.local"),
            (LOCAL_STORE_DIR_ENV, "/var/lib/store"),
        ]))
        .unwrap_err();

        assert!(matches!(err, SyncError::Config { .. }));
    }

    #[test]
    #[allow(non_snake_case)]
    fn from_vars__missing_api_url__returns_config_error() {
        let err = Settings::from_vars(vars(&[
            (OPERATION_ENV, "download"),
            (LOCAL_STORE_DIR_ENV, "/var/lib/store"),
        ]))
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "configuration error: setting DISTRIBUTOR_API_URL is missing"
        );
    }

    #[test]
    #[allow(non_snake_case)]
    fn load__missing_file__returns_config_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = Settings::load(&dir.path().join("absent.env")).unwrap_err();

        assert!(matches!(err, SyncError::Config { .. }));
    }
}
