use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;

use base::notifier::WebhookNotifier;
use base::requests::UreqRequestApi;
use base::secrets::EnvSecretProvider;
use sync_runner::logging::{init_console_logging, init_run_logging};
use sync_runner::report::send_run_report;
use sync_runner::{run_sync, Settings};

/// Synchronizes orders and price lists between the local store and the distributor API.
#[derive(Parser)]
#[command(name = "sync_runner", version)]
struct Cli {
    /// Settings env-file
    #[arg(short = 'S', long = "settings", value_name = "ENV FILE")]
    settings: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load(&cli.settings) {
        Ok(settings) => settings,
        Err(err) => {
            if init_console_logging().is_ok() {
                log::error!("{:?}", anyhow::Error::new(err));
            } else {
                eprintln!("{:?}", anyhow::Error::new(err));
            }
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_run_logging(&settings.run_log_file) {
        eprintln!("{:?}", err);
        return ExitCode::FAILURE;
    }

    let target = settings.logger_target.as_str();

    let succeeded = match run_sync(&settings, &EnvSecretProvider::new(), Local::now().date_naive()) {
        Ok(_) => true,
        Err(err) => {
            log::error!(target: target, "{:?}", anyhow::Error::new(err));
            false
        }
    };

    if let Some(notifier_settings) = &settings.notifier {
        let notifier = WebhookNotifier::new(
            notifier_settings.webhook_url.clone(),
            UreqRequestApi::new(),
        );

        send_run_report(
            &notifier,
            &notifier_settings.subject,
            succeeded,
            &settings.run_log_file,
            target,
        );
    }

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
