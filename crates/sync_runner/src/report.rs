use std::fs;
use std::path::Path;

use base::notifier::Notifier;

pub const SUBJECT_SUFFIX_OK: &str = ": OK";
pub const SUBJECT_SUFFIX_ERROR: &str = ": ERROR";

pub fn report_subject(subject: &str, succeeded: bool) -> String {
    let suffix = if succeeded {
        SUBJECT_SUFFIX_OK
    } else {
        SUBJECT_SUFFIX_ERROR
    };

    format!("{}{}", subject, suffix)
}

/// Sends the run log through `notifier`. A failed notification is logged and
/// otherwise ignored: it must not change the outcome of the run.
pub fn send_run_report<N>(
    notifier: &N,
    subject: &str,
    succeeded: bool,
    run_log_file: &Path,
    target_logger: &str,
) where
    N: Notifier + ?Sized,
{
    let text = match fs::read_to_string(run_log_file) {
        Ok(text) => text,
        Err(err) => {
            log::error!(
                target: target_logger,
                "run log {} is unreadable: {}",
                run_log_file.display(),
                err
            );
            format!("run log {} is unavailable", run_log_file.display())
        }
    };

    if let Err(err) = notifier.send_message(&report_subject(subject, succeeded), &text) {
        log::error!(target: target_logger, "send run report exception: {:?}", err);
    }
}
