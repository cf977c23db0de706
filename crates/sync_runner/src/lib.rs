pub mod logging;
pub mod report;
pub mod runner;
pub mod settings;

pub use crate::runner::run_sync;
pub use crate::settings::Settings;
