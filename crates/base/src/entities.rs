pub type LoggerTarget = String;

pub const TARGET_LOGGER_ENV: &str = "LOGGER_TARGET";
pub const DEFAULT_LOGGER_TARGET: &str = "sync";

/// Date in the `YYYY-MM-DD` form the store and the remote API exchange.
pub type DateString = String;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
