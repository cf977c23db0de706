use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::Result;

pub type OrderNumber = String;
pub type DocCode = i64;

pub const TRADEDOC_REGISTERED: &str = "registed";
pub const TRADEDOC_NOT_EXISTS: &str = "not_exists";
pub const LOCAL_STATUS_CREATED: &str = "created";
pub const DOC_CODE_CREATION_FAILED: DocCode = -1;

/// Order row as the local store reports it after ingestion.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct OrderRecord {
    pub number: OrderNumber,
    /// Whether a trade document was registered against the order; `None` until
    /// the store has processed it.
    pub tradedoc_status: Option<String>,
    pub status: String,
    /// `YYYY-MM-DD`
    pub shipping_date: Option<String>,
    pub doc_code: DocCode,
}

impl OrderRecord {
    pub fn new(number: &str) -> Self {
        Self {
            number: number.to_string(),
            ..Default::default()
        }
    }

    pub fn with_tradedoc_status(mut self, tradedoc_status: &str) -> Self {
        self.tradedoc_status = Some(tradedoc_status.to_string());
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn with_shipping_date(mut self, shipping_date: &str) -> Self {
        self.shipping_date = Some(shipping_date.to_string());
        self
    }

    pub fn with_doc_code(mut self, doc_code: DocCode) -> Self {
        self.doc_code = doc_code;
        self
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RunMode {
    Download,
    Upload,
}

impl FromStr for RunMode {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "download" => Ok(Self::Download),
            "upload" => Ok(Self::Upload),
            _ => anyhow::bail!("unknown operation: {}", input),
        }
    }
}

impl Display for RunMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            RunMode::Download => write!(f, "download"),
            RunMode::Upload => write!(f, "upload"),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SyncState {
    Idle,
    Downloading,
    Reconciling,
    Uploading,
    Done,
    Failed,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RunSummary {
    pub mode: RunMode,
    pub orders_merged: usize,
    pub rows_inspected: usize,
    pub transitions_issued: usize,
}

impl RunSummary {
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            orders_merged: 0,
            rows_inspected: 0,
            transitions_issued: 0,
        }
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.mode {
            RunMode::Download => write!(
                f,
                "download: {} orders merged, {} order rows inspected, {} status transitions issued",
                self.orders_merged, self.rows_inspected, self.transitions_issued
            ),
            RunMode::Upload => write!(f, "upload: price list sent"),
        }
    }
}
