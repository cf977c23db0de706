use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::Reader;
use serde::{Deserialize, Serialize};

use base::entities::{DateString, LoggerTarget, DEFAULT_LOGGER_TARGET};
use base::helpers::{to_date, to_date_string};
use distributor_api::entities::RawJson;

use crate::entities::{DocCode, OrderRecord};
use crate::stores::local_store::LocalStore;

pub const LAST_ORDER_DATE_FILE_NAME: &str = "last_order_date.txt";
pub const ORDER_STATUS_CSV_FILE_NAME: &str = "order_status.csv";
pub const UPLOAD_REQUEST_FILE_NAME: &str = "upload_request.json";
pub const INCOMING_ORDERS_FILE_NAME: &str = "incoming_orders.json";

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct OrderStatusRow {
    pub number: String,
    pub tradedoc_status: Option<String>,
    pub status: Option<String>,
    pub shipping_date: Option<String>,
    pub doc_code: Option<DocCode>,
}

impl From<OrderStatusRow> for OrderRecord {
    fn from(row: OrderStatusRow) -> Self {
        OrderRecord {
            number: row.number,
            tradedoc_status: row.tradedoc_status.filter(|status| !status.is_empty()),
            status: row.status.unwrap_or_default(),
            shipping_date: row.shipping_date.filter(|date| !date.is_empty()),
            doc_code: row.doc_code.unwrap_or_default(),
        }
    }
}

/// Store kept in a directory shared with the order-management system:
///
/// - `last_order_date.txt`: a single `YYYY-MM-DD` line;
/// - `order_status.csv`: one row per order with the columns of
///   [`OrderStatusRow`];
/// - `upload_request.json`: the prepared price list;
/// - `incoming_orders.json`: written with every processed order list.
#[derive(Debug)]
pub struct FileLocalStore {
    dir: PathBuf,
    target_logger: LoggerTarget,
}

impl FileLocalStore {
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();

        if !dir.is_dir() {
            anyhow::bail!("local store directory {} does not exist", dir.display());
        }

        Ok(Self {
            dir,
            target_logger: String::from(DEFAULT_LOGGER_TARGET),
        })
    }

    pub fn with_target_logger(mut self, target_logger: LoggerTarget) -> Self {
        self.target_logger = target_logger;
        self
    }

    pub fn close(self) -> Result<()> {
        log::debug!(
            target: self.target_logger.as_str(),
            "local store {} closed",
            self.dir.display()
        );
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

impl LocalStore for FileLocalStore {
    fn get_last_order_date(&self) -> Result<DateString> {
        let path = self.path(LAST_ORDER_DATE_FILE_NAME);
        let content = fs::read_to_string(&path)
            .context(format!("an error occurred on reading {}", path.display()))?;

        Ok(to_date_string(to_date(&content)?))
    }

    fn process_orders(&mut self, raw_order_list_json: &str) -> Result<()> {
        let path = self.path(INCOMING_ORDERS_FILE_NAME);

        fs::write(&path, raw_order_list_json)
            .context(format!("an error occurred on writing {}", path.display()))
    }

    fn get_upload_request(&self) -> Result<RawJson> {
        let path = self.path(UPLOAD_REQUEST_FILE_NAME);

        fs::read_to_string(&path).context(format!("an error occurred on reading {}", path.display()))
    }

    fn list_order_status_rows(&self) -> Result<Vec<OrderRecord>> {
        let path = self.path(ORDER_STATUS_CSV_FILE_NAME);

        let mut reader = Reader::from_path(&path)
            .context(format!("an error occurred on opening {}", path.display()))?;

        let mut rows = Vec::new();

        for row in reader.deserialize() {
            let row: OrderStatusRow = row.context("an error on deserializing an order status row")?;
            rows.push(OrderRecord::from(row));
        }

        Ok(rows)
    }
}
