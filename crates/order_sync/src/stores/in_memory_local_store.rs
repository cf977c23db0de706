use anyhow::{Context, Result};

use base::entities::DateString;
use distributor_api::entities::RawJson;

use crate::entities::OrderRecord;
use crate::stores::local_store::LocalStore;

#[derive(Default)]
pub struct InMemoryLocalStore {
    last_order_date: DateString,
    upload_request: Option<RawJson>,
    order_rows: Vec<OrderRecord>,
    processed_order_lists: Vec<RawJson>,
}

impl InMemoryLocalStore {
    pub fn new(last_order_date: &str) -> Self {
        Self {
            last_order_date: last_order_date.to_string(),
            ..Default::default()
        }
    }

    pub fn with_upload_request(mut self, raw_json: &str) -> Self {
        self.upload_request = Some(raw_json.to_string());
        self
    }

    pub fn with_order_rows(mut self, order_rows: Vec<OrderRecord>) -> Self {
        self.order_rows = order_rows;
        self
    }

    pub fn processed_order_lists(&self) -> &[RawJson] {
        &self.processed_order_lists
    }
}

impl LocalStore for InMemoryLocalStore {
    fn get_last_order_date(&self) -> Result<DateString> {
        Ok(self.last_order_date.clone())
    }

    fn process_orders(&mut self, raw_order_list_json: &str) -> Result<()> {
        self.processed_order_lists
            .push(raw_order_list_json.to_string());
        Ok(())
    }

    fn get_upload_request(&self) -> Result<RawJson> {
        self.upload_request
            .clone()
            .context("no price list has been prepared for upload")
    }

    fn list_order_status_rows(&self) -> Result<Vec<OrderRecord>> {
        Ok(self.order_rows.clone())
    }
}
