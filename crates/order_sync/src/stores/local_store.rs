use anyhow::Result;

use base::entities::DateString;
use distributor_api::entities::RawJson;

use crate::entities::OrderRecord;

/// Local order-management store the synchronization runs against.
pub trait LocalStore {
    /// Date of the most recent order already known locally, `YYYY-MM-DD`.
    fn get_last_order_date(&self) -> Result<DateString>;

    /// Ingests a merged order list as produced by the order list merge.
    fn process_orders(&mut self, raw_order_list_json: &str) -> Result<()>;

    /// Price list payload to send to the distributor, verbatim.
    fn get_upload_request(&self) -> Result<RawJson>;

    fn list_order_status_rows(&self) -> Result<Vec<OrderRecord>>;
}
