use anyhow::{Context, Result};

use base::errors::SyncError;
use distributor_api::{DistributorApi, RemoteOrderStatus};

use crate::entities::{
    OrderRecord, DOC_CODE_CREATION_FAILED, LOCAL_STATUS_CREATED, TRADEDOC_NOT_EXISTS,
    TRADEDOC_REGISTERED,
};

/// Remote transitions a local order row calls for, in the order they must be
/// issued. Rows without a trade document status are not processed yet and
/// produce nothing.
pub fn plan_transitions(record: &OrderRecord) -> Vec<RemoteOrderStatus> {
    match record.tradedoc_status.as_deref() {
        None => Vec::new(),
        Some(TRADEDOC_REGISTERED) => vec![RemoteOrderStatus::Done],
        Some(TRADEDOC_NOT_EXISTS) => vec![RemoteOrderStatus::Cancelled],
        // both are sent for every created order, pending product sign-off
        Some(_) if record.status == LOCAL_STATUS_CREATED => vec![
            RemoteOrderStatus::Done,
            RemoteOrderStatus::AwaitingDelivery,
        ],
        Some(_) => Vec::new(),
    }
}

pub fn has_document_anomaly(record: &OrderRecord) -> bool {
    record.tradedoc_status.as_deref() == Some(TRADEDOC_NOT_EXISTS)
        && record.doc_code == DOC_CODE_CREATION_FAILED
}

/// Pushes the status of local order rows to the distributor.
pub struct StatusReconciler<'a, A>
where
    A: DistributorApi + ?Sized,
{
    api: &'a A,
    target_logger: &'a str,
}

impl<'a, A> StatusReconciler<'a, A>
where
    A: DistributorApi + ?Sized,
{
    pub fn new(api: &'a A, target_logger: &'a str) -> Self {
        Self { api, target_logger }
    }

    /// Issues the planned transitions one by one and returns them. Stops at the
    /// first transition the remote side does not accept.
    pub fn reconcile(&self, record: &OrderRecord) -> Result<Vec<RemoteOrderStatus>> {
        let transitions = plan_transitions(record);

        for status in transitions.iter() {
            self.update_status(record, *status)?;
        }

        if has_document_anomaly(record) {
            log::warn!(
                target: self.target_logger,
                "error creating trade document for order {}",
                record.number
            );
        }

        Ok(transitions)
    }

    fn update_status(&self, record: &OrderRecord, status: RemoteOrderStatus) -> Result<()> {
        let shipping_date = record.shipping_date.as_deref();

        log::info!(
            target: self.target_logger,
            "[newStatus, orderNumber, shippingDate] in [{}, {}, {}]",
            status,
            record.number,
            shipping_date.unwrap_or_default()
        );

        let res = self
            .api
            .patch_order_status(&record.number, shipping_date, Some(status))
            .context(format!(
                "an error occurred on changing the status of order {} to {}",
                record.number, status
            ))?;

        log::info!(target: self.target_logger, "{}", res.body);

        if !res.success {
            return Err(SyncError::remote_api(
                format!("changing the status of order {} to {} failed", record.number, status),
                res.response_code,
                res.body,
            )
            .into());
        }

        Ok(())
    }
}
