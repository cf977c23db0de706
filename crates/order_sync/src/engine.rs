use chrono::NaiveDate;

use base::entities::LoggerTarget;
use base::errors::{SyncError, SyncResult};
use base::helpers::tomorrow;
use distributor_api::{merge_order_pages, DistributorApi, MergedOrderList};

use crate::entities::{RunMode, RunSummary, SyncState};
use crate::reconciler::StatusReconciler;
use crate::stores::LocalStore;

/// Keeps the classification made below the engine. Failures an api
/// implementation leaves unclassified are reported as transport failures.
fn classify_remote_error(err: anyhow::Error, message: &str) -> SyncError {
    match err.downcast::<SyncError>() {
        Ok(err) => err,
        Err(err) => SyncError::connection(message, err),
    }
}

/// Runs one synchronization pass between the local store and the distributor.
///
/// The first failure moves the engine to [`SyncState::Failed`] and is returned
/// as is. Work already applied remotely is not rolled back.
pub struct SyncEngine<'a, A, S>
where
    A: DistributorApi + ?Sized,
    S: LocalStore + ?Sized,
{
    api: &'a A,
    store: &'a mut S,
    target_logger: LoggerTarget,
    state: SyncState,
}

impl<'a, A, S> SyncEngine<'a, A, S>
where
    A: DistributorApi + ?Sized,
    S: LocalStore + ?Sized,
{
    pub fn new(api: &'a A, store: &'a mut S, target_logger: LoggerTarget) -> Self {
        Self {
            api,
            store,
            target_logger,
            state: SyncState::Idle,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// `today` anchors the download window, which ends tomorrow.
    pub fn run(&mut self, mode: RunMode, today: NaiveDate) -> SyncResult<RunSummary> {
        log::info!(target: self.target_logger.as_str(), "starting {} run", mode);

        let res = match mode {
            RunMode::Download => self.download(today),
            RunMode::Upload => self.upload(),
        };

        match &res {
            Ok(summary) => {
                self.state = SyncState::Done;
                log::info!(target: self.target_logger.as_str(), "{}", summary);
            }
            Err(err) => {
                self.state = SyncState::Failed;
                log::error!(target: self.target_logger.as_str(), "{} run failed: {}", mode, err);
            }
        }

        res
    }

    fn download(&mut self, today: NaiveDate) -> SyncResult<RunSummary> {
        self.state = SyncState::Downloading;
        let mut summary = RunSummary::new(RunMode::Download);

        let from_date = self
            .store
            .get_last_order_date()
            .map_err(|err| SyncError::local_store("call get_last_order_date() failed", err))?;
        let to_date = tomorrow(today);

        log::info!(
            target: self.target_logger.as_str(),
            "requesting orders from {} to {}",
            from_date,
            to_date
        );

        let res = merge_order_pages(self.api, &from_date, &to_date, &self.target_logger)
            .map_err(|err| classify_remote_error(err, "get orders list failed"))?;

        log::info!(target: self.target_logger.as_str(), "{}", res.body);

        if !res.success {
            return Err(SyncError::remote_api(
                "get orders list failed",
                res.response_code,
                res.body,
            ));
        }

        summary.orders_merged = MergedOrderList::from_json(&res.body)
            .map_err(|err| {
                SyncError::remote_api(
                    format!("merged orders list is unreadable ({:#})", err),
                    res.response_code,
                    res.body.clone(),
                )
            })?
            .len();

        self.store
            .process_orders(&res.body)
            .map_err(|err| SyncError::local_store("call process_orders() failed", err))?;

        self.reconcile_statuses(&mut summary)?;

        Ok(summary)
    }

    fn reconcile_statuses(&mut self, summary: &mut RunSummary) -> SyncResult<()> {
        self.state = SyncState::Reconciling;

        let rows = self
            .store
            .list_order_status_rows()
            .map_err(|err| SyncError::local_store("select order status rows failed", err))?;

        let reconciler = StatusReconciler::new(self.api, &self.target_logger);

        for row in rows.iter() {
            summary.rows_inspected += 1;

            let transitions = reconciler
                .reconcile(row)
                .map_err(|err| classify_remote_error(err, "order status changing failed"))?;

            summary.transitions_issued += transitions.len();
        }

        Ok(())
    }

    fn upload(&mut self) -> SyncResult<RunSummary> {
        self.state = SyncState::Uploading;

        let price_list = self
            .store
            .get_upload_request()
            .map_err(|err| SyncError::local_store("call get_upload_request() failed", err))?;

        log::info!(target: self.target_logger.as_str(), "request = {}", price_list);

        let res = self
            .api
            .post_price_list(&price_list)
            .map_err(|err| classify_remote_error(err, "send price list failed"))?;

        log::info!(target: self.target_logger.as_str(), "response = {}", res.body);

        if !res.success {
            return Err(SyncError::remote_api(
                "send price list failed",
                res.response_code,
                res.body,
            ));
        }

        Ok(RunSummary::new(RunMode::Upload))
    }
}
