use anyhow::Result;

use base::errors::SyncError;

use crate::api::DistributorApi;
use crate::entities::{GatewayResult, MergedOrderList, OrderListPage, PageNumber};

pub const FIRST_PAGE: PageNumber = 1;

fn parse_page(page: PageNumber, res: &GatewayResult) -> Result<OrderListPage> {
    OrderListPage::from_json(&res.body).map_err(|err| {
        SyncError::remote_api(
            format!("page {} of the order list is not a valid envelope ({:#})", page, err),
            res.response_code,
            res.body.clone(),
        )
        .into()
    })
}

/// Fetches every page of the order list for the `[from_date, to_date]` window
/// and folds them into one envelope.
///
/// The first unsuccessful page is returned as is and no further pages are
/// requested, so a caller never sees a partial list. On success the result of
/// the last fetch is returned with its body replaced by the serialized
/// [`MergedOrderList`].
pub fn merge_order_pages<A>(
    api: &A,
    from_date: &str,
    to_date: &str,
    target_logger: &str,
) -> Result<GatewayResult>
where
    A: DistributorApi + ?Sized,
{
    let mut page = FIRST_PAGE;
    let mut res = api.list_orders_page(page, from_date, to_date)?;

    if !res.success {
        log::warn!(
            target: target_logger,
            "order list page {} failed with {}",
            page,
            res.response_code
        );
        return Ok(res);
    }

    let current = parse_page(page, &res)?;
    let mut has_next = current.has_next();
    let mut merged = MergedOrderList::from_first_page(current);

    while has_next {
        page += 1;
        res = api.list_orders_page(page, from_date, to_date)?;

        if !res.success {
            log::warn!(
                target: target_logger,
                "order list page {} failed with {}, {} orders already fetched are dropped",
                page,
                res.response_code,
                merged.len()
            );
            return Ok(res);
        }

        let current = parse_page(page, &res)?;
        has_next = current.has_next();
        merged.append(current);
    }

    log::debug!(
        target: target_logger,
        "merged {} orders from {} pages",
        merged.len(),
        page
    );

    res.body = merged.to_json().map_err(|err| {
        SyncError::remote_api(
            format!("merged order list cannot be serialized ({:#})", err),
            res.response_code,
            res.body.clone(),
        )
    })?;

    Ok(res)
}
