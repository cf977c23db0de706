use anyhow::Result;

use crate::entities::{GatewayResult, PageNumber, RemoteOrderStatus};

/// Remote distributor API. Transport failures are errors; HTTP statuses are
/// reported through [`GatewayResult::success`].
pub trait DistributorApi {
    fn list_orders_page(
        &self,
        page: PageNumber,
        from_date: &str,
        to_date: &str,
    ) -> Result<GatewayResult>;

    fn patch_order_status(
        &self,
        order_number: &str,
        shipping_date: Option<&str>,
        status: Option<RemoteOrderStatus>,
    ) -> Result<GatewayResult>;

    fn post_price_list(&self, raw_json: &str) -> Result<GatewayResult>;
}

impl<T: DistributorApi + ?Sized> DistributorApi for &T {
    fn list_orders_page(
        &self,
        page: PageNumber,
        from_date: &str,
        to_date: &str,
    ) -> Result<GatewayResult> {
        (**self).list_orders_page(page, from_date, to_date)
    }

    fn patch_order_status(
        &self,
        order_number: &str,
        shipping_date: Option<&str>,
        status: Option<RemoteOrderStatus>,
    ) -> Result<GatewayResult> {
        (**self).patch_order_status(order_number, shipping_date, status)
    }

    fn post_price_list(&self, raw_json: &str) -> Result<GatewayResult> {
        (**self).post_price_list(raw_json)
    }
}
