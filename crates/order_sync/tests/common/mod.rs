#![allow(dead_code)]

use anyhow::{bail, Result};
use distributor_api::entities::{GatewayResult, PageNumber};
use distributor_api::{DistributorApi, RemoteOrderStatus};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ApiCall {
    ListOrdersPage {
        page: PageNumber,
        from_date: String,
        to_date: String,
    },
    PatchOrderStatus {
        order_number: String,
        shipping_date: Option<String>,
        status: Option<RemoteOrderStatus>,
    },
    PostPriceList(String),
}

pub fn patch(order_number: &str, shipping_date: &str, status: RemoteOrderStatus) -> ApiCall {
    ApiCall::PatchOrderStatus {
        order_number: order_number.to_string(),
        shipping_date: Some(shipping_date.to_string()),
        status: Some(status),
    }
}

/// Distributor API double: scripted order list pages, status updates that
/// succeed unless listed as rejected, and a fixed price list response code.
pub struct FakeDistributorApi {
    pages: RefCell<VecDeque<GatewayResult>>,
    rejected_updates: Vec<(String, RemoteOrderStatus)>,
    unreachable: bool,
    price_list_response_code: u16,
    pub calls: RefCell<Vec<ApiCall>>,
}

impl Default for FakeDistributorApi {
    fn default() -> Self {
        Self {
            pages: Default::default(),
            rejected_updates: Vec::new(),
            unreachable: false,
            price_list_response_code: 201,
            calls: Default::default(),
        }
    }
}

impl FakeDistributorApi {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_pages(mut self, pages: Vec<GatewayResult>) -> Self {
        self.pages = RefCell::new(pages.into());
        self
    }

    pub fn rejecting_update(mut self, order_number: &str, status: RemoteOrderStatus) -> Self {
        self.rejected_updates
            .push((order_number.to_string(), status));
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn with_price_list_response_code(mut self, code: u16) -> Self {
        self.price_list_response_code = code;
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn status_updates(&self) -> Vec<ApiCall> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, ApiCall::PatchOrderStatus { .. }))
            .collect()
    }
}

impl DistributorApi for FakeDistributorApi {
    fn list_orders_page(
        &self,
        page: PageNumber,
        from_date: &str,
        to_date: &str,
    ) -> Result<GatewayResult> {
        self.calls.borrow_mut().push(ApiCall::ListOrdersPage {
            page,
            from_date: from_date.to_string(),
            to_date: to_date.to_string(),
        });

        if self.unreachable {
            bail!("connection refused");
        }

        match self.pages.borrow_mut().pop_front() {
            Some(res) => Ok(res),
            None => bail!("no more scripted pages"),
        }
    }

    fn patch_order_status(
        &self,
        order_number: &str,
        shipping_date: Option<&str>,
        status: Option<RemoteOrderStatus>,
    ) -> Result<GatewayResult> {
        self.calls.borrow_mut().push(ApiCall::PatchOrderStatus {
            order_number: order_number.to_string(),
            shipping_date: shipping_date.map(str::to_string),
            status,
        });

        if self.unreachable {
            bail!("connection refused");
        }

        let rejected = status.map_or(false, |status| {
            self.rejected_updates
                .iter()
                .any(|(number, rejected)| number == order_number && *rejected == status)
        });

        Ok(if rejected {
            GatewayResult {
                success: false,
                response_code: 400,
                body: String::from("Bad Request"),
            }
        } else {
            GatewayResult {
                success: true,
                response_code: 200,
                body: String::from("OK"),
            }
        })
    }

    fn post_price_list(&self, raw_json: &str) -> Result<GatewayResult> {
        self.calls
            .borrow_mut()
            .push(ApiCall::PostPriceList(raw_json.to_string()));

        if self.unreachable {
            bail!("connection refused");
        }

        let code = self.price_list_response_code;

        Ok(GatewayResult {
            success: code == 200 || code == 201,
            response_code: code,
            body: String::from(if code == 201 { "Created" } else { "Error" }),
        })
    }
}

pub fn order_page(page: PageNumber, order_numbers: &[&str], has_next: bool) -> GatewayResult {
    let results: Vec<Value> = order_numbers
        .iter()
        .map(|number| json!({"number": number, "status": "created"}))
        .collect();

    GatewayResult {
        success: true,
        response_code: 200,
        body: json!({
            "count": 3,
            "next": if has_next { json!(format!("https://hills.local/orders/?page={}", page + 1)) } else { Value::Null },
            "previous": Value::Null,
            "results": results,
        })
        .to_string(),
    }
}

pub fn failed_page(code: u16) -> GatewayResult {
    GatewayResult {
        success: false,
        response_code: code,
        body: String::from("{\"detail\": \"try later\"}"),
    }
}
