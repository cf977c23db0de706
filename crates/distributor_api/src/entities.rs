use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use base::requests::entities::StatusCode;

pub type OrderNumber = String;
pub type PageNumber = u32;
pub type RawJson = String;

/// Uniform result of every remote call. Unsuccessful HTTP statuses are data,
/// not errors: `success` tells the caller whether the code was acceptable.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct GatewayResult {
    pub success: bool,
    pub response_code: StatusCode,
    pub body: String,
}

/// Order lifecycle on the distributor side.
///
/// Allowed transitions are enforced by the remote API only:
/// created -> processing, cancelled;
/// processing -> awaiting_payment, awaiting_delivery, cancelled;
/// awaiting_payment -> awaiting_delivery, cancelled;
/// awaiting_delivery -> done, cancelled.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RemoteOrderStatus {
    Created,
    Processing,
    AwaitingPayment,
    AwaitingDelivery,
    Done,
    Cancelled,
}

impl RemoteOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteOrderStatus::Created => "created",
            RemoteOrderStatus::Processing => "processing",
            RemoteOrderStatus::AwaitingPayment => "awaiting_payment",
            RemoteOrderStatus::AwaitingDelivery => "awaiting_delivery",
            RemoteOrderStatus::Done => "done",
            RemoteOrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for RemoteOrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RemoteOrderStatus {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "created" => Ok(Self::Created),
            "processing" => Ok(Self::Processing),
            "awaiting_payment" => Ok(Self::AwaitingPayment),
            "awaiting_delivery" => Ok(Self::AwaitingDelivery),
            "done" => Ok(Self::Done),
            "cancelled" => Ok(Self::Cancelled),
            _ => anyhow::bail!("invalid remote order status: {}", input),
        }
    }
}

/// Body of a partial order update. Absent fields are left untouched remotely.
#[derive(Serialize, Debug, Default, Eq, PartialEq)]
pub struct OrderStatusUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RemoteOrderStatus>,
}

impl OrderStatusUpdate {
    pub fn new(shipping_date: Option<&str>, status: Option<RemoteOrderStatus>) -> Self {
        Self {
            shipping_date: shipping_date
                .filter(|date| !date.is_empty())
                .map(str::to_string),
            status,
        }
    }
}

/// One page of the remote order list as sent by the API.
#[derive(Deserialize, Debug)]
pub struct OrderListPage {
    pub results: Vec<Value>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(flatten)]
    pub envelope: Map<String, Value>,
}

impl OrderListPage {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("an error occurred on parsing an order list page")
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// All pages of one order list request folded into a single envelope without
/// pagination links. Envelope fields other than the links come from the
/// first page.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct MergedOrderList {
    #[serde(flatten)]
    pub envelope: Map<String, Value>,
    pub results: Vec<Value>,
}

impl MergedOrderList {
    pub fn from_first_page(page: OrderListPage) -> Self {
        Self {
            envelope: page.envelope,
            results: page.results,
        }
    }

    pub fn append(&mut self, page: OrderListPage) {
        self.results.extend(page.results);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("an error occurred on parsing a merged order list")
    }

    pub fn to_json(&self) -> Result<RawJson> {
        serde_json::to_string(self).context("an error occurred on serializing a merged order list")
    }
}
