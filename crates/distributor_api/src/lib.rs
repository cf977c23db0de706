pub mod api;
pub mod entities;
pub mod gateway;
pub mod page_merger;

pub use crate::api::DistributorApi;
pub use crate::entities::{GatewayResult, MergedOrderList, RemoteOrderStatus};
pub use crate::gateway::{ApiData, DistributorGateway};
pub use crate::page_merger::merge_order_pages;
