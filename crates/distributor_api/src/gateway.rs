use anyhow::{Context, Result};

use base::entities::LoggerTarget;
use base::errors::SyncError;
use base::requests::api::SyncHttpRequest;
use base::requests::entities::{Headers, HttpRequestData, HttpRequestMethod, HttpResponse, StatusCode};

use crate::api::DistributorApi;
use crate::entities::{GatewayResult, OrderStatusUpdate, PageNumber, RemoteOrderStatus};

pub const DEFAULT_API_PATH: &str = "/distributors_api/v3";

const ORDERS_ENDPOINT: &str = "/orders/";
const STOCK_RECORDS_ENDPOINT: &str = "/stock_records/";

const CONTENT_TYPE: &str = "application/json;charset=UTF-8";

const HTTP_OK: StatusCode = 200;
const HTTP_CREATED: StatusCode = 201;

const READ_SUCCESS_CODES: [StatusCode; 1] = [HTTP_OK];
const WRITE_SUCCESS_CODES: [StatusCode; 2] = [HTTP_OK, HTTP_CREATED];

pub type AuthToken = String;
pub type ApiUrl = String;

pub struct ApiData {
    pub url: ApiUrl,
    pub path: String,
    pub auth_token: AuthToken,
}

impl ApiData {
    pub fn new(url: ApiUrl, auth_token: AuthToken) -> Self {
        Self {
            url,
            path: String::from(DEFAULT_API_PATH),
            auth_token,
        }
    }

    fn endpoint(&self, endpoint: &str) -> String {
        format!(
            "{}{}{}",
            self.url.trim_end_matches('/'),
            self.path.trim_end_matches('/'),
            endpoint
        )
    }
}

/// HTTP implementation of [`DistributorApi`]. Authorization and content type
/// headers are fixed at construction and sent with every request.
pub struct DistributorGateway<R>
where
    R: SyncHttpRequest,
{
    api_data: ApiData,
    headers: Headers,
    target_logger: LoggerTarget,
    request_api: R,
}

impl<R> DistributorGateway<R>
where
    R: SyncHttpRequest,
{
    pub fn new(api_data: ApiData, target_logger: LoggerTarget, request_api: R) -> Self {
        let headers = vec![
            (String::from("Content-Type"), String::from(CONTENT_TYPE)),
            (
                String::from("Authorization"),
                format!("Token {}", api_data.auth_token),
            ),
        ];

        Self {
            api_data,
            headers,
            target_logger,
            request_api,
        }
    }

    fn send(&self, req: HttpRequestData) -> Result<HttpResponse> {
        let method = req.method;
        let url = req.url.clone();

        log::debug!(target: self.target_logger.as_str(), "{} {} {:?}", method, url, req.queries);

        let res = self.request_api.call(req).map_err(|err| {
            SyncError::connection(format!("an error occurred on requesting {} {}", method, url), err)
        })?;

        log::info!(
            target: self.target_logger.as_str(),
            "{} {} -> {} {}",
            method,
            url,
            res.status,
            res.reason
        );

        Ok(res)
    }
}

impl<R> DistributorApi for DistributorGateway<R>
where
    R: SyncHttpRequest,
{
    fn list_orders_page(
        &self,
        page: PageNumber,
        from_date: &str,
        to_date: &str,
    ) -> Result<GatewayResult> {
        let req = HttpRequestData::new(
            HttpRequestMethod::Get,
            &self.api_data.endpoint(ORDERS_ENDPOINT),
        )
        .with_headers(&self.headers)
        .with_query("page", &page.to_string())
        .with_query("later_than", from_date)
        .with_query("earlier_than", to_date);

        let res = self.send(req)?;

        Ok(GatewayResult {
            success: res.has_status_in(&READ_SUCCESS_CODES),
            response_code: res.status,
            body: res.body,
        })
    }

    fn patch_order_status(
        &self,
        order_number: &str,
        shipping_date: Option<&str>,
        status: Option<RemoteOrderStatus>,
    ) -> Result<GatewayResult> {
        let update = OrderStatusUpdate::new(shipping_date, status);
        let body = serde_json::to_string(&update)
            .context("an error occurred on serializing an order status update")?;

        let req = HttpRequestData::new(
            HttpRequestMethod::Patch,
            &self
                .api_data
                .endpoint(&format!("{}{}/", ORDERS_ENDPOINT, order_number)),
        )
        .with_headers(&self.headers)
        .with_body(body);

        let res = self.send(req)?;

        // the api answers an update with an empty body, the status line is all there is
        Ok(GatewayResult {
            success: res.has_status_in(&WRITE_SUCCESS_CODES),
            response_code: res.status,
            body: res.reason,
        })
    }

    fn post_price_list(&self, raw_json: &str) -> Result<GatewayResult> {
        let req = HttpRequestData::new(
            HttpRequestMethod::Post,
            &self.api_data.endpoint(STOCK_RECORDS_ENDPOINT),
        )
        .with_headers(&self.headers)
        .with_body(raw_json.to_string());

        let res = self.send(req)?;

        Ok(GatewayResult {
            success: res.has_status_in(&WRITE_SUCCESS_CODES),
            response_code: res.status,
            body: res.reason,
        })
    }
}
