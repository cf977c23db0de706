use crate::requests::api::SyncHttpRequest;
use crate::requests::entities::{HttpRequestData, HttpRequestMethod};
use anyhow::{bail, Result};
use serde_json::json;

const NOTIFIER_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

pub trait Notifier {
    fn send_message(&self, subject: &str, text: &str) -> Result<()>;
}

/// Posts the run report as `{"subject": .., "text": ..}` to a webhook.
pub struct WebhookNotifier<R: SyncHttpRequest> {
    url: String,
    request_api: R,
}

impl<R: SyncHttpRequest> WebhookNotifier<R> {
    pub fn new(url: String, request_api: R) -> WebhookNotifier<R> {
        WebhookNotifier { url, request_api }
    }
}

impl<R: SyncHttpRequest> Notifier for WebhookNotifier<R> {
    fn send_message(&self, subject: &str, text: &str) -> Result<()> {
        let req = HttpRequestData::new(HttpRequestMethod::Post, &self.url)
            .with_headers(&[(
                String::from("Content-Type"),
                String::from(NOTIFIER_CONTENT_TYPE),
            )])
            .with_json_body(json!({
                "subject": subject,
                "text": text,
            }));

        let res = self.request_api.call(req)?;

        if !(200..300).contains(&res.status) {
            bail!(
                "notification webhook {} responded with {} {}",
                self.url,
                res.status,
                res.reason
            );
        }

        Ok(())
    }
}
