use crate::requests::entities::{HttpRequestData, HttpResponse};
use anyhow::Result;

pub trait SyncHttpRequest {
    fn call(&self, req: HttpRequestData) -> Result<HttpResponse>;
}

impl<T: SyncHttpRequest + ?Sized> SyncHttpRequest for &T {
    fn call(&self, req: HttpRequestData) -> Result<HttpResponse> {
        (**self).call(req)
    }
}
