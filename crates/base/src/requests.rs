pub mod api;
pub mod entities;
pub mod ureq;

pub use api::SyncHttpRequest;
pub use entities::{HttpRequestData, HttpRequestMethod, HttpResponse, StatusCode};
pub use self::ureq::UreqRequestApi;
