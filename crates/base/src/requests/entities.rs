use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HttpRequestMethod {
    Get,
    Post,
    Patch,
}

impl Default for HttpRequestMethod {
    fn default() -> Self {
        Self::Get
    }
}

impl HttpRequestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpRequestMethod::Get => "GET",
            HttpRequestMethod::Post => "POST",
            HttpRequestMethod::Patch => "PATCH",
        }
    }
}

impl Display for HttpRequestMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub type Headers = Vec<(String, String)>;
pub type Queries = Vec<(String, String)>;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct HttpRequestData {
    pub method: HttpRequestMethod,
    pub url: String,
    pub headers: Headers,
    pub queries: Queries,
    pub body: Option<String>,
}

impl HttpRequestData {
    pub fn new(method: HttpRequestMethod, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            ..Default::default()
        }
    }

    pub fn with_headers(mut self, headers: &[(String, String)]) -> Self {
        self.headers.extend_from_slice(headers);
        self
    }

    pub fn with_query(mut self, param: &str, value: &str) -> Self {
        self.queries.push((param.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_json_body(self, body: serde_json::Value) -> Self {
        self.with_body(body.to_string())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn query(&self, param: &str) -> Option<&str> {
        self.queries
            .iter()
            .find(|(name, _)| name == param)
            .map(|(_, value)| value.as_str())
    }
}

pub type StatusCode = u16;

/// Status line and body of a completed exchange. Non-2xx codes are carried
/// here rather than turned into errors; only transport failures are errors.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub reason: String,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, reason: &str, body: &str) -> Self {
        Self {
            status,
            reason: reason.to_string(),
            body: body.to_string(),
        }
    }

    pub fn has_status_in(&self, codes: &[StatusCode]) -> bool {
        codes.contains(&self.status)
    }
}
