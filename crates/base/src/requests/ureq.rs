use crate::requests::api::SyncHttpRequest;
use crate::requests::entities::{HttpRequestData, HttpResponse};
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::time::{Duration, Instant};
use ureq::{Agent, AgentBuilder, Error, Response};

pub const DEFAULT_CONNECTION_TTL: Duration = Duration::from_secs(30);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

struct PooledAgent {
    agent: Agent,
    created_at: Instant,
}

impl PooledAgent {
    fn new(request_timeout: Duration) -> Self {
        Self {
            agent: AgentBuilder::new().timeout(request_timeout).build(),
            created_at: Instant::now(),
        }
    }
}

/// Blocking HTTP client. Keep-alive connections are reused for at most
/// `connection_ttl`, after which the agent and its pool are replaced.
pub struct UreqRequestApi {
    pool: RefCell<PooledAgent>,
    connection_ttl: Duration,
    request_timeout: Duration,
}

impl Default for UreqRequestApi {
    fn default() -> Self {
        Self::with_timeouts(DEFAULT_CONNECTION_TTL, DEFAULT_REQUEST_TIMEOUT)
    }
}

impl UreqRequestApi {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_timeouts(connection_ttl: Duration, request_timeout: Duration) -> Self {
        Self {
            pool: RefCell::new(PooledAgent::new(request_timeout)),
            connection_ttl,
            request_timeout,
        }
    }

    fn agent(&self) -> Agent {
        let mut pool = self.pool.borrow_mut();

        if pool.created_at.elapsed() >= self.connection_ttl {
            log::debug!(
                "connection reuse window of {:?} has expired, dropping pooled connections",
                self.connection_ttl
            );
            *pool = PooledAgent::new(self.request_timeout);
        }

        pool.agent.clone()
    }
}

fn into_http_response(resp: Response) -> Result<HttpResponse> {
    let status = resp.status();
    let reason = resp.status_text().to_string();
    let body = resp
        .into_string()
        .context("an error occurred on reading the response body")?;

    Ok(HttpResponse {
        status,
        reason,
        body,
    })
}

impl SyncHttpRequest for UreqRequestApi {
    fn call(&self, req: HttpRequestData) -> Result<HttpResponse> {
        let mut request = self.agent().request(req.method.as_str(), &req.url);

        for (header, value) in &req.headers {
            request = request.set(header, value);
        }

        for (param, value) in &req.queries {
            request = request.query(param, value);
        }

        let res = match &req.body {
            Some(body) => request.send_string(body),
            None => request.call(),
        };

        match res {
            Ok(resp) => into_http_response(resp),
            Err(Error::Status(_, resp)) => into_http_response(resp),
            Err(e) => Err(e).context(format!("request {} {} failed", req.method, req.url)),
        }
    }
}
