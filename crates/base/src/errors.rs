use thiserror::Error;

use crate::requests::entities::StatusCode;

pub type SyncResult<T> = Result<T, SyncError>;

/// Domain-level failure of a synchronization run. Every variant aborts the run.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Settings are missing, unreadable or invalid.
    #[error("configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The local store or the remote host could not be reached.
    #[error("connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    /// The remote API answered with a non-success status or an unreadable body.
    #[error("{message}: remote api responded with {code} {body}")]
    RemoteApi {
        message: String,
        code: StatusCode,
        body: String,
    },

    /// A local store operation failed.
    #[error("local store error: {message}")]
    LocalStore {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl SyncError {
    pub fn config(message: impl Into<String>) -> Self {
        SyncError::Config {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_with_source(message: impl Into<String>, source: anyhow::Error) -> Self {
        SyncError::Config {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn connection(message: impl Into<String>, source: anyhow::Error) -> Self {
        SyncError::Connection {
            message: message.into(),
            source,
        }
    }

    pub fn remote_api(message: impl Into<String>, code: StatusCode, body: impl Into<String>) -> Self {
        SyncError::RemoteApi {
            message: message.into(),
            code,
            body: body.into(),
        }
    }

    pub fn local_store(message: impl Into<String>, source: anyhow::Error) -> Self {
        SyncError::LocalStore {
            message: message.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    #[allow(non_snake_case)]
    fn local_store__wrapped_cause__is_exposed_as_source() {
        let err = SyncError::local_store(
            "call process_orders() failed",
            anyhow::anyhow!("disk is full"),
        );

        assert_eq!(err.to_string(), "local store error: call process_orders() failed");
        assert_eq!(err.source().unwrap().to_string(), "disk is full");
    }

    #[test]
    #[allow(non_snake_case)]
    fn remote_api__display__carries_code_and_body() {
        let err = SyncError::remote_api("get orders list failed", 503, "Service Unavailable");

        assert_eq!(
            err.to_string(),
            "get orders list failed: remote api responded with 503 Service Unavailable"
        );
    }
}
