//! WebServer-specific error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Failed to bind {address}: {source}")]
    BindFailed {
        address: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    ServerError(String),
}

pub type WebServerResult<T> = Result<T, WebServerError>;
