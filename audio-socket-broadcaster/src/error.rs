use std::net::SocketAddr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BroadcasterError {
    #[error("Failed to bind listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Accept loop failed: {0}")]
    Accept(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Broadcaster already running")]
    AlreadyRunning,

    #[error("Broadcaster has been stopped; create a new instance to listen again")]
    Stopped,
}

pub type Result<T> = std::result::Result<T, BroadcasterError>;
