//! Broadcast server configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Default TCP port consumers connect to
pub const DEFAULT_PORT: u16 = 5150;

/// Default bound on a single client write
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(2);

/// Server configuration options
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface the listener binds to
    pub bind_host: IpAddr,

    /// Upper bound on writing one line to one client.
    /// A client that cannot absorb a line within this time is dropped.
    pub write_timeout: Duration,

    /// Enable TCP_NODELAY on accepted sockets
    pub tcp_nodelay: bool,

    /// Listen backlog passed to the OS
    pub backlog: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            write_timeout: DEFAULT_WRITE_TIMEOUT,
            tcp_nodelay: true, // events are tiny and latency-sensitive
            backlog: 1024,
        }
    }
}

impl ServerConfig {
    /// Create a config bound to a specific interface
    pub fn with_host(host: IpAddr) -> Self {
        Self {
            bind_host: host,
            ..Default::default()
        }
    }

    /// Set the bind interface
    pub fn bind_host(mut self, host: IpAddr) -> Self {
        self.bind_host = host;
        self
    }

    /// Set the per-client write bound
    pub fn write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// Toggle TCP_NODELAY
    pub fn tcp_nodelay(mut self, enabled: bool) -> Self {
        self.tcp_nodelay = enabled;
        self
    }

    /// Set the listen backlog
    pub fn backlog(mut self, backlog: u32) -> Self {
        self.backlog = backlog.max(1);
        self
    }

    /// Socket address for a given port on the configured interface
    pub fn socket_addr(&self, port: u16) -> SocketAddr {
        SocketAddr::new(self.bind_host, port)
    }
}
