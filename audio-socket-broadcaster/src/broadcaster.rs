use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tokio::io::AsyncReadExt;
use tokio::net::tcp::OwnedReadHalf;
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::sync::{watch, Mutex};
use tokio::task::{JoinHandle, JoinSet};

use crate::client::{ClientConnection, ClientId, ClientSet};
use crate::config::ServerConfig;
use crate::error::{BroadcasterError, Result};

/// Pause before retrying after a non-transient accept failure
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Consecutive non-transient accept failures after which the loop gives up
const MAX_ACCEPT_FAILURES: u32 = 5;

/// Externally visible lifecycle of a server instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Idle,
    Listening,
    Stopped,
}

enum Lifecycle {
    Idle,
    Listening(Running),
    Stopped,
}

/// Resources owned while listening
struct Running {
    local_addr: SocketAddr,
    shutdown_tx: watch::Sender<bool>,
    accept_task: JoinHandle<()>,
}

/// TCP server that fans newline-terminated messages out to every client
pub struct BroadcastServer {
    config: ServerConfig,
    clients: ClientSet,
    lifecycle: Mutex<Lifecycle>,
}

impl BroadcastServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            clients: ClientSet::new(),
            lifecycle: Mutex::new(Lifecycle::Idle),
        }
    }

    /// Bind `port` and start accepting clients in the background.
    ///
    /// Returns the bound address; port 0 selects an ephemeral port. A bind
    /// failure leaves the server idle.
    pub async fn start(&self, port: u16) -> Result<SocketAddr> {
        let mut lifecycle = self.lifecycle.lock().await;
        match &*lifecycle {
            Lifecycle::Idle => {}
            Lifecycle::Listening(running) if !running.accept_task.is_finished() => {
                return Err(BroadcasterError::AlreadyRunning);
            }
            Lifecycle::Listening(_) | Lifecycle::Stopped => return Err(BroadcasterError::Stopped),
        }

        let addr = self.config.socket_addr(port);
        let listener = bind_listener(addr, self.config.backlog).map_err(|source| {
            tracing::error!(addr = %addr, error = %source, "Failed to bind broadcast server");
            BroadcasterError::Bind { addr, source }
        })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| BroadcasterError::Bind { addr, source })?;

        tracing::info!(addr = %local_addr, "Broadcast server listening");

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let accept_loop = AcceptLoop {
            listener,
            clients: self.clients.clone(),
            tcp_nodelay: self.config.tcp_nodelay,
            shutdown_rx,
            next_id: 0,
        };
        let accept_task = tokio::spawn(accept_loop.run());

        *lifecycle = Lifecycle::Listening(Running {
            local_addr,
            shutdown_tx,
            accept_task,
        });

        Ok(local_addr)
    }

    /// Stop listening and disconnect every client.
    ///
    /// Returns once the listener, all monitors and all client sockets have
    /// been released. Safe to call repeatedly or before `start`.
    pub async fn stop(&self) {
        let previous = std::mem::replace(&mut *self.lifecycle.lock().await, Lifecycle::Stopped);

        if let Lifecycle::Listening(running) = previous {
            // Err only means the loop already exited on its own
            let _ = running.shutdown_tx.send(true);

            if let Err(e) = running.accept_task.await {
                if e.is_panic() {
                    tracing::error!(error = %e, "Accept loop panicked");
                }
            }

            tracing::info!(addr = %running.local_addr, "Broadcast server stopped");
        }

        close_all(self.clients.drain().await).await;
    }

    /// Send `message` plus a line terminator to every connected client.
    ///
    /// Clients whose write fails or exceeds the configured write timeout are
    /// dropped. Never fails from the caller's point of view.
    pub async fn broadcast(&self, message: &str) {
        if self.clients.is_empty().await {
            return;
        }

        let mut line = String::with_capacity(message.len() + 1);
        line.push_str(message);
        line.push('\n');

        let delivered = self
            .clients
            .broadcast(line.as_bytes(), self.config.write_timeout)
            .await;

        tracing::trace!(delivered, "Broadcast complete");
    }

    pub async fn state(&self) -> ServerState {
        match &*self.lifecycle.lock().await {
            Lifecycle::Idle => ServerState::Idle,
            Lifecycle::Listening(running) if running.accept_task.is_finished() => {
                ServerState::Stopped
            }
            Lifecycle::Listening(_) => ServerState::Listening,
            Lifecycle::Stopped => ServerState::Stopped,
        }
    }

    /// Bound address while listening
    pub async fn local_addr(&self) -> Option<SocketAddr> {
        match &*self.lifecycle.lock().await {
            Lifecycle::Listening(running) => Some(running.local_addr),
            _ => None,
        }
    }

    /// Get current client count
    pub async fn client_count(&self) -> usize {
        self.clients.len().await
    }

    pub async fn has_clients(&self) -> bool {
        !self.clients.is_empty().await
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

fn bind_listener(addr: SocketAddr, backlog: u32) -> io::Result<TcpListener> {
    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };

    // Lets a restarted server rebind while old connections sit in TIME_WAIT
    #[cfg(not(windows))]
    socket.set_reuseaddr(true)?;

    socket.bind(addr)?;
    socket.listen(backlog)
}

async fn close_all(clients: Vec<Arc<ClientConnection>>) {
    join_all(clients.iter().map(|client| client.close())).await;
}

/// Per-connection accept errors that say nothing about the listener itself
fn is_transient_accept_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AcceptErrorAction {
    /// Log and keep accepting; does not count as a failure
    Ignore,
    /// Sleep for `ACCEPT_BACKOFF`, then try again
    Backoff,
    /// Terminate the accept loop
    GiveUp,
}

/// Decide how to react to an accept error.
///
/// `failures` is the number of consecutive non-transient failures so far,
/// not counting `e`.
fn accept_error_action(e: &io::Error, failures: u32) -> AcceptErrorAction {
    if is_transient_accept_error(e) {
        AcceptErrorAction::Ignore
    } else if failures + 1 >= MAX_ACCEPT_FAILURES {
        AcceptErrorAction::GiveUp
    } else {
        AcceptErrorAction::Backoff
    }
}

struct AcceptLoop {
    listener: TcpListener,
    clients: ClientSet,
    tcp_nodelay: bool,
    shutdown_rx: watch::Receiver<bool>,
    next_id: ClientId,
}

impl AcceptLoop {
    async fn run(mut self) {
        let mut monitors = JoinSet::new();
        let mut failures = 0u32;
        let mut fatal = false;

        loop {
            tokio::select! {
                // Err here means the server was dropped without stop()
                _ = self.shutdown_rx.changed() => {
                    tracing::debug!("Accept loop shutting down");
                    break;
                }
                Some(_) = monitors.join_next(), if !monitors.is_empty() => {}
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer_addr)) => {
                        failures = 0;
                        self.register(stream, peer_addr, &mut monitors).await;
                    }
                    Err(e) => match accept_error_action(&e, failures) {
                        AcceptErrorAction::Ignore => {
                            tracing::warn!(error = %e, "Transient accept failure");
                        }
                        AcceptErrorAction::Backoff => {
                            failures += 1;
                            tracing::warn!(error = %e, attempt = failures, "Accept failed, backing off");
                            tokio::time::sleep(ACCEPT_BACKOFF).await;
                        }
                        AcceptErrorAction::GiveUp => {
                            let err = BroadcasterError::Accept(e);
                            tracing::error!(error = %err, "Broadcast server accept loop terminated");
                            fatal = true;
                            break;
                        }
                    }
                }
            }
        }

        self.finish(monitors, fatal).await;
    }

    /// Release the listener and every monitor. After a fatal error nobody
    /// else will clean up the clients, so close them here.
    async fn finish(self, mut monitors: JoinSet<()>, fatal: bool) {
        drop(self.listener);
        monitors.shutdown().await;

        if fatal {
            close_all(self.clients.drain().await).await;
        }
    }

    async fn register(
        &mut self,
        stream: TcpStream,
        peer_addr: SocketAddr,
        monitors: &mut JoinSet<()>,
    ) {
        if self.tcp_nodelay {
            if let Err(e) = stream.set_nodelay(true) {
                tracing::debug!(peer = %peer_addr, error = %e, "Failed to set TCP_NODELAY");
            }
        }

        self.next_id += 1;
        let id = self.next_id;

        let (reader, writer) = stream.into_split();
        let client = Arc::new(ClientConnection::new(id, peer_addr, writer));
        let total = self.clients.insert(Arc::clone(&client)).await;

        tracing::info!(client_id = id, peer = %peer_addr, total, "Client connected");

        monitors.spawn(monitor_disconnect(
            client,
            reader,
            self.clients.clone(),
            self.shutdown_rx.clone(),
        ));
    }
}

/// Wait for the client to go away, then release it.
///
/// Clients never send anything meaningful; inbound bytes are discarded. If
/// the connection is closed elsewhere (a failed write) the monitor exits and
/// drops the inbound half, releasing the socket.
async fn monitor_disconnect(
    client: Arc<ClientConnection>,
    mut reader: OwnedReadHalf,
    clients: ClientSet,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let id = client.id();
    let mut buf = [0u8; 512];

    loop {
        tokio::select! {
            // stop() owns cleanup from here
            _ = shutdown_rx.changed() => return,
            // Already evicted by whoever closed it
            _ = client.closed() => return,
            read = reader.read(&mut buf) => match read {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(client_id = id, error = %e, "Client read error");
                    break;
                }
            }
        }
    }

    if clients.evict(id).await {
        tracing::info!(client_id = id, peer = %client.peer_addr(), "Client disconnected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    fn local_config() -> ServerConfig {
        ServerConfig::with_host(IpAddr::V4(Ipv4Addr::LOCALHOST))
    }

    #[tokio::test]
    async fn test_new_server_is_idle() {
        let server = BroadcastServer::new(local_config());

        assert_eq!(server.state().await, ServerState::Idle);
        assert_eq!(server.client_count().await, 0);
        assert!(server.local_addr().await.is_none());
    }

    #[tokio::test]
    async fn test_start_and_stop_transitions() {
        let server = BroadcastServer::new(local_config());

        let addr = server.start(0).await.unwrap();
        assert_ne!(addr.port(), 0);
        assert_eq!(server.state().await, ServerState::Listening);
        assert_eq!(server.local_addr().await, Some(addr));

        server.stop().await;
        assert_eq!(server.state().await, ServerState::Stopped);
        assert!(server.local_addr().await.is_none());
    }

    #[tokio::test]
    async fn test_start_twice_rejected() {
        let server = BroadcastServer::new(local_config());
        server.start(0).await.unwrap();

        assert!(matches!(
            server.start(0).await,
            Err(BroadcasterError::AlreadyRunning)
        ));

        server.stop().await;
    }

    #[tokio::test]
    async fn test_start_after_stop_rejected() {
        let server = BroadcastServer::new(local_config());
        server.start(0).await.unwrap();
        server.stop().await;

        assert!(matches!(server.start(0).await, Err(BroadcasterError::Stopped)));
    }

    #[tokio::test]
    async fn test_bind_conflict_keeps_idle() {
        let first = BroadcastServer::new(local_config());
        let addr = first.start(0).await.unwrap();

        // SO_REUSEADDR never permits a second active listener on the port
        let second = BroadcastServer::new(local_config());
        let result = second.start(addr.port()).await;

        assert!(matches!(result, Err(BroadcasterError::Bind { .. })));
        assert_eq!(second.state().await, ServerState::Idle);

        first.stop().await;
    }

    #[tokio::test]
    async fn test_broadcast_without_clients_is_noop() {
        let server = BroadcastServer::new(local_config());
        server.broadcast("{}").await;
        assert_eq!(server.client_count().await, 0);
    }

    #[test]
    fn test_transient_accept_errors() {
        assert!(is_transient_accept_error(&io::Error::from(
            io::ErrorKind::ConnectionAborted
        )));
        assert!(!is_transient_accept_error(&io::Error::from(
            io::ErrorKind::PermissionDenied
        )));
    }

    #[test]
    fn test_accept_error_action_boundary() {
        let fatal = io::Error::from(io::ErrorKind::PermissionDenied);
        let transient = io::Error::from(io::ErrorKind::ConnectionReset);

        assert_eq!(accept_error_action(&fatal, 0), AcceptErrorAction::Backoff);
        assert_eq!(
            accept_error_action(&fatal, MAX_ACCEPT_FAILURES - 2),
            AcceptErrorAction::Backoff
        );
        // The fifth consecutive failure ends the loop
        assert_eq!(
            accept_error_action(&fatal, MAX_ACCEPT_FAILURES - 1),
            AcceptErrorAction::GiveUp
        );

        // Transient errors never count, however many failures came before
        assert_eq!(
            accept_error_action(&transient, MAX_ACCEPT_FAILURES - 1),
            AcceptErrorAction::Ignore
        );
    }

    #[test]
    fn test_backoff_count_before_giving_up() {
        let e = io::Error::from(io::ErrorKind::Other);
        let mut failures = 0;
        let mut backoffs = 0;

        loop {
            match accept_error_action(&e, failures) {
                AcceptErrorAction::Backoff => {
                    failures += 1;
                    backoffs += 1;
                }
                AcceptErrorAction::GiveUp => break,
                AcceptErrorAction::Ignore => unreachable!(),
            }
        }

        assert_eq!(backoffs, MAX_ACCEPT_FAILURES - 1);
    }

    #[tokio::test]
    async fn test_finished_accept_task_reports_stopped() {
        let server = BroadcastServer::new(local_config());
        let (shutdown_tx, _shutdown_rx) = watch::channel(false);
        let accept_task = tokio::spawn(async {});
        while !accept_task.is_finished() {
            tokio::task::yield_now().await;
        }

        *server.lifecycle.lock().await = Lifecycle::Listening(Running {
            local_addr: "127.0.0.1:1".parse().unwrap(),
            shutdown_tx,
            accept_task,
        });

        assert_eq!(server.state().await, ServerState::Stopped);
        assert!(matches!(server.start(0).await, Err(BroadcasterError::Stopped)));

        // stop() still cleans up an accept loop that already exited
        server.stop().await;
        assert_eq!(server.state().await, ServerState::Stopped);
    }

    #[tokio::test]
    async fn test_fatal_exit_closes_clients() {
        let listener = bind_listener("127.0.0.1:0".parse().unwrap(), 16).unwrap();
        let addr = listener.local_addr().unwrap();
        let mut remote = TcpStream::connect(addr).await.unwrap();
        let (accepted, peer_addr) = listener.accept().await.unwrap();
        let (_reader, writer) = accepted.into_split();
        let client = Arc::new(ClientConnection::new(1, peer_addr, writer));

        let clients = ClientSet::new();
        clients.insert(Arc::clone(&client)).await;

        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let accept_loop = AcceptLoop {
            listener,
            clients: clients.clone(),
            tcp_nodelay: false,
            shutdown_rx,
            next_id: 1,
        };
        accept_loop.finish(JoinSet::new(), true).await;

        assert!(clients.is_empty().await);
        assert!(client.is_closed().await);

        // The consumer sees the server hang up
        let mut buf = [0u8; 8];
        let n = tokio::time::timeout(Duration::from_secs(1), remote.read(&mut buf))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(n, 0);

        // The port is no longer accepting
        assert!(TcpStream::connect(addr).await.is_err());
    }
}
