use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::{watch, Mutex, RwLock};

/// Per-server connection identifier
pub type ClientId = u64;

/// One accepted socket's outbound side.
///
/// The inbound half lives in the connection's disconnect monitor; the socket
/// is fully released once both halves are gone. `close` signals the monitor
/// so it drops the inbound half too.
pub struct ClientConnection {
    id: ClientId,
    peer_addr: SocketAddr,
    writer: Mutex<Option<OwnedWriteHalf>>,
    closed: watch::Sender<bool>,
}

impl ClientConnection {
    pub fn new(id: ClientId, peer_addr: SocketAddr, writer: OwnedWriteHalf) -> Self {
        Self {
            id,
            peer_addr,
            writer: Mutex::new(Some(writer)),
            closed: watch::Sender::new(false),
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    /// Write one complete line, giving up after `timeout`.
    ///
    /// The writer lock is held for the whole line so concurrent broadcasts
    /// never interleave bytes on the wire.
    pub async fn send_line(&self, line: &[u8], timeout: Duration) -> io::Result<()> {
        let write = async {
            let mut guard = self.writer.lock().await;
            let writer = guard
                .as_mut()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "client closed"))?;
            writer.write_all(line).await
        };

        match tokio::time::timeout(timeout, write).await {
            Ok(result) => result,
            Err(_) => Err(io::Error::new(
                io::ErrorKind::TimedOut,
                "client write timed out",
            )),
        }
    }

    /// Shut down the outbound half and wake anyone waiting in [`closed`].
    /// Returns false if it was already closed.
    ///
    /// [`closed`]: ClientConnection::closed
    pub async fn close(&self) -> bool {
        self.closed.send_replace(true);
        let writer = self.writer.lock().await.take();
        match writer {
            Some(mut writer) => {
                if let Err(e) = writer.shutdown().await {
                    tracing::debug!(client_id = self.id, error = %e, "Error shutting down client socket");
                }
                true
            }
            None => false,
        }
    }

    pub async fn is_closed(&self) -> bool {
        self.writer.lock().await.is_none()
    }

    /// Resolves once `close` has been called, immediately if it already was
    pub async fn closed(&self) {
        let mut rx = self.closed.subscribe();
        // The sender lives in `self`, so this cannot fail while we are borrowed
        let _ = rx.wait_for(|closed| *closed).await;
    }
}

type Snapshot = Arc<Vec<Arc<ClientConnection>>>;

/// Copy-on-write set of live connections.
///
/// Readers clone the current snapshot and iterate without holding the lock;
/// writers rebuild the vector. Broadcasts vastly outnumber connects and
/// disconnects.
#[derive(Clone, Default)]
pub struct ClientSet {
    clients: Arc<RwLock<Snapshot>>,
}

impl ClientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection, returning the new client count
    pub async fn insert(&self, client: Arc<ClientConnection>) -> usize {
        let mut clients = self.clients.write().await;
        let mut next = Vec::with_capacity(clients.len() + 1);
        next.extend(clients.iter().cloned());
        next.push(client);
        *clients = Arc::new(next);
        clients.len()
    }

    /// Remove a connection by id.
    ///
    /// Only the caller that gets `Some` back owns releasing the connection;
    /// removing an absent id is a no-op.
    pub async fn remove(&self, id: ClientId) -> Option<Arc<ClientConnection>> {
        let mut clients = self.clients.write().await;
        let idx = clients.iter().position(|c| c.id() == id)?;

        let mut next: Vec<_> = clients.iter().cloned().collect();
        let removed = next.remove(idx);
        *clients = Arc::new(next);
        Some(removed)
    }

    /// Remove a connection and close it if this call removed it
    pub async fn evict(&self, id: ClientId) -> bool {
        match self.remove(id).await {
            Some(client) => {
                client.close().await;
                true
            }
            None => false,
        }
    }

    /// Empty the set, handing every connection to the caller
    pub async fn drain(&self) -> Vec<Arc<ClientConnection>> {
        let mut clients = self.clients.write().await;
        let old = std::mem::replace(&mut *clients, Arc::new(Vec::new()));
        old.iter().cloned().collect()
    }

    pub async fn snapshot(&self) -> Snapshot {
        Arc::clone(&*self.clients.read().await)
    }

    pub async fn len(&self) -> usize {
        self.clients.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.clients.read().await.is_empty()
    }

    /// Write `line` to every client concurrently, evicting failures.
    ///
    /// Returns the number of clients the line was delivered to.
    pub async fn broadcast(&self, line: &[u8], timeout: Duration) -> usize {
        let clients = self.snapshot().await;
        if clients.is_empty() {
            return 0;
        }

        let results = join_all(clients.iter().map(|client| async move {
            let result = client.send_line(line, timeout).await;
            (client, result)
        }))
        .await;

        let mut delivered = 0;
        for (client, result) in results {
            match result {
                Ok(()) => delivered += 1,
                Err(e) => {
                    tracing::debug!(
                        client_id = client.id(),
                        peer = %client.peer_addr(),
                        error = %e,
                        "Dropping client after failed write"
                    );
                    self.evict(client.id()).await;
                }
            }
        }

        delivered
    }
}
