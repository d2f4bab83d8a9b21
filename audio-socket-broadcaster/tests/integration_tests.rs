use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::{Duration, Instant};

use audio_socket_broadcaster::{BroadcastServer, ServerConfig, ServerState, SoundEvent};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

const READ_TIMEOUT: Duration = Duration::from_secs(2);

fn local_config() -> ServerConfig {
    ServerConfig::with_host(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

async fn start_server() -> (BroadcastServer, SocketAddr) {
    let server = BroadcastServer::new(local_config());
    let addr = server.start(0).await.unwrap();
    (server, addr)
}

async fn connect(addr: SocketAddr) -> BufReader<TcpStream> {
    BufReader::new(TcpStream::connect(addr).await.unwrap())
}

/// Wait until the server has registered exactly `expected` clients
async fn wait_for_clients(server: &BroadcastServer, expected: usize) {
    let deadline = Instant::now() + READ_TIMEOUT;
    while server.client_count().await != expected {
        assert!(
            Instant::now() < deadline,
            "expected {} clients, have {}",
            expected,
            server.client_count().await
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

async fn read_line(reader: &mut BufReader<TcpStream>) -> String {
    let mut line = String::new();
    tokio::time::timeout(READ_TIMEOUT, reader.read_line(&mut line))
        .await
        .expect("timed out waiting for line")
        .unwrap();
    line
}

/// True if nothing more arrives within a short window
async fn nothing_pending(reader: &mut BufReader<TcpStream>) -> bool {
    let mut line = String::new();
    tokio::time::timeout(Duration::from_millis(100), reader.read_line(&mut line))
        .await
        .is_err()
}

#[tokio::test]
async fn test_broadcaster_lifecycle() {
    let (server, _addr) = start_server().await;
    assert_eq!(server.state().await, ServerState::Listening);

    server.stop().await;
    assert_eq!(server.state().await, ServerState::Stopped);

    // Second stop is harmless
    server.stop().await;
    assert_eq!(server.state().await, ServerState::Stopped);
}

#[tokio::test]
async fn test_stop_before_start() {
    let server = BroadcastServer::new(local_config());

    server.stop().await;
    server.stop().await;

    assert_eq!(server.state().await, ServerState::Stopped);
    server.broadcast("ignored").await;
    assert_eq!(server.client_count().await, 0);
}

#[tokio::test]
async fn test_each_client_receives_exactly_one_line() {
    let (server, addr) = start_server().await;

    let mut clients = Vec::new();
    for _ in 0..5 {
        clients.push(connect(addr).await);
    }
    wait_for_clients(&server, 5).await;

    server.broadcast(r#"{"hello":"world"}"#).await;

    for client in clients.iter_mut() {
        assert_eq!(read_line(client).await, "{\"hello\":\"world\"}\n");
        assert!(nothing_pending(client).await);
    }

    server.stop().await;
}

#[tokio::test]
async fn test_disconnected_client_is_pruned() {
    let (server, addr) = start_server().await;

    let mut keep = connect(addr).await;
    let gone = connect(addr).await;
    wait_for_clients(&server, 2).await;

    drop(gone);
    wait_for_clients(&server, 1).await;

    server.broadcast("after").await;
    assert_eq!(read_line(&mut keep).await, "after\n");
    assert_eq!(server.client_count().await, 1);

    server.stop().await;
}

#[tokio::test]
async fn test_restart_on_same_port() {
    let (server, addr) = start_server().await;

    // Leave a connection behind so the port has live state when stopping
    let mut client = connect(addr).await;
    wait_for_clients(&server, 1).await;
    server.stop().await;

    // Client sees EOF once the server is gone
    assert_eq!(read_line(&mut client).await, "");

    let restarted = BroadcastServer::new(local_config());
    let deadline = Instant::now() + READ_TIMEOUT;
    let rebound = loop {
        match restarted.start(addr.port()).await {
            Ok(bound) => break bound,
            Err(e) => {
                assert!(Instant::now() < deadline, "rebind failed: {}", e);
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
        }
    };
    assert_eq!(rebound.port(), addr.port());

    restarted.stop().await;
}

#[tokio::test]
async fn test_broadcast_to_empty_set_returns_immediately() {
    let (server, _addr) = start_server().await;

    let started = Instant::now();
    for _ in 0..1000 {
        server.broadcast("nobody listening").await;
    }
    assert!(started.elapsed() < Duration::from_secs(1));
    assert_eq!(server.client_count().await, 0);

    server.stop().await;
}

#[tokio::test]
async fn test_end_to_end_three_clients() {
    let (server, addr) = start_server().await;

    let mut client1 = connect(addr).await;
    let mut client2 = connect(addr).await;
    let mut client3 = connect(addr).await;
    wait_for_clients(&server, 3).await;

    let first = r#"{"type":"SOUND_EFFECT","soundId":7,"delay":0,"timestamp":1234}"#;
    server.broadcast(first).await;

    for client in [&mut client1, &mut client2, &mut client3] {
        assert_eq!(read_line(client).await, format!("{}\n", first));
    }

    drop(client2);
    wait_for_clients(&server, 2).await;

    let second = SoundEvent::SoundEffect {
        sound_id: 8,
        delay: 0,
        timestamp: 1234,
        source_name: None,
        source_animation: None,
    }
    .to_json()
    .unwrap();
    server.broadcast(&second).await;

    assert_eq!(read_line(&mut client1).await, format!("{}\n", second));
    assert_eq!(read_line(&mut client3).await, format!("{}\n", second));
    assert_eq!(server.client_count().await, 2);

    let parsed: SoundEvent = serde_json::from_str(&second).unwrap();
    assert_eq!(parsed.sound_id(), 8);

    server.stop().await;
}

#[tokio::test]
async fn test_concurrent_clients_receive_in_order() {
    const CLIENTS: usize = 50;
    const MESSAGES: usize = 50;

    let (server, addr) = start_server().await;

    let connects: Vec<_> = (0..CLIENTS)
        .map(|_| tokio::spawn(async move { connect(addr).await }))
        .collect();
    let mut clients = Vec::new();
    for handle in connects {
        clients.push(handle.await.unwrap());
    }
    wait_for_clients(&server, CLIENTS).await;

    let readers: Vec<_> = clients
        .into_iter()
        .map(|mut client| {
            tokio::spawn(async move {
                let mut received = Vec::with_capacity(MESSAGES);
                for _ in 0..MESSAGES {
                    received.push(read_line(&mut client).await);
                }
                received
            })
        })
        .collect();

    for i in 0..MESSAGES {
        server.broadcast(&format!(r#"{{"seq":{}}}"#, i)).await;
    }

    for reader in readers {
        let received = reader.await.unwrap();
        let expected: Vec<String> = (0..MESSAGES)
            .map(|i| format!("{{\"seq\":{}}}\n", i))
            .collect();
        assert_eq!(received, expected);
    }

    server.stop().await;
}

#[tokio::test]
async fn test_inbound_bytes_are_ignored() {
    let (server, addr) = start_server().await;

    let mut client = connect(addr).await;
    wait_for_clients(&server, 1).await;

    client.get_mut().write_all(b"ping\nnoise").await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(server.client_count().await, 1);
    server.broadcast("still here").await;
    assert_eq!(read_line(&mut client).await, "still here\n");

    server.stop().await;
}

#[tokio::test]
async fn test_half_closed_client_is_pruned() {
    let (server, addr) = start_server().await;

    let mut client = connect(addr).await;
    wait_for_clients(&server, 1).await;

    // Closing only our write side is enough for the monitor to see EOF
    client.get_mut().shutdown().await.unwrap();
    wait_for_clients(&server, 0).await;

    server.broadcast("unreachable").await;
    assert_eq!(read_line(&mut client).await, "");

    server.stop().await;
}

#[tokio::test]
async fn test_stop_disconnects_clients() {
    let (server, addr) = start_server().await;

    let mut client1 = connect(addr).await;
    let mut client2 = connect(addr).await;
    wait_for_clients(&server, 2).await;

    server.stop().await;

    assert_eq!(server.client_count().await, 0);
    assert_eq!(read_line(&mut client1).await, "");
    assert_eq!(read_line(&mut client2).await, "");
    assert!(TcpStream::connect(addr).await.is_err());
}

#[tokio::test]
async fn test_stalled_client_does_not_block_others() {
    let config = local_config().write_timeout(Duration::from_millis(100));
    let server = BroadcastServer::new(config);
    let addr = server.start(0).await.unwrap();

    // Never reads, so its socket buffers eventually fill
    let _stalled = TcpStream::connect(addr).await.unwrap();
    let mut active = connect(addr).await;
    wait_for_clients(&server, 2).await;

    let payload = "x".repeat(256 * 1024);
    let drain = tokio::spawn(async move {
        let mut line = String::new();
        loop {
            line.clear();
            match active.read_line(&mut line).await {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
        }
    });

    for _ in 0..400 {
        server.broadcast(&payload).await;
        if server.client_count().await == 1 {
            break;
        }
    }

    assert_eq!(server.client_count().await, 1);

    server.stop().await;
    drain.await.unwrap();
}
