//! Line reader for the broadcaster's TCP feed

use anyhow::{Context, Result};
use audio_socket_broadcaster::SoundEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::net::TcpStream;
use tracing::debug;

/// One non-empty line from the server
#[derive(Debug)]
pub enum Incoming {
    Event(SoundEvent),
    Invalid {
        line: String,
        error: serde_json::Error,
    },
}

pub struct EventReader<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> EventReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    /// Next parsed line; `None` once the server closes the connection.
    ///
    /// Blank lines are skipped. A line that is not a sound event is returned
    /// as [`Incoming::Invalid`] so the caller can report it and carry on.
    pub async fn next(&mut self) -> Result<Option<Incoming>> {
        while let Some(line) = self
            .lines
            .next_line()
            .await
            .context("Failed to read from server")?
        {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let incoming = match serde_json::from_str::<SoundEvent>(line) {
                Ok(event) => Incoming::Event(event),
                Err(error) => Incoming::Invalid {
                    line: line.to_string(),
                    error,
                },
            };
            return Ok(Some(incoming));
        }
        Ok(None)
    }
}

/// Connect to a broadcaster
pub async fn connect(host: &str, port: u16) -> Result<EventReader<BufReader<TcpStream>>> {
    let stream = TcpStream::connect((host, port)).await.with_context(|| {
        format!(
            "Failed to connect to {}:{}. Is the audio socket daemon running on port {}?",
            host, port, port
        )
    })?;
    debug!("Connected to {}", stream.peer_addr()?);

    Ok(EventReader::new(BufReader::new(stream)))
}
