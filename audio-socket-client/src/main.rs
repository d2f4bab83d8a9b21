//! Audio Socket Client
//!
//! Prints sound events streamed by the audio socket daemon.

use anyhow::Result;
use audio_socket_broadcaster::DEFAULT_PORT;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use audio_socket_client::{connect, format_event, Discovery, Incoming, DEFAULT_FOCUS};

#[derive(Debug, Parser)]
#[command(name = "audio-socket-client", version, about = "Print sound events from an audio socket")]
struct Args {
    /// Host to connect to
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Port to connect to
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Track every unique sound id and print a summary on exit
    #[arg(long)]
    discover: bool,

    /// Source listed first in the discovery summary
    #[arg(long, default_value = DEFAULT_FOCUS)]
    focus: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut discovery = args.discover.then(|| Discovery::new(args.focus.clone()));

    if discovery.is_some() {
        println!("DISCOVERY MODE: All unique sound IDs will be tracked.");
        println!("Press Ctrl+C to see the summary.\n");
    }

    println!("Connecting to audio socket at {}:{}...", args.host, args.port);
    let mut reader = connect(&args.host, args.port).await?;
    println!("Connected! Listening for sound events...\n");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                if discovery.is_none() {
                    println!("\nDisconnected.");
                }
                break;
            }
            incoming = reader.next() => match incoming? {
                Some(Incoming::Event(event)) => {
                    let line = match discovery.as_mut() {
                        Some(discovery) => discovery.record(&event),
                        None => format_event(&event),
                    };
                    println!("{}", line);
                }
                Some(Incoming::Invalid { line, error }) => {
                    warn!("Invalid JSON: {} ({})", error, line);
                }
                None => {
                    println!("Server disconnected.");
                    break;
                }
            }
        }
    }

    if let Some(discovery) = discovery {
        print!("{}", discovery.summary());
    }

    Ok(())
}
