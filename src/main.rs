use clap::Parser;
use std::error::Error as StdError;
use tracing_subscriber::EnvFilter;
use wake_on_lan::{Args, Delivery, MagicPacketSender, SenderConfig, WakeError};

/// Flattens an error and its sources into one line.
fn report(err: &dyn StdError) -> String {
    let mut line = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        line.push_str(": ");
        line.push_str(&cause.to_string());
        source = cause.source();
    }
    line
}

async fn run(args: Args) -> Result<Delivery, WakeError> {
    let config = SenderConfig::from_args(&args)?;
    let sender = MagicPacketSender::new(config).await?;
    sender.wake().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // --help and --version exit inside `parse`.
    let args = Args::parse();

    match run(args).await {
        Ok(delivery) => {
            println!(
                "Sent {} bytes to {} for {}.",
                delivery.bytes_sent, delivery.target, delivery.mac
            );
            if let Some(reply) = delivery.reply {
                println!(
                    "Reply from {}: {}",
                    reply.from,
                    String::from_utf8_lossy(&reply.payload)
                );
            }
        }
        Err(e) => println!("Error: {}", report(&e)),
    }
}
