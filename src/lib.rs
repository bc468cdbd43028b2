//! # wake-on-lan - A Wake-On-LAN Magic Packet Sender
//!
//! Validates a target network and MAC address, builds the standard 102-byte
//! magic packet (six `0xFF` bytes followed by the MAC address repeated sixteen
//! times) and broadcasts it once over UDP to the `.255` address of the network.
//!
//! ## Features
//!
//! - MAC addresses as `00:11:22:33:44:55`, `00-11-22-33-44-55`,
//!   `00.11.22.33.44.55` or `001122334455`
//! - Optional binding to a specific network interface (Linux)
//! - Best-effort reply capture after the send
//!
//! ## Example
//!
//! ```rust,no_run
//! use wake_on_lan::{MagicPacketSender, SenderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SenderConfig::new("192.168.1.0".parse()?, "00:11:22:33:44:55".parse()?);
//!     let sender = MagicPacketSender::new(config).await?;
//!     let delivery = sender.wake().await?;
//!     println!("Sent {} bytes to {}", delivery.bytes_sent, delivery.target);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod network;
pub mod sender;
pub mod wol;

pub use config::{Args, SenderConfig};
pub use error::WakeError;
pub use sender::{Delivery, MagicPacketSender, Reply, SendResult};
pub use wol::{MacAddress, MagicPacket, NetworkAddress};
