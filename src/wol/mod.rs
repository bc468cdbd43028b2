//! Wake-On-LAN payload and addressing
//!
//! This module contains everything needed before a packet hits the wire:
//! - IPv4 network validation and broadcast resolution
//! - MAC address validation and parsing
//! - Magic packet construction

pub mod address;
pub mod mac;
pub mod packet;

#[cfg(test)]
mod tests;

pub use address::{is_valid_ipv4, resolve_broadcast, NetworkAddress};
pub use mac::{is_valid_mac, parse_mac, MacAddress};
pub use packet::{MagicPacket, MAGIC_PACKET_LEN};
