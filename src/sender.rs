//! Magic packet transmission
//!
//! This module drives a single Wake-On-LAN attempt:
//! - Broadcast socket setup
//! - One datagram send to the resolved broadcast address
//! - A short, best-effort wait for a reply

use crate::{
    config::SenderConfig,
    error::WakeError,
    network::SocketError,
    wol::{resolve_broadcast, MacAddress, MagicPacket},
};
use bytes::Bytes;
use std::{net::SocketAddr, time::Duration};
use tokio::{net::UdpSocket, time};

/// Outcome of one transmission attempt.
pub type SendResult = Result<Delivery, WakeError>;

/// A datagram received from the network after the magic packet went out.
#[derive(Debug, Clone)]
pub struct Reply {
    pub from: SocketAddr,
    pub payload: Bytes,
}

/// A successful send.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub mac: MacAddress,
    pub bytes_sent: usize,
    pub target: SocketAddr,
    pub reply: Option<Reply>,
}

pub struct MagicPacketSender {
    config: SenderConfig,
    socket: UdpSocket,
}

impl MagicPacketSender {
    pub async fn new(config: SenderConfig) -> Result<Self, WakeError> {
        let socket = crate::network::new_broadcast_socket(config.interface.as_deref())?;

        tracing::debug!(
            "Opened broadcast socket on {:?}",
            socket.local_addr().ok()
        );

        Ok(Self { config, socket })
    }

    /// The broadcast address and port the magic packet is sent to.
    pub fn target(&self) -> SocketAddr {
        SocketAddr::from((resolve_broadcast(self.config.network).ip(), self.config.port))
    }

    /// Builds the magic packet for the configured MAC address and broadcasts it.
    pub async fn wake(self) -> SendResult {
        let packet = MagicPacket::new(&self.config.mac);
        let target = self.target();
        self.send_to(&packet, target).await
    }

    /// Sends `packet` to `target` as a single datagram.
    ///
    /// Consumes the sender; the socket is closed when this returns, whether or
    /// not the send succeeded.
    pub async fn send_to(self, packet: &MagicPacket, target: SocketAddr) -> SendResult {
        tracing::debug!(
            "Magic packet for {} ({} bytes) -> {}",
            packet.mac(),
            packet.len(),
            target
        );

        let bytes_sent = self
            .socket
            .send_to(packet.as_bytes(), target)
            .await
            .map_err(|source| SocketError::Send { target, source })?;

        tracing::info!("Sent {} bytes to {}", bytes_sent, target);

        let reply = self.wait_for_reply(self.config.reply_timeout).await;

        Ok(Delivery {
            mac: *packet.mac(),
            bytes_sent,
            target,
            reply,
        })
    }

    /// Waits up to `duration` for one datagram. Timeouts and receive errors
    /// yield `None`; Wake-On-LAN has no acknowledgment to wait for.
    async fn wait_for_reply(&self, duration: Duration) -> Option<Reply> {
        if duration.is_zero() {
            return None;
        }

        let mut buf = [0u8; 1500];
        tracing::debug!("Waiting for reply with timeout: {:?}", duration);
        match time::timeout(duration, self.socket.recv_from(&mut buf)).await {
            Ok(Ok((len, from))) => {
                tracing::debug!("Received {} bytes from {}", len, from);
                Some(Reply {
                    from,
                    payload: Bytes::copy_from_slice(&buf[..len]),
                })
            }
            Ok(Err(e)) => {
                tracing::warn!("Socket receive error: {}", e);
                None
            }
            Err(_) => {
                tracing::debug!("No reply within {:?}", duration);
                None
            }
        }
    }
}
