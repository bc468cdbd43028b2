use crate::network::SocketError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WakeError {
    #[error("Invalid network address: {0}")]
    InvalidNetwork(String),

    #[error("Invalid MAC address: {0}")]
    InvalidMac(String),

    #[error("Failed to deliver magic packet")]
    Transport(#[from] SocketError),
}
