use super::mac::MacAddress;
use bytes::{BufMut as _, Bytes, BytesMut};

/// Length of the synchronization stream.
const SYNC_LEN: usize = 6;
/// Number of times the target MAC address is repeated.
const MAC_REPETITIONS: usize = 16;
/// Total payload length: 6 + 16 * 6.
pub const MAGIC_PACKET_LEN: usize = SYNC_LEN + MAC_REPETITIONS * 6;

const SYNC_STREAM: [u8; SYNC_LEN] = [0xFF; SYNC_LEN];

/// A Wake-On-LAN magic packet: six `0xFF` bytes followed by the target MAC
/// address repeated sixteen times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicPacket {
    mac: MacAddress,
    payload: Bytes,
}

impl MagicPacket {
    /// Constructs the magic packet for `mac`.
    pub fn new(mac: &MacAddress) -> Self {
        let mut payload = BytesMut::with_capacity(MAGIC_PACKET_LEN);
        payload.put_slice(&SYNC_STREAM);
        for _ in 0..MAC_REPETITIONS {
            payload.put_slice(mac.as_bytes());
        }
        debug_assert_eq!(payload.len(), MAGIC_PACKET_LEN);

        Self {
            mac: *mac,
            payload: payload.freeze(),
        }
    }

    pub fn mac(&self) -> &MacAddress {
        &self.mac
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.payload
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn into_bytes(self) -> Bytes {
        self.payload
    }
}
