//! IPv4 network address validation and broadcast resolution.

use crate::error::WakeError;
use std::{fmt, net::Ipv4Addr, str::FromStr};

/// A validated dotted-quad IPv4 address naming the target network.
///
/// The address does not have to be a network or broadcast address; only its
/// first three octets are used when the broadcast target is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkAddress(Ipv4Addr);

impl NetworkAddress {
    pub fn ip(&self) -> Ipv4Addr {
        self.0
    }

    pub fn octets(&self) -> [u8; 4] {
        self.0.octets()
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for NetworkAddress {
    type Err = WakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_octets(s)
            .map(|o| Self(Ipv4Addr::from(o)))
            .ok_or_else(|| {
                WakeError::InvalidNetwork(format!(
                    "'{s}' is not a dotted-quad IPv4 address (e.g. 192.168.1.0)"
                ))
            })
    }
}

/// Returns true if `s` is exactly four dot-separated decimal octets in `[0, 255]`.
pub fn is_valid_ipv4(s: &str) -> bool {
    parse_octets(s).is_some()
}

/// Replaces the last octet of `network` with 255.
///
/// Assumes a /24 network; the supplied fourth octet is ignored.
pub fn resolve_broadcast(network: NetworkAddress) -> NetworkAddress {
    let [a, b, c, _] = network.octets();
    NetworkAddress(Ipv4Addr::new(a, b, c, 255))
}

// `Ipv4Addr::from_str` rejects leading zeros ("010"), which the usual octet
// pattern accepts, so the groups are checked by hand.
fn parse_octets(s: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut groups = s.split('.');

    for octet in octets.iter_mut() {
        let group = groups.next()?;
        if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = group.parse::<u8>().ok()?;
    }

    if groups.next().is_some() {
        return None;
    }
    Some(octets)
}
