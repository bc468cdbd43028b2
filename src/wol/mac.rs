use crate::error::WakeError;
use std::{fmt, str::FromStr};

const MAC_LEN: usize = 6;
/// Length of the unseparated form, e.g. `001122334455`.
const BARE_LEN: usize = MAC_LEN * 2;
/// Length of the separated form, e.g. `00:11:22:33:44:55`.
const SEPARATED_LEN: usize = MAC_LEN * 3 - 1;
const SEPARATORS: [char; 3] = [':', '-', '.'];

/// A 48-bit hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; MAC_LEN]);

impl MacAddress {
    pub fn new(bytes: [u8; MAC_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MAC_LEN] {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, byte) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ":{byte:02x}")?;
            } else {
                write!(f, "{byte:02x}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for MacAddress {
    type Err = WakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mac(s)
    }
}

/// Returns true if `s` is a MAC address in one of the accepted encodings.
///
/// Accepted: twelve contiguous hex digits, or six two-digit hex groups joined
/// by a single separator kind (`:`, `-` or `.`).
pub fn is_valid_mac(s: &str) -> bool {
    parse_mac(s).is_ok()
}

/// Parses a MAC address such as `00:11:22:33:44:55`, `00-11-22-33-44-55`,
/// `00.11.22.33.44.55` or `001122334455`.
pub fn parse_mac(s: &str) -> Result<MacAddress, WakeError> {
    let groups = split_groups(s).ok_or_else(|| invalid(s))?;

    let mut bytes = [0u8; MAC_LEN];
    for (byte, group) in bytes.iter_mut().zip(groups) {
        if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid(s));
        }
        *byte = u8::from_str_radix(group, 16).map_err(|_| invalid(s))?;
    }
    Ok(MacAddress(bytes))
}

fn split_groups(s: &str) -> Option<[&str; MAC_LEN]> {
    // Byte slicing below assumes single-byte characters.
    if !s.is_ascii() {
        return None;
    }

    let mut groups = [""; MAC_LEN];
    match s.len() {
        BARE_LEN => {
            for (i, group) in groups.iter_mut().enumerate() {
                *group = &s[i * 2..i * 2 + 2];
            }
        }
        SEPARATED_LEN => {
            let separator = s[2..].chars().next()?;
            if !SEPARATORS.contains(&separator) {
                return None;
            }
            let mut parts = s.split(separator);
            for group in groups.iter_mut() {
                *group = parts.next()?;
            }
            if parts.next().is_some() {
                return None;
            }
        }
        _ => return None,
    }
    Some(groups)
}

fn invalid(s: &str) -> WakeError {
    WakeError::InvalidMac(format!(
        "'{s}' must be 12 hex digits or six 2-digit hex groups separated by ':', '-' or '.'"
    ))
}
