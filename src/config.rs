use crate::{
    error::WakeError,
    wol::{parse_mac, MacAddress, NetworkAddress},
};
use clap::{ArgAction, Parser};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 7;
pub const DEFAULT_WAIT_MS: u64 = 250;
pub const DEFAULT_REPLY_TIMEOUT: Duration = Duration::from_millis(DEFAULT_WAIT_MS);

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Send a Wake-On-LAN magic packet to the broadcast address of a /24 network",
    disable_version_flag = true
)]
pub struct Args {
    /// Network address of the target host (e.g., '192.168.1.0'); the last octet becomes 255
    pub network: Option<String>,

    /// MAC address of the target host (e.g., '00:11:22:33:44:55', '00-11-22-33-44-55',
    /// '00.11.22.33.44.55' or '001122334455')
    pub mac: Option<String>,

    /// UDP port to send the magic packet to
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Network interface to send from (e.g., 'eth0'); Linux only
    #[arg(short, long)]
    pub interface: Option<String>,

    /// Milliseconds to wait for a reply after sending (0 disables)
    #[arg(short, long, default_value_t = DEFAULT_WAIT_MS)]
    pub wait: u64,

    /// Print version
    #[allow(dead_code)]
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct SenderConfig {
    pub network: NetworkAddress,
    pub mac: MacAddress,
    pub port: u16,
    pub interface: Option<String>,
    pub reply_timeout: Duration,
}

impl SenderConfig {
    pub fn new(network: NetworkAddress, mac: MacAddress) -> Self {
        Self {
            network,
            mac,
            port: DEFAULT_PORT,
            interface: None,
            reply_timeout: DEFAULT_REPLY_TIMEOUT,
        }
    }

    /// Validates the positional arguments and applies the optional flags.
    pub fn from_args(args: &Args) -> Result<Self, WakeError> {
        let network = args
            .network
            .as_deref()
            .ok_or_else(|| WakeError::InvalidNetwork("missing NETWORK argument".to_string()))?
            .parse::<NetworkAddress>()?;

        let mac = args
            .mac
            .as_deref()
            .ok_or_else(|| WakeError::InvalidMac("missing MAC argument".to_string()))
            .and_then(parse_mac)?;

        Ok(Self {
            port: args.port,
            interface: args.interface.clone(),
            reply_timeout: Duration::from_millis(args.wait),
            ..Self::new(network, mac)
        })
    }
}
