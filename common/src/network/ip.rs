//! # Network Parsing
//!
//! Accepts a bare address (`192.168.1.5`, `::1`) or a CIDR block
//! (`192.168.1.0/24`). Bare addresses become host networks with a
//! full-length prefix.

use std::net::IpAddr;
use std::str::FromStr;

use pnet::ipnetwork::{IpNetwork, IpNetworkError};
use thiserror::Error;

/// A network that parsed but is not the base address of its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{network} has host bits set, expected {base}/{prefix}")]
pub struct HostBitsError {
    pub network: IpNetwork,
    pub base: IpAddr,
    pub prefix: u8,
}

/// Parses an address or address/prefix pair.
pub fn parse_network(s: &str) -> Result<IpNetwork, IpNetworkError> {
    IpNetwork::from_str(s)
}

/// Checks that no bits are set to the right of the mask.
pub fn validate_network_base(network: &IpNetwork) -> Result<(), HostBitsError> {
    let base: IpAddr = network.network();
    if base == network.ip() {
        return Ok(());
    }

    Err(HostBitsError {
        network: *network,
        base,
        prefix: network.prefix(),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
