//! # MAC Address Dialects
//!
//! `pnet`'s [`MacAddr`] only parses the colon form. Form input arrives in
//! whatever notation the user copied from their tooling, so parsing accepts
//! every dialect below and [`HardwareAddress`] remembers which one to print.

use std::fmt;
use std::hash::{Hash, Hasher};

use pnet::util::MacAddr;
use thiserror::Error;

/// Textual notations for a 48-bit hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MacDialect {
    /// `00:1b:77:49:54:fd`
    #[default]
    UnixCommon,
    /// `0:1b:77:49:54:fd`
    Unix,
    /// `00-1B-77-49-54-FD`
    Eui48,
    /// `001b.7749.54fd`
    Cisco,
    /// `001B774954FD`
    Bare,
    /// `001b77:4954fd`
    Pgsql,
}

impl MacDialect {
    pub fn format(&self, mac: &MacAddr) -> String {
        let octets: [u8; 6] = octets(mac);
        let value: u64 = to_u64(mac);
        match self {
            MacDialect::UnixCommon => join(&octets, ":", |o| format!("{o:02x}")),
            MacDialect::Unix => join(&octets, ":", |o| format!("{o:x}")),
            MacDialect::Eui48 => join(&octets, "-", |o| format!("{o:02X}")),
            MacDialect::Cisco => format!(
                "{:04x}.{:04x}.{:04x}",
                (value >> 32) & 0xffff,
                (value >> 16) & 0xffff,
                value & 0xffff
            ),
            MacDialect::Bare => format!("{value:012X}"),
            MacDialect::Pgsql => format!("{:06x}:{:06x}", value >> 24, value & 0xff_ffff),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacParseError {
    #[error("empty MAC address")]
    Empty,
    #[error("unrecognised MAC address format: {0}")]
    Format(String),
    #[error("invalid group '{group}' in MAC address {input}")]
    Group { group: String, input: String },
}

/// A MAC address bound to the dialect it is displayed in.
///
/// Equality and hashing only consider the address itself.
#[derive(Debug, Clone, Copy)]
pub struct HardwareAddress {
    addr: MacAddr,
    dialect: MacDialect,
}

impl HardwareAddress {
    pub fn new(addr: MacAddr, dialect: MacDialect) -> Self {
        Self { addr, dialect }
    }

    pub fn parse(s: &str, dialect: MacDialect) -> Result<Self, MacParseError> {
        parse_mac(s).map(|addr| Self::new(addr, dialect))
    }

    pub fn addr(&self) -> MacAddr {
        self.addr
    }

    pub fn dialect(&self) -> MacDialect {
        self.dialect
    }

    pub fn with_dialect(self, dialect: MacDialect) -> Self {
        Self { dialect, ..self }
    }
}

impl PartialEq for HardwareAddress {
    fn eq(&self, other: &Self) -> bool {
        self.addr == other.addr
    }
}

impl Eq for HardwareAddress {}

impl Hash for HardwareAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr.hash(state);
    }
}

impl fmt::Display for HardwareAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dialect.format(&self.addr))
    }
}

impl From<MacAddr> for HardwareAddress {
    fn from(addr: MacAddr) -> Self {
        Self::new(addr, MacDialect::default())
    }
}

/// Parses any supported dialect, case-insensitively.
///
/// Group widths follow the group count: six octets take 1-2 hex digits, three
/// groups 1-4, two halves 1-6. `:` and `-` work for every grouping, `.` only
/// for three groups. Bare input is 11 or 12 digits, left-padded.
pub fn parse_mac(s: &str) -> Result<MacAddr, MacParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(MacParseError::Empty);
    }

    let groups: Vec<&str> = s.split([':', '-', '.']).collect();
    let separators: Vec<char> = s.chars().filter(|c| matches!(c, ':' | '-' | '.')).collect();
    if separators.windows(2).any(|w| w[0] != w[1]) {
        return Err(MacParseError::Format(s.to_string()));
    }

    let width: usize = match (separators.first().copied(), groups.len()) {
        (None, 1) if matches!(s.len(), 11 | 12) => 12,
        (Some(':' | '-'), 6) => 2,
        (Some(':' | '-' | '.'), 3) => 4,
        (Some(':' | '-'), 2) => 6,
        _ => return Err(MacParseError::Format(s.to_string())),
    };

    let mut value: u64 = 0;
    for group in groups {
        value = (value << (width * 4)) | parse_group(group, width, s)?;
    }

    Ok(from_u64(value))
}

fn parse_group(group: &str, width: usize, input: &str) -> Result<u64, MacParseError> {
    let bad = || MacParseError::Group {
        group: group.to_string(),
        input: input.to_string(),
    };

    if group.is_empty() || group.len() > width || !group.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }
    u64::from_str_radix(group, 16).map_err(|_| bad())
}

fn octets(mac: &MacAddr) -> [u8; 6] {
    let MacAddr(a, b, c, d, e, f) = *mac;
    [a, b, c, d, e, f]
}

fn to_u64(mac: &MacAddr) -> u64 {
    octets(mac)
        .iter()
        .fold(0u64, |acc, &octet| (acc << 8) | u64::from(octet))
}

fn from_u64(value: u64) -> MacAddr {
    let b = value.to_be_bytes();
    MacAddr::new(b[2], b[3], b[4], b[5], b[6], b[7])
}

fn join(octets: &[u8; 6], sep: &str, fmt: impl Fn(u8) -> String) -> String {
    octets.iter().map(|&o| fmt(o)).collect::<Vec<_>>().join(sep)
}
