//! Subnet table rows and the boundary octet lookup.

use itertools::Itertools;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Octet position where the subnet/host split falls for a prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BoundaryOctet {
    First,
    Second,
    Third,
    Fourth,
}

impl BoundaryOctet {
    /// Select the boundary octet for `prefix`.
    ///
    /// Prefixes 0, 31 and 32 have no enumerable boundary and return `None`.
    pub fn for_prefix(prefix: u8) -> Option<BoundaryOctet> {
        match prefix {
            1..=7 => Some(BoundaryOctet::First),
            8..=15 => Some(BoundaryOctet::Second),
            16..=23 => Some(BoundaryOctet::Third),
            24..=30 => Some(BoundaryOctet::Fourth),
            _ => None,
        }
    }

    /// Prefix bits consumed by the octets before this one.
    pub fn base_bits(self) -> u8 {
        match self {
            BoundaryOctet::First => 0,
            BoundaryOctet::Second => 8,
            BoundaryOctet::Third => 16,
            BoundaryOctet::Fourth => 24,
        }
    }

    /// Zero-based position in `Ipv4Addr::octets()`.
    pub fn index(self) -> usize {
        (self.base_bits() / 8) as usize
    }

    pub fn ordinal(self) -> &'static str {
        match self {
            BoundaryOctet::First => "1st",
            BoundaryOctet::Second => "2nd",
            BoundaryOctet::Third => "3rd",
            BoundaryOctet::Fourth => "4th",
        }
    }

    /// Fixed network portion of `addr` with the free octets starred,
    /// e.g. `192.168.1.*`. `None` for the first octet, where nothing is fixed.
    pub fn network_template(self, addr: Ipv4Addr) -> Option<String> {
        let fixed = self.index();
        if fixed == 0 {
            return None;
        }
        let octets = addr.octets();
        let template = (0..4)
            .map(|i| {
                if i < fixed {
                    octets[i].to_string()
                } else {
                    "*".to_string()
                }
            })
            .join(".");
        Some(template)
    }
}

/// Inclusive usable host range of one subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostRange {
    pub start: Ipv4Addr,
    pub end: Ipv4Addr,
}

impl fmt::Display for HostRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// One row of the subnet table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubnetRecord {
    pub network: Ipv4Addr,
    pub hosts: HostRange,
    pub broadcast: Ipv4Addr,
    /// Set on the one subnet that holds the input address.
    pub current: bool,
}

impl SubnetRecord {
    /// True if `addr` lies within network..=broadcast.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        (self.network..=self.broadcast).contains(&addr)
    }

    /// Number of addresses spanned, network and broadcast included.
    pub fn size(&self) -> u64 {
        u64::from(u32::from(self.broadcast)) - u64::from(u32::from(self.network)) + 1
    }
}

impl fmt::Display for SubnetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.network, self.hosts, self.broadcast)?;
        if self.current {
            write!(f, " [current]")?;
        }
        Ok(())
    }
}
