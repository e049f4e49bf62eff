//! IPv4 address with CIDR prefix.
//!
//! Provides the [`Ipv4`] input value (address plus prefix length) along with
//! u32 mask arithmetic used to check the mask and the octet-wise subnet table.

use super::octet::validate_address;
use crate::error::SubnetError;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

fn check_length(len: u8) -> Result<(), SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::Range(
            "Max network mask (bits) can be 32".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use sncalc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(26).unwrap(), 0xFFFFFFC0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, SubnetError> {
    check_length(len)?;
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    let mask = (all_bits >> right_len) << right_len;
    Ok(mask as u32)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address as given, not truncated to its network.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "192.168.1.0/26").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, SubnetError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr.split_once('/').ok_or_else(|| {
            SubnetError::Format(format!("Expected address/prefix, got '{addr_cidr}'"))
        })?;
        let addr = validate_address(addr)?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| SubnetError::Format(format!("Invalid prefix length '{mask}'")))?;
        Ipv4::from_parts(addr, mask)
    }

    /// Pair an already validated address with a prefix length.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<Ipv4, SubnetError> {
        check_length(mask)?;
        Ok(Ipv4 { addr, mask })
    }

    /// Lowest (network) address of the block containing `addr`.
    pub fn lo(&self) -> Result<Ipv4Addr, SubnetError> {
        cut_addr(self.addr, self.mask)
    }

    /// Highest (broadcast) address of the block containing `addr`.
    pub fn hi(&self) -> Result<Ipv4Addr, SubnetError> {
        broadcast_addr(self.addr, self.mask)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
