//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures and the pure derivations on them:
//! - [`octet`] - Octet codec and address validation
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`MaskInfo`] - Subnet and wildcard masks derived from a prefix length
//! - [`SubnetRecord`] and [`BoundaryOctet`] - Subnet table rows

mod ipv4;
mod mask;
mod octet;
mod subnet;

// Re-export public types
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, Ipv4, MAX_LENGTH};
pub use mask::{derive_mask, MaskInfo};
pub use octet::{
    binary8_to_decimal, binary_octets, decimal_to_binary8, render_address, validate_address,
    MAX_OCTET,
};
pub use subnet::{BoundaryOctet, HostRange, SubnetRecord};
