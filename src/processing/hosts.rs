//! Host capacity per subnet.

use crate::error::SubnetError;
use crate::models::MAX_LENGTH;
use serde::Serialize;

/// Longest prefix that still leaves room for a network, a broadcast and at least one host.
pub const MAX_NETWORK_BITS_FOR_USEFUL_HOSTS: u8 = 30;

/// Total and usable host counts for one subnet of a given prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostCapacity {
    pub total_hosts: u64,
    pub usable_hosts: u64,
    /// 32 - prefix
    pub unmasked_bits: u8,
}

/// Count the addresses in a subnet of length `prefix`.
///
/// Usable hosts reserve the network and broadcast addresses. /31 has no usable
/// hosts. /32 reports zero for both counts rather than a single host route.
///
/// # Examples
/// ```
/// use sncalc::processing::host_capacity;
/// let hosts = host_capacity(26).unwrap();
/// assert_eq!((hosts.total_hosts, hosts.usable_hosts), (64, 62));
/// ```
pub fn host_capacity(prefix: u8) -> Result<HostCapacity, SubnetError> {
    if prefix > MAX_LENGTH {
        return Err(SubnetError::Range(
            "Max network mask (bits) can be 32".to_string(),
        ));
    }
    let unmasked_bits = MAX_LENGTH - prefix;
    let total = 1u64 << unmasked_bits;

    let (total_hosts, usable_hosts) = if prefix <= MAX_NETWORK_BITS_FOR_USEFUL_HOSTS {
        (total, total - 2)
    } else if prefix < MAX_LENGTH {
        (total, 0)
    } else {
        (0, 0)
    };
    log::debug!("host_capacity(/{prefix}) total={total_hosts} usable={usable_hosts}");

    Ok(HostCapacity {
        total_hosts,
        usable_hosts,
        unmasked_bits,
    })
}
