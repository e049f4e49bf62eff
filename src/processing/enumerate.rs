//! Subnet enumeration at the boundary octet.
//!
//! Lists every sibling subnet the prefix carves out of the boundary octet's
//! 0-255 span and flags the one holding the input address.

use crate::error::SubnetError;
use crate::models::{get_cidr_mask, BoundaryOctet, HostRange, SubnetRecord};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Ordered subnet table plus the figures it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetEnumeration {
    /// `None` for prefixes with no enumerable boundary (0, 31, 32).
    pub boundary: Option<BoundaryOctet>,
    /// Mask value at the boundary octet.
    pub subnet_number: u8,
    /// 256 - subnet_number. Zero when there is no boundary.
    pub block_size: u16,
    /// Prefix bits that fall inside the boundary octet.
    pub masked_bits: u8,
    pub number_of_subnets: u32,
    /// Ordered by increasing network address.
    pub records: Vec<SubnetRecord>,
    /// The record flagged current, if any.
    pub current: Option<SubnetRecord>,
}

impl SubnetEnumeration {
    fn empty() -> SubnetEnumeration {
        SubnetEnumeration {
            boundary: None,
            subnet_number: 0,
            block_size: 0,
            masked_bits: 0,
            number_of_subnets: 0,
            records: vec![],
            current: None,
        }
    }
}

/// Enumerate the subnets of `prefix` around `addr`.
///
/// The base subnet (boundary value 0) is emitted first, then one subnet per
/// block while the block start does not exceed the mask's boundary value.
/// `subnet_mask` must be the mask of `prefix`, otherwise [`SubnetError::Range`].
///
/// # Examples
/// ```
/// use sncalc::processing::enumerate_subnets;
/// use std::net::Ipv4Addr;
/// let table = enumerate_subnets(
///     Ipv4Addr::new(192, 168, 1, 0),
///     Ipv4Addr::new(255, 255, 255, 192),
///     26,
/// )
/// .unwrap();
/// assert_eq!(table.number_of_subnets, 4);
/// assert_eq!(table.records.len(), 4);
/// assert_eq!(table.current.unwrap().broadcast, Ipv4Addr::new(192, 168, 1, 63));
/// ```
pub fn enumerate_subnets(
    addr: Ipv4Addr,
    subnet_mask: Ipv4Addr,
    prefix: u8,
) -> Result<SubnetEnumeration, SubnetError> {
    log::info!("#Start enumerate_subnets({addr}, {subnet_mask}, /{prefix})");
    let expected_mask = get_cidr_mask(prefix)?;
    if u32::from(subnet_mask) != expected_mask {
        return Err(SubnetError::Range(format!(
            "Subnet mask {subnet_mask} does not match /{prefix} ({})",
            Ipv4Addr::from(expected_mask)
        )));
    }

    let boundary = match BoundaryOctet::for_prefix(prefix) {
        Some(boundary) => boundary,
        None => {
            log::debug!("/{prefix} has no boundary octet, subnet table is empty");
            return Ok(SubnetEnumeration::empty());
        }
    };

    let k = boundary.index();
    let subnet_number = subnet_mask.octets()[k];
    let block_size = 256 - u16::from(subnet_number);
    let masked_bits = prefix - boundary.base_bits();
    let number_of_subnets = 1u32 << masked_bits;
    let input_value = u16::from(addr.octets()[k]);
    log::debug!(
        "boundary={} subnet_number={subnet_number} block_size={block_size} subnets={number_of_subnets}",
        boundary.ordinal()
    );

    let starts = std::iter::once(0u16).chain(
        (block_size..=u16::from(subnet_number)).step_by(usize::from(block_size)),
    );

    let mut records = Vec::with_capacity(number_of_subnets as usize);
    for start in starts {
        let record = build_record(addr.octets(), k, start, block_size, input_value)?;
        log::trace!("subnet {record}");
        records.push(record);
    }

    let current = records.iter().find(|r| r.current).copied();
    if current.is_none() {
        log::warn!("No subnet in the table holds {addr}");
    }

    Ok(SubnetEnumeration {
        boundary: Some(boundary),
        subnet_number,
        block_size,
        masked_bits,
        number_of_subnets,
        records,
        current,
    })
}

/// One subnet starting at `start` in octet `k`. Octets before `k` are copied
/// from the input address; octets after it are 0 in the network address and
/// 255 in the broadcast address.
fn build_record(
    octets: [u8; 4],
    k: usize,
    start: u16,
    block_size: u16,
    input_value: u16,
) -> Result<SubnetRecord, SubnetError> {
    let end = start + block_size - 1;

    let mut network = [0u8; 4];
    let mut broadcast = [u8::MAX; 4];
    network[..k].copy_from_slice(&octets[..k]);
    broadcast[..k].copy_from_slice(&octets[..k]);
    // start <= end <= 255 while the block start stays within the mask value
    network[k] = start as u8;
    broadcast[k] = end as u8;

    let network = Ipv4Addr::from(network);
    let broadcast = Ipv4Addr::from(broadcast);
    let first = u32::from(network)
        .checked_add(1)
        .ok_or_else(|| SubnetError::Range(format!("No host after network {network}")))?;
    let last = u32::from(broadcast)
        .checked_sub(1)
        .ok_or_else(|| SubnetError::Range(format!("No host before broadcast {broadcast}")))?;
    let hosts = HostRange {
        start: Ipv4Addr::from(first),
        end: Ipv4Addr::from(last),
    };

    Ok(SubnetRecord {
        network,
        hosts,
        broadcast,
        current: (start..start + block_size).contains(&input_value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{broadcast_addr, cut_addr, derive_mask};

    fn enumerate(addr: Ipv4Addr, prefix: u8) -> SubnetEnumeration {
        let mask = derive_mask(prefix).unwrap();
        enumerate_subnets(addr, mask.subnet_mask, prefix).unwrap()
    }

    #[test]
    fn test_enumerate_26() {
        let table = enumerate(Ipv4Addr::new(192, 168, 1, 0), 26);
        assert_eq!(table.boundary, Some(BoundaryOctet::Fourth));
        assert_eq!(table.block_size, 64);
        assert_eq!(table.masked_bits, 2);
        assert_eq!(table.number_of_subnets, 4);

        let networks: Vec<String> = table.records.iter().map(|r| r.network.to_string()).collect();
        assert_eq!(
            networks,
            vec!["192.168.1.0", "192.168.1.64", "192.168.1.128", "192.168.1.192"]
        );

        let last = table.records[3];
        assert_eq!(last.hosts.to_string(), "192.168.1.193 - 192.168.1.254");
        assert_eq!(last.broadcast, Ipv4Addr::new(192, 168, 1, 255));

        let current = table.current.unwrap();
        assert_eq!(current.network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(current.hosts.to_string(), "192.168.1.1 - 192.168.1.62");
        assert_eq!(current.broadcast, Ipv4Addr::new(192, 168, 1, 63));
    }

    #[test]
    fn test_enumerate_24_single_subnet() {
        let table = enumerate(Ipv4Addr::new(10, 9, 8, 7), 24);
        assert_eq!(table.number_of_subnets, 1);
        assert_eq!(table.masked_bits, 0);
        assert_eq!(table.block_size, 256);
        assert_eq!(table.records.len(), 1);
        let only = table.records[0];
        assert!(only.current);
        assert_eq!(only.network, Ipv4Addr::new(10, 9, 8, 0));
        assert_eq!(only.hosts.to_string(), "10.9.8.1 - 10.9.8.254");
        assert_eq!(only.broadcast, Ipv4Addr::new(10, 9, 8, 255));
    }

    #[test]
    fn test_enumerate_third_octet() {
        let table = enumerate(Ipv4Addr::new(172, 16, 77, 5), 18);
        assert_eq!(table.boundary, Some(BoundaryOctet::Third));
        assert_eq!(table.block_size, 64);
        assert_eq!(table.records.len(), 4);

        let first = table.records[0];
        assert_eq!(first.network, Ipv4Addr::new(172, 16, 0, 0));
        assert_eq!(first.hosts.to_string(), "172.16.0.1 - 172.16.63.254");
        assert_eq!(first.broadcast, Ipv4Addr::new(172, 16, 63, 255));

        let current = table.current.unwrap();
        assert_eq!(current, table.records[1]);
        assert_eq!(current.network, Ipv4Addr::new(172, 16, 64, 0));
        assert_eq!(current.hosts.to_string(), "172.16.64.1 - 172.16.127.254");
        assert_eq!(current.broadcast, Ipv4Addr::new(172, 16, 127, 255));
    }

    #[test]
    fn test_enumerate_second_octet() {
        let table = enumerate(Ipv4Addr::new(10, 200, 3, 4), 10);
        assert_eq!(table.boundary, Some(BoundaryOctet::Second));
        assert_eq!(table.number_of_subnets, 4);
        let current = table.current.unwrap();
        assert_eq!(current.network, Ipv4Addr::new(10, 192, 0, 0));
        assert_eq!(current.hosts.to_string(), "10.192.0.1 - 10.255.255.254");
        assert_eq!(current.broadcast, Ipv4Addr::new(10, 255, 255, 255));
    }

    #[test]
    fn test_enumerate_first_octet() {
        let table = enumerate(Ipv4Addr::new(192, 168, 1, 0), 1);
        assert_eq!(table.boundary, Some(BoundaryOctet::First));
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0].network, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(
            table.records[0].hosts.to_string(),
            "0.0.0.1 - 127.255.255.254"
        );
        assert_eq!(table.records[0].broadcast, Ipv4Addr::new(127, 255, 255, 255));
        let current = table.current.unwrap();
        assert_eq!(current.network, Ipv4Addr::new(128, 0, 0, 0));
        assert_eq!(current.broadcast, Ipv4Addr::new(255, 255, 255, 255));
    }

    #[test]
    fn test_enumerate_degenerate_prefixes() {
        for p in [0, 31, 32] {
            let table = enumerate(Ipv4Addr::new(192, 168, 1, 1), p);
            assert_eq!(table.boundary, None, "/{p}");
            assert_eq!(table.number_of_subnets, 0);
            assert!(table.records.is_empty());
            assert!(table.current.is_none());
        }
    }

    #[test]
    fn test_enumerate_invalid_prefix() {
        let err = enumerate_subnets(Ipv4Addr::LOCALHOST, Ipv4Addr::BROADCAST, 33).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn test_enumerate_mismatched_mask() {
        // a /28 mask with a /26 prefix would build 16 records instead of 4
        let err = enumerate_subnets(
            Ipv4Addr::new(10, 0, 0, 5),
            Ipv4Addr::new(255, 255, 255, 240),
            26,
        )
        .unwrap_err();
        assert!(err.is_range());
        assert!(err.to_string().contains("does not match /26"), "{err}");

        // all-ones mask at /24 would wrap the broadcast address
        let err = enumerate_subnets(Ipv4Addr::BROADCAST, Ipv4Addr::BROADCAST, 24).unwrap_err();
        assert!(err.is_range());

        let ok = enumerate_subnets(
            Ipv4Addr::new(10, 0, 0, 5),
            Ipv4Addr::new(255, 255, 255, 240),
            28,
        )
        .unwrap();
        assert_eq!(ok.records.len(), 16);
    }

    #[test]
    fn test_table_partitions_boundary_octet() {
        let addrs = [
            Ipv4Addr::new(192, 168, 1, 0),
            Ipv4Addr::new(10, 123, 45, 67),
            Ipv4Addr::new(255, 255, 255, 255),
            Ipv4Addr::new(0, 0, 0, 0),
        ];
        for addr in addrs {
            for p in 1..=30u8 {
                let table = enumerate(addr, p);
                let k = table.boundary.unwrap().index();
                let records = &table.records;
                assert_eq!(records.len() as u32, table.number_of_subnets, "{addr}/{p}");

                assert_eq!(records[0].network.octets()[k], 0);
                assert_eq!(records.last().unwrap().broadcast.octets()[k], 255);
                for pair in records.windows(2) {
                    let step = u16::from(pair[1].network.octets()[k])
                        - u16::from(pair[0].network.octets()[k]);
                    assert_eq!(step, table.block_size, "{addr}/{p}");
                    assert_eq!(
                        u32::from(pair[0].broadcast) + 1,
                        u32::from(pair[1].network),
                        "gap or overlap in {addr}/{p}"
                    );
                }
                for r in records {
                    assert_eq!(u32::from(r.hosts.start), u32::from(r.network) + 1);
                    assert_eq!(u32::from(r.hosts.end), u32::from(r.broadcast) - 1);
                }
            }
        }
    }

    #[test]
    fn test_exactly_one_current_holding_input() {
        let addrs = [
            Ipv4Addr::new(192, 168, 1, 130),
            Ipv4Addr::new(172, 31, 200, 9),
            Ipv4Addr::new(8, 8, 4, 4),
        ];
        for addr in addrs {
            for p in 1..=30u8 {
                let table = enumerate(addr, p);
                let flagged: Vec<&SubnetRecord> =
                    table.records.iter().filter(|r| r.current).collect();
                assert_eq!(flagged.len(), 1, "{addr}/{p}");
                assert!(flagged[0].contains(addr), "{addr}/{p}");
                assert_eq!(flagged[0].network, cut_addr(addr, p).unwrap());
                assert_eq!(flagged[0].broadcast, broadcast_addr(addr, p).unwrap());
                assert_eq!(table.current, Some(*flagged[0]));
            }
        }
    }
}
