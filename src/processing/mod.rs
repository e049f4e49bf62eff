//! Subnet calculations.
//!
//! This module contains the computations over the domain models:
//! - [`hosts`] - Host capacity per subnet
//! - [`enumerate`] - Sibling subnets at the boundary octet
//! - [`result_set`] - Aggregation of every fact for one input

mod enumerate;
mod hosts;
mod result_set;

// Re-export public functions
pub use enumerate::{enumerate_subnets, SubnetEnumeration};
pub use hosts::{host_capacity, HostCapacity, MAX_NETWORK_BITS_FOR_USEFUL_HOSTS};
pub use result_set::{calculate, ResultSet};
