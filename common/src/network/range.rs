//! # IPv4 Range Model
//!
//! Provides a continuous, inclusive range of IPv4 addresses and the lazy
//! iterator used to walk it.
//!
//! Ranges come from start-end descriptors like `10.0.0.1-10.0.0.50` or from the
//! host portion of a CIDR block like `192.168.1.0/24`. Walking a range never
//! allocates, so a `/8` costs the same memory as a `/30`.

use std::iter::FusedIterator;
use std::net::Ipv4Addr;
use std::ops::RangeInclusive;

use pnet::ipnetwork::Ipv4Network;

/// Represents a continuous range of IPv4 addresses, inclusive.
///
/// A range whose start is above its end holds no addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    /// Returns the usable host addresses of `network`.
    ///
    /// Network and broadcast addresses are stripped for blocks larger than two
    /// addresses. A `/31` keeps both of its addresses and a `/32` keeps its only one.
    /// Host bits set in the network's address are ignored.
    pub fn hosts(network: Ipv4Network) -> Self {
        let network_addr: Ipv4Addr = network.network();
        let broadcast_addr: Ipv4Addr = network.broadcast();

        if network.prefix() >= 31 {
            return Self::new(network_addr, broadcast_addr);
        }

        let start_u32: u32 = u32::from(network_addr) + 1;
        let end_u32: u32 = u32::from(broadcast_addr) - 1;
        Self::new(Ipv4Addr::from(start_u32), Ipv4Addr::from(end_u32))
    }

    /// Number of addresses in the range. A full `/0` holds 2^32, hence `u64`.
    pub fn len(&self) -> u64 {
        let start: u64 = u32::from(self.start_addr).into();
        let end: u64 = u32::from(self.end_addr).into();
        if start > end { 0 } else { end - start + 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.start_addr > self.end_addr
    }

    pub fn iter(&self) -> Addresses {
        Addresses {
            inner: u32::from(self.start_addr)..=u32::from(self.end_addr),
        }
    }
}

impl IntoIterator for Ipv4Range {
    type Item = Ipv4Addr;
    type IntoIter = Addresses;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy, ascending walk over the addresses of an [`Ipv4Range`].
#[derive(Debug, Clone)]
pub struct Addresses {
    inner: RangeInclusive<u32>,
}

impl Addresses {
    /// An iterator that yields nothing.
    pub fn empty() -> Self {
        Self { inner: 1..=0 }
    }
}

impl Default for Addresses {
    fn default() -> Self {
        Self::empty()
    }
}

impl Iterator for Addresses {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Ipv4Addr::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for Addresses {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
