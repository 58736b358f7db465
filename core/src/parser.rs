//! # Range Descriptor Parser
//!
//! Turns one range descriptor into a lazy run of IPv4 addresses.
//!
//! Two notations are understood:
//! * **Start-End**: `10.0.0.1-10.0.0.50`, both ends inclusive.
//! * **CIDR**: `192.168.1.0/24`, host addresses only. Host bits in the address are
//!   masked off, and a bare address is read as a `/32`.
//!
//! [`parse_range`] reports failures as a [`RangeError`]. [`expand`] is the boundary
//! used by the pipeline: it logs the failure and yields nothing, so one bad line
//! never stops the run.

use std::net::Ipv4Addr;

use ipgen_common::network::range::{Addresses, Ipv4Range};
use pnet::ipnetwork::{IpNetworkError, Ipv4Network};
use tracing::{debug, warn};

use crate::error::RangeError;

/// Parses a descriptor into the range it denotes.
///
/// Returns `Ok(None)` for a blank descriptor.
pub fn parse_range(descriptor: &str) -> Result<Option<Ipv4Range>, RangeError> {
    let descriptor = descriptor.trim();
    if descriptor.is_empty() {
        return Ok(None);
    }

    let range = match descriptor.split_once('-') {
        Some((start_str, end_str)) => parse_span(start_str, end_str)?,
        None => parse_cidr(descriptor)?,
    };

    Ok(Some(range))
}

/// Expands a descriptor, logging and skipping it when it is invalid.
pub fn expand(descriptor: &str) -> Addresses {
    match parse_range(descriptor) {
        Ok(Some(range)) => {
            debug!("{} covers {} addresses", descriptor.trim(), range.len());
            range.iter()
        }
        Ok(None) => Addresses::empty(),
        Err(e) => {
            warn!("Invalid range skipped: {} ({e})", descriptor.trim());
            Addresses::empty()
        }
    }
}

fn parse_span(start_str: &str, end_str: &str) -> Result<Ipv4Range, RangeError> {
    let start = parse_addr(start_str)?;
    let end = parse_addr(end_str)?;

    if end < start {
        return Err(RangeError::EndBeforeStart { start, end });
    }

    Ok(Ipv4Range::new(start, end))
}

fn parse_addr(s: &str) -> Result<Ipv4Addr, RangeError> {
    let s = s.trim();
    s.parse::<Ipv4Addr>()
        .map_err(|source| RangeError::InvalidAddress {
            input: s.to_string(),
            source,
        })
}

fn parse_cidr(s: &str) -> Result<Ipv4Range, RangeError> {
    // Prefix must be plain decimal, `u8::from_str` also takes a leading `+`
    if let Some((_, prefix)) = s.split_once('/') {
        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RangeError::InvalidNetwork {
                input: s.to_string(),
                source: IpNetworkError::InvalidPrefix,
            });
        }
    }

    let network = s
        .parse::<Ipv4Network>()
        .map_err(|source| RangeError::InvalidNetwork {
            input: s.to_string(),
            source,
        })?;

    Ok(Ipv4Range::hosts(network))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
