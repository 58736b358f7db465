use std::io;
use std::net::{AddrParseError, Ipv4Addr};
use std::path::PathBuf;

use pnet::ipnetwork::IpNetworkError;
use thiserror::Error;

/// Why a range descriptor could not be expanded.
#[derive(Debug, Error)]
pub enum RangeError {
    #[error("invalid address '{input}': {source}")]
    InvalidAddress {
        input: String,
        source: AddrParseError,
    },

    #[error("end address {end} is smaller than start address {start}")]
    EndBeforeStart { start: Ipv4Addr, end: Ipv4Addr },

    #[error("invalid network '{input}': {source}")]
    InvalidNetwork {
        input: String,
        source: IpNetworkError,
    },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}
