//! Chains range descriptors into a single stream of addresses.

use std::collections::HashSet;
use std::net::Ipv4Addr;

use ipgen_common::config::Config;
use ipgen_common::network::range::Addresses;
use tracing::info;

use crate::parser;

/// Lazy stream over every address of a list of range descriptors.
///
/// Descriptors are expanded one at a time, in order, only when the previous one
/// runs dry. Invalid descriptors are logged by [`parser::expand`] and contribute
/// nothing.
///
/// With [`Config::unique`] set, every emitted address is remembered for the rest
/// of the run so it is never yielded twice. That set is unbounded: memory grows
/// with the number of distinct addresses, so deduplicating a `/8` costs hundreds
/// of megabytes.
pub struct AddressStream<I> {
    descriptors: I,
    current: Addresses,
    seen: Option<HashSet<Ipv4Addr>>,
    verbose: bool,
}

impl<I> AddressStream<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new<T>(descriptors: T, cfg: &Config) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            descriptors: descriptors.into_iter(),
            current: Addresses::empty(),
            seen: cfg.unique.then(HashSet::new),
            verbose: cfg.verbose,
        }
    }
}

impl<I> Iterator for AddressStream<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            for ip in self.current.by_ref() {
                if let Some(seen) = self.seen.as_mut() {
                    if !seen.insert(ip) {
                        continue;
                    }
                }
                return Some(ip);
            }

            let descriptor = self.descriptors.next()?;
            let descriptor: &str = descriptor.as_ref();
            if self.verbose {
                info!("Expanding range: {descriptor}");
            }
            self.current = parser::expand(descriptor);
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
