//! The address generation **pipeline**.
//!
//! Range descriptors flow through three stages, each pulling from the one before it:
//!
//! * [`parser`] turns a single descriptor into a lazy run of addresses.
//! * [`streamer`] chains descriptors together and optionally drops duplicates.
//! * [`writer`] serializes the combined run to a file in a single forward pass.
//!
//! Nothing in the pipeline buffers the full address set, so memory stays flat
//! no matter how large the ranges are (unless deduplication is requested).

pub mod error;
pub mod input;
pub mod parser;
pub mod streamer;
pub mod writer;
