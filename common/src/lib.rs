//! # ipgen common
//!
//! Models shared between the generator core and the command line front end.
//!
//! * **[`network`]**: address ranges and the lazy iterator that walks them.
//! * **[`config`]**: run flags and the output format selector.

pub mod config;
pub mod network;
