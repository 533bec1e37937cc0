//! Implementations of ports (hexagonal adapters).
//!
//! - `inbound` - the `mindmatch` command line
//! - `outbound` - solver and name-similarity backends

pub mod inbound;
pub mod outbound;
