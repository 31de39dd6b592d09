//! Latest-request search over oracle data requests.
//!
//! Given an oracle script, calldata and quorum parameters, finds the most
//! recent matching data requests on chain and returns their records along
//! with the height they were observed at.

pub mod api;
pub mod modules;
pub mod runner;
pub mod utils;
