//! Loader for geth-style `genesis.json` files.

mod error;
mod genesis;

pub use error::Error;
pub use genesis::{Account, ChainConfig, Ethash, Genesis};
