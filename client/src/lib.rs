//! Off-chain harness for `nft-program`.
//!
//! Derives the accounts a new NFT needs, builds the `create_token` and
//! `mint_token` instructions, and runs them in order against a cluster.
//! A failing step is logged and the run moves on to the next one.

pub mod accounts;
pub mod config;
pub mod error;
pub mod harness;
pub mod instructions;
pub mod transport;

pub use accounts::NftAddresses;
pub use config::{HarnessConfig, NftParams};
pub use error::HarnessError;
pub use harness::{CaseOutcome, CaseResult, Harness, HarnessReport};
pub use transport::{RpcTransport, Transport};
