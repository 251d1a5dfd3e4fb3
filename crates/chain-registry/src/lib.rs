//! Canonical vocabulary of blockchain networks.
//!
//! Each [`ChainId`] carries a lowercase string token. The tokens are what
//! gets persisted, sent over the wire and compared against other systems'
//! chain names, so an existing token must never change.

pub mod chain;

pub use chain::ChainId;
