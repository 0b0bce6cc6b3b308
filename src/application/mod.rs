//! Application layer orchestrating the domain.
//!
//! `CardGenerator` issues card instruments from an injected random source and
//! clock. `Wallet` keeps issued cards and applies balance operations to them.

pub mod generator;
pub mod wallet;
