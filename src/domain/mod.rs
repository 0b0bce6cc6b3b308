//! Domain layer: payment networks, the Luhn checksum, card number and card
//! data generation, plus the card and transaction records built on top of them.
//!
//! Everything here is pure. Randomness and time come in as parameters.

pub mod card;
pub mod card_data;
pub mod card_number;
pub mod luhn;
pub mod network;
pub mod ports;
pub mod transaction;
