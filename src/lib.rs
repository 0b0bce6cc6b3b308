pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::generator::{CardGenerator, generate_card};
pub use domain::card_data::CardData;
pub use domain::card_number::{CardNumber, format_display};
pub use domain::luhn::{check_digit, is_valid};
pub use domain::network::{PaymentNetwork, display_name_for};
pub use error::{CardError, Result};
