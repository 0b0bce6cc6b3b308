use super::luhn;
use super::network::PaymentNetwork;
use crate::error::{CardError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits in every generated card number, check digit included.
pub const CARD_NUMBER_LENGTH: usize = 16;

/// Number of leading digits reported as the card's BIN.
pub const BIN_LENGTH: usize = 6;

/// A 16-digit, Luhn-valid card number.
///
/// Can only be obtained from `generate_card_number` or `CardNumber::parse`,
/// so holding one means the length and checksum invariants hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardNumber(String);

impl CardNumber {
    /// Parses a raw digit string, checking length and checksum.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.len() != CARD_NUMBER_LENGTH {
            return Err(CardError::InvalidInput(format!(
                "card number must have {CARD_NUMBER_LENGTH} digits, got {}",
                raw.chars().count()
            )));
        }
        if !luhn::is_valid(raw)? {
            return Err(CardError::InvalidInput(
                "card number fails the Luhn check".to_string(),
            ));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first six digits.
    pub fn bin(&self) -> &str {
        &self.0[..BIN_LENGTH]
    }

    pub fn last_four(&self) -> &str {
        &self.0[CARD_NUMBER_LENGTH - 4..]
    }

    /// Grouped form, e.g. `4532 0151 1283 0366`.
    pub fn formatted(&self) -> String {
        format_display(&self.0)
    }

    /// Form safe for logs and list views: only the last four digits are shown.
    pub fn masked(&self) -> String {
        format!("**** **** **** {}", self.last_four())
    }

    pub fn starts_with_any(&self, prefixes: &[&str]) -> bool {
        prefixes.iter().any(|prefix| self.0.starts_with(prefix))
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CardNumber {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CardNumber> for String {
    fn from(number: CardNumber) -> Self {
        number.0
    }
}

/// Generates a Luhn-valid card number on `network`.
///
/// Picks one of the network's BIN prefixes uniformly, pads it with uniformly
/// random digits and appends the check digit.
pub fn generate_card_number<R: Rng + ?Sized>(network: PaymentNetwork, rng: &mut R) -> CardNumber {
    let prefixes = network.bin_prefixes();
    let prefix = prefixes[rng.random_range(0..prefixes.len())];
    // Prefix lengths are bounded at compile time, see `network::bin_table_is_valid`.
    let remaining = CARD_NUMBER_LENGTH - prefix.len() - 1;

    let mut digits: Vec<u32> = Vec::with_capacity(CARD_NUMBER_LENGTH);
    digits.extend(prefix.bytes().map(|b| u32::from(b - b'0')));
    digits.extend((0..remaining).map(|_| rng.random_range(0..10u32)));
    digits.push(luhn::check_digit_of(&digits));

    CardNumber(
        digits
            .iter()
            .filter_map(|&d| char::from_digit(d, 10))
            .collect(),
    )
}

/// Splits `raw` into groups of four characters joined by single spaces.
///
/// The last group may be shorter. No validation is performed.
pub fn format_display(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    chars
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_format_display() {
        assert_eq!(format_display("4532015112830366"), "4532 0151 1283 0366");
        assert_eq!(format_display(""), "");
        assert_eq!(format_display("12345"), "1234 5");
        assert_eq!(format_display("1234"), "1234");
    }

    #[test]
    fn test_parse_valid_number() {
        let number = CardNumber::parse("4532015112830366").unwrap();
        assert_eq!(number.bin(), "453201");
        assert_eq!(number.last_four(), "0366");
        assert_eq!(number.formatted(), "4532 0151 1283 0366");
        assert_eq!(number.masked(), "**** **** **** 0366");
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        assert!(matches!(
            CardNumber::parse("4532015112830367"),
            Err(CardError::InvalidInput(_))
        ));
        assert!(matches!(
            CardNumber::parse("79927398713"),
            Err(CardError::InvalidInput(_))
        ));
        assert!(matches!(
            CardNumber::parse("4532-0151-1283-0"),
            Err(CardError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_generated_numbers_are_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        for network in PaymentNetwork::ALL {
            for _ in 0..200 {
                let number = generate_card_number(network, &mut rng);
                assert_eq!(number.as_str().len(), CARD_NUMBER_LENGTH);
                assert!(number.starts_with_any(network.bin_prefixes()));
                assert!(luhn::is_valid(number.as_str()).unwrap());
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_card_number(PaymentNetwork::Visa, &mut StdRng::seed_from_u64(7));
        let b = generate_card_number(PaymentNetwork::Visa, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_round_trip_rejects_invalid() {
        let json = serde_json::to_string(&CardNumber::parse("4532015112830366").unwrap()).unwrap();
        assert_eq!(json, "\"4532015112830366\"");
        assert!(serde_json::from_str::<CardNumber>("\"4532015112830367\"").is_err());
    }
}
