use super::card_number::CARD_NUMBER_LENGTH;
use crate::error::{CardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A card payment network (scheme).
///
/// Each network owns a fixed, non-empty set of BIN prefixes that generated
/// numbers start with, plus a human-readable badge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentNetwork {
    #[serde(rename = "visa")]
    Visa,
    #[serde(rename = "mastercard")]
    Mastercard,
    #[serde(rename = "mir")]
    Mir,
    #[serde(rename = "mir2", alias = "mir-2")]
    Mir2,
    #[serde(rename = "unionpay")]
    UnionPay,
    #[serde(rename = "visa-plus")]
    VisaPlus,
}

impl PaymentNetwork {
    /// Every supported network, in selection order.
    pub const ALL: [PaymentNetwork; 6] = [
        PaymentNetwork::Visa,
        PaymentNetwork::Mastercard,
        PaymentNetwork::Mir,
        PaymentNetwork::Mir2,
        PaymentNetwork::UnionPay,
        PaymentNetwork::VisaPlus,
    ];

    /// BIN prefixes a number on this network may start with.
    pub const fn bin_prefixes(self) -> &'static [&'static str] {
        match self {
            PaymentNetwork::Visa => &["4"],
            PaymentNetwork::Mastercard => &["51", "52", "53", "54", "55", "22"],
            PaymentNetwork::Mir => &["220"],
            PaymentNetwork::Mir2 => &["220"],
            PaymentNetwork::UnionPay => &["62"],
            PaymentNetwork::VisaPlus => &["4"],
        }
    }

    /// Label rendered on the card badge.
    pub const fn display_name(self) -> &'static str {
        match self {
            PaymentNetwork::Visa => "💳 Visa",
            PaymentNetwork::Mastercard => "💳 MasterCard",
            PaymentNetwork::Mir => "💳 МИР",
            PaymentNetwork::Mir2 => "💳 МИР-2",
            PaymentNetwork::UnionPay => "💳 UnionPay",
            PaymentNetwork::VisaPlus => "💳 Visa Plus",
        }
    }

    /// Wire tag, as accepted by `FromStr`.
    pub const fn as_str(self) -> &'static str {
        match self {
            PaymentNetwork::Visa => "visa",
            PaymentNetwork::Mastercard => "mastercard",
            PaymentNetwork::Mir => "mir",
            PaymentNetwork::Mir2 => "mir2",
            PaymentNetwork::UnionPay => "unionpay",
            PaymentNetwork::VisaPlus => "visa-plus",
        }
    }
}

impl fmt::Display for PaymentNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentNetwork {
    type Err = CardError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "visa" => Ok(PaymentNetwork::Visa),
            "mastercard" => Ok(PaymentNetwork::Mastercard),
            "mir" => Ok(PaymentNetwork::Mir),
            "mir2" | "mir-2" => Ok(PaymentNetwork::Mir2),
            "unionpay" => Ok(PaymentNetwork::UnionPay),
            "visa-plus" => Ok(PaymentNetwork::VisaPlus),
            _ => Err(CardError::UnknownNetwork(tag.to_string())),
        }
    }
}

/// Looks up the badge label for a raw network tag.
pub fn display_name_for(tag: &str) -> Result<&'static str> {
    tag.parse::<PaymentNetwork>().map(PaymentNetwork::display_name)
}

// Every prefix must be non-empty, all digits, and leave room for the check digit.
const fn bin_table_is_valid() -> bool {
    let mut n = 0;
    while n < PaymentNetwork::ALL.len() {
        let prefixes = PaymentNetwork::ALL[n].bin_prefixes();
        if prefixes.is_empty() {
            return false;
        }
        let mut p = 0;
        while p < prefixes.len() {
            let bytes = prefixes[p].as_bytes();
            if bytes.is_empty() || bytes.len() > CARD_NUMBER_LENGTH - 1 {
                return false;
            }
            let mut i = 0;
            while i < bytes.len() {
                if !bytes[i].is_ascii_digit() {
                    return false;
                }
                i += 1;
            }
            p += 1;
        }
        n += 1;
    }
    true
}

const _: () = assert!(
    bin_table_is_valid(),
    "BIN prefix table contains a prefix that cannot fit a card number"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        for network in PaymentNetwork::ALL {
            assert_eq!(network.as_str().parse::<PaymentNetwork>().unwrap(), network);
        }
        assert_eq!(
            "mir-2".parse::<PaymentNetwork>().unwrap(),
            PaymentNetwork::Mir2
        );
    }

    #[test]
    fn test_parse_is_exact() {
        for tag in [" VISA ", "Visa", "MiR", "visa ", "MIR-2", ""] {
            assert!(matches!(
                tag.parse::<PaymentNetwork>(),
                Err(CardError::UnknownNetwork(t)) if t == tag
            ));
        }
    }

    #[test]
    fn test_parse_unknown_tag() {
        assert!(matches!(
            "amex".parse::<PaymentNetwork>(),
            Err(CardError::UnknownNetwork(tag)) if tag == "amex"
        ));
    }

    #[test]
    fn test_display_name_lookup() {
        assert_eq!(display_name_for("mir").unwrap(), "💳 МИР");
        assert_eq!(display_name_for("mastercard").unwrap(), "💳 MasterCard");
        assert!(matches!(
            display_name_for("discover"),
            Err(CardError::UnknownNetwork(_))
        ));
        assert!(matches!(
            display_name_for(" VISA "),
            Err(CardError::UnknownNetwork(_))
        ));
        assert!(matches!(
            display_name_for("Visa"),
            Err(CardError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_bin_table_is_valid() {
        assert!(bin_table_is_valid());
        assert_eq!(
            PaymentNetwork::Mastercard.bin_prefixes(),
            &["51", "52", "53", "54", "55", "22"]
        );
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_string(&PaymentNetwork::VisaPlus).unwrap();
        assert_eq!(json, "\"visa-plus\"");
        let parsed: PaymentNetwork = serde_json::from_str("\"mir-2\"").unwrap();
        assert_eq!(parsed, PaymentNetwork::Mir2);
    }
}
