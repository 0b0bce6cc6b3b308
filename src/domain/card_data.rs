use super::card_number::{CardNumber, generate_card_number};
use super::network::PaymentNetwork;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Expiry date rendered the way it is printed on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiry {
    /// `"01"` through `"12"`.
    pub month: String,
    /// Last two digits of the year.
    pub year: String,
}

/// One synthetic payment instrument.
///
/// Built once by the generator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    pub network: PaymentNetwork,
    pub number: CardNumber,
    pub cvv: String,
    pub expiry_month: String,
    pub expiry_year: String,
    /// First six digits of `number`.
    pub bin: String,
}

impl CardData {
    pub fn expiry(&self) -> Expiry {
        Expiry {
            month: self.expiry_month.clone(),
            year: self.expiry_year.clone(),
        }
    }
}

/// Three-digit CVV in `100..=999`.
pub fn generate_cvv<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.random_range(100..=999u16).to_string()
}

/// Expiry one to five years after `current_year`, in a random month.
pub fn generate_expiry<R: Rng + ?Sized>(current_year: i32, rng: &mut R) -> Expiry {
    let year = current_year + rng.random_range(1..=5i32);
    let month = rng.random_range(1..=12u8);
    Expiry {
        month: format!("{month:02}"),
        year: format!("{:02}", year.rem_euclid(100)),
    }
}

/// Picks a network uniformly from `PaymentNetwork::ALL`.
pub fn random_network<R: Rng + ?Sized>(rng: &mut R) -> PaymentNetwork {
    PaymentNetwork::ALL[rng.random_range(0..PaymentNetwork::ALL.len())]
}

/// Builds a complete instrument on `network`.
pub fn generate_card_data<R: Rng + ?Sized>(
    network: PaymentNetwork,
    current_year: i32,
    rng: &mut R,
) -> CardData {
    let number = generate_card_number(network, rng);
    let cvv = generate_cvv(rng);
    let expiry = generate_expiry(current_year, rng);
    let bin = number.bin().to_string();

    CardData {
        network,
        number,
        cvv,
        expiry_month: expiry.month,
        expiry_year: expiry.year,
        bin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_cvv_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let cvv = generate_cvv(&mut rng);
            assert_eq!(cvv.len(), 3);
            let value: u16 = cvv.parse().unwrap();
            assert!((100..=999).contains(&value));
        }
    }

    #[test]
    fn test_expiry_range() {
        let mut rng = StdRng::seed_from_u64(2);
        let allowed: Vec<String> = (2027..=2031).map(|y| format!("{:02}", y % 100)).collect();
        for _ in 0..1_000 {
            let expiry = generate_expiry(2026, &mut rng);
            assert!(allowed.contains(&expiry.year), "year {}", expiry.year);
            let month: u8 = expiry.month.parse().unwrap();
            assert_eq!(expiry.month.len(), 2);
            assert!((1..=12).contains(&month));
        }
    }

    #[test]
    fn test_expiry_wraps_century() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let expiry = generate_expiry(2098, &mut rng);
            assert!(["99", "00", "01", "02", "03"].contains(&expiry.year.as_str()));
        }
    }

    #[test]
    fn test_card_data_bin_matches_number() {
        let mut rng = StdRng::seed_from_u64(4);
        let data = generate_card_data(PaymentNetwork::UnionPay, 2026, &mut rng);
        assert_eq!(data.network, PaymentNetwork::UnionPay);
        assert!(data.number.as_str().starts_with("62"));
        assert_eq!(data.bin, &data.number.as_str()[..6]);
        assert_eq!(data.expiry().month, data.expiry_month);
    }
}
