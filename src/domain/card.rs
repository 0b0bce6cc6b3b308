use super::card_data::CardData;
use crate::error::{CardError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Money held on a card, in roubles.
///
/// Wraps `rust_decimal::Decimal` so balance arithmetic never goes through floats.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

/// A strictly positive amount moved by a single operation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CardError::Validation("Amount must be positive".to_string()))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = CardError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    DebitChild,
    DebitYouth,
    Credit,
    Sticker,
    Other,
    Premium,
}

impl CardKind {
    /// Gradient used for the card art.
    pub fn color(self) -> &'static str {
        match self {
            CardKind::DebitChild => "from-pink-400 to-purple-400",
            CardKind::DebitYouth => "from-blue-400 to-cyan-400",
            CardKind::Credit => "from-amber-400 to-orange-400",
            CardKind::Sticker => "from-green-400 to-emerald-400",
            CardKind::Other => "from-gray-400 to-slate-400",
            CardKind::Premium => "from-yellow-500 to-amber-700",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CardFormat {
    Virtual,
    Plastic,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Active,
    Blocked,
}

/// A card issued to the account holder.
///
/// Pairs the generated instrument with the fields the banking app keeps
/// around it: name, art, balance, block flag and spending limits.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Card {
    pub id: u32,
    pub name: String,
    pub kind: CardKind,
    pub format: CardFormat,
    pub balance: Balance,
    pub data: CardData,
    pub color: String,
    pub status: CardStatus,
    pub daily_limit: Option<Decimal>,
    pub monthly_limit: Option<Decimal>,
}

impl Card {
    pub fn new(
        id: u32,
        name: &str,
        kind: CardKind,
        format: CardFormat,
        data: CardData,
    ) -> Result<Self> {
        let name = validate_name(name)?;
        Ok(Self {
            id,
            name,
            kind,
            format,
            balance: Balance::ZERO,
            data,
            color: kind.color().to_string(),
            status: CardStatus::Active,
            daily_limit: None,
            monthly_limit: None,
        })
    }

    pub fn is_blocked(&self) -> bool {
        self.status == CardStatus::Blocked
    }

    /// Credits the balance. Blocked cards still accept incoming money.
    pub fn deposit(&mut self, amount: Amount) {
        self.balance += amount.into();
    }

    /// Debits the balance if the card is active, funded and within its daily limit.
    pub fn withdraw(&mut self, amount: Amount) -> Result<()> {
        self.check_debit(amount)?;
        self.balance -= amount.into();
        Ok(())
    }

    /// Checks a debit without applying it.
    pub fn check_debit(&self, amount: Amount) -> Result<()> {
        if self.is_blocked() {
            return Err(CardError::Validation(format!("Card {} is blocked", self.id)));
        }
        if let Some(limit) = self.daily_limit
            && amount.value() > limit
        {
            return Err(CardError::Validation(format!(
                "Amount {} exceeds daily limit {limit}",
                amount.value()
            )));
        }
        if self.balance < amount.into() {
            return Err(CardError::Validation("Insufficient funds".to_string()));
        }
        Ok(())
    }

    pub fn block(&mut self) {
        self.status = CardStatus::Blocked;
    }

    pub fn unblock(&mut self) {
        self.status = CardStatus::Active;
    }

    pub fn rename(&mut self, name: &str) -> Result<()> {
        self.name = validate_name(name)?;
        Ok(())
    }

    /// Sets both limits at once. `None` removes a limit.
    pub fn set_limits(&mut self, daily: Option<Decimal>, monthly: Option<Decimal>) -> Result<()> {
        for limit in [daily, monthly].into_iter().flatten() {
            if limit <= Decimal::ZERO {
                return Err(CardError::Validation("Limits must be positive".to_string()));
            }
        }
        if let (Some(daily), Some(monthly)) = (daily, monthly)
            && monthly < daily
        {
            return Err(CardError::Validation(
                "Monthly limit must not be below the daily limit".to_string(),
            ));
        }
        self.daily_limit = daily;
        self.monthly_limit = monthly;
        Ok(())
    }
}

/// Trims a card name and rejects it when nothing is left.
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(CardError::Validation("Card name must not be empty".to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}
