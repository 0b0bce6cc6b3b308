use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Transfer,
    Payment,
    Credit,
}

/// One entry in the wallet history.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    pub id: u32,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub description: String,
    pub from_card: Option<u32>,
    pub to_card: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ProviderCategory {
    Mobile,
    Internet,
    Tv,
    Utilities,
}

/// A biller that card holders can pay from a card.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ServiceProvider {
    pub id: String,
    pub name: String,
    pub category: ProviderCategory,
}

impl ServiceProvider {
    pub fn new(id: &str, name: &str, category: ProviderCategory) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
        }
    }
}
