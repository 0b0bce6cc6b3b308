use crate::domain::card::Card;
use crate::domain::ports::CardStore;
use std::collections::BTreeMap;

/// Keeps issued cards in memory for the lifetime of the wallet.
///
/// A `BTreeMap` keeps iteration in id order, which is also issue order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCardStore {
    cards: BTreeMap<u32, Card>,
}

impl InMemoryCardStore {
    /// Creates a new, empty in-memory card store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CardStore for InMemoryCardStore {
    fn insert(&mut self, card: Card) {
        self.cards.insert(card.id, card);
    }

    fn get(&self, card_id: u32) -> Option<&Card> {
        self.cards.get(&card_id)
    }

    fn get_mut(&mut self, card_id: u32) -> Option<&mut Card> {
        self.cards.get_mut(&card_id)
    }

    fn remove(&mut self, card_id: u32) -> Option<Card> {
        self.cards.remove(&card_id)
    }

    fn all(&self) -> Vec<&Card> {
        self.cards.values().collect()
    }
}
