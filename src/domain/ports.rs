use super::card::Card;
use chrono::{DateTime, Datelike, Utc};

/// Source of the current time. Expiry dates and history timestamps read it.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn current_year(&self) -> i32 {
        self.now().year()
    }
}

/// Storage for issued cards, keyed by card id.
pub trait CardStore {
    fn insert(&mut self, card: Card);
    fn get(&self, card_id: u32) -> Option<&Card>;
    fn get_mut(&mut self, card_id: u32) -> Option<&mut Card>;
    fn remove(&mut self, card_id: u32) -> Option<Card>;
    /// All cards ordered by id.
    fn all(&self) -> Vec<&Card>;
}
