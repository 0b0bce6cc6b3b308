use super::generator::CardGenerator;
use crate::domain::card::{Amount, Balance, Card, CardFormat, CardKind, validate_name};
use crate::domain::network::PaymentNetwork;
use crate::domain::ports::{CardStore, Clock};
use crate::domain::transaction::{ServiceProvider, Transaction, TransactionKind};
use crate::error::{CardError, Result};
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::in_memory::InMemoryCardStore;
use rand::Rng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use tracing::{info, warn};

/// The account holder's cards and the operations the banking app offers on them.
///
/// `Wallet` owns the card store and the generator that issues new cards.
/// Every balance-changing operation is validated in full before anything is
/// mutated, and each successful one appends a `Transaction` to the history.
pub struct Wallet<S = InMemoryCardStore, R = StdRng, C = SystemClock> {
    store: S,
    generator: CardGenerator<R, C>,
    history: Vec<Transaction>,
    next_card_id: u32,
    next_tx_id: u32,
}

impl<S: CardStore, R: Rng, C: Clock> Wallet<S, R, C> {
    /// Creates a new `Wallet` instance.
    ///
    /// # Arguments
    ///
    /// * `store` - Where issued cards are kept.
    /// * `generator` - Produces the instrument for every new card.
    pub fn new(store: S, generator: CardGenerator<R, C>) -> Self {
        Self {
            store,
            generator,
            history: Vec::new(),
            next_card_id: 1,
            next_tx_id: 1,
        }
    }

    /// Issues a card on a randomly chosen network.
    pub fn issue_card(&mut self, name: &str, kind: CardKind, format: CardFormat) -> Result<&Card> {
        self.issue(name, kind, format, None)
    }

    /// Issues a card on `network`.
    pub fn issue_card_on(
        &mut self,
        name: &str,
        kind: CardKind,
        format: CardFormat,
        network: PaymentNetwork,
    ) -> Result<&Card> {
        self.issue(name, kind, format, Some(network))
    }

    fn issue(
        &mut self,
        name: &str,
        kind: CardKind,
        format: CardFormat,
        network: Option<PaymentNetwork>,
    ) -> Result<&Card> {
        // Checked before generating so a rejected issue leaves the rng untouched.
        let name = validate_name(name)?;
        let id = self.next_card_id;
        let data = self.generator.generate_with(network);
        let card = Card::new(id, &name, kind, format, data)?;
        info!(
            card_id = id,
            network = %card.data.network,
            number = %card.data.number.masked(),
            "card issued"
        );
        self.next_card_id += 1;
        self.store.insert(card);
        self.card(id)
    }

    pub fn card(&self, card_id: u32) -> Result<&Card> {
        self.store.get(card_id).ok_or(CardError::CardNotFound(card_id))
    }

    fn card_mut(&mut self, card_id: u32) -> Result<&mut Card> {
        self.store
            .get_mut(card_id)
            .ok_or(CardError::CardNotFound(card_id))
    }

    /// All cards in issue order.
    pub fn cards(&self) -> Vec<&Card> {
        self.store.all()
    }

    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Sum of every card's balance.
    pub fn total_balance(&self) -> Balance {
        self.store
            .all()
            .into_iter()
            .fold(Balance::ZERO, |total, card| total + card.balance)
    }

    /// Approves a mock credit and pays it onto `card_id`.
    pub fn credit(&mut self, card_id: u32, amount: Decimal) -> Result<()> {
        let amount = Amount::new(amount)?;
        self.card_mut(card_id)?.deposit(amount);
        info!(card_id, amount = %amount.value(), "credit approved");
        self.record(
            TransactionKind::Credit,
            amount,
            "Credit".to_string(),
            None,
            Some(card_id),
        );
        Ok(())
    }

    /// Moves `amount` between two cards. Nothing changes if any check fails.
    pub fn transfer(&mut self, from: u32, to: u32, amount: Decimal) -> Result<()> {
        let amount = Amount::new(amount)?;
        if from == to {
            return Err(CardError::Validation(
                "Cannot transfer to the same card".to_string(),
            ));
        }
        self.card(to)?;
        if let Err(e) = self.card(from)?.check_debit(amount) {
            warn!(from, to, error = %e, "transfer rejected");
            return Err(e);
        }

        self.card_mut(from)?.withdraw(amount)?;
        self.card_mut(to)?.deposit(amount);
        info!(from, to, amount = %amount.value(), "transfer completed");
        self.record(
            TransactionKind::Transfer,
            amount,
            format!("Transfer from card {from} to card {to}"),
            Some(from),
            Some(to),
        );
        Ok(())
    }

    /// Pays a bill from `card_id`.
    pub fn pay_bill(
        &mut self,
        card_id: u32,
        provider: &ServiceProvider,
        amount: Decimal,
    ) -> Result<()> {
        let amount = Amount::new(amount)?;
        if let Err(e) = self.card_mut(card_id)?.withdraw(amount) {
            warn!(card_id, provider = %provider.id, error = %e, "payment rejected");
            return Err(e);
        }
        info!(card_id, provider = %provider.id, amount = %amount.value(), "bill paid");
        self.record(
            TransactionKind::Payment,
            amount,
            format!("Payment to {}", provider.name),
            Some(card_id),
            None,
        );
        Ok(())
    }

    pub fn block(&mut self, card_id: u32) -> Result<()> {
        self.card_mut(card_id)?.block();
        info!(card_id, "card blocked");
        Ok(())
    }

    pub fn unblock(&mut self, card_id: u32) -> Result<()> {
        self.card_mut(card_id)?.unblock();
        info!(card_id, "card unblocked");
        Ok(())
    }

    pub fn rename(&mut self, card_id: u32, name: &str) -> Result<()> {
        self.card_mut(card_id)?.rename(name)
    }

    pub fn set_limits(
        &mut self,
        card_id: u32,
        daily: Option<Decimal>,
        monthly: Option<Decimal>,
    ) -> Result<()> {
        self.card_mut(card_id)?.set_limits(daily, monthly)
    }

    /// Removes a card. Its history entries are kept.
    pub fn delete(&mut self, card_id: u32) -> Result<Card> {
        let card = self
            .store
            .remove(card_id)
            .ok_or(CardError::CardNotFound(card_id))?;
        info!(card_id, "card deleted");
        Ok(card)
    }

    /// Deletes every card and clears the history.
    pub fn reset(&mut self) {
        let ids: Vec<u32> = self.store.all().iter().map(|card| card.id).collect();
        for id in ids {
            self.store.remove(id);
        }
        self.history.clear();
        info!("wallet reset");
    }

    fn record(
        &mut self,
        kind: TransactionKind,
        amount: Amount,
        description: String,
        from_card: Option<u32>,
        to_card: Option<u32>,
    ) {
        self.history.push(Transaction {
            id: self.next_tx_id,
            kind,
            amount: amount.value(),
            date: self.generator.clock().now(),
            description,
            from_card,
            to_card,
        });
        self.next_tx_id += 1;
    }
}
