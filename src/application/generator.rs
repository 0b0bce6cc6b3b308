use crate::domain::card_data::{CardData, generate_card_data, random_network};
use crate::domain::card_number::{CardNumber, generate_card_number};
use crate::domain::network::PaymentNetwork;
use crate::domain::ports::Clock;
use crate::infrastructure::clock::SystemClock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Issues synthetic card instruments.
///
/// `CardGenerator` owns its random source and clock, so a seeded generator
/// with a fixed clock replays exactly the same cards.
pub struct CardGenerator<R = StdRng, C = SystemClock> {
    rng: R,
    clock: C,
}

impl CardGenerator<StdRng, SystemClock> {
    /// Deterministic generator for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), SystemClock)
    }

    /// Generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng(), SystemClock)
    }
}

impl<R: Rng, C: Clock> CardGenerator<R, C> {
    /// Creates a new `CardGenerator` instance.
    ///
    /// # Arguments
    ///
    /// * `rng` - Source of every random choice.
    /// * `clock` - Provides the year expiry dates are counted from.
    pub fn new(rng: R, clock: C) -> Self {
        Self { rng, clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Generates a card on a uniformly chosen network.
    pub fn generate(&mut self) -> CardData {
        let network = random_network(&mut self.rng);
        self.generate_for(network)
    }

    /// Generates a card on `network`.
    pub fn generate_for(&mut self, network: PaymentNetwork) -> CardData {
        let data = generate_card_data(network, self.clock.current_year(), &mut self.rng);
        debug!(
            network = %data.network,
            number = %data.number.masked(),
            expiry = %format!("{}/{}", data.expiry_month, data.expiry_year),
            "generated card"
        );
        data
    }

    /// Forces `network` when given, otherwise picks one at random.
    pub fn generate_with(&mut self, network: Option<PaymentNetwork>) -> CardData {
        match network {
            Some(network) => self.generate_for(network),
            None => self.generate(),
        }
    }

    /// Generates only a card number on `network`.
    pub fn card_number(&mut self, network: PaymentNetwork) -> CardNumber {
        generate_card_number(network, &mut self.rng)
    }
}

/// One card from the thread-local generator and the system clock.
pub fn generate_card() -> CardData {
    let mut rng = rand::rng();
    let network = random_network(&mut rng);
    generate_card_data(network, SystemClock.current_year(), &mut rng)
}
