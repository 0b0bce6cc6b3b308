#![allow(dead_code)]

use cardgen::application::generator::CardGenerator;
use cardgen::infrastructure::clock::FixedClock;
use chrono::{TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Chi-square critical value for 5 degrees of freedom at p = 0.001.
pub const CHI_SQUARE_DF5_P001: f64 = 20.515;

pub fn seeded_generator(seed: u64) -> CardGenerator<StdRng, FixedClock> {
    let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap());
    CardGenerator::new(StdRng::seed_from_u64(seed), clock)
}

/// Pearson's statistic for observed counts against a uniform expectation.
pub fn chi_square_uniform(observed: &[u64]) -> f64 {
    let total: u64 = observed.iter().sum();
    let expected = total as f64 / observed.len() as f64;
    observed
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

pub fn write_numbers_csv(path: &Path, numbers: &[&str]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["number"])?;
    for number in numbers {
        wtr.write_record([number])?;
    }

    wtr.flush()?;
    Ok(())
}
