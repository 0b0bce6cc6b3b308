//! Luhn (mod 10) checksum.
//!
//! Both functions reject empty or non-digit input with `CardError::InvalidInput`
//! rather than coercing it.

use crate::error::{CardError, Result};

fn digits(input: &str) -> Result<Vec<u32>> {
    if input.is_empty() {
        return Err(CardError::InvalidInput("digit string is empty".to_string()));
    }
    input
        .chars()
        .enumerate()
        .map(|(position, c)| {
            c.to_digit(10).ok_or_else(|| {
                CardError::InvalidInput(format!(
                    "non-digit character '{}' at position {position}",
                    c.escape_default()
                ))
            })
        })
        .collect()
}

/// Sums digits right to left, doubling every other one starting with the
/// rightmost when `double_first` is set.
fn weighted_sum(digits: &[u32], double_first: bool) -> u32 {
    let mut doubled = double_first;
    let mut sum = 0;
    for &digit in digits.iter().rev() {
        let mut value = digit;
        if doubled {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
        doubled = !doubled;
    }
    sum
}

/// Returns whether `number` passes the Luhn checksum.
pub fn is_valid(number: &str) -> Result<bool> {
    let digits = digits(number)?;
    Ok(weighted_sum(&digits, false) % 10 == 0)
}

/// Check digit for already-decoded digits. Every element must be below 10.
pub(crate) fn check_digit_of(digits: &[u32]) -> u32 {
    (10 - weighted_sum(digits, true) % 10) % 10
}

/// Computes the digit that makes `partial` followed by it Luhn-valid,
/// as a one-character string.
pub fn check_digit(partial: &str) -> Result<String> {
    Ok(check_digit_of(&digits(partial)?).to_string())
}
