//! build one line of space-separated random values
//!
//! none of the generators below include the trailing newline, this is the job
//! of [`crate::fs`].
use std::ops::RangeInclusive;

use rand::RngCore;

use crate::{
    error::BenchgenError,
    random::{self, Alphabet, ZeroDenominator},
};

/// `count` integers drawn uniformly from `[low, high]`
///
/// # Example
/// ```
/// # use rand::{rngs::StdRng, SeedableRng};
/// let mut rng = StdRng::seed_from_u64(0);
/// let line = benchgen::line::generate_integer_line(&mut rng, 3, -5, 5).unwrap();
/// assert_eq!(line.split(' ').count(), 3);
/// ```
pub fn generate_integer_line(
    rng: &mut impl RngCore,
    count: usize,
    low: i64,
    high: i64,
) -> Result<String, BenchgenError> {
    let range = random::checked_range(low, high)?;

    let values: Vec<String> = (0..count)
        .map(|_| random::integer(rng, &range).to_string())
        .collect();

    Ok(values.join(" "))
}

/// `count` ratios `n / d`, with `n` and `d` drawn from `numerator` and
/// `denominator`, each written with exactly `precision` fractional digits
///
/// when `d` is zero, `policy` decides whether `d` is drawn again or the value
/// is dropped from the line.
pub fn generate_double_line(
    rng: &mut impl RngCore,
    count: usize,
    numerator: RangeInclusive<i64>,
    denominator: RangeInclusive<i64>,
    precision: usize,
    policy: ZeroDenominator,
) -> Result<String, BenchgenError> {
    random::check_range(&numerator)?;
    random::check_range(&denominator)?;
    if policy == ZeroDenominator::Resample && denominator == (0..=0) {
        return Err(BenchgenError::ZeroDenominatorRange);
    }

    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        if let Some(ratio) = random::ratio(rng, &numerator, &denominator, policy) {
            values.push(fixed_decimal(ratio, precision));
        }
    }

    Ok(values.join(" "))
}

/// `value` with exactly `precision` fractional digits, without the sign of a
/// value that rounds to zero
fn fixed_decimal(value: f64, precision: usize) -> String {
    let repr = format!("{:.*}", precision, value);
    match repr.strip_prefix('-') {
        Some(digits) if digits.chars().all(|c| c == '0' || c == '.') => digits.to_string(),
        _ => repr,
    }
}

/// `segment_count` strings over `alphabet`, each with a length drawn uniformly
/// from `[min_len, max_len]`
///
/// `min_len` has to be at least 1, an empty string would not survive being
/// written between two separators.
pub fn generate_string_line(
    rng: &mut impl RngCore,
    segment_count: usize,
    alphabet: &Alphabet,
    min_len: usize,
    max_len: usize,
) -> Result<String, BenchgenError> {
    if min_len == 0 || min_len > max_len {
        return Err(BenchgenError::InvalidLength {
            min: min_len,
            max: max_len,
        });
    }

    let lengths = min_len..=max_len;
    let segments: Vec<String> = (0..segment_count)
        .map(|_| random::string(rng, alphabet, &lengths))
        .collect();

    Ok(segments.join(" "))
}

/// `count` values `o + s * a / b`, where `o` is drawn from `offset`, `a` and
/// `b` from `ratio` and `s` is `-1` when `negate` is set, `+1` otherwise
///
/// values are written with the shortest representation that reads back to the
/// same `f64`. a zero `b` is drawn again.
pub fn generate_offset_double_line(
    rng: &mut impl RngCore,
    count: usize,
    offset: RangeInclusive<i64>,
    ratio: RangeInclusive<i64>,
    negate: bool,
) -> Result<String, BenchgenError> {
    random::check_range(&offset)?;
    random::check_range(&ratio)?;
    if ratio == (0..=0) {
        return Err(BenchgenError::ZeroDenominatorRange);
    }

    let sign = if negate { -1.0 } else { 1.0 };
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        let o = random::integer(rng, &offset) as f64;
        if let Some(r) = random::ratio(rng, &ratio, &ratio, ZeroDenominator::Resample) {
            values.push(format!("{}", o + sign * r));
        }
    }

    Ok(values.join(" "))
}
