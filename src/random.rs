//! draw bounded values from a random source
//!
//! every sampler takes the random source as an explicit `&mut impl RngCore`:
//! seeding a [`rand::rngs::StdRng`] twice with the same seed replays the exact
//! same values.
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::{Rng, RngCore};

use crate::error::BenchgenError;

/// digits followed by uppercase ASCII letters
pub const LEGALS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// a handful of symbols followed by uppercase ASCII letters and digits
///
/// `)` appears twice and is thus drawn twice as often as the other characters.
pub const SYMBOLS: &str = "+_)(*&^%$#@!)ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// the set of characters string values are drawn from
///
/// characters are drawn by position, so duplicates weigh more.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// builds an alphabet out of the characters of `chars`
    ///
    /// whitespace is refused because it would be mistaken for a separator
    /// once a line is written.
    pub fn new(chars: &str) -> Result<Self, BenchgenError> {
        if chars.is_empty() {
            return Err(BenchgenError::EmptyAlphabet);
        }
        if let Some(c) = chars.chars().find(|c| c.is_whitespace()) {
            return Err(BenchgenError::WhitespaceInAlphabet(c));
        }

        Ok(Self {
            chars: chars.chars().collect(),
        })
    }

    /// [`LEGALS`]
    pub fn legals() -> Self {
        Self {
            chars: LEGALS.chars().collect(),
        }
    }

    /// [`SYMBOLS`]
    pub fn symbols() -> Self {
        Self {
            chars: SYMBOLS.chars().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub(crate) fn sample(&self, rng: &mut impl RngCore) -> char {
        self.chars[rng.gen_range(0..self.chars.len())]
    }
}

impl FromStr for Alphabet {
    type Err = BenchgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chars.iter().collect::<String>())
    }
}

/// what to do when the denominator of a ratio comes out as zero
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ZeroDenominator {
    /// draw the denominator again, lines always have the requested arity
    #[default]
    Resample,
    /// drop the value, the line ends up shorter
    Skip,
}

impl FromStr for ZeroDenominator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resample" => Ok(Self::Resample),
            "skip" => Ok(Self::Skip),
            _ => Err(format!(
                "unknown zero denominator policy `{}`, expected `resample` or `skip`",
                s
            )),
        }
    }
}

impl std::fmt::Display for ZeroDenominator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            Self::Resample => "resample",
            Self::Skip => "skip",
        };
        write!(f, "{}", repr)
    }
}

/// turns `low` and `high` into a non-empty inclusive range
pub(crate) fn checked_range(low: i64, high: i64) -> Result<RangeInclusive<i64>, BenchgenError> {
    if low > high {
        return Err(BenchgenError::InvalidRange { low, high });
    }
    Ok(low..=high)
}

/// same as [`checked_range`], for ranges that are already built
pub(crate) fn check_range(range: &RangeInclusive<i64>) -> Result<(), BenchgenError> {
    checked_range(*range.start(), *range.end()).map(|_| ())
}

/// draws an integer uniformly from `range`
///
/// `range` must not be empty, see [`checked_range`].
pub(crate) fn integer(rng: &mut impl RngCore, range: &RangeInclusive<i64>) -> i64 {
    rng.gen_range(range.clone())
}

/// draws the ratio of two bounded integers
///
/// returns [`None`] when the denominator is zero and `policy` is
/// [`ZeroDenominator::Skip`].
///
/// with [`ZeroDenominator::Resample`], `denominator` must contain at least one
/// non-zero value or this loops forever.
pub(crate) fn ratio(
    rng: &mut impl RngCore,
    numerator: &RangeInclusive<i64>,
    denominator: &RangeInclusive<i64>,
    policy: ZeroDenominator,
) -> Option<f64> {
    let num = integer(rng, numerator);
    let mut den = integer(rng, denominator);
    while den == 0 {
        match policy {
            ZeroDenominator::Skip => return None,
            ZeroDenominator::Resample => den = integer(rng, denominator),
        }
    }

    Some(num as f64 / den as f64)
}

/// draws a string whose length is uniform in `lengths`
pub(crate) fn string(
    rng: &mut impl RngCore,
    alphabet: &Alphabet,
    lengths: &RangeInclusive<usize>,
) -> String {
    let len = rng.gen_range(lengths.clone());
    (0..len).map(|_| alphabet.sample(rng)).collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{Alphabet, ZeroDenominator, LEGALS, SYMBOLS};
    use crate::error::BenchgenError;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn alphabet() {
        assert_eq!(Alphabet::new(""), Err(BenchgenError::EmptyAlphabet));
        assert_eq!(
            Alphabet::new("AB C"),
            Err(BenchgenError::WhitespaceInAlphabet(' '))
        );
        assert_eq!(
            "A\tB".parse::<Alphabet>(),
            Err(BenchgenError::WhitespaceInAlphabet('\t'))
        );

        let alphabet = Alphabet::new("xyz").unwrap();
        assert_eq!(alphabet.len(), 3);
        assert!(alphabet.contains('y'));
        assert!(!alphabet.contains('a'));
        assert_eq!(alphabet.to_string(), "xyz");

        assert_eq!(Alphabet::legals().len(), 36);
        assert_eq!(Alphabet::legals().to_string(), LEGALS);
        assert_eq!(Alphabet::symbols().len(), 49);
        assert_eq!(Alphabet::symbols().to_string(), SYMBOLS);
    }

    #[test]
    fn integers_stay_in_range() {
        let mut rng = rng();

        let range = super::checked_range(-5, 5).unwrap();
        let values: Vec<i64> = (0..1_000).map(|_| super::integer(&mut rng, &range)).collect();
        assert!(values.iter().all(|v| range.contains(v)));
        // both bounds are inclusive and should show up over 1000 draws
        assert!(values.contains(&-5));
        assert!(values.contains(&5));

        let single = super::checked_range(7, 7).unwrap();
        assert_eq!(super::integer(&mut rng, &single), 7);

        assert_eq!(
            super::checked_range(1, 0),
            Err(BenchgenError::InvalidRange { low: 1, high: 0 })
        );
        assert_eq!(
            super::check_range(&(3..=-3)),
            Err(BenchgenError::InvalidRange { low: 3, high: -3 })
        );
    }

    #[test]
    fn ratio() {
        let mut rng = rng();

        for _ in 0..1_000 {
            let r = super::ratio(&mut rng, &(-10..=10), &(-1..=1), ZeroDenominator::Resample);
            let r = r.expect("resampling should always produce a value");
            assert!((-10.0..=10.0).contains(&r), "{} out of bounds", r);
        }

        assert_eq!(
            super::ratio(&mut rng, &(1..=1), &(0..=0), ZeroDenominator::Skip),
            None
        );
        assert_eq!(
            super::ratio(&mut rng, &(6..=6), &(3..=3), ZeroDenominator::Skip),
            Some(2.0)
        );
    }

    #[test]
    fn strings() {
        let mut rng = rng();
        let alphabet = Alphabet::new("ab").unwrap();

        for _ in 0..1_000 {
            let s = super::string(&mut rng, &alphabet, &(1..=5));
            assert!((1..=5).contains(&s.len()), "bad length for {:?}", s);
            assert!(s.chars().all(|c| alphabet.contains(c)), "bad char in {:?}", s);
        }

        assert_eq!(super::string(&mut rng, &alphabet, &(0..=0)), "");
    }

    #[test]
    fn zero_denominator_policy() {
        assert_eq!("resample".parse(), Ok(ZeroDenominator::Resample));
        assert_eq!("skip".parse(), Ok(ZeroDenominator::Skip));
        assert!("retry".parse::<ZeroDenominator>().is_err());
        assert_eq!(ZeroDenominator::default(), ZeroDenominator::Resample);
        assert_eq!(ZeroDenominator::Skip.to_string(), "skip");
    }
}
