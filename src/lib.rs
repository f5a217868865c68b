//! Benchgen: random input files for input-reading benchmarks
//!
//! Every file is a sequence of lines, every line a sequence of random values
//! separated by a single space and terminated by a single `\n`. Values are one
//! of
//! - bounded integers, see [`line::generate_integer_line`]
//! - ratios of bounded integers, written with a fixed number of fractional
//!   digits, see [`line::generate_double_line`]
//! - strings over an [`random::Alphabet`], see [`line::generate_string_line`]
//!
//! The random source is always given explicitly, so that a seeded
//! [`rand::rngs::StdRng`] reproduces a file byte for byte:
//! ```
//! # use rand::{rngs::StdRng, SeedableRng};
//! # use benchgen::line::generate_integer_line;
//! let a = generate_integer_line(&mut StdRng::seed_from_u64(7), 3, -5, 5).unwrap();
//! let b = generate_integer_line(&mut StdRng::seed_from_u64(7), 3, -5, 5).unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! Lines are written to disk with [`fs::write_file`] and the historical data
//! sets are available as [`preset::Preset`]s.
pub mod error;
pub mod fs;
pub mod line;
pub mod preset;
pub mod random;

pub use error::BenchgenError;
pub use fs::write_file;
pub use line::{generate_double_line, generate_integer_line, generate_string_line};
