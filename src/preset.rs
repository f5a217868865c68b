//! Named generation jobs.
//!
//! These are the data sets the input-reading benchmarks have always been run
//! against, with their historical file names, sizes and bounds.
use std::{
    ops::RangeInclusive,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rand::RngCore;
use tracing::{debug, info};

use crate::{
    error::BenchgenError,
    fs, line,
    random::{Alphabet, ZeroDenominator},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// 20 integers per line
    Integers,
    /// one integer per line
    IntegersSingle,
    /// one long string of symbols per line
    Strings,
    /// 10 short alphanumeric strings per line
    ShortStrings,
    /// 20 ratios per line
    Doubles,
    /// same as [`Preset::Doubles`], with only 10 lines
    DoublesSmall,
    /// one offset ratio per line, with alternating signs
    DoublesOffset,
}

impl Preset {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Integers,
            Self::IntegersSingle,
            Self::Strings,
            Self::ShortStrings,
            Self::Doubles,
            Self::DoublesSmall,
            Self::DoublesOffset,
        ]
    }

    pub fn job(&self) -> Job {
        let doubles = LineKind::Doubles {
            per_line: 20,
            numerator: -20_000_000..=20_000_000,
            denominator: -20_000_000..=20_000_000,
            precision: 4,
            policy: ZeroDenominator::Resample,
        };

        #[rustfmt::skip]
        let (filename, lines, kind) = match self {
            Self::Integers => (
                "integers.txt", 100_000,
                LineKind::Integers { per_line: 20, low: -2_000_000, high: 2_000_000 },
            ),
            Self::IntegersSingle => (
                "integers_single.txt", 5_000_000,
                LineKind::Integers { per_line: 1, low: -100_000, high: 100_000 },
            ),
            Self::Strings => (
                "strings.txt", 50_000,
                LineKind::Strings { per_line: 1, alphabet: Alphabet::symbols(), min_len: 1000, max_len: 1000 },
            ),
            Self::ShortStrings => (
                "short_strings_spaces.txt", 100_000,
                LineKind::Strings { per_line: 10, alphabet: Alphabet::legals(), min_len: 1, max_len: 50 },
            ),
            Self::Doubles => ("doubles.txt", 100_000, doubles),
            Self::DoublesSmall => ("doubles_small.txt", 10, doubles),
            Self::DoublesOffset => (
                "doubles_offset.txt", 5_000_000,
                LineKind::OffsetDoubles { per_line: 1, offset: 0..=100_000, ratio: 1_223_523..=346_346_547 },
            ),
        };

        Job {
            filename: filename.to_string(),
            lines,
            kind,
        }
    }
}

impl FromStr for Preset {
    type Err = BenchgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|p| p.to_string() == s)
            .ok_or_else(|| BenchgenError::UnknownPreset(s.to_string()))
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            Self::Integers => "integers",
            Self::IntegersSingle => "integers-single",
            Self::Strings => "strings",
            Self::ShortStrings => "short-strings",
            Self::Doubles => "doubles",
            Self::DoublesSmall => "doubles-small",
            Self::DoublesOffset => "doubles-offset",
        };
        write!(f, "{}", repr)
    }
}

/// the content of every line of a file
#[derive(Clone, Debug, PartialEq)]
pub enum LineKind {
    Integers {
        per_line: usize,
        low: i64,
        high: i64,
    },
    Doubles {
        per_line: usize,
        numerator: RangeInclusive<i64>,
        denominator: RangeInclusive<i64>,
        precision: usize,
        policy: ZeroDenominator,
    },
    Strings {
        per_line: usize,
        alphabet: Alphabet,
        min_len: usize,
        max_len: usize,
    },
    /// see [`line::generate_offset_double_line`], the sign flips from one line
    /// to the next, starting positive
    OffsetDoubles {
        per_line: usize,
        offset: RangeInclusive<i64>,
        ratio: RangeInclusive<i64>,
    },
}

/// a file to generate
#[derive(Clone, Debug, PartialEq)]
pub struct Job {
    pub filename: String,
    pub lines: usize,
    pub kind: LineKind,
}

impl Job {
    pub fn with_lines(self, lines: usize) -> Self {
        Self { lines, ..self }
    }

    /// generates the file of the job inside `directory`, creating the
    /// directory if needed
    ///
    /// returns the path to the new file.
    pub fn run(
        &self,
        directory: &Path,
        rng: &mut impl RngCore,
        progress: Option<&ProgressBar>,
    ) -> Result<PathBuf> {
        std::fs::create_dir_all(directory)
            .with_context(|| format!("could not create directory `{:?}`", directory))?;
        let path = directory.join(&self.filename);

        info!("generating `{}` ({} lines)", self.filename, self.lines);
        debug!("line kind: {:?}", self.kind);
        match &self.kind {
            LineKind::Integers {
                per_line,
                low,
                high,
            } => fs::write_file(
                &path,
                self.lines,
                rng,
                |rng| line::generate_integer_line(rng, *per_line, *low, *high),
                progress,
            )?,
            LineKind::Doubles {
                per_line,
                numerator,
                denominator,
                precision,
                policy,
            } => fs::write_file(
                &path,
                self.lines,
                rng,
                |rng| {
                    line::generate_double_line(
                        rng,
                        *per_line,
                        numerator.clone(),
                        denominator.clone(),
                        *precision,
                        *policy,
                    )
                },
                progress,
            )?,
            LineKind::Strings {
                per_line,
                alphabet,
                min_len,
                max_len,
            } => fs::write_file(
                &path,
                self.lines,
                rng,
                |rng| line::generate_string_line(rng, *per_line, alphabet, *min_len, *max_len),
                progress,
            )?,
            LineKind::OffsetDoubles {
                per_line,
                offset,
                ratio,
            } => {
                let mut negate = false;
                fs::write_file(
                    &path,
                    self.lines,
                    rng,
                    |rng| {
                        let line = line::generate_offset_double_line(
                            rng,
                            *per_line,
                            offset.clone(),
                            ratio.clone(),
                            negate,
                        );
                        negate = !negate;
                        line
                    },
                    progress,
                )?
            }
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{LineKind, Preset};
    use crate::{error::BenchgenError, random::Alphabet};

    #[test]
    fn names() {
        for preset in Preset::all() {
            assert_eq!(preset.to_string().parse::<Preset>(), Ok(preset));
        }
        assert_eq!(
            "floats".parse::<Preset>(),
            Err(BenchgenError::UnknownPreset("floats".to_string()))
        );
    }

    #[test]
    fn filenames_are_unique() {
        let mut filenames: Vec<String> = Preset::all().iter().map(|p| p.job().filename).collect();
        filenames.sort();
        filenames.dedup();
        assert_eq!(filenames.len(), Preset::all().len());
    }

    #[test]
    fn historical_jobs() {
        let job = Preset::Integers.job();
        assert_eq!(job.filename, "integers.txt");
        assert_eq!(job.lines, 100_000);
        assert_eq!(
            job.kind,
            LineKind::Integers {
                per_line: 20,
                low: -2_000_000,
                high: 2_000_000
            }
        );

        let job = Preset::Strings.job();
        assert_eq!(job.lines, 50_000);
        assert_eq!(
            job.kind,
            LineKind::Strings {
                per_line: 1,
                alphabet: Alphabet::symbols(),
                min_len: 1000,
                max_len: 1000
            }
        );

        assert_eq!(Preset::DoublesSmall.job().lines, 10);
        assert_eq!(Preset::Doubles.job().kind, Preset::DoublesSmall.job().kind);
        assert_eq!(Preset::Integers.job().with_lines(3).lines, 3);
    }

    fn run_template(preset: Preset, lines: usize, arity: usize) {
        let test_case = format!("TEST | preset: {}, lines: {}", preset, lines);

        let dir = tempfile::tempdir().unwrap();
        let directory = dir.path().join("data");
        let mut rng = StdRng::seed_from_u64(0);

        let path = preset
            .job()
            .with_lines(lines)
            .run(&directory, &mut rng, None)
            .unwrap();
        assert_eq!(path, directory.join(preset.job().filename), "{test_case}");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), lines, "{test_case}");
        assert_eq!(content.matches('\n').count(), lines, "{test_case}");
        for line in content.lines() {
            assert_eq!(
                line.split(' ').count(),
                arity,
                "bad arity for {:?}\n{test_case}",
                line
            );
        }
    }

    #[test]
    fn run() {
        run_template(Preset::Integers, 50, 20);
        run_template(Preset::IntegersSingle, 50, 1);
        run_template(Preset::Strings, 5, 1);
        run_template(Preset::ShortStrings, 50, 10);
        run_template(Preset::Doubles, 50, 20);
        run_template(Preset::DoublesSmall, 10, 20);
        run_template(Preset::DoublesOffset, 50, 1);
    }

    #[test]
    fn offset_doubles_alternate_signs() {
        let dir = tempfile::tempdir().unwrap();
        let job = super::Job {
            filename: "offsets.txt".to_string(),
            lines: 6,
            kind: LineKind::OffsetDoubles {
                per_line: 1,
                offset: 10..=10,
                ratio: 3..=3,
            },
        };

        let path = job
            .run(dir.path(), &mut StdRng::seed_from_u64(0), None)
            .unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "11\n9\n11\n9\n11\n9\n");
    }
}
