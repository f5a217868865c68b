//! Write generated lines to the disk.
use std::{
    fs::File,
    io::{prelude::*, BufWriter},
    path::Path,
};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rand::RngCore;
use tracing::{debug, info};

use crate::error::BenchgenError;

/// Writes every line of `lines` to `writer`, each one followed by a single
/// `\n`.
///
/// - stops at the first line that could not be generated
/// - `progress`, if any, is advanced once per line
pub fn write_lines<W: Write>(
    writer: &mut W,
    lines: impl Iterator<Item = Result<String, BenchgenError>>,
    progress: Option<&ProgressBar>,
) -> Result<usize> {
    let mut nb_lines = 0;
    for line in lines {
        let line = line?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;

        nb_lines += 1;
        if let Some(bar) = progress {
            bar.inc(1);
        }
    }

    Ok(nb_lines)
}

/// Generates `line_count` lines with `generator` and writes them to `path`.
///
/// Any existing content at `path` is replaced. The first line is generated
/// before the file is created, so that a generator with invalid parameters
/// does not truncate an existing file.
///
/// > **Note**
/// >
/// > `generator` gets the random source as argument instead of capturing it,
/// > which leaves it free to keep some state of its own from one line to the
/// > next.
pub fn write_file<R, F>(
    path: &Path,
    line_count: usize,
    rng: &mut R,
    mut generator: F,
    progress: Option<&ProgressBar>,
) -> Result<()>
where
    R: RngCore,
    F: FnMut(&mut R) -> Result<String, BenchgenError>,
{
    let mut lines = (0..line_count).map(|_| generator(rng));

    debug!("generating the first line of `{:?}`", path);
    let first = lines.next().transpose()?;

    info!("writing {} lines to `{:?}`", line_count, path);
    let file = File::create(path).with_context(|| format!("could not create `{:?}`", path))?;
    let mut writer = BufWriter::new(file);

    let nb_lines = write_lines(&mut writer, first.map(Ok).into_iter().chain(lines), progress)
        .with_context(|| format!("could not generate or write `{:?}`", path))?;
    writer
        .flush()
        .with_context(|| format!("could not flush `{:?}`", path))?;
    debug!("{} lines written to `{:?}`", nb_lines, path);

    Ok(())
}
