use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use benchgen::{
    fs, line,
    preset::Preset,
    random::{Alphabet, ZeroDenominator, LEGALS},
};

fn parse_hex_string(s: &str) -> Result<[u8; 32], String> {
    if s.len() != 64 {
        return Err("Input string must be exactly 64 characters long".to_string());
    }

    match hex::decode(s) {
        Ok(bytes) => bytes
            .try_into()
            .map_err(|_| "Decoded seed is not 32 bytes long".to_string()),
        Err(e) => Err(format!("Failed to decode hex string: {}", e)),
    }
}

/// turns preset names into presets, `all` standing for every one of them
fn select_presets(names: &[String], all: bool) -> Result<Vec<Preset>> {
    if all || names.iter().any(|name| name == "all") {
        return Ok(Preset::all());
    }
    if names.is_empty() {
        return Err(anyhow!("no preset given, try `all`"));
    }

    Ok(names
        .iter()
        .map(|name| name.parse::<Preset>())
        .collect::<Result<Vec<_>, _>>()?)
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// 32 bytes of hex to seed the PRNG with, drawn at random if not given
    #[arg(long, value_parser = parse_hex_string, global = true)]
    prng_seed: Option<[u8; 32]>,

    /// do not show progress bars
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    /// Lines of bounded integers.
    Ints {
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short = 'n', long)]
        lines: usize,
        #[arg(short = 'k', long, default_value_t = 1)]
        per_line: usize,
        #[arg(long, allow_negative_numbers = true)]
        low: i64,
        #[arg(long, allow_negative_numbers = true)]
        high: i64,
    },
    /// Lines of ratios of bounded integers.
    Doubles {
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short = 'n', long)]
        lines: usize,
        #[arg(short = 'k', long, default_value_t = 1)]
        per_line: usize,
        #[arg(long, allow_negative_numbers = true)]
        num_low: i64,
        #[arg(long, allow_negative_numbers = true)]
        num_high: i64,
        #[arg(long, allow_negative_numbers = true)]
        den_low: i64,
        #[arg(long, allow_negative_numbers = true)]
        den_high: i64,
        /// number of fractional digits
        #[arg(short, long, default_value_t = 4)]
        precision: usize,
        /// either `resample` or `skip`
        #[arg(long, default_value_t = ZeroDenominator::Resample)]
        zero_denominator: ZeroDenominator,
    },
    /// Lines of random strings.
    Strings {
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short = 'n', long)]
        lines: usize,
        #[arg(short = 'k', long, default_value_t = 1)]
        per_line: usize,
        #[arg(long)]
        min_len: usize,
        #[arg(long)]
        max_len: usize,
        #[arg(long, default_value = LEGALS)]
        alphabet: String,
    },
    /// The historical benchmark data sets.
    Preset {
        /// comma-separated preset names, or `all`
        #[arg(num_args = 0.., value_delimiter = ',')]
        presets: Vec<String>,
        /// generate every preset
        #[arg(short, long)]
        all: bool,
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,
        /// override the number of lines of every preset
        #[arg(short = 'n', long)]
        lines: Option<usize>,
    },
}

fn progress_bar(len: usize, msg: String, hidden: bool) -> Result<ProgressBar> {
    if hidden {
        return Ok(ProgressBar::hidden());
    }

    let style = ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40.yellow/orange} {pos:>10}/{len:10} {msg}",
    )?
    .progress_chars("##-");
    Ok(ProgressBar::new(len as u64)
        .with_style(style)
        .with_message(msg))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("cannot init logger: {}", e))?;

    let cli = Cli::parse();

    let seed = cli.prng_seed.unwrap_or_else(rand::random);
    info!("PRNG seed: {}", hex::encode(seed));
    let mut rng = StdRng::from_seed(seed);

    match cli.command {
        Commands::Ints {
            output,
            lines,
            per_line,
            low,
            high,
        } => {
            let pb = progress_bar(lines, format!("{:?}", output), cli.no_progress)?;
            fs::write_file(
                &output,
                lines,
                &mut rng,
                |rng| line::generate_integer_line(rng, per_line, low, high),
                Some(&pb),
            )?;
            pb.finish();
        }
        Commands::Doubles {
            output,
            lines,
            per_line,
            num_low,
            num_high,
            den_low,
            den_high,
            precision,
            zero_denominator,
        } => {
            let pb = progress_bar(lines, format!("{:?}", output), cli.no_progress)?;
            fs::write_file(
                &output,
                lines,
                &mut rng,
                |rng| {
                    line::generate_double_line(
                        rng,
                        per_line,
                        num_low..=num_high,
                        den_low..=den_high,
                        precision,
                        zero_denominator,
                    )
                },
                Some(&pb),
            )?;
            pb.finish();
        }
        Commands::Strings {
            output,
            lines,
            per_line,
            min_len,
            max_len,
            alphabet,
        } => {
            let alphabet = Alphabet::new(&alphabet)?;
            let pb = progress_bar(lines, format!("{:?}", output), cli.no_progress)?;
            fs::write_file(
                &output,
                lines,
                &mut rng,
                |rng| line::generate_string_line(rng, per_line, &alphabet, min_len, max_len),
                Some(&pb),
            )?;
            pb.finish();
        }
        Commands::Preset {
            presets,
            all,
            directory,
            lines,
        } => {
            for preset in select_presets(&presets, all)? {
                let job = match lines {
                    Some(lines) => preset.job().with_lines(lines),
                    None => preset.job(),
                };
                let pb = progress_bar(job.lines, preset.to_string(), cli.no_progress)?;
                let path = job.run(&directory, &mut rng, Some(&pb))?;
                pb.finish_with_message(format!("{} done", preset));
                info!("`{}` written to `{:?}`", preset, path);
            }
        }
    }

    Ok(())
}
