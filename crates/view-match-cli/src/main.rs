//! vmatch - Command-line interface for view label and selector matching
//!
//! Usage:
//!     vmatch [OPTIONS] <COMMAND>
//!
//! Environment Variables:
//!     VIEW_MATCH_MAX_DISTANCE: Largest distance accepted by rank/suggest (default: 3)
//!     VIEW_MATCH_SUGGEST_LIMIT: Maximum number of ranked labels printed (default: 5)
//!     VIEW_MATCH_KATO_ENABLED: Run kato without --enable
//!     VIEW_MATCH_DEBUG_DISTANCE: Log progress of long distance computations (with -v)
//!     RUST_LOG: Log filter (overrides --verbose)

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use view_match::{
    best_match, levenshtein_distance, snapshot_distance, suggest, Kato, MatchOptions, Selector,
    Sequence, MATCHING_CONFIG,
};

/// Fuzzy matching of Android view labels and selectors
#[derive(Parser, Debug)]
#[command(name = "vmatch")]
#[command(about = "Fuzzy matching of Android view labels and selectors")]
#[command(after_help = r#"Examples:
    # Edit distance between two labels
    vmatch distance "Wi-Fi" "WiFi"

    # Compare raw UTF-8 bytes instead of characters
    vmatch distance --bytes "café" "cafe"

    # Rank labels read from a file, one per line
    vmatch rank "Sond" --file labels.txt

    # Best match among labels given on the command line
    vmatch suggest "Dsiplay" Display Sound Storage

    # Suggest selectors after a failed lookup
    vmatch kato --enable '{"text": "Dsiplay"}' --window window.json

    # Normalized distance between two view-tree snapshots
    vmatch snapshot before.json after.json
"#)]
struct Cli {
    /// Log debug output
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the edit distance between two values
    Distance {
        a: String,
        b: String,

        /// Compare UTF-8 bytes instead of characters
        #[arg(long)]
        bytes: bool,
    },

    /// Print labels ranked by distance, closest first
    Rank(LabelArgs),

    /// Print the closest label, exit with status 1 if none is close enough
    Suggest(LabelArgs),

    /// Rank the selectors of a window against a wanted selector
    Kato {
        /// Wanted selector as JSON, e.g. '{"text": "OK"}'
        wanted: String,

        /// JSON file holding an array of selectors
        #[arg(short = 'w', long, value_name = "PATH")]
        window: PathBuf,

        /// Enable Kato regardless of VIEW_MATCH_KATO_ENABLED
        #[arg(short = 'e', long)]
        enable: bool,
    },

    /// Print the normalized distance between two JSON snapshots
    Snapshot { a: PathBuf, b: PathBuf },
}

#[derive(Args, Debug)]
struct LabelArgs {
    /// Label to look for
    wanted: String,

    /// Candidate labels (read from --file or stdin when omitted)
    labels: Vec<String>,

    /// File with one candidate label per line
    #[arg(short = 'f', long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Largest accepted distance [default: VIEW_MATCH_MAX_DISTANCE or 3]
    #[arg(long)]
    max_distance: Option<usize>,

    /// Maximum number of labels printed [default: VIEW_MATCH_SUGGEST_LIMIT or 5]
    #[arg(long)]
    limit: Option<usize>,
}

impl LabelArgs {
    fn options(&self) -> MatchOptions {
        MatchOptions::new()
            .with_max_distance(self.max_distance.unwrap_or(MATCHING_CONFIG.max_distance))
            .with_limit(self.limit.unwrap_or(MATCHING_CONFIG.suggest_limit))
    }

    /// Candidate labels from the arguments, the file, or stdin, in that order
    fn candidates(&self) -> Result<Vec<String>> {
        if !self.labels.is_empty() {
            return Ok(self.labels.clone());
        }

        match &self.file {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read labels from {}", path.display()))?;
                Ok(non_empty_lines(content.lines()))
            }
            None => {
                let lines = io::stdin()
                    .lock()
                    .lines()
                    .collect::<io::Result<Vec<String>>>()
                    .context("Failed to read labels from stdin")?;
                Ok(non_empty_lines(lines.iter().map(String::as_str)))
            }
        }
    }
}

fn non_empty_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn run_distance(a: &str, b: &str, bytes: bool) -> Result<()> {
    let (a, b) = if bytes {
        (Sequence::from(a.as_bytes()), Sequence::from(b.as_bytes()))
    } else {
        (Sequence::from(a), Sequence::from(b))
    };
    let distance = levenshtein_distance(Some(a), Some(b))?;
    println!("{}", distance);
    Ok(())
}

fn run_rank(args: &LabelArgs) -> Result<()> {
    let labels = args.candidates()?;
    let options = args.options();
    debug!("ranking {} labels with {:?}", labels.len(), options);

    for ranked in suggest(&args.wanted, &labels, &options) {
        println!("{}\t{}", ranked.distance, ranked.candidate);
    }
    Ok(())
}

/// Returns whether a label was close enough to print
fn run_suggest(args: &LabelArgs) -> Result<bool> {
    let labels = args.candidates()?;
    let options = args.options();

    if labels.iter().any(|label| label == &args.wanted) {
        println!("{}", args.wanted);
        return Ok(true);
    }

    match best_match(&args.wanted, &labels, options.max_distance) {
        Some(label) => {
            println!("{}", label);
            Ok(true)
        }
        None => {
            eprintln!(
                "No label within distance {} of {:?}",
                options.max_distance, args.wanted
            );
            Ok(false)
        }
    }
}

fn run_kato(wanted: &str, window: &Path, enable: bool) -> Result<()> {
    let wanted: Selector =
        serde_json::from_str(wanted).context("Wanted selector is not valid JSON")?;
    let selectors: Vec<Selector> = serde_json::from_value(read_json(window)?)
        .with_context(|| format!("{} is not a JSON array of selectors", window.display()))?;

    let mut kato = Kato::new();
    if enable {
        kato.enable();
    }
    let report = kato
        .find_me_the_selectors(&wanted, selectors)
        .ok_or_else(|| anyhow!("Kato is disabled, pass --enable or set VIEW_MATCH_KATO_ENABLED=1"))?;
    print!("{}", report);

    if let Some(closest) = kato.closest() {
        println!("Closest: {}", closest);
    }
    Ok(())
}

fn run_snapshot(a: &Path, b: &Path) -> Result<()> {
    let before = read_json(a)?;
    let after = read_json(b)?;
    let distance = snapshot_distance(&before, &after)?;
    println!("{:.6}", distance);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Distance { a, b, bytes } => run_distance(a, b, *bytes)?,
        Command::Rank(args) => run_rank(args)?,
        Command::Suggest(args) => {
            if !run_suggest(args)? {
                std::process::exit(1);
            }
        }
        Command::Kato {
            wanted,
            window,
            enable,
        } => run_kato(wanted, window, *enable)?,
        Command::Snapshot { a, b } => run_snapshot(a, b)?,
    }

    Ok(())
}
