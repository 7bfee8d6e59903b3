use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use quillprint::config::Config;
use quillprint::matching::dataset::ReferenceSet;
use quillprint::matching::detector::{self, AuthorshipDetector};
use quillprint::matching::weights::FeatureWeights;
use quillprint::output::terminal;
use quillprint::signature::stylometric::StylometricExtractor;
use quillprint::signature::traits::SignatureExtractor;

/// Quillprint: stylometric authorship attribution.
///
/// Reduces a text to a five-feature linguistic signature and names the
/// reference author whose signature is closest.
#[derive(Parser)]
#[command(name = "quillprint", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the linguistic signature of a text
    Signature {
        /// Text file to analyze (`-` for stdin)
        text: PathBuf,

        /// Print the signature as JSON
        #[arg(long)]
        json: bool,
    },

    /// Attribute a text to the closest reference author
    Find {
        /// Text file to attribute (`-` for stdin)
        text: PathBuf,

        /// Reference dataset (overrides QUILLPRINT_DATASET)
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Comma-separated feature weights (overrides QUILLPRINT_WEIGHTS)
        #[arg(long)]
        weights: Option<String>,

        /// Show the N closest authors (overrides QUILLPRINT_TOP)
        #[arg(long)]
        top: Option<usize>,

        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare the signatures of two texts
    Compare {
        first: PathBuf,
        second: PathBuf,

        /// Comma-separated feature weights (overrides QUILLPRINT_WEIGHTS)
        #[arg(long)]
        weights: Option<String>,
    },

    /// List the authors in the reference dataset
    Dataset {
        /// Reference dataset (overrides QUILLPRINT_DATASET)
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quillprint=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Signature { text, json } => {
            let signature = with_text(&text, |reader| StylometricExtractor.extract(reader))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&signature)?);
            } else {
                signature.display(&format!("Signature of {}", text.display()));
            }
        }

        Commands::Find {
            text,
            dataset,
            weights,
            top,
            json,
        } => {
            if let Some(path) = dataset {
                config.dataset_path = path;
            }
            let weights = resolve_weights(&config, weights)?;
            let top = match top {
                Some(top) => top.max(1),
                None => config.top()?,
            };
            config.require_dataset()?;

            let detector = AuthorshipDetector::open(&config.dataset_path, weights)
                .with_context(|| {
                    format!("Failed to load dataset {}", config.dataset_path.display())
                })?;
            info!(
                dataset = %config.dataset_path.display(),
                authors = detector.references().len(),
                "Reference set ready"
            );
            if detector.references().is_empty() {
                anyhow::bail!(
                    "Reference dataset {} has no authors",
                    config.dataset_path.display()
                );
            }

            let ranked = with_text(&text, |reader| detector.rank_authors(reader))?;

            if json {
                let shown: Vec<_> = ranked.iter().take(top).collect();
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                terminal::display_ranking(&ranked, top);
            }
        }

        Commands::Compare {
            first,
            second,
            weights,
        } => {
            let weights = resolve_weights(&config, weights)?;
            let detector = AuthorshipDetector::new(ReferenceSet::default(), weights);

            let first_sig = with_text(&first, |reader| detector.calculate_signature(reader))?;
            let second_sig = with_text(&second, |reader| detector.calculate_signature(reader))?;
            let distance = detector.calculate_similarity(&first_sig, &second_sig);

            terminal::display_comparison(&first_sig, &second_sig, detector.weights(), distance);
        }

        Commands::Dataset { dataset } => {
            if let Some(path) = dataset {
                config.dataset_path = path;
            }
            config.require_dataset()?;

            let references = ReferenceSet::load(&config.dataset_path)?;
            terminal::display_references(&references);
            println!(
                "{}",
                format!("Loaded from {}", config.dataset_path.display()).dimmed()
            );
        }
    }

    Ok(())
}

/// Weights from the `--weights` flag, falling back to the configured ones.
fn resolve_weights(config: &Config, flag: Option<String>) -> Result<FeatureWeights> {
    match flag {
        Some(list) => FeatureWeights::parse(&list).context("Invalid --weights"),
        None => config.weights(),
    }
}

/// Run `f` over the text at `path`, or over stdin when the path is `-`.
fn with_text<T>(
    path: &Path,
    f: impl FnOnce(&mut dyn BufRead) -> quillprint::error::Result<T>,
) -> Result<T> {
    let result = if path == Path::new("-") {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        f(&mut reader)
    } else {
        let mut reader = detector::open_text(path)?;
        f(&mut reader)
    };
    result.with_context(|| format!("Failed to analyze {}", path.display()))
}
