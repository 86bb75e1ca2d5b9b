use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use redsim_common::COLOMBIA_BOUNDS;
use redsim_engine::{audit, colombia_sampler, reproject_users, CorpusBuilder};
use redsim_store::DatasetDoc;

#[derive(Parser)]
#[command(name = "redsim")]
#[command(about = "Fictitious social-media dataset synthesizer")]
#[command(version)]
struct Cli {
    /// Path to the dataset document
    #[arg(
        long,
        global = true,
        env = "REDSIM_DATASET",
        default_value = "public/data/dataset.json"
    )]
    dataset: PathBuf,

    /// Seed for the random generator (omit for OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of posts and merge it into the dataset
    Generate {
        /// Number of posts to generate
        #[arg(long, default_value_t = 5000)]
        count: usize,
    },

    /// Re-project every geocoded user into the bounding region
    Redistribute {
        /// Backup path (defaults to <dataset dir>/dataset_backup_original.json)
        #[arg(long)]
        backup: Option<PathBuf>,
    },

    /// Audit the geographic distribution; exits nonzero if any user
    /// falls outside the bounding region
    Verify,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("redsim=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match cli.command {
        Commands::Generate { count } => {
            cmd_generate(&cli.dataset, count, &mut rng)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Redistribute { backup } => {
            cmd_redistribute(&cli.dataset, backup, &mut rng)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Verify => cmd_verify(&cli.dataset),
    }
}

fn cmd_generate(dataset: &Path, count: usize, rng: &mut StdRng) -> Result<()> {
    let mut corpus = redsim_store::load_or_empty(dataset)?.into_corpus()?;
    info!(
        users = corpus.users.len(),
        posts = corpus.posts.len(),
        "loaded corpus"
    );

    let sampler = colombia_sampler();
    let builder = CorpusBuilder::new(&sampler, Utc::now());
    let (batch, stats) = builder.build(count, rng);
    corpus.absorb(batch);

    redsim_store::save(dataset, &DatasetDoc::from_corpus(corpus))?;
    info!(path = %dataset.display(), "dataset saved. {stats}");
    Ok(())
}

fn cmd_redistribute(dataset: &Path, backup: Option<PathBuf>, rng: &mut StdRng) -> Result<()> {
    // Parse first: a malformed document must abort before any write.
    let mut doc = redsim_store::load(dataset)?;

    let backup_path = backup.unwrap_or_else(|| {
        dataset
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("dataset_backup_original.json")
    });
    redsim_store::backup(dataset, &backup_path)?;

    let sampler = colombia_sampler();
    let stats = reproject_users(&mut doc.users, &sampler, rng);
    redsim_store::save(dataset, &doc)?;
    info!(path = %dataset.display(), "re-projection complete: {stats}");
    Ok(())
}

fn cmd_verify(dataset: &Path) -> Result<ExitCode> {
    let corpus = redsim_store::load(dataset)?.into_corpus()?;
    let report = audit(&corpus, COLOMBIA_BOUNDS);
    println!("{report}");

    if report.all_in_region() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
