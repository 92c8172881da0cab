use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use vsm_core::builder::{ensure_weights, BuildOutcome};
use vsm_core::config::{DEFAULT_CORPUS_DIR, DEFAULT_INDEX_DIR, DEFAULT_STOPWORDS_FILE};
use vsm_core::rank::format_ranking;
use vsm_core::{EngineConfig, SearchEngine};

#[derive(Parser)]
#[command(name = "vsm-indexer")]
#[command(about = "Build TF-IDF weight tables and run ranked queries against them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and save the TF-IDF and IDF tables unless they already exist
    Build {
        /// Directory with one <doc_id>.txt file per document
        #[arg(long, env = "VSM_CORPUS", default_value = DEFAULT_CORPUS_DIR)]
        corpus: PathBuf,
        /// Line-delimited stopword list
        #[arg(long, env = "VSM_STOPWORDS", default_value = DEFAULT_STOPWORDS_FILE)]
        stopwords: PathBuf,
        /// Directory for tf-idf.csv and idf.csv
        #[arg(long, env = "VSM_INDEX", default_value = DEFAULT_INDEX_DIR)]
        index: PathBuf,
        /// Rebuild even if both tables exist
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Rank documents for a query and print their ids
    Query {
        /// Free-text query
        text: String,
        #[arg(long, env = "VSM_STOPWORDS", default_value = DEFAULT_STOPWORDS_FILE)]
        stopwords: PathBuf,
        #[arg(long, env = "VSM_INDEX", default_value = DEFAULT_INDEX_DIR)]
        index: PathBuf,
        /// Print one "<doc_id> <score>" line per hit instead of the id list
        #[arg(long, default_value_t = false)]
        scores: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { corpus, stopwords, index, force } => {
            let config = EngineConfig { corpus_dir: corpus, stopwords_path: stopwords, index_dir: index };
            match ensure_weights(&config, force)? {
                BuildOutcome::Built { num_docs, num_terms } => {
                    tracing::info!(num_docs, num_terms, index = %config.index_dir.display(), "index build complete");
                }
                BuildOutcome::Skipped => println!("Weights are already calculated"),
            }
            Ok(())
        }
        Commands::Query { text, stopwords, index, scores } => {
            let config = EngineConfig { stopwords_path: stopwords, index_dir: index, ..EngineConfig::default() };
            let engine = SearchEngine::open(&config)?;
            let hits = engine.search(&text);
            if scores && !hits.is_empty() {
                for hit in &hits {
                    println!("{} {:.6}", hit.doc_id, hit.score);
                }
            } else {
                println!("{}", format_ranking(&hits));
            }
            Ok(())
        }
    }
}
