use anyhow::Result;
use clap::{Parser, Subcommand};
use storefind::{store, SearchIndex};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "storefind")]
#[command(about = "Search a static-site content store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a free-text query against a store file
    Search {
        /// Store file (JSON array or generated JS store)
        #[arg(long)]
        store: String,
        /// Maximum number of hits to print
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Emit one JSON object per hit instead of plain text
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Query text
        query: String,
    },
    /// Print record and token counts for a store file
    Stats {
        /// Store file (JSON array or generated JS store)
        #[arg(long)]
        store: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            store,
            limit,
            json,
            query,
        } => run_search(&store, &query, limit, json),
        Commands::Stats { store } => run_stats(&store),
    }
}

fn run_search(store_path: &str, query: &str, limit: usize, json: bool) -> Result<()> {
    let index = load_index(store_path)?;
    let hits = index.query_scored(query);
    tracing::info!(query, total_hits = hits.len(), "query complete");

    for hit in hits.into_iter().take(limit.max(1)) {
        if json {
            let line = serde_json::json!({
                "score": hit.score,
                "title": hit.record.title,
                "url": hit.record.url,
                "teaser": hit.record.teaser,
            });
            println!("{line}");
        } else {
            println!("{:>3}  {}  {}", hit.score, hit.record.url, hit.record.title);
        }
    }
    Ok(())
}

fn run_stats(store_path: &str) -> Result<()> {
    let index = load_index(store_path)?;
    println!("records: {}", index.len());
    println!("tokens:  {}", index.num_tokens());
    Ok(())
}

fn load_index(store_path: &str) -> Result<SearchIndex> {
    let records = store::from_path(store_path)?;
    tracing::info!(store = store_path, num_records = records.len(), "store loaded");
    Ok(SearchIndex::build(records)?)
}
