// starmap entry point.
// Parses the CLI, resolves the profile, and renders it as a TUI or JSON.

mod app;
mod ui;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use starmap::cache::{CacheKeys, CacheStore, FileCache, MemoryCache, log_path};
use starmap::derive::present;
use starmap::github::{GitHubSource, OfflineSource, ProfileSource};
use starmap::{Config, ResolveContext, ResolvedDataset, Resolver, Result};

use crate::app::App;

#[derive(Debug, Parser)]
#[command(name = "starmap", version, about = "Browse a GitHub profile's projects, skills, and activity")]
struct Cli {
    /// Path to config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// GitHub username to show (the built-in offline data always describes the default user)
    #[arg(short, long, global = true, env = "STARMAP_USER")]
    user: Option<String>,

    /// GitHub API base URL
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Skip the network and use cached or built-in data
    #[arg(long, global = true)]
    offline: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Show the interactive dashboard (default)
    Show,
    /// Print the resolved dataset and derived views as JSON
    Json {
        /// Seed for the constellation layout
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show cache location and freshness
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(user) = cli.user {
        config.username = user;
    }
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }
    config.validate()?;

    let command = cli.command.unwrap_or(Command::Show);
    let cache_dir = config.resolved_cache_dir();
    init_tracing(
        cli.verbose,
        matches!(command, Command::Show),
        cache_dir.as_deref(),
    );

    let cache: Arc<dyn CacheStore> = match &cache_dir {
        Some(dir) => Arc::new(FileCache::new(dir, config.cache_ttl())),
        None => {
            tracing::warn!("no cache directory available, caching in memory only");
            Arc::new(MemoryCache::new(config.cache_ttl()))
        }
    };

    match command {
        Command::Status => {
            print_status(&config, &*cache, cache_dir.as_deref());
            Ok(())
        }
        Command::Json { seed } => {
            let dataset = resolve(&config, cache, cli.offline).await?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let presentation = present(&dataset, &config.display, Utc::now(), &mut rng);
            let output = serde_json::json!({
                "dataset": dataset,
                "presentation": presentation,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Command::Show => {
            let dataset = resolve(&config, cache, cli.offline).await?;
            let mut rng = StdRng::from_entropy();
            let presentation = present(&dataset, &config.display, Utc::now(), &mut rng);

            let mut terminal = ratatui::init();
            let result = App::with_entropy(dataset, presentation).run(&mut terminal);
            ratatui::restore();
            result?;
            Ok(())
        }
    }
}

async fn resolve(config: &Config, cache: Arc<dyn CacheStore>, offline: bool) -> Result<ResolvedDataset> {
    let source: Arc<dyn ProfileSource> = if offline {
        Arc::new(OfflineSource)
    } else {
        Arc::new(GitHubSource::from_config(config)?)
    };
    let resolver = Resolver::new(source, cache, ResolveContext::from_config(config));
    Ok(resolver.resolve().await)
}

fn print_status(config: &Config, cache: &dyn CacheStore, cache_dir: Option<&Path>) {
    let keys = CacheKeys::for_user(&config.username);

    println!("User:       {}", config.username);
    match cache_dir {
        Some(dir) => println!("Cache dir:  {}", dir.display()),
        None => println!("Cache dir:  (unavailable)"),
    }
    match cache.last_written_at() {
        Some(written) => println!("Written at: {}", written.format("%Y-%m-%d %H:%M:%S UTC")),
        None => println!("Written at: never"),
    }
    println!(
        "Freshness:  {} (ttl {}s)",
        if cache.is_fresh() { "fresh" } else { "stale" },
        config.cache_ttl_secs
    );
    for key in [&keys.identity, &keys.repositories] {
        let present = if cache.read(key).is_some() { "present" } else { "missing" };
        println!("  {:<32} {}", key, present);
    }
}

/// Log to stderr, or to a file while the dashboard owns the terminal.
fn init_tracing(verbose: bool, tui: bool, cache_dir: Option<&Path>) {
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }))
    };

    if !tui {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    let Some(dir) = cache_dir else {
        return;
    };
    if std::fs::create_dir_all(dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path(dir))
    else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}
