//! Pokedex CLI - An interactive PokeAPI client
//!
//! Browses location areas, explores encounters and catches pokemon, with
//! responses held in a time-expiring cache swept by a background task.

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::{repl, Config, Dispatcher, PokeApiClient, Pokedex};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the PokeAPI client and its response cache
/// 4. Run the REPL on stdin/stdout until `exit` or end of input
/// 5. Stop the cache sweeper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the prompt, override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_ttl={}ms, page_size={}, catch_benchmark={}, write_back={}",
        config.base_url,
        config.cache_ttl_ms,
        config.page_size,
        config.catch_benchmark,
        config.cache_write_back
    );

    let client = PokeApiClient::from_config(&config).context("Invalid POKEAPI_BASE_URL")?;
    let mut dispatcher = Dispatcher::new(client, &config);
    let mut pokedex = Pokedex::new();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(stdin, &mut stdout, &mut dispatcher, &mut pokedex)
        .await
        .context("REPL terminated on an I/O error")?;

    dispatcher.into_client().shutdown().await;
    info!("Pokedex closed with {} caught", pokedex.len());

    Ok(())
}
