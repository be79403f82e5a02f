use anyhow::Result;
use clap::Parser;
use records_api::config::{self, Config, Overrides};
use records_api::server;
use tracing_subscriber::EnvFilter;

/// Count-record and key-value HTTP service.
#[derive(Parser)]
#[command(name = "records-api")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database login username (overrides DB_USER)
    #[arg(long)]
    db_username: Option<String>,

    /// Database login password (overrides DB_PASSWORD)
    #[arg(long)]
    db_password: Option<String>,

    /// Database host address (overrides DB_HOST)
    #[arg(long)]
    db_host: Option<String>,

    /// Default database name (overrides DB_NAME)
    #[arg(long)]
    db_name: Option<String>,

    /// Bind address, e.g. 0.0.0.0:8080 (overrides LISTEN / PORT)
    #[arg(long)]
    listen: Option<String>,
}

impl From<Cli> for Overrides {
    fn from(cli: Cli) -> Self {
        Self {
            db_username: cli.db_username,
            db_password: cli.db_password,
            db_host: cli.db_host,
            db_name: cli.db_name,
            listen: cli.listen,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let overrides = Overrides::from(Cli::parse());
    let config = config::load(&overrides)?;

    init_tracing(&config);
    config.print_summary();

    tracing::info!(
        "records-api {} is now running. Press Ctrl+C to interrupt.",
        env!("CARGO_PKG_VERSION")
    );

    server::run(config).await
}

/// Installs the global subscriber; `RUST_LOG` wins over the configured level.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
