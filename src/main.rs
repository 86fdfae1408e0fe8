use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use snaplink::config::{Config, load_from_env};
use snaplink::server;

/// URL shortener with click counting, expiring links, custom aliases and QR codes.
#[derive(Parser)]
#[command(name = "snaplink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Bind address, overrides LISTEN (e.g. 127.0.0.1:8080)
        #[arg(short, long)]
        listen: Option<String>,
    },

    /// Apply database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve { listen: None }) {
        Command::Serve { listen } => {
            let mut config = Config::from_env()?;
            if let Some(listen) = listen {
                config.listen_addr = listen;
            }
            config.validate()?;

            init_tracing(&config);
            config.print_summary();

            server::run(config).await
        }
        Command::Migrate => {
            let config = load_from_env()?;
            init_tracing(&config);

            server::migrate(config).await
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
