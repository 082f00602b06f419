use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli {
    pub mod server;
}

/// nebjtech - NEBJ Tech landing site
#[derive(Parser)]
#[command(name = "nebjtech")]
#[command(about = "Landing page and contact form for NEBJ Tech", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = nebjtech::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    nebjtech::observability::init_observability(
        "nebjtech",
        env!("CARGO_PKG_VERSION"),
        &config.logging.level,
        config.logging.json,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
    }
}
