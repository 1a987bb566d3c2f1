//! EssayPass CLI - serve the EssayPass front end
//!
//! ```bash
//! essaypass serve                          # Serve frontend/dist on port 3000
//! essaypass serve --port 8080 --dist dist  # Custom port and build directory
//! essaypass routes                         # List client-side routes
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use essaypass_server::config::{DEFAULT_DIST, DEFAULT_PORT};
use essaypass_server::{start_server, ServeConfig, ROUTES};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "essaypass")]
#[command(about = "Serve the EssayPass front end", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "ESSAYPASS_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Directory produced by `trunk build`
        #[arg(short, long, env = "ESSAYPASS_DIST", default_value = DEFAULT_DIST)]
        dist: PathBuf,
    },

    /// Show client-side routes
    Routes,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port, dist } => start_server(ServeConfig::new(port, dist)).await,
        Commands::Routes => {
            cmd_routes();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_routes() {
    println!("📋 Client routes ({}):\n", ROUTES.len());
    for route in ROUTES {
        println!("  {:<28} {}", route.path, route.page);
    }
    println!("\n  Any other path is served index.html.");
}
