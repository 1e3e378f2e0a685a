use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf::{api, config::ServerConfig, db, service::BookService};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "CRUD HTTP API for a collection of books")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port for HTTP API
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind to
        #[arg(long)]
        host: Option<String>,

        /// SQLite database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Use a throwaway in-memory database
        #[arg(long, conflicts_with = "database")]
        memory: bool,

        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                "bookshelf=debug,bookshelf_core=debug,tower_http=debug".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match cli.command {
        Some(Commands::Serve {
            port,
            host,
            database,
            memory,
            config,
        }) => {
            let mut cfg = match config {
                Some(path) => ServerConfig::load(path)?,
                None => ServerConfig::default(),
            };
            if let Some(port) = port {
                cfg.port = port;
            }
            if let Some(host) = host {
                cfg.host = host;
            }
            if database.is_some() {
                cfg.database = database;
                cfg.memory = false;
            }
            if memory {
                cfg.memory = true;
            }
            cfg
        }
        // Default: start server
        None => ServerConfig::default(),
    };

    serve(config).await
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let db = if config.memory {
        tracing::warn!("Using in-memory database, books are lost on exit");
        db::Database::open_memory()?
    } else {
        match &config.database {
            Some(path) => db::Database::open(path)?,
            None => db::Database::open_default()?,
        }
    };
    db.migrate()?;

    let app = api::router(BookService::new(db), &config.cors_origins);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Bookshelf server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Bookshelf server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
