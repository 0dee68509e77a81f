//! Git History Viewer - paginated commit history over HTTP
//!
//! # Usage
//! ```bash
//! git-history /path/to/repository              # Serve one repository
//! git-history core=/srv/core tools=/srv/tools  # Serve several, by name
//! git-history . --open                         # Serve and open browser
//! ```

use std::sync::Arc;

use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use git_history::config::{PagingConfig, RepoSpec, ServerConfig};
use git_history::pager::{DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE};
use git_history::routes::{self, AppState};
use git_history::view::history_uri;

/// Git History Viewer - Browse commit history in your browser
#[derive(Parser)]
#[command(name = "git-history")]
#[command(about = "Paginated commit history for git repositories", long_about = None)]
struct Cli {
    /// Repositories to serve, as PATH or NAME=PATH
    #[arg(value_name = "REPO", required = true)]
    repos: Vec<RepoSpec>,

    /// Open browser automatically after starting
    #[arg(short, long)]
    open: bool,

    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to run the server on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Page size used when a request does not specify one
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    default_page_size: usize,

    /// Largest page size a request may ask for
    #[arg(long, default_value_t = DEFAULT_MAX_PAGE_SIZE)]
    max_page_size: usize,
}

impl Cli {
    fn into_config(self) -> (ServerConfig, bool) {
        let config = ServerConfig {
            host: self.host,
            port: self.port,
            repositories: self.repos,
            paging: PagingConfig {
                default_page_size: self.default_page_size,
                max_page_size: self.max_page_size,
            },
        };
        (config, self.open)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, open_browser) = Cli::parse().into_config();

    // Initialize tracing (quieter for production)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate()?;
    let registry = config.open_repositories()?;

    let first_repo = config
        .repositories
        .first()
        .map(|spec| spec.name.clone())
        .unwrap_or_default();

    let state = Arc::new(AppState {
        registry,
        paging: config.paging,
    });

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_router(state.clone()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {} (try --port <PORT>)", addr, e))?;

    let url = format!("http://{}", addr);
    println!();
    println!("  Git History Viewer");
    println!();
    for repo in state.registry.iter() {
        println!("  {:<12} {}{}", repo.name, url, history_uri(&repo.name, None, None));
    }
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    if open_browser {
        if let Err(e) = open::that(format!("{}{}", url, history_uri(&first_repo, None, None))) {
            eprintln!("  Warning: Could not open browser: {}", e);
        }
    }

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
        println!("\n  Shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
