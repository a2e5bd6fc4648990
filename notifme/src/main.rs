//! # notifme
//!
//! Render the NotifMe landing page to a static HTML file, or preview it on
//! a local port.
//!
//! ```bash
//! notifme render --out dist/index.html
//! notifme render --stdout > index.html
//! notifme serve --port 8080 --open
//! ```

mod cli;
mod config;
mod error;
mod render;
mod serve;

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use notifme_site::render_page;
use tracing::{debug, info};

use cli::{Cli, Command, RenderArgs, ServeArgs};
use config::SiteConfig;

fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn run_render(config: &SiteConfig, args: RenderArgs) -> Result<()> {
    let html = render_page(&config.assets);
    debug!(bytes = html.len(), "page rendered");

    if args.stdout {
        let mut out = std::io::stdout().lock();
        out.write_all(html.as_bytes())
            .context("failed to write page to stdout")?;
        return Ok(());
    }

    let path = args.out.unwrap_or_else(|| config.output.clone());
    render::write_document(&path, &html)?;
    println!("Page written to: {}", path.display());
    Ok(())
}

fn run_serve(config: &SiteConfig, args: ServeArgs) -> Result<()> {
    let page: Arc<str> = Arc::from(render_page(&config.assets));
    let port = args.port.unwrap_or(config.port);

    let (addr, handle) = serve::start(port, page, args.once)?;
    let url = serve::base_url(&addr);
    println!("Serving {}", url);
    info!("Preview ready (Ctrl+C to stop)");

    if args.open {
        serve::open_in_browser(&url);
    }

    handle
        .join()
        .map_err(|_| anyhow::anyhow!("preview server thread panicked"))?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let config = SiteConfig::load(cli.config.as_deref(), &cwd)?;
    debug!(?config, "effective config");

    match cli.command {
        Command::Render(args) => run_render(&config, args),
        Command::Serve(args) => run_serve(&config, args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
