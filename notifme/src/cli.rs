//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notifme")]
#[command(about = "Render or preview the NotifMe landing page")]
#[command(version)]
pub struct Cli {
    /// Config file (default: ./notifme.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the rendered page to a file
    Render(RenderArgs),
    /// Serve the rendered page on 127.0.0.1 for local preview
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output path (overrides `output` from config)
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on (overrides `port` from config; 0 picks a free one)
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Exit after answering a single request
    #[arg(long)]
    pub once: bool,

    /// Open the preview in the default browser
    #[arg(long)]
    pub open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_with_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["notifme", "render", "--out", "site.html", "--log-level", "debug"]);

        assert_eq!(cli.log_level, "debug");
        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.out, Some(PathBuf::from("site.html")));
                assert!(!args.stdout);
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn stdout_conflicts_with_out() {
        let res = Cli::try_parse_from(["notifme", "render", "--stdout", "--out", "x.html"]);
        assert!(res.is_err());
    }

    #[test]
    fn parses_serve_flags() {
        let cli = Cli::parse_from(["notifme", "serve", "-p", "8080", "--once"]);

        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.once);
                assert!(!args.open);
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }
}
