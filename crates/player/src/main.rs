//! Human-vs-bot chess in the terminal
//!
//! - Board drawn from your side with Unicode pieces
//! - Moves typed as `e2e4` or `e2 e4`
//! - A minimax bot answering for the other color
//!
//! Settings come from built-in defaults, then `--config <file>`, then flags.

mod app;
mod board;
mod command;
mod config;
mod session;

use std::path::PathBuf;

use anyhow::Context;
use chess_core::{Color, Game};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use app::App;
use config::{Overrides, PlayerConfig};
use session::Session;

/// Play chess against a minimax bot
#[derive(Parser)]
#[command(name = "chess_player")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Your color; the board is drawn from this side and the bot plays the other
    #[arg(long, value_enum)]
    color: Option<Side>,

    /// Bot search depth in plies
    #[arg(long)]
    depth: Option<u8>,

    /// Start with the bot switched off
    #[arg(long)]
    no_bot: bool,

    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from this position instead of the initial one
    #[arg(long)]
    fen: Option<String>,

    /// Log search details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let overrides = Overrides {
        human_color: cli.color.map(Color::from),
        depth: cli.depth,
        no_bot: cli.no_bot,
    };
    let config = PlayerConfig::resolve(cli.config.as_deref(), overrides)
        .context("failed to load settings")?;

    let session = match &cli.fen {
        Some(fen) => {
            let game = Game::from_fen(fen).with_context(|| format!("bad --fen '{fen}'"))?;
            Session::with_game(game, &config)
        }
        None => Session::new(&config),
    };

    App::new(session, &config)?.run().await
}
