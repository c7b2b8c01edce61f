use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use env_logger::{Env, Target};

use self::{snake::SnakeArg, tetris::TetrisArg};

mod snake;
mod tetris;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Write logs to this file (filtered by `RUST_LOG`, default `info`)
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,
    /// Which game to play
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play the falling-block game (default)
    Tetris(#[clap(flatten)] TetrisArg),
    /// Play snake
    Snake(#[clap(flatten)] SnakeArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }
    match args.mode.unwrap_or(Mode::Tetris(TetrisArg::default())) {
        Mode::Tetris(arg) => tetris::run(&arg)?,
        Mode::Snake(arg) => snake::run(&arg)?,
    }
    Ok(())
}

/// Sends log records to `path`. Writing to stderr would corrupt the
/// alternate screen.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}
