use std::time::Instant;

use anyhow::Context as _;
use ratatui_runtime::Runtime;
use termtris_engine::{BoardDimensions, SnakeSession};

use self::app::SnakeApp;

mod app;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SnakeArg {
    /// Board width in cells (defaults to the terminal width)
    #[clap(long, requires = "height")]
    pub(crate) width: Option<usize>,
    /// Board height in cells (defaults to the terminal height minus the status line)
    #[clap(long, requires = "width")]
    pub(crate) height: Option<usize>,
}

impl SnakeArg {
    fn dimensions(&self) -> BoardDimensions {
        match (self.width, self.height) {
            (Some(width), Some(height)) => BoardDimensions::Fixed { width, height },
            _ => BoardDimensions::TerminalDerived,
        }
    }
}

pub(crate) fn run(arg: &SnakeArg) -> anyhow::Result<()> {
    let (columns, rows) = crossterm::terminal::size().context("failed to query terminal size")?;
    let (width, height) = arg.dimensions().resolve(columns, rows);
    let session = SnakeSession::new(width, height, Instant::now())?;

    let mut app = SnakeApp::new(session);
    Runtime::new().run(&mut app)?;

    if let Some((collision, score)) = app.final_result() {
        println!("Game Over – {collision}. Score: {score}");
    }
    Ok(())
}
