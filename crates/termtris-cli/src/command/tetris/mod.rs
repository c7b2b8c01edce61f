use ratatui_runtime::Runtime;
use termtris_engine::PieceSeed;

use self::app::TetrisApp;

mod app;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TetrisArg {
    /// Seed for the piece sequence (random if omitted)
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) fn run(arg: &TetrisArg) -> anyhow::Result<()> {
    let TetrisArg { seed } = arg;

    let mut app = TetrisApp::new(seed.map(PieceSeed::new));
    Runtime::new().run(&mut app)?;

    if let Some(score) = app.final_score() {
        println!("Game Over! Final Score: {score}");
    }
    Ok(())
}
