use clap::{Parser, Subcommand};
use lexigrid_engine::ScoringRule;

use self::{play::PlayArg, replay::ReplayArg};

mod play;
mod replay;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a game on the console (default)
    Play(#[clap(flatten)] PlayArg),
    /// Re-run a recorded game and check that every score reproduces
    Replay(#[clap(flatten)] ReplayArg),
}

/// Scoring rule as chosen on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ScoringArg {
    /// Premium squares multiply letter or word values on first use
    #[default]
    Premium,
    /// Letter values only
    Flat,
}

impl From<ScoringArg> for ScoringRule {
    fn from(arg: ScoringArg) -> Self {
        match arg {
            ScoringArg::Premium => ScoringRule::Premium,
            ScoringArg::Flat => ScoringRule::Flat,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Replay(arg) => replay::run(&arg)?,
    }
    Ok(())
}
