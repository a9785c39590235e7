use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use lexigrid_engine::{Command, CommandSource, GameConfig, PoolSeed, TurnController, TurnOutcome};
use tracing::{info, warn};

use crate::{command::ScoringArg, input, record::GameHistory, render, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Path to the word list (one uppercase word per line)
    #[clap(long, default_value = "WordBank.txt")]
    pub(super) dictionary: PathBuf,
    /// Player name, in turn order (repeat once per player)
    #[clap(long = "player", default_values = ["Player 1", "Player 2"])]
    pub(super) players: Vec<String>,
    /// Seed for the tile pool as 32 hex digits (random if omitted)
    #[clap(long, value_parser = PoolSeed::from_hex)]
    pub(super) seed: Option<PoolSeed>,
    /// How placements are scored
    #[clap(long, value_enum, default_value_t)]
    pub(super) scoring: ScoringArg,
    /// Save the game recording to a file when the game ends
    #[clap(long)]
    pub(super) save_recording: bool,
    /// Directory to save recording files
    #[clap(long, default_value = "./data/recordings/")]
    pub(super) record_dir: PathBuf,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("WordBank.txt"),
            players: vec!["Player 1".to_owned(), "Player 2".to_owned()],
            seed: None,
            scoring: ScoringArg::default(),
            save_recording: false,
            record_dir: PathBuf::from("./data/recordings/"),
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        dictionary,
        players,
        seed,
        scoring,
        save_recording,
        record_dir,
    } = arg;

    let dictionary = util::read_dictionary_file(dictionary)?;
    info!(words = dictionary.len(), "dictionary loaded");

    let mut config = GameConfig::new(players.iter().cloned()).with_scoring((*scoring).into());
    if let Some(seed) = seed {
        config = config.with_seed(*seed);
    }
    let history = GameHistory::new(&config);
    let mut game = TurnController::new(config, Box::new(dictionary))?;

    let mut console = Console {
        input: io::stdin().lock(),
        output: io::stdout().lock(),
        history,
    };
    game.run(&mut console)?;

    println!("Final scores:");
    print!("{}", render::render_scores(game.players()));

    if *save_recording {
        let path = console.history.save(game.players(), record_dir)?;
        eprintln!("Saved recording to {}", path.display());
    }

    Ok(())
}

/// Reads commands line by line and writes the game transcript.
///
/// End of input quits the game. Malformed commands re-prompt without comment.
struct Console<R, W> {
    input: R,
    output: W,
    history: GameHistory,
}

impl<R, W> Console<R, W>
where
    W: Write,
{
    fn show(&mut self, text: &str) {
        if let Err(e) = self
            .output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
        {
            warn!(error = %e, "failed to write to console");
        }
    }
}

/// The board, whose turn it is and their hand, followed by the input prompt.
fn prompt(game: &TurnController) -> String {
    let player = game.current_player();
    format!(
        "{}It's {}'s turn!\nYour hand: {}\n> ",
        render::render_board(game.board()),
        player.name(),
        player.hand()
    )
}

impl<R, W> CommandSource for Console<R, W>
where
    R: BufRead,
    W: Write,
{
    fn next_command(&mut self, game: &TurnController) -> Command {
        self.show(&prompt(game));

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                info!("end of input");
                Command::Quit
            }
            Ok(_) => input::parse_command(&line),
            Err(e) => {
                warn!(error = %e, "failed to read command");
                Command::Quit
            }
        }
    }

    fn report(&mut self, _game: &TurnController, outcome: &TurnOutcome) {
        match outcome {
            TurnOutcome::Applied(applied) => {
                self.show(&format!("SCORE: {}\n", applied.score.total));
                self.history.record(applied);
            }
            TurnOutcome::Rejected(rejection) => self.show(&format!("{rejection}\n")),
            TurnOutcome::Reprompted | TurnOutcome::Terminated => {}
        }
    }
}
