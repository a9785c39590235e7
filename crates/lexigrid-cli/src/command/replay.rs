use std::path::PathBuf;

use anyhow::{Context, bail, ensure};
use lexigrid_engine::{
    AppliedTurn, Command, GameConfig, Placement, Player, TurnController, TurnOutcome, WordValidator,
};
use tracing::info;

use crate::{render, schema::record::RecordedGame, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReplayArg {
    /// Path to the recording file (JSON format)
    recording_file: PathBuf,
    /// Path to the word list the game was played with
    #[clap(long, default_value = "WordBank.txt")]
    dictionary: PathBuf,
}

pub(crate) fn run(arg: &ReplayArg) -> anyhow::Result<()> {
    let ReplayArg {
        recording_file,
        dictionary,
    } = arg;

    eprintln!("Loading recording from {}", recording_file.display());
    let recording: RecordedGame = util::read_json_file("recording", recording_file)?;
    eprintln!("Loaded {} turns", recording.turns.len());

    let dictionary = util::read_dictionary_file(dictionary)?;
    let game = replay(&recording, Box::new(dictionary), |game, applied| {
        let player = &game.players()[applied.player];
        println!(
            "Turn {}: {} played {} for {} points",
            applied.turn,
            player.name(),
            applied.placement.word(),
            applied.score.total
        );
    })?;

    print!("{}", render::render_board(game.board()));
    println!("Final scores:");
    print!("{}", render::render_scores(game.players()));
    Ok(())
}

/// Re-applies every recorded turn to a fresh game set up like the recorded one.
///
/// Fails as soon as a turn is rejected, is played out of order, or scores
/// differently than recorded.
fn replay<F>(
    recording: &RecordedGame,
    validator: Box<dyn WordValidator>,
    mut on_turn: F,
) -> anyhow::Result<TurnController>
where
    F: FnMut(&TurnController, &AppliedTurn),
{
    let config = GameConfig::new(recording.players.iter().cloned())
        .with_seed(recording.seed)
        .with_scoring(recording.scoring);
    let mut game = TurnController::new(config, validator)?;

    for record in &recording.turns {
        let current = game.current_player().turn_index();
        ensure!(
            record.player == current,
            "turn {}: recorded for player {} but player {current} is to move",
            record.turn,
            record.player
        );

        let placement = Placement::from_tokens(record.tokens.iter().copied())
            .with_context(|| format!("turn {}: invalid placement", record.turn))?;
        let applied = match game.submit(Command::Place(placement))? {
            TurnOutcome::Applied(applied) => applied,
            TurnOutcome::Rejected(rejection) => {
                bail!("turn {}: {} was rejected: {rejection}", record.turn, record.word)
            }
            outcome => bail!("turn {}: unexpected outcome {outcome:?}", record.turn),
        };
        ensure!(
            applied.score.total == record.score,
            "turn {}: {} was recorded for {} points but scored {}",
            record.turn,
            record.word,
            record.score,
            applied.score.total
        );
        on_turn(&game, &applied);
    }

    let final_scores: Vec<u32> = game.players().iter().map(Player::score).collect();
    ensure!(
        final_scores == recording.final_scores,
        "final scores {final_scores:?} do not match the recorded {:?}",
        recording.final_scores
    );
    info!(turns = recording.turns.len(), "replay reproduced the recording");

    game.submit(Command::Quit)?;
    Ok(game)
}

#[cfg(test)]
mod tests {
    use lexigrid_engine::{Coordinate, PlacementToken, PoolSeed};

    use super::*;
    use crate::record::GameHistory;

    struct AcceptAll;

    impl WordValidator for AcceptAll {
        fn is_legal_word(&self, _placement: &Placement) -> bool {
            true
        }
    }

    /// Plays single-letter words from each player's hand and records them.
    fn record_game(turns: usize) -> RecordedGame {
        let config = GameConfig::new(["Ann", "Bo"]).with_seed(PoolSeed::from_bytes([3; 16]));
        let mut history = GameHistory::new(&config);
        let mut game = TurnController::new(config, Box::new(AcceptAll)).unwrap();

        let cells: Vec<Coordinate> = Coordinate::all().collect();
        for i in 0..turns {
            let letter = game.current_player().hand().letters().iter().next().unwrap();
            let token = PlacementToken::new(cells[i * 7 % cells.len()], letter);
            let placement = Placement::from_tokens([token]).unwrap();
            let TurnOutcome::Applied(applied) = game.submit(Command::Place(placement)).unwrap()
            else {
                panic!("placement not applied");
            };
            history.record(&applied);
        }
        history.to_recorded_game(game.players())
    }

    #[test]
    fn test_replay_reproduces_recording() {
        let recording = record_game(20);
        let mut seen = 0;
        let game = replay(&recording, Box::new(AcceptAll), |_, _| seen += 1).unwrap();
        assert_eq!(seen, 20);
        assert!(game.state().is_terminated());
        let scores: Vec<u32> = game.players().iter().map(Player::score).collect();
        assert_eq!(scores, recording.final_scores);
    }

    #[test]
    fn test_replay_detects_score_mismatch() {
        let mut recording = record_game(5);
        recording.turns[3].score += 1;
        assert!(replay(&recording, Box::new(AcceptAll), |_, _| {}).is_err());
    }

    #[test]
    fn test_replay_detects_turn_order_mismatch() {
        let mut recording = record_game(2);
        recording.turns[1].player = 0;
        assert!(replay(&recording, Box::new(AcceptAll), |_, _| {}).is_err());
    }
}
