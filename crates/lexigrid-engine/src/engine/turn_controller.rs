use std::fmt;

use rand::Rng as _;
use tracing::{debug, error, info, instrument, warn};

use crate::core::{Board, Letter, LetterCounts};

use super::{
    dictionary::WordValidator,
    hand::Hand,
    placement::Placement,
    player::Player,
    scoring::{ScoreBreakdown, ScoringEngine, ScoringRule},
    tile_pool::{PoolSeed, TilePool},
};

/// Game setup: who plays, how placements score, and how the pool is seeded.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub player_names: Vec<String>,
    pub scoring: ScoringRule,
    pub seed: PoolSeed,
}

impl Default for GameConfig {
    /// Two players named "Player 1" and "Player 2", premium scoring, random seed.
    fn default() -> Self {
        Self::new(["Player 1", "Player 2"])
    }
}

impl GameConfig {
    #[must_use]
    pub fn new<I, S>(player_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            player_names: player_names.into_iter().map(Into::into).collect(),
            scoring: ScoringRule::default(),
            seed: rand::rng().random(),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: PoolSeed) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }
}

/// A classified player command, as produced by the input layer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Command {
    Place(Placement),
    Quit,
    /// Input that could not be understood.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TurnState {
    AwaitingCommand,
    Terminated,
}

/// Why a placement was turned down. The same player tries again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    #[display("you do not have these letters in your hand: {missing}")]
    MissingLetters { missing: LetterCounts },
    #[display("{word} is not a legal word")]
    IllegalWord { word: String },
}

/// A placement that went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTurn {
    /// Applied-turn number, starting at 0.
    pub turn: usize,
    /// Turn index of the player who placed.
    pub player: usize,
    pub placement: Placement,
    pub score: ScoreBreakdown,
    /// Tiles drawn to refill the hand; fewer than placed once the pool runs dry.
    pub tiles_drawn: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum TurnOutcome {
    Applied(AppliedTurn),
    Rejected(Rejection),
    /// The command was malformed; nothing happened.
    Reprompted,
    Terminated,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TurnError {
    /// A hand lost a letter between the containment check and the removal.
    #[display("hand of {player} has no {letter} although the placement was validated against it")]
    HandInconsistency { player: String, letter: Letter },
    #[display("the game has already terminated")]
    Terminated,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("a game needs at least one player")]
pub struct NoPlayersError;

/// The input/render side of the game loop.
///
/// [`TurnController::run`] asks the source for a command whenever it awaits
/// one, and reports back what the command did.
pub trait CommandSource {
    /// Blocks until the current player issues a command.
    fn next_command(&mut self, game: &TurnController) -> Command;

    fn report(&mut self, _game: &TurnController, _outcome: &TurnOutcome) {}
}

/// Sequences turns: validates placements, applies them, refills hands and
/// rotates the turn order.
///
/// # Turn flow
///
/// 1. `Error` commands re-prompt the same player.
/// 2. `Quit` terminates the game. No winner is declared.
/// 3. `Place` is checked against the player's hand, then against the word
///    validator. A failed check rejects the placement without touching any
///    state and the same player goes again.
/// 4. An accepted placement is scored against the board as it stands, its new
///    tiles are written, the score is added, the tiles leave the hand and the
///    hand is refilled from the pool. Play passes to the next player.
///
/// Tiles are only ever moved between the pool, the hands and the board, so
/// [`tile_total`](Self::tile_total) stays at [`TilePool::TOTAL`].
///
/// # Example
///
/// ```
/// use lexigrid_engine::{Command, Dictionary, GameConfig, TurnController};
///
/// let dictionary: Dictionary = ["CAT"].into_iter().collect();
/// let mut game = TurnController::new(GameConfig::default(), Box::new(dictionary)).unwrap();
///
/// assert_eq!(game.pool().len(), 98 - 14);
/// assert!(game.submit(Command::Error).unwrap().is_reprompted());
/// assert!(game.submit(Command::Quit).unwrap().is_terminated());
/// assert!(game.state().is_terminated());
/// ```
pub struct TurnController {
    board: Board,
    pool: TilePool,
    players: Vec<Player>,
    current: usize,
    turn: usize,
    state: TurnState,
    scoring: ScoringEngine,
    validator: Box<dyn WordValidator>,
}

impl fmt::Debug for TurnController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnController")
            .field("board", &self.board)
            .field("pool", &self.pool)
            .field("players", &self.players)
            .field("current", &self.current)
            .field("turn", &self.turn)
            .field("state", &self.state)
            .field("scoring", &self.scoring)
            .finish_non_exhaustive()
    }
}

impl TurnController {
    /// Sets up a game: fills the pool, deals a full hand to each player in
    /// turn order, and awaits the first player's command.
    #[instrument(skip_all, fields(players = config.player_names.len(), seed = %config.seed.to_hex()))]
    pub fn new(
        config: GameConfig,
        validator: Box<dyn WordValidator>,
    ) -> Result<Self, NoPlayersError> {
        if config.player_names.is_empty() {
            return Err(NoPlayersError);
        }

        let mut pool = TilePool::with_seed(config.seed);
        let players = config
            .player_names
            .into_iter()
            .enumerate()
            .map(|(turn_index, name)| {
                let mut player = Player::new(name, turn_index);
                player.hand_mut().extend(pool.draw_many(Hand::CAPACITY));
                player
            })
            .collect::<Vec<_>>();
        info!(pool = pool.len(), "game started");

        Ok(Self {
            board: Board::new(),
            pool,
            players,
            current: 0,
            turn: 0,
            state: TurnState::AwaitingCommand,
            scoring: ScoringEngine::new(config.scoring),
            validator,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn pool(&self) -> &TilePool {
        &self.pool
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Number of placements applied so far.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub fn scoring_rule(&self) -> ScoringRule {
        self.scoring.rule()
    }

    /// Counts every tile in the game: pool, hands and board.
    #[must_use]
    pub fn tile_total(&self) -> usize {
        self.pool.len()
            + self.players.iter().map(|p| p.hand().len()).sum::<usize>()
            + self.board.tile_count()
    }

    /// Drives the game until it terminates.
    pub fn run(&mut self, source: &mut dyn CommandSource) -> Result<(), TurnError> {
        while self.state.is_awaiting_command() {
            let command = source.next_command(self);
            let outcome = self.submit(command)?;
            source.report(self, &outcome);
        }
        Ok(())
    }

    /// Processes one command for the current player.
    #[instrument(skip_all, fields(turn = self.turn, player = self.current))]
    pub fn submit(&mut self, command: Command) -> Result<TurnOutcome, TurnError> {
        if self.state.is_terminated() {
            return Err(TurnError::Terminated);
        }
        match command {
            Command::Error => {
                debug!("malformed command, re-prompting");
                Ok(TurnOutcome::Reprompted)
            }
            Command::Quit => {
                info!("game terminated by player");
                self.state = TurnState::Terminated;
                Ok(TurnOutcome::Terminated)
            }
            Command::Place(placement) => self.place(placement),
        }
    }

    fn place(&mut self, placement: Placement) -> Result<TurnOutcome, TurnError> {
        let required = placement.new_letters();
        let hand = self.players[self.current].hand();
        if !hand.contains(&required) {
            let missing = hand.missing(&required);
            warn!(%missing, "placement rejected: letters not in hand");
            return Ok(TurnOutcome::Rejected(Rejection::MissingLetters { missing }));
        }
        if !self.validator.is_legal_word(&placement) {
            let word = placement.word();
            warn!(word, "placement rejected: not a legal word");
            return Ok(TurnOutcome::Rejected(Rejection::IllegalWord { word }));
        }

        let score = self.scoring.score(&placement, &self.board);
        for tile in self.board.place(placement.new_cells()) {
            self.pool.put_back(tile);
        }

        let player = &mut self.players[self.current];
        player.add_score(score.total);
        for token in placement.new_tokens() {
            if !player.hand_mut().remove(token.letter) {
                error!(letter = %token.letter, "hand lost a validated letter");
                return Err(TurnError::HandInconsistency {
                    player: player.name().to_owned(),
                    letter: token.letter,
                });
            }
        }

        let consumed = placement.new_tile_count();
        let drawn = self.pool.draw_many(consumed);
        if drawn.len() < consumed {
            info!(
                requested = consumed,
                drawn = drawn.len(),
                "tile pool exhausted while refilling hand"
            );
        }
        let tiles_drawn = drawn.len();
        player.hand_mut().extend(drawn);

        info!(
            word = %placement.word(),
            points = score.total,
            total = player.score(),
            "placement applied"
        );
        let applied = AppliedTurn {
            turn: self.turn,
            player: self.current,
            placement,
            score,
            tiles_drawn,
        };
        self.turn += 1;
        self.current = (self.current + 1) % self.players.len();
        Ok(TurnOutcome::Applied(applied))
    }
}
