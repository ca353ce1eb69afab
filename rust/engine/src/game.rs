use std::fmt;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::board::{Board, Street};
use crate::cards::Card;
use crate::chooser::{ChoiceRequest, MoveChooser};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::fantasyland::{self, FantasylandSummary, FANTASYLAND_DEAL};
use crate::player::Player;
use crate::rules::{legal_moves, validate_placement, Move};
use crate::scoring::{leader, score_table, PairingResult};
use crate::snapshot::GameSnapshot;

pub const MIN_PLAYERS: usize = 2;
/// 13 cards per board, so four seats use the whole deck.
pub const MAX_PLAYERS: usize = 4;
/// Cards each player is dealt at the start.
pub const INITIAL_HAND: usize = 5;
/// Cards dealt when a player's hand runs out before the board is complete.
pub const REFILL_SIZE: usize = 3;

/// Per-session engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the shuffle RNG; drawn at random when absent
    pub seed: Option<u64>,
    /// Thinking-time hint forwarded to the chooser
    pub think_time_ms: Option<u64>,
    /// Whether a qualifying front street triggers Fantasyland
    pub fantasyland: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            think_time_ms: Some(1000),
            fantasyland: true,
        }
    }
}

/// Where a hand stands.
///
/// `Finished` is the resting state after a scored game. An aborted hand goes
/// back to `NotStarted`, so its snapshot reads `game_over: false` and nothing
/// is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    Placing(Street),
    FantasylandResolution { player: usize },
    Finished,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not_started",
            Phase::Placing(Street::Front) => "front",
            Phase::Placing(Street::Middle) => "middle",
            Phase::Placing(Street::Back) => "back",
            Phase::FantasylandResolution { .. } => "fantasyland",
            Phase::Finished => "finished",
        }
    }

    pub fn street(&self) -> Option<Street> {
        match self {
            Phase::Placing(street) => Some(*street),
            _ => None,
        }
    }

    fn accepts_moves(&self) -> bool {
        matches!(self, Phase::Placing(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveSource {
    Human,
    Automated,
    Fantasyland,
}

/// One applied placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: usize,
    pub card: Card,
    pub street: Street,
    pub source: MoveSource,
}

/// Everything `end` computed, kept after the table is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub pairings: Vec<PairingResult>,
    /// Points earned this game, by seat
    pub points: Vec<i32>,
    /// Cumulative scores after this game, by seat
    pub scores: Vec<i32>,
    /// Boards as they stood when the game ended
    pub boards: Vec<Board>,
    pub winner: Option<usize>,
    pub winner_name: Option<String>,
    pub fantasyland: Option<FantasylandSummary>,
}

pub type SnapshotObserver = Box<dyn FnMut(&GameSnapshot) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Ended,
}

/// One table of Pineapple OFC: deck, seats, turn pointer and phase.
///
/// # Examples
///
/// ```
/// use pineapple_engine::chooser::{ChoiceRequest, MoveChooser};
/// use pineapple_engine::game::{Game, GameConfig};
/// use pineapple_engine::player::Player;
/// use pineapple_engine::rules::Move;
///
/// struct FirstLegal;
/// impl MoveChooser for FirstLegal {
///     fn choose_move(&mut self, r: &ChoiceRequest<'_>) -> Move { r.legal_moves[0] }
///     fn name(&self) -> &str { "FirstLegal" }
/// }
///
/// let players = vec![Player::automated("A"), Player::automated("B")];
/// let config = GameConfig { seed: Some(7), fantasyland: false, ..GameConfig::default() };
/// let mut game = Game::new(players, Box::new(FirstLegal), config).unwrap();
///
/// // Every seat is automated, so the whole game plays out inside `start`.
/// game.start().unwrap();
/// assert!(game.is_over());
/// assert!(game.snapshot().game_over);
/// ```
pub struct Game {
    config: GameConfig,
    seed: u64,
    rng: ChaCha20Rng,
    deck: Deck,
    muck: Vec<Card>,
    players: Vec<Player>,
    turn: usize,
    phase: Phase,
    chooser: Box<dyn MoveChooser>,
    moves: Vec<MoveRecord>,
    fantasyland: Option<FantasylandSummary>,
    last_result: Option<GameResult>,
    observer: Option<SnapshotObserver>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("seed", &self.seed)
            .field("phase", &self.phase)
            .field("turn", &self.turn)
            .field("players", &self.players)
            .field("deck_remaining", &self.deck.remaining())
            .field("chooser", &self.chooser.name())
            .finish_non_exhaustive()
    }
}

impl Game {
    pub fn new(
        players: Vec<Player>,
        chooser: Box<dyn MoveChooser>,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(GameError::InvalidPlayerCount {
                actual: players.len(),
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
            config,
            deck: Deck::default(),
            muck: Vec::new(),
            players,
            turn: 0,
            phase: Phase::NotStarted,
            chooser,
            moves: Vec::new(),
            fantasyland: None,
            last_result: None,
            observer: None,
        })
    }

    /// Shuffles a fresh deck and deals a new hand.
    ///
    /// Returns the placements automated seats made before control came back
    /// to a human seat (all of them when every seat is automated).
    pub fn start(&mut self) -> Result<Vec<MoveRecord>, GameError> {
        let deck = Deck::build(&mut self.rng);
        self.start_with_deck(deck)
    }

    /// Like [`Game::start`] but deals from `deck` as given, top card first.
    pub fn start_with_deck(&mut self, deck: Deck) -> Result<Vec<MoveRecord>, GameError> {
        self.reset_table();
        self.deck = deck;
        self.last_result = None;

        for seat in 0..self.players.len() {
            let cards = match self.deck.draw(INITIAL_HAND) {
                Ok(cards) => cards,
                Err(e) => {
                    self.abort_hand(&e);
                    return Err(e);
                }
            };
            self.players[seat].give_cards(cards);
        }
        self.phase = Phase::Placing(Street::Front);
        info!(
            seed = self.seed,
            players = self.players.len(),
            chooser = self.chooser.name(),
            "game started"
        );
        self.notify();

        let mut applied = Vec::new();
        self.run(None, &mut applied)?;
        Ok(applied)
    }

    /// Places `card` from `player`'s hand onto `street`, then plays out any
    /// automated turns that follow.
    ///
    /// Rejected requests leave the game untouched. Returns every placement
    /// applied by this call, the submitted one first.
    pub fn submit_move(
        &mut self,
        player: usize,
        card: Card,
        street: Street,
    ) -> Result<Vec<MoveRecord>, GameError> {
        if !self.phase.accepts_moves() {
            return Err(GameError::NoGameInProgress);
        }
        let seat = self.player(player)?;
        if player != self.turn {
            return Err(GameError::NotYourTurn {
                expected: self.turn,
                actual: player,
            });
        }
        let mv = validate_placement(player, seat.board(), seat.hand(), card, street)?;

        let mut applied = Vec::new();
        self.apply(player, mv, MoveSource::Human, &mut applied)?;
        self.run(Some(player), &mut applied)?;
        Ok(applied)
    }

    /// Every placement `player` could make right now.
    pub fn legal_moves(&self, player: usize) -> Result<Vec<Move>, GameError> {
        let seat = self.player(player)?;
        Ok(legal_moves(seat.board(), seat.hand()))
    }

    /// Scores the current hand, clears the table and returns the result.
    pub fn end(&mut self) -> Result<GameResult, GameError> {
        match self.phase {
            Phase::NotStarted | Phase::Finished => Err(GameError::NoGameInProgress),
            _ => Ok(self.finish()),
        }
    }

    /// Replaces the move chooser for all subsequent decisions.
    pub fn set_chooser(&mut self, chooser: Box<dyn MoveChooser>) {
        info!(
            old = self.chooser.name(),
            new = chooser.name(),
            "move chooser replaced"
        );
        self.chooser = chooser;
    }

    /// Registers a callback that receives a snapshot after every mutation.
    pub fn set_observer(&mut self, observer: SnapshotObserver) {
        self.observer = Some(observer);
    }

    /// Zeroes every cumulative score. Nothing else resets them.
    pub fn reset_scores(&mut self) {
        for p in &mut self.players {
            p.reset_score();
        }
        self.notify();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn current_player(&self) -> usize {
        self.turn
    }
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Finished
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn chooser_name(&self) -> &str {
        self.chooser.name()
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    pub fn muck(&self) -> &[Card] {
        &self.muck
    }
    /// Placements of the current (or just finished) hand, in order.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }
    pub fn last_result(&self) -> Option<&GameResult> {
        self.last_result.as_ref()
    }

    fn player(&self, index: usize) -> Result<&Player, GameError> {
        self.players.get(index).ok_or(GameError::UnknownPlayer {
            index,
            players: self.players.len(),
        })
    }

    fn think_time(&self) -> Option<Duration> {
        self.config.think_time_ms.map(Duration::from_millis)
    }

    /// Drives the hand forward after `actor` moved (or after the deal when
    /// `actor` is `None`) until a human seat holds the turn or the game ends.
    /// Fatal errors abort the hand before they are returned.
    fn run(
        &mut self,
        actor: Option<usize>,
        applied: &mut Vec<MoveRecord>,
    ) -> Result<(), GameError> {
        match self.drive(actor, applied) {
            Err(e) if e.is_fatal() => {
                self.abort_hand(&e);
                Err(e)
            }
            other => other,
        }
    }

    fn drive(
        &mut self,
        mut actor: Option<usize>,
        applied: &mut Vec<MoveRecord>,
    ) -> Result<(), GameError> {
        loop {
            if let Some(seat) = actor {
                if self.settle(seat, applied)? == Flow::Ended {
                    return Ok(());
                }
            }
            let seat = self.turn;
            if !self.players[seat].is_automated() {
                return Ok(());
            }
            match self.ask_chooser(seat)? {
                Some(mv) => self.apply(seat, mv, MoveSource::Automated, applied)?,
                None => {
                    warn!(seat, "automated seat has no legal moves, ending game");
                    self.finish();
                    return Ok(());
                }
            }
            actor = Some(seat);
        }
    }

    fn ask_chooser(&mut self, seat: usize) -> Result<Option<Move>, GameError> {
        let player = &self.players[seat];
        let legal = legal_moves(player.board(), player.hand());
        if legal.is_empty() {
            return Ok(None);
        }
        let next = (seat + 1) % self.players.len();
        let think_time = self.think_time();
        let request = ChoiceRequest {
            seat,
            board: player.board(),
            hand: player.hand(),
            legal_moves: &legal,
            opponent_board: Some(self.players[next].board()),
            think_time,
        };
        let choice = self.chooser.choose_move(&request);
        if !legal.contains(&choice) {
            error!(
                seat,
                card = %choice.card,
                street = %choice.street,
                chooser = self.chooser.name(),
                "chooser returned a move outside the legal set"
            );
            return Err(GameError::IllegalChooserMove {
                player: seat,
                card: choice.card,
                street: choice.street,
            });
        }
        Ok(Some(choice))
    }

    fn apply(
        &mut self,
        seat: usize,
        mv: Move,
        source: MoveSource,
        applied: &mut Vec<MoveRecord>,
    ) -> Result<(), GameError> {
        self.players[seat].place_from_hand(seat, mv.card, mv.street)?;
        let record = MoveRecord {
            player: seat,
            card: mv.card,
            street: mv.street,
            source,
        };
        debug!(seat, card = %mv.card, street = %mv.street, ?source, "card placed");
        self.moves.push(record);
        applied.push(record);
        self.notify();
        Ok(())
    }

    /// Post-placement bookkeeping for `seat`: Fantasyland, refill, turn and
    /// phase advance, terminal check.
    fn settle(&mut self, seat: usize, applied: &mut Vec<MoveRecord>) -> Result<Flow, GameError> {
        if self.config.fantasyland && fantasyland::check_fantasyland(self.players[seat].board()) {
            self.enter_fantasyland(seat, applied)?;
            self.finish();
            return Ok(Flow::Ended);
        }

        self.refill(seat)?;

        self.turn = (seat + 1) % self.players.len();
        if self.turn == 0 {
            self.advance_phase();
        }

        if self.players.iter().all(|p| p.board().is_full(Street::Back)) {
            self.finish();
            return Ok(Flow::Ended);
        }
        Ok(Flow::Continue)
    }

    fn refill(&mut self, seat: usize) -> Result<(), GameError> {
        let player = &self.players[seat];
        let free = player.board().free_slots();
        if !player.hand().is_empty() || free == 0 {
            return Ok(());
        }
        let cards = self.deck.draw(REFILL_SIZE.min(free))?;
        debug!(seat, count = cards.len(), "hand refilled");
        self.players[seat].give_cards(cards);
        Ok(())
    }

    fn advance_phase(&mut self) {
        let Phase::Placing(mut street) = self.phase else {
            return;
        };
        let all_full = |players: &[Player], s: Street| players.iter().all(|p| p.board().is_full(s));
        if street == Street::Front && all_full(&self.players, Street::Front) {
            street = Street::Middle;
        }
        if street == Street::Middle && all_full(&self.players, Street::Middle) {
            street = Street::Back;
        }
        if self.phase != Phase::Placing(street) {
            debug!(from = self.phase.name(), to = street.name(), "phase advanced");
            self.phase = Phase::Placing(street);
        }
    }

    fn enter_fantasyland(
        &mut self,
        seat: usize,
        applied: &mut Vec<MoveRecord>,
    ) -> Result<(), GameError> {
        let available = self.deck.remaining();
        let count = FANTASYLAND_DEAL.min(available);
        if count < FANTASYLAND_DEAL {
            warn!(seat, available, "short fantasyland deal");
        }
        let dealt = self.deck.draw(count)?;
        info!(seat, player = self.players[seat].name(), dealt = count, "fantasyland triggered");

        self.phase = Phase::FantasylandResolution { player: seat };
        let player = &mut self.players[seat];
        let mut old_board = player.replace_board(Board::new());
        self.muck.extend(old_board.take_all());
        self.muck.extend(player.take_hand());
        player.set_hand(dealt);
        self.notify();

        let think_time = self.think_time();
        let placed = fantasyland::resolve(
            seat,
            &mut self.players[seat],
            self.chooser.as_mut(),
            think_time,
        )?;
        for mv in &placed {
            let record = MoveRecord {
                player: seat,
                card: mv.card,
                street: mv.street,
                source: MoveSource::Fantasyland,
            };
            self.moves.push(record);
            applied.push(record);
        }
        self.fantasyland = Some(FantasylandSummary {
            player: seat,
            dealt: count,
            placed: placed.len(),
            leftover: self.players[seat].hand().to_vec(),
        });
        self.notify();
        Ok(())
    }

    /// Scores, commits points, clears the table and parks the game in
    /// `Finished`, ready for the next `start`.
    fn finish(&mut self) -> GameResult {
        let boards: Vec<Board> = self.players.iter().map(|p| p.board().clone()).collect();
        let refs: Vec<&Board> = boards.iter().collect();
        let (pairings, points) = score_table(&refs);

        for (p, &earned) in self.players.iter_mut().zip(&points) {
            p.add_score(earned);
        }
        let scores: Vec<i32> = self.players.iter().map(Player::score).collect();
        let winner = leader(&scores);
        let winner_name = winner.map(|i| self.players[i].name().to_string());

        info!(
            ?points,
            ?scores,
            winner = winner_name.as_deref().unwrap_or("-"),
            "game ended"
        );

        let result = GameResult {
            pairings,
            points,
            scores,
            boards,
            winner,
            winner_name,
            fantasyland: self.fantasyland.take(),
        };

        self.clear_cards();
        self.phase = Phase::Finished;
        self.last_result = Some(result.clone());
        self.notify();
        result
    }

    /// Drops the current hand without scoring after an internal failure.
    fn abort_hand(&mut self, cause: &GameError) {
        error!(error = %cause, phase = self.phase.name(), "hand aborted");
        self.clear_cards();
        self.fantasyland = None;
        self.phase = Phase::NotStarted;
        self.notify();
    }

    fn reset_table(&mut self) {
        self.clear_cards();
        self.moves.clear();
        self.fantasyland = None;
    }

    fn clear_cards(&mut self) {
        self.deck.clear();
        self.muck.clear();
        self.turn = 0;
        for p in &mut self.players {
            p.clear_cards();
        }
    }

    fn notify(&mut self) {
        if self.observer.is_none() {
            return;
        }
        let snapshot = self.snapshot();
        if let Some(observer) = self.observer.as_mut() {
            observer(&snapshot);
        }
    }
}
