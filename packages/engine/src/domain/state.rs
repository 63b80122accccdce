//! Match state container and seat helpers.

use std::cmp::Ordering;

use serde::Serialize;

use super::cards_types::Card;
use super::pot::Pot;
use super::rules::SEATS;

/// One of the two sides of the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    Human,
    Bot,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::Human => Seat::Bot,
            Seat::Bot => Seat::Human,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Match progression phases.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Cards are being shuffled and split (transient).
    Dealing,
    /// The given seat must act.
    Turn(Seat),
    /// A round just finished (transient; resolved before control returns).
    RoundOver,
    /// All rounds complete; no further plays are accepted.
    GameOver,
}

/// Final result of a completed match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    HumanWin,
    BotWin,
    Draw,
}

/// Entire match container, sufficient for pure domain operations.
///
/// Ownership boundaries: turn and round bookkeeping live here, pot and
/// revolution state live in [`Pot`], and hands are mutated only by the play
/// and trading functions.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    /// 1-based round number within the fixed 3-round match.
    pub round_no: u8,
    /// Both sides' hands, indexed by `Seat::index`.
    pub hands: [Vec<Card>; SEATS],
    /// Round wins per seat.
    pub wins: [u8; SEATS],
    /// Seat whose successful play most recently hit the table this round.
    pub last_to_play: Option<Seat>,
    /// Loser of the previous round; drives leadership and trading.
    pub last_round_loser: Option<Seat>,
    /// Per-game seed; each round's shuffle seed derives from it.
    pub game_seed: u64,
    pub pot: Pot,
}

impl GameState {
    pub fn new(game_seed: u64) -> Self {
        Self {
            phase: Phase::Dealing,
            round_no: 1,
            hands: [Vec::new(), Vec::new()],
            wins: [0; SEATS],
            last_to_play: None,
            last_round_loser: None,
            game_seed,
            pot: Pot::new(),
        }
    }

    /// Seat expected to act, if any.
    pub fn turn(&self) -> Option<Seat> {
        match self.phase {
            Phase::Turn(seat) => Some(seat),
            _ => None,
        }
    }

    pub fn is_round_active(&self) -> bool {
        matches!(self.phase, Phase::Turn(_))
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver)
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }

    /// Tally-based result; defined only once the match is over.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        if !self.is_game_over() {
            return None;
        }
        let human = self.wins[Seat::Human.index()];
        let bot = self.wins[Seat::Bot.index()];
        Some(match human.cmp(&bot) {
            Ordering::Greater => MatchOutcome::HumanWin,
            Ordering::Less => MatchOutcome::BotWin,
            Ordering::Equal => MatchOutcome::Draw,
        })
    }
}
