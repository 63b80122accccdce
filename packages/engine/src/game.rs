//! Offline match façade: the single engine surface the presentation layer
//! drives. Construction deals round 1; the caller then alternates
//! `player_play`/`player_pass` and `bot_play` according to `turn()` until
//! `is_game_over()`.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::ai::{AiPlayer, Heuristic};
use crate::domain::player_view::{TableView, TurnView};
use crate::domain::plays::{try_pass, try_play};
use crate::domain::round_lifecycle::start_round;
use crate::domain::rules::SEATS;
use crate::domain::{try_parse_cards, Card, DomainError, GameState, MatchOutcome, Seat};

/// A single human-versus-bot match.
pub struct OfflineGame {
    state: GameState,
    bot: Box<dyn AiPlayer>,
}

impl OfflineGame {
    /// Fresh match against the default strategy, seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Deterministic match against the default strategy.
    pub fn with_seed(game_seed: u64) -> Self {
        Self::with_strategy(Box::new(Heuristic::new()), game_seed)
    }

    /// Deterministic match against a caller-chosen strategy.
    pub fn with_strategy(bot: Box<dyn AiPlayer>, game_seed: u64) -> Self {
        let mut state = GameState::new(game_seed);
        start_round(&mut state);
        info!(game_seed, leader = ?state.turn(), "match started");
        Self { state, bot }
    }

    /// Attempt a play for the human side. `false` leaves state unchanged.
    pub fn player_play(&mut self, set: &[Card]) -> bool {
        self.play_for(Seat::Human, set)
    }

    /// Attempt a play for the human side given card codes off the wire.
    pub fn player_play_codes(&mut self, codes: &[&str]) -> Result<bool, DomainError> {
        let set = try_parse_cards(codes)?;
        Ok(self.player_play(&set))
    }

    /// Attempt a pass for the human side.
    pub fn player_pass(&mut self) -> bool {
        if self.state.turn() != Some(Seat::Human) {
            return false;
        }
        debug!("player passes");
        try_pass(&mut self.state, Seat::Human)
    }

    /// Advance the bot's turn: consult the strategy, then play or pass.
    ///
    /// `None` when it is not the bot's turn, the game is over, or the bot
    /// passed. A strategy failure or illegal proposal degrades to a pass;
    /// the turn order never wedges.
    pub fn bot_play(&mut self) -> Option<Vec<Card>> {
        if self.state.turn() != Some(Seat::Bot) {
            return None;
        }
        let view = TurnView::for_seat(&self.state, Seat::Bot);
        let decision = match self.bot.choose_play(&view) {
            Ok(decision) => decision,
            Err(e) => {
                warn!(error = %e, "strategy failed; treating as pass");
                None
            }
        };
        match decision {
            Some(set) => {
                if self.play_for(Seat::Bot, &set) {
                    Some(set)
                } else {
                    warn!(?set, "strategy proposed an illegal set; passing");
                    try_pass(&mut self.state, Seat::Bot);
                    None
                }
            }
            None => {
                debug!("bot passes");
                try_pass(&mut self.state, Seat::Bot);
                None
            }
        }
    }

    fn play_for(&mut self, seat: Seat, set: &[Card]) -> bool {
        let Some(outcome) = try_play(&mut self.state, seat, set) else {
            return false;
        };
        debug!(?seat, ?set, revolution = self.state.pot.revolution(), "play accepted");
        if outcome.won_round {
            info!(
                ?seat,
                wins = ?self.state.wins,
                game_over = self.state.is_game_over(),
                "round won"
            );
        } else if outcome.cleared_pot {
            debug!(?seat, "pot cleared; same seat re-leads");
        }
        true
    }

    // --- read-only snapshots ---

    pub fn player_hand(&self) -> Vec<Card> {
        self.state.hand(Seat::Human).to_vec()
    }

    pub fn bot_hand(&self) -> Vec<Card> {
        self.state.hand(Seat::Bot).to_vec()
    }

    /// The set the next play must beat.
    pub fn current_pot(&self) -> Vec<Card> {
        self.state.pot.current().to_vec()
    }

    /// Every card played since the last clear (display record).
    pub fn full_pot(&self) -> Vec<Card> {
        self.state.pot.history().to_vec()
    }

    pub fn turn(&self) -> Option<Seat> {
        self.state.turn()
    }

    pub fn is_round_active(&self) -> bool {
        self.state.is_round_active()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn revolution(&self) -> bool {
        self.state.pot.revolution()
    }

    pub fn round_no(&self) -> u8 {
        self.state.round_no
    }

    pub fn wins(&self) -> [u8; SEATS] {
        self.state.wins
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.state.outcome()
    }

    /// Acting view for a seat; lets external drivers (simulator, tests)
    /// choose plays through the same lens as the built-in bot.
    pub fn turn_view(&self, seat: Seat) -> TurnView {
        TurnView::for_seat(&self.state, seat)
    }

    /// Redacted snapshot for the presentation layer.
    pub fn view(&self) -> TableView {
        TableView::of(&self.state)
    }
}

impl Default for OfflineGame {
    fn default() -> Self {
        Self::new()
    }
}
