//! Random strategy: uniformly random legal move, seedable for tests.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::ai::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::TurnView;
use crate::domain::Card;

/// Picks uniformly among the legal plays and passes when there are none.
/// Serves as a baseline opponent in simulations and tests.
pub struct RandomPlayer {
    /// RNG behind a mutex: trait methods take `&self`.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "random";

    /// `Some(seed)` gives reproducible behavior; `None` draws from OS
    /// entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_play(&self, view: &TurnView) -> Result<Option<Vec<Card>>, AiError> {
        let options = view.legal_plays();
        if options.is_empty() {
            return Ok(None);
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(options.choose(&mut *rng).cloned())
    }
}
