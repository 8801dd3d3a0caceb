use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::tictactoe::Player;

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    pub fn random_player(&mut self) -> Player {
        if self.random_bool() {
            Player::Human
        } else {
            Player::Computer
        }
    }
}
