pub mod game;
pub mod problem;

pub use game::{Game, Player};
pub use problem::{Operator, Problem};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Problem source for a drill: reproducible when seeded, entropy otherwise
pub fn problem_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
