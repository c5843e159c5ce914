//! 7-bag piece randomizer
//!
//! Pieces are handed out from a shuffled bag holding each kind once. When the
//! bag runs dry a fresh one is shuffled, so every run of seven draws starting
//! at a refill contains the whole catalog.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shapes::ShapeKind;

#[derive(Debug, Clone)]
pub struct BagRandomizer {
    // Kinds still in the current bag, next draw at the front
    queue: VecDeque<ShapeKind>,
    rng: StdRng,
}

impl BagRandomizer {
    /// Create a randomizer seeded from OS entropy, or from `seed` when given
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            queue: VecDeque::with_capacity(ShapeKind::ALL.len()),
            rng,
        }
    }

    /// Take the next kind, refilling the bag first if it is empty
    pub fn draw(&mut self) -> ShapeKind {
        if self.queue.is_empty() {
            self.refill();
        }
        self.queue
            .pop_front()
            .unwrap_or(ShapeKind::ALL[0])
    }

    /// Number of kinds left before the next refill
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    fn refill(&mut self) {
        let mut bag = ShapeKind::ALL;
        // Fisher-Yates
        for i in (1..bag.len()).rev() {
            let j = self.rng.random_range(0..=i);
            bag.swap(i, j);
        }
        self.queue.extend(bag);
    }
}
