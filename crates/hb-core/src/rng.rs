//! Random number generation for the artifact forge
//!
//! Uses a seeded ChaCha RNG for reproducibility. Generators are written
//! against [`RandomSource`] so tests can replay exact roll sequences.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Uniform integer source consumed by the generators
pub trait RandomSource {
    /// Returns 0..n-1, or 0 if n is 0 (Hengband's randint0)
    fn randint0(&mut self, n: u32) -> u32;

    /// Returns 1..n, or 0 if n is 0 (Hengband's randint1)
    fn randint1(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.randint0(n) + 1
    }

    /// Returns true with probability 1/n
    fn one_in(&mut self, n: u32) -> bool {
        self.randint0(n) == 0
    }

    /// Pick `count` distinct indices out of `0..pool`, in pick order.
    ///
    /// Partial Fisher-Yates: only the first `count` slots are shuffled.
    fn sample_distinct(&mut self, pool: usize, count: usize) -> Vec<usize> {
        let count = count.min(pool);
        let mut indices: Vec<usize> = (0..pool).collect();
        for i in 0..count {
            let j = i + self.randint0((pool - i) as u32) as usize;
            indices.swap(i, j);
        }
        indices.truncate(count);
        indices
    }
}

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Note: RNG state is not serialized - a restored RNG restarts from its seed.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn randint0(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Replays a fixed list of raw rolls.
///
/// Each call consumes the next value and reduces it modulo the requested
/// range, so a script value of `k` makes `randint0(n)` return `k % n` and
/// `randint1(n)` return `k % n + 1`. Once the script runs out every call
/// returns 0 (so `one_in` always succeeds).
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    rolls: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(rolls: impl Into<Vec<u32>>) -> Self {
        Self {
            rolls: rolls.into(),
            pos: 0,
        }
    }

    /// Number of scripted rolls consumed so far
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// True once every scripted roll has been used
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.rolls.len()
    }
}

impl RandomSource for ScriptedRng {
    fn randint0(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let raw = self.rolls.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        raw % n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_randint0_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            assert!(rng.randint0(10) < 10);
        }
    }

    #[test]
    fn test_randint1_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.randint1(6);
            assert!((1..=6).contains(&n));
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.randint0(100), rng2.randint0(100));
        }
    }

    #[test]
    fn test_zero_inputs() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.randint0(0), 0);
        assert_eq!(rng.randint1(0), 0);
        assert!(rng.one_in(1));
    }

    #[test]
    fn test_seed_roundtrip_restarts_stream() {
        let rng = GameRng::new(7);
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: GameRng = serde_json::from_str(&json).unwrap();
        let mut fresh = GameRng::new(7);
        assert_eq!(restored.seed(), 7);
        assert_eq!(restored.randint0(1000), fresh.randint0(1000));
    }

    #[test]
    fn test_scripted_rolls() {
        let mut rng = ScriptedRng::new([3, 0, 12]);
        assert_eq!(rng.randint1(10), 4);
        assert!(rng.one_in(2));
        assert_eq!(rng.randint0(5), 2);
        assert!(rng.is_exhausted());
        assert_eq!(rng.randint1(45), 1);
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn test_sample_distinct_is_distinct() {
        let mut rng = GameRng::new(99);
        for _ in 0..100_000 {
            let count = rng.randint1(3) as usize;
            let picks = rng.sample_distinct(10, count);
            assert_eq!(picks.len(), count);
            let unique: HashSet<_> = picks.iter().collect();
            assert_eq!(unique.len(), picks.len());
            assert!(picks.iter().all(|&i| i < 10));
        }
    }

    #[test]
    fn test_sample_distinct_clamps_count() {
        let mut rng = GameRng::new(1);
        assert_eq!(rng.sample_distinct(2, 5).len(), 2);
        assert!(rng.sample_distinct(0, 3).is_empty());
    }
}
