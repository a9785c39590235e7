use std::fmt::Write as _;

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::core::{Letter, LetterTile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("tile pool is exhausted")]
pub struct PoolExhaustedError;

/// The shared reserve of tiles not yet held by a player or placed on the board.
///
/// # Drawing
///
/// Each [`draw`](Self::draw) removes one tile chosen uniformly at random among
/// the tiles still in the pool. The random source is owned by the pool and
/// seeded from a [`PoolSeed`], so two pools created with the same seed hand out
/// the same sequence of tiles.
///
/// # Example
///
/// ```
/// use lexigrid_engine::TilePool;
///
/// let mut pool = TilePool::new();
/// assert_eq!(pool.len(), TilePool::TOTAL);
///
/// let rack = pool.draw_many(7);
/// assert_eq!(rack.len(), 7);
/// assert_eq!(pool.len(), TilePool::TOTAL - 7);
/// ```
#[derive(Debug, Clone)]
pub struct TilePool {
    seed: PoolSeed,
    rng: Pcg32,
    tiles: Vec<LetterTile>,
}

impl Default for TilePool {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed for deterministic tile draws.
///
/// A 128-bit value that initializes the pool's random source. Serialized as a
/// 32-character lowercase hex string.
///
/// # Example
///
/// ```
/// use lexigrid_engine::{PoolSeed, TilePool};
/// use rand::Rng as _;
///
/// let seed: PoolSeed = rand::rng().random();
/// let mut a = TilePool::with_seed(seed);
/// let mut b = TilePool::with_seed(seed);
/// assert_eq!(a.draw_many(7), b.draw_many(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSeed([u8; 16]);

impl PoolSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let num = u128::from_be_bytes(self.0);
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{num:032x}").unwrap();
        hex_str
    }

    /// Parses the 32-character hex form produced by [`Self::to_hex`].
    pub fn from_hex(hex_str: &str) -> Result<Self, String> {
        if hex_str.len() != 32 {
            return Err(format!(
                "invalid hex: expected 32 characters, got {}",
                hex_str.len()
            ));
        }
        let num = u128::from_str_radix(hex_str, 16)
            .map_err(|e| format!("invalid hex: {hex_str} ({e})"))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for PoolSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PoolSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}

impl Distribution<PoolSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PoolSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PoolSeed(seed)
    }
}

impl TilePool {
    /// Number of tiles in a freshly created pool.
    pub const TOTAL: usize = {
        let mut total = 0;
        let mut i = 0;
        while i < Letter::LEN {
            total += Letter::ALL[i].tile_count();
            i += 1;
        }
        total
    };

    /// Creates a full pool with a random seed.
    ///
    /// For deterministic draws, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Creates a full pool holding the standard letter distribution.
    #[must_use]
    pub fn with_seed(seed: PoolSeed) -> Self {
        let tiles = Letter::ALL
            .iter()
            .flat_map(|&letter| std::iter::repeat_n(LetterTile::new(letter), letter.tile_count()))
            .collect();
        Self {
            seed,
            rng: Pcg32::from_seed(seed.0),
            tiles,
        }
    }

    #[must_use]
    pub fn seed(&self) -> PoolSeed {
        self.seed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns how many tiles with `letter` remain.
    #[must_use]
    pub fn letter_count(&self, letter: Letter) -> usize {
        self.tiles.iter().filter(|t| t.letter() == letter).count()
    }

    /// Removes and returns a uniformly chosen tile.
    pub fn draw(&mut self) -> Result<LetterTile, PoolExhaustedError> {
        if self.tiles.is_empty() {
            return Err(PoolExhaustedError);
        }
        let index = self.rng.random_range(0..self.tiles.len());
        let tile = self.tiles.swap_remove(index);
        debug!(letter = %tile.letter(), remaining = self.tiles.len(), "tile drawn");
        Ok(tile)
    }

    /// Draws up to `n` tiles, stopping early if the pool runs out.
    ///
    /// The length of the returned vector is the number actually drawn.
    pub fn draw_many(&mut self, n: usize) -> Vec<LetterTile> {
        (0..n).map_while(|_| self.draw().ok()).collect()
    }

    /// Returns a tile to the pool.
    pub fn put_back(&mut self, tile: LetterTile) {
        self.tiles.push(tile);
    }
}
