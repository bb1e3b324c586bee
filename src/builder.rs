//! Reusable builder and one-shot batch hashing.
//!
//! Two ways to consume the same primitive:
//!
//! - [`SimHashBuilder`] generates a basis once and hashes vectors against it
//!   as they arrive. Every signature from one builder is comparable to every
//!   other signature from that builder, because they share the basis.
//! - [`batch_simhash`] takes a whole collection up front, infers the
//!   dimension from the first vector, and hashes everything against one
//!   freshly generated basis.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::basis::HyperplaneBasis;
use crate::error::{Result, SimHashError};
use crate::signature::Signature;

/// Seed used by the convenience constructors.
///
/// A fixed default means two builders created with equal parameters produce
/// identical bases, so their signatures are mutually comparable.
const DEFAULT_SEED: u64 = 42;

/// Computes signatures of later-arriving vectors against one fixed basis.
#[derive(Debug, Clone)]
pub struct SimHashBuilder {
    basis: HyperplaneBasis,
}

impl SimHashBuilder {
    /// Create a builder with `count` hyperplanes for vectors of `dim`.
    ///
    /// Uses the crate's default seed; use [`with_seed`](Self::with_seed) or
    /// [`with_rng`](Self::with_rng) to control the random draw.
    pub fn new(count: usize, dim: usize) -> Result<Self> {
        Self::with_seed(count, dim, DEFAULT_SEED)
    }

    /// Create a builder whose basis is drawn from a seeded [`StdRng`].
    pub fn with_seed(count: usize, dim: usize, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_rng(count, dim, &mut rng)
    }

    /// Create a builder whose basis is drawn from the supplied rng.
    pub fn with_rng<R: Rng + ?Sized>(count: usize, dim: usize, rng: &mut R) -> Result<Self> {
        Ok(Self {
            basis: HyperplaneBasis::generate(count, dim, rng)?,
        })
    }

    /// Wrap an existing basis.
    pub fn from_basis(basis: HyperplaneBasis) -> Self {
        Self { basis }
    }

    /// Hash one vector against the stored basis.
    ///
    /// May be called any number of times; the basis is never regenerated. A
    /// failed call (wrong dimension) leaves the builder untouched.
    pub fn hash(&self, vector: &[f32]) -> Result<Signature> {
        Signature::compute(&self.basis, vector)
    }

    /// Signature length in bits.
    pub fn num_hyperplanes(&self) -> usize {
        self.basis.num_hyperplanes()
    }

    /// Input dimension this builder accepts.
    pub fn dim(&self) -> usize {
        self.basis.dim()
    }

    /// The stored basis.
    pub fn basis(&self) -> &HyperplaneBasis {
        &self.basis
    }
}

/// Hash a whole collection against one freshly generated basis.
///
/// Equivalent to [`batch_simhash_with_rng`] with a [`StdRng`] seeded from
/// the crate default.
pub fn batch_simhash(vectors: &[Vec<f32>], count: usize) -> Result<Vec<Signature>> {
    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    batch_simhash_with_rng(vectors, count, &mut rng)
}

/// Hash a whole collection against one basis drawn from `rng`.
///
/// The dimension is inferred from the first vector; every vector is
/// validated against it before any signature is computed, so the call
/// either fails with the first offending index or returns one signature per
/// input, in input order.
pub fn batch_simhash_with_rng<R: Rng + ?Sized>(
    vectors: &[Vec<f32>],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Signature>> {
    let dim = match vectors.first() {
        Some(first) => first.len(),
        None => return Err(SimHashError::EmptyBatch),
    };

    for (index, vector) in vectors.iter().enumerate() {
        if vector.len() != dim {
            return Err(SimHashError::DimensionMismatch {
                expected: dim,
                got: vector.len(),
                index: Some(index),
            });
        }
    }

    let basis = HyperplaneBasis::generate(count, dim, rng)?;
    vectors
        .iter()
        .map(|vector| Signature::compute(&basis, vector))
        .collect()
}
