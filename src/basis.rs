//! Random hyperplane bases for sign-of-projection hashing.
//!
//! A basis is an ordered set of K random direction vectors, each drawn from
//! a standard normal distribution. Gaussian directions are the standard
//! choice because they are rotation-invariant: every direction in space is
//! equally likely, which is what makes the collision probability of two
//! vectors depend only on the angle between them.
//!
//! The basis is the only state shared across hash calls. It is immutable
//! after construction, so `&HyperplaneBasis` can be read from any number of
//! threads without locking.

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimHashError};

/// A single random hyperplane, stored as its normal vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hyperplane {
    normal: Vec<f32>,
}

impl Hyperplane {
    /// Create a hyperplane from an explicit normal vector.
    pub fn new(normal: Vec<f32>) -> Self {
        Self { normal }
    }

    /// Sample a hyperplane with i.i.d. standard-normal coordinates.
    fn sample<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Self {
        let normal = (0..dim).map(|_| rng.sample(StandardNormal)).collect();
        Self { normal }
    }

    /// Dimension of the normal vector.
    pub fn dim(&self) -> usize {
        self.normal.len()
    }

    /// The normal-vector coordinates.
    pub fn normal(&self) -> &[f32] {
        &self.normal
    }

    /// Dot product with a vector of the same dimension.
    pub(crate) fn dot(&self, vector: &[f32]) -> f32 {
        self.normal.iter().zip(vector.iter()).map(|(h, v)| h * v).sum()
    }
}

/// An ordered set of hyperplanes of one shared dimension.
///
/// Order is significant: bit `i` of every signature produced from this basis
/// comes from plane `i`. Signatures are only comparable within one basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperplaneBasis {
    planes: Vec<Hyperplane>,
    dim: usize,
}

impl HyperplaneBasis {
    /// Generate `count` random hyperplanes of dimension `dim`.
    ///
    /// Draws `count * dim` independent standard-normal samples from `rng` in
    /// plane order. Given a seeded rng the result is exactly reproducible.
    pub fn generate<R: Rng + ?Sized>(count: usize, dim: usize, rng: &mut R) -> Result<Self> {
        if count == 0 {
            return Err(SimHashError::InvalidParameter(
                "hyperplane count must be >= 1".to_string(),
            ));
        }
        if dim == 0 {
            return Err(SimHashError::InvalidParameter(
                "dimension must be >= 1".to_string(),
            ));
        }

        let planes = (0..count).map(|_| Hyperplane::sample(dim, rng)).collect();
        Ok(Self { planes, dim })
    }

    /// Build a basis from explicitly constructed hyperplanes.
    ///
    /// All planes must share one nonzero dimension.
    pub fn from_planes(planes: Vec<Hyperplane>) -> Result<Self> {
        let dim = match planes.first() {
            Some(plane) => plane.dim(),
            None => {
                return Err(SimHashError::InvalidParameter(
                    "hyperplane count must be >= 1".to_string(),
                ))
            }
        };
        if dim == 0 {
            return Err(SimHashError::InvalidParameter(
                "dimension must be >= 1".to_string(),
            ));
        }
        if let Some(plane) = planes.iter().find(|p| p.dim() != dim) {
            return Err(SimHashError::InvalidParameter(format!(
                "hyperplanes must share one dimension: found {} and {}",
                dim,
                plane.dim()
            )));
        }

        Ok(Self { planes, dim })
    }

    /// Number of hyperplanes (signature length in bits).
    pub fn num_hyperplanes(&self) -> usize {
        self.planes.len()
    }

    /// Input dimension this basis accepts.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The hyperplanes, in signature-bit order.
    pub fn planes(&self) -> &[Hyperplane] {
        &self.planes
    }
}
