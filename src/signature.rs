//! Bit signatures and the sign-of-projection computation.
//!
//! A signature holds one bit per hyperplane: bit `i` is 1 when the input
//! vector lies on the non-negative side of plane `i`. The boundary case of a
//! dot product of exactly zero maps to 1 (inclusive threshold); a vector
//! orthogonal to a plane therefore reads as "positive side". This is an
//! observable part of the contract, not an implementation accident.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::basis::HyperplaneBasis;
use crate::error::{Result, SimHashError};

/// A fixed-length bit signature of one input vector.
///
/// Bits are stored one `u8` (0 or 1) per position, inline for the common
/// case of at most 64 hyperplanes. A signature carries no reference back to
/// the basis or the source vector; signatures are only comparable when they
/// were produced from the same basis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    bits: SmallVec<[u8; 64]>,
}

impl Signature {
    /// Compute the signature of `vector` against `basis`.
    ///
    /// For each plane in basis order, the output bit is 1 iff the dot
    /// product of the plane's normal with `vector` is `>= 0`. Fails with
    /// [`SimHashError::DimensionMismatch`] if the vector length differs from
    /// the basis dimension; the input is never truncated or padded.
    pub fn compute(basis: &HyperplaneBasis, vector: &[f32]) -> Result<Self> {
        if vector.len() != basis.dim() {
            return Err(SimHashError::DimensionMismatch {
                expected: basis.dim(),
                got: vector.len(),
                index: None,
            });
        }

        let bits = basis
            .planes()
            .iter()
            .map(|plane| u8::from(plane.dot(vector) >= 0.0))
            .collect();
        Ok(Self { bits })
    }

    /// Number of bits (the basis's hyperplane count).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for a zero-length signature (never produced by a valid basis).
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits, one `u8` (0 or 1) per hyperplane, in basis order.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Number of positions where two signatures differ.
    ///
    /// Only meaningful for signatures produced from the same basis.
    ///
    /// # Panics
    ///
    /// Panics if the signatures have different lengths, which means they
    /// came from different bases and the comparison is undefined.
    pub fn hamming_distance(&self, other: &Signature) -> usize {
        assert_eq!(
            self.len(),
            other.len(),
            "signatures from different bases are not comparable"
        );
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Hamming distance divided by signature length, in [0, 1].
    pub fn normalized_hamming(&self, other: &Signature) -> f32 {
        self.hamming_distance(other) as f32 / self.len() as f32
    }

    /// Estimated cosine similarity between the source vectors.
    ///
    /// Uses `cos(pi * d / k)`: the probability that one random hyperplane
    /// separates two vectors is their angle over pi, so the normalized
    /// Hamming distance estimates the angle.
    pub fn estimated_cosine(&self, other: &Signature) -> f32 {
        let theta = std::f32::consts::PI * self.normalized_hamming(other);
        theta.cos()
    }
}
