//! simsketch: random-hyperplane SimHash signatures for dense vectors.
//!
//! Produces fixed-length bit signatures ("sketches") of real-valued vectors
//! such that **Hamming distance between signatures approximates angular
//! distance between the vectors**.
//!
//! ## The Hyperplane Trick
//!
//! Draw a random hyperplane through the origin. Two vectors land on the same
//! side of it exactly when the plane does not pass between them, and for a
//! Gaussian (rotation-invariant) normal direction that happens with
//! probability proportional to the angle:
//!
//! ```text
//! P[sign(r·a) != sign(r·b)] = θ(a, b) / π
//! ```
//!
//! With K independent hyperplanes, each contributing one bit, the fraction
//! of differing bits is an unbiased estimate of θ/π that tightens as K
//! grows. Cosine similarity is then `cos(θ)`.
//!
//! ## Usage Modes
//!
//! - **Online** ([`SimHashBuilder`]): generate a basis once, hash vectors as
//!   they arrive. All signatures from one builder share the basis and are
//!   mutually comparable.
//! - **Offline** ([`batch_simhash`]): hand over a whole collection; the
//!   dimension is inferred from the first vector and one shared basis covers
//!   the batch.
//!
//! Signatures from *different* bases (different count, dimension, or random
//! draw) are never comparable — keep one basis per comparison universe.
//!
//! ```rust
//! use simsketch::SimHashBuilder;
//!
//! let builder = SimHashBuilder::with_seed(64, 4, 7).unwrap();
//!
//! let a = builder.hash(&[0.9, 0.1, 0.0, 0.3]).unwrap();
//! let b = builder.hash(&[0.8, 0.2, 0.1, 0.3]).unwrap();
//! let c = builder.hash(&[-0.9, -0.1, 0.0, -0.3]).unwrap();
//!
//! assert_eq!(a.len(), 64);
//! // Nearby vectors agree on most bits; a vector and its negation on none.
//! assert!(a.normalized_hamming(&b) < a.normalized_hamming(&c));
//! ```
//!
//! ## Scope
//!
//! This crate stops at signature production and pairwise Hamming helpers.
//! Indexing, bucketing, and candidate retrieval over the emitted signatures
//! belong to the caller (an LSH index, a near-duplicate detector, ...).
//!
//! ## References
//!
//! - Charikar (2002). "Similarity estimation techniques from rounding
//!   algorithms." (the hyperplane rounding scheme)
//! - Goemans & Williamson (1995). "Improved approximation algorithms for
//!   maximum cut." (where the rounding argument originates)

#![warn(missing_docs)]

pub mod basis;
pub mod builder;
pub mod error;
pub mod signature;

pub use basis::{Hyperplane, HyperplaneBasis};
pub use builder::{batch_simhash, batch_simhash_with_rng, SimHashBuilder};
pub use error::{Result, SimHashError};
pub use signature::Signature;
