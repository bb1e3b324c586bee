//! Statistical behavior of simhash signatures.
//!
//! The hyperplane trick guarantees P[bit differs] = angle / pi per plane,
//! so normalized Hamming distance should track the angle between the source
//! vectors and tighten as the hyperplane count grows. All rngs are seeded,
//! and every bound sits several standard deviations away from the mean.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simsketch::SimHashBuilder;

fn random_unit_vector(dim: usize, rng: &mut StdRng) -> Vec<f32> {
    let v: Vec<f32> = (0..dim).map(|_| rng.gen::<f32>() * 2.0 - 1.0).collect();
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    v.into_iter().map(|x| x / norm).collect()
}

/// A pair of unit vectors at a known angle, embedded in `dim` dimensions.
fn pair_at_angle(theta: f32, dim: usize) -> (Vec<f32>, Vec<f32>) {
    let mut a = vec![0.0; dim];
    let mut b = vec![0.0; dim];
    a[0] = 1.0;
    b[0] = theta.cos();
    b[1] = theta.sin();
    (a, b)
}

#[test]
fn near_identical_vectors_have_near_zero_distance() {
    let mut rng = StdRng::seed_from_u64(101);
    let builder = SimHashBuilder::with_seed(256, 64, 1).unwrap();

    let v = random_unit_vector(64, &mut rng);
    let nudged: Vec<f32> = v.iter().map(|x| x + 0.001).collect();

    let d = builder
        .hash(&v)
        .unwrap()
        .normalized_hamming(&builder.hash(&nudged).unwrap());
    assert!(d < 0.1, "normalized Hamming {d} too large for near-identical vectors");
}

#[test]
fn opposite_vectors_have_near_one_distance() {
    let mut rng = StdRng::seed_from_u64(202);
    let builder = SimHashBuilder::with_seed(256, 64, 2).unwrap();

    let v = random_unit_vector(64, &mut rng);
    let neg: Vec<f32> = v.iter().map(|x| -x).collect();

    let d = builder
        .hash(&v)
        .unwrap()
        .normalized_hamming(&builder.hash(&neg).unwrap());
    assert!(d > 0.95, "normalized Hamming {d} too small for opposite vectors");
}

#[test]
fn orthogonal_vectors_sit_near_one_half() {
    let builder = SimHashBuilder::with_seed(1024, 8, 3).unwrap();
    let (a, b) = pair_at_angle(std::f32::consts::FRAC_PI_2, 8);

    let d = builder
        .hash(&a)
        .unwrap()
        .normalized_hamming(&builder.hash(&b).unwrap());
    // Mean 0.5, sigma ~ 0.016 at K = 1024.
    assert!((0.4..0.6).contains(&d), "normalized Hamming {d} not near 0.5");
}

#[test]
fn estimate_tightens_as_hyperplane_count_grows() {
    let theta = std::f32::consts::FRAC_PI_2;
    let (a, b) = pair_at_angle(theta, 8);

    let mean_abs_error = |count: usize| -> f32 {
        let trials = 20;
        let total: f32 = (0..trials)
            .map(|seed| {
                let builder = SimHashBuilder::with_seed(count, 8, seed as u64).unwrap();
                let d = builder
                    .hash(&a)
                    .unwrap()
                    .normalized_hamming(&builder.hash(&b).unwrap());
                (d - 0.5).abs()
            })
            .sum();
        total / trials as f32
    };

    let coarse = mean_abs_error(16);
    let fine = mean_abs_error(1024);

    // Expected |error| scales as 1/sqrt(K): ~0.1 at K=16, ~0.012 at K=1024.
    assert!(
        fine < coarse,
        "error did not shrink with K: K=16 -> {coarse}, K=1024 -> {fine}"
    );
    assert!(fine < 0.05, "K=1024 error {fine} too large");
}

#[test]
fn estimated_cosine_tracks_true_cosine() {
    let theta = std::f32::consts::FRAC_PI_4;
    let (a, b) = pair_at_angle(theta, 8);
    let builder = SimHashBuilder::with_seed(2048, 8, 77).unwrap();

    let est = builder
        .hash(&a)
        .unwrap()
        .estimated_cosine(&builder.hash(&b).unwrap());
    let truth = theta.cos();

    assert!(
        (est - truth).abs() < 0.08,
        "estimated cosine {est} vs true {truth}"
    );
}
