//! Random sampling helpers built on `rand`

use rand::Rng;

/// Sample from Beta(alpha, beta) for positive integer shape parameters
///
/// Uses the order statistic identity: the `alpha`-th smallest of
/// `alpha + beta - 1` independent uniforms is Beta(alpha, beta) distributed.
pub fn sample_beta<R: Rng + ?Sized>(alpha: usize, beta: usize, rng: &mut R) -> f64 {
    let alpha = alpha.max(1);
    let beta = beta.max(1);

    let mut uniforms: Vec<f64> = (0..alpha + beta - 1).map(|_| rng.random::<f64>()).collect();
    uniforms.sort_by(f64::total_cmp);

    uniforms.get(alpha - 1).copied().unwrap_or(0.5)
}

/// Sample from a symmetric Beta(k, k) rescaled onto `[-1, 1]`
///
/// Larger `k` concentrates samples around zero.
pub fn sample_symmetric_unit<R: Rng + ?Sized>(concentration: usize, rng: &mut R) -> f64 {
    sample_beta(concentration, concentration, rng).mul_add(2.0, -1.0)
}

/// Bernoulli trial with probability `1 / denominator`
///
/// A zero denominator never succeeds.
pub fn one_in<R: Rng + ?Sized>(denominator: u32, rng: &mut R) -> bool {
    denominator > 0 && rng.random_range(0..denominator) == 0
}
