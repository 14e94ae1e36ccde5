//! Tests for Beta sampling and Bernoulli helpers

#[cfg(test)]
mod tests {
    use mesagen::math::probability::{one_in, sample_beta, sample_symmetric_unit};
    use rand::{SeedableRng, rngs::StdRng};

    // Tests Beta(5, 5) samples stay in [0, 1] and centre on one half
    // Verified by taking the smallest uniform instead of the fifth
    #[test]
    fn test_sample_beta_is_centred_for_symmetric_shapes() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples: Vec<f64> = (0..2000).map(|_| sample_beta(5, 5, &mut rng)).collect();

        assert!(samples.iter().all(|&s| (0.0..=1.0).contains(&s)));
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        assert!((mean - 0.5).abs() < 0.02, "mean was {mean}");
    }

    // Tests skewed shapes move the mean towards alpha / (alpha + beta)
    // Verified by swapping alpha and beta in the order statistic
    #[test]
    fn test_sample_beta_skewed_mean() {
        let mut rng = StdRng::seed_from_u64(11);
        let mean = (0..3000).map(|_| sample_beta(2, 6, &mut rng)).sum::<f64>() / 3000.0;

        assert!((mean - 0.25).abs() < 0.02, "mean was {mean}");
    }

    // Tests higher concentration pulls rescaled samples towards zero
    // Verified by ignoring the concentration parameter
    #[test]
    fn test_symmetric_unit_concentrates_around_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let samples: Vec<f64> = (0..2000)
            .map(|_| sample_symmetric_unit(5, &mut rng))
            .collect();

        assert!(samples.iter().all(|&s| (-1.0..=1.0).contains(&s)));
        let central = samples.iter().filter(|s| s.abs() < 0.5).count() as f64 / 2000.0;
        assert!(central > 0.75, "central share was {central}");
    }

    // Tests one_in edge cases and its long-run frequency
    // Verified by comparing against 1 instead of 0
    #[test]
    fn test_one_in_frequency() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!((0..100).all(|_| one_in(1, &mut rng)));
        assert!((0..100).all(|_| !one_in(0, &mut rng)));

        let hits = (0..4000).filter(|_| one_in(4, &mut rng)).count() as f64 / 4000.0;
        assert!((hits - 0.25).abs() < 0.04, "hit rate was {hits}");
    }
}
