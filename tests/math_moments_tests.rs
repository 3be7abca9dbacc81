//! Tests for distribution moments.
//!
//! ## Test Organization
//!
//! 1. **Known Samples** - Hand-computed moments
//! 2. **Degenerate Inputs** - Too few points, constant data, non-finite values
//! 3. **Helpers** - Normal density and integer mean

use approx::{assert_abs_diff_eq, assert_relative_eq};

use latfit::prelude::*;

// ============================================================================
// Known Samples
// ============================================================================

#[test]
fn test_symmetric_sample() {
    // mean 3, deviations -2..2
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    let m = Moments::compute(&data).unwrap();

    assert_relative_eq!(m.mean, 3.0);
    // |d| = 2,1,0,1,2 -> 6/5
    assert_relative_eq!(m.adev, 1.2);
    // Σd² = 10, n-1 = 4
    assert_relative_eq!(m.variance, 2.5);
    assert_relative_eq!(m.sdev, 2.5f64.sqrt());
    assert_abs_diff_eq!(m.skew, 0.0, epsilon = 1e-12);
    // Σd⁴ = 34 -> 34 / (5 · 6.25) - 3
    assert_relative_eq!(m.curt, 34.0 / 31.25 - 3.0, epsilon = 1e-12);
}

#[test]
fn test_right_skewed_sample() {
    // Long right tail: typical latency shape
    let data = [1.0, 1.0, 1.0, 1.0, 6.0];
    let m = Moments::compute(&data).unwrap();

    assert_relative_eq!(m.mean, 2.0);
    // d = -1,-1,-1,-1,4: Σd² = 20, var = 5
    assert_relative_eq!(m.variance, 5.0);
    // Σd³ = 60 -> 60 / (5 · 5 · √5)
    assert_relative_eq!(m.skew, 60.0 / (25.0 * 5f64.sqrt()), epsilon = 1e-12);
    assert!(m.skew > 0.0);
    // Σd⁴ = 260 -> 260 / (5 · 25) - 3
    assert_relative_eq!(m.curt, 260.0 / 125.0 - 3.0, epsilon = 1e-12);
}

#[test]
fn test_two_points_is_enough() {
    let m = Moments::compute(&[1.0, 3.0]).unwrap();
    assert_relative_eq!(m.mean, 2.0);
    assert_relative_eq!(m.variance, 2.0);
}

#[test]
fn test_f32_support() {
    let data: Vec<f32> = vec![0.5, 1.5, 2.5, 3.5];
    let m = Moments::compute(&data).unwrap();
    assert_relative_eq!(m.mean, 2.0f32);
}

// ============================================================================
// Degenerate Inputs
// ============================================================================

#[test]
fn test_constant_sequences_fail() {
    for n in 2..20 {
        for value in [0.0, 1.0, -3.25, 1e6] {
            let data = vec![value; n];
            assert_eq!(
                Moments::compute(&data),
                Err(FitError::ZeroVariance),
                "n={} value={}",
                n,
                value
            );
        }
    }
}

#[test]
fn test_too_few_points() {
    let err = Moments::compute(&[1.0]).unwrap_err();
    assert_eq!(err, FitError::TooFewPoints { got: 1, min: 2 });
    assert!(err.is_degenerate());

    assert_eq!(
        Moments::<f64>::compute(&[]).unwrap_err(),
        FitError::EmptyInput
    );
}

#[test]
fn test_non_finite_rejected() {
    let err = Moments::compute(&[1.0, f64::NAN, 2.0]).unwrap_err();
    assert_eq!(
        err,
        FitError::NonFinite {
            name: "data",
            index: 1
        }
    );
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn test_density_uses_sample_moments() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    let m = Moments::compute(&data).unwrap();
    assert_relative_eq!(m.density(3.0), gaussian(3.0, 3.0, m.sdev));
    assert!(m.density(3.0) > m.density(5.0));
}

#[test]
fn test_gaussian_integrates_to_one() {
    let step = 0.01;
    let area: f64 = (-1000..=1000)
        .map(|i| gaussian(i as f64 * step, 0.0, 1.0) * step)
        .sum();
    assert_abs_diff_eq!(area, 1.0, epsilon = 1e-6);
}

#[test]
fn test_gaussian_peak() {
    // 1 / sqrt(2π)
    assert_relative_eq!(gaussian(0.0_f64, 0.0, 1.0), 0.398_942_280_401_432_7, epsilon = 1e-12);
}

#[test]
fn test_integer_mean() {
    let ns = [1_000_000i64, 2_000_000, 3_000_000];
    assert_eq!(integer_mean(&ns), Some(2_000_000.0));
    assert_eq!(integer_mean(&[]), None);
}

#[test]
fn test_integer_mean_does_not_overflow() {
    let mean = integer_mean(&[i64::MAX, i64::MAX]).unwrap();
    assert_relative_eq!(mean, i64::MAX as f64, max_relative = 1e-12);
}
