//! Tests for sliding-window moments.
//!
//! ## Test Organization
//!
//! 1. **Windows** - Window count and per-window moments
//! 2. **Trend** - Drift of the window means
//! 3. **Failures** - Window bounds and constant windows

use approx::assert_relative_eq;

use latfit::prelude::*;

// ============================================================================
// Windows
// ============================================================================

#[test]
fn test_every_complete_window_is_produced() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    let sm = SlidingMoments::compute(&data, 2).unwrap();

    assert_eq!(sm.window, 2);
    assert_eq!(sm.len(), 4);
    assert!(!sm.is_empty());
    assert_eq!(sm.sdevs.len(), 4);
    for (i, (&mean, &sdev)) in sm.means.iter().zip(&sm.sdevs).enumerate() {
        assert_relative_eq!(mean, 1.5 + i as f64);
        assert_relative_eq!(sdev, 0.5f64.sqrt());
    }
}

#[test]
fn test_window_matches_direct_moments() {
    let data: Vec<f64> = (0..40).map(|i| ((i * 13) % 17) as f64 + 0.1 * i as f64).collect();
    let window = 8;
    let sm = SlidingMoments::compute(&data, window).unwrap();

    assert_eq!(sm.len(), data.len() - window + 1);
    for start in [0, 5, sm.len() - 1] {
        let direct = Moments::compute(&data[start..start + window]).unwrap();
        assert_relative_eq!(sm.means[start], direct.mean);
        assert_relative_eq!(sm.sdevs[start], direct.sdev);
    }
}

#[test]
fn test_window_equal_to_length() {
    let data = [1.0, 4.0, 2.0];
    let sm = SlidingMoments::compute(&data, 3).unwrap();
    assert_eq!(sm.len(), 1);
    assert_relative_eq!(sm.means[0], 7.0 / 3.0);
}

// ============================================================================
// Trend
// ============================================================================

#[test]
fn test_trend_of_linear_drift() {
    // Latency creeping up by 0.5 per sample, with jitter that cancels
    // within each window of 2
    let data: Vec<f64> = (0..30)
        .map(|i| 10.0 + 0.5 * i as f64 + if i % 2 == 0 { 0.1 } else { -0.1 })
        .collect();
    let sm = SlidingMoments::compute(&data, 2).unwrap();

    let trend = sm.trend().unwrap();
    assert_relative_eq!(trend.b, 0.5, epsilon = 1e-9);
    assert_relative_eq!(trend.a, 10.25, epsilon = 1e-9);
}

#[test]
fn test_trend_after_warm_up() {
    // Flat after a warm-up spike in the first samples
    let mut data = vec![50.0, 40.0, 30.0];
    data.extend((0..20).map(|i| if i % 2 == 0 { 5.0 } else { 7.0 }));
    let sm = SlidingMoments::compute(&data, 2).unwrap();

    let full = sm.trend().unwrap();
    let settled = sm.trend_after(3).unwrap();

    assert!(full.b < -0.1);
    assert_relative_eq!(settled.b, 0.0, epsilon = 1e-9);
    assert_relative_eq!(settled.a, 6.0, epsilon = 1e-9);
}

#[test]
fn test_trend_after_too_many_discarded() {
    let sm = SlidingMoments::compute(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
    assert_eq!(
        sm.trend_after(2).unwrap_err(),
        FitError::TooFewPoints { got: 1, min: 2 }
    );
    assert_eq!(sm.trend_after(10).unwrap_err(), FitError::EmptyInput);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_window_bounds() {
    let data = [1.0, 2.0, 3.0];
    assert_eq!(
        SlidingMoments::compute(&data, 1).unwrap_err(),
        FitError::InvalidWindow { window: 1, len: 3 }
    );
    assert_eq!(
        SlidingMoments::compute(&data, 4).unwrap_err(),
        FitError::InvalidWindow { window: 4, len: 3 }
    );
}

#[test]
fn test_constant_window_is_degenerate() {
    let err = SlidingMoments::compute(&[2.0, 2.0, 3.0, 4.0], 2).unwrap_err();
    assert_eq!(err, FitError::ZeroVariance);
}
