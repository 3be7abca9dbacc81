//! Tests for the straight-line least-squares fit.
//!
//! ## Test Organization
//!
//! 1. **Exact Lines** - Noise-free data: parameters recovered, errors vanish
//! 2. **Scattered Data** - Hand-computed parameters and uncertainties
//! 3. **Edge Cases** - Two points, vertical data, invalid input

use approx::{assert_abs_diff_eq, assert_relative_eq};

use latfit::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Fit `ndata` exact samples of `y = coefs[0] + coefs[1]·x` and check the
/// parameters and all uncertainty measures within 0.1.
fn check_exact_line(ndata: usize, coefs: [f64; 2]) {
    let x: Vec<f64> = (0..ndata).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&v| evaluate_polynomial(&coefs, v)).collect();

    let line = LinearFit::fit(&x, &y).unwrap();

    let eps = 0.1;
    assert!((line.a - coefs[0]).abs() <= eps, "a: {}", line.a);
    assert!((line.b - coefs[1]).abs() <= eps, "b: {}", line.b);
    assert!(line.siga.abs() <= eps, "siga: {}", line.siga);
    assert!(line.sigb.abs() <= eps, "sigb: {}", line.sigb);
    assert!(line.chi2.abs() <= eps, "chi2: {}", line.chi2);
    assert!(line.sigdat.abs() <= eps, "sigdat: {}", line.sigdat);
}

// ============================================================================
// Exact Lines
// ============================================================================

#[test]
fn test_rising_line() {
    check_exact_line(100, [1.0, 3.0]);
}

#[test]
fn test_horizontal_line() {
    check_exact_line(100, [1.0, 0.0]);
}

#[test]
fn test_line_through_origin() {
    check_exact_line(100, [0.0, 1.0]);
}

#[test]
fn test_large_abscissae_stay_accurate() {
    // Message indices far from zero
    let x: Vec<f64> = (0..50).map(|i| 1.0e6 + i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&v| -2.0 + 0.001 * v).collect();

    let line = LinearFit::fit(&x, &y).unwrap();

    assert_relative_eq!(line.b, 0.001, epsilon = 1e-9);
    assert_relative_eq!(line.predict(1.0e6), 998.0, epsilon = 1e-6);
}

// ============================================================================
// Scattered Data
// ============================================================================

#[test]
fn test_scattered_points() {
    // mean(x) = 1.5, Σt² = 5, Σt·y = 4
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 3.0, 2.0, 4.0];

    let line = LinearFit::fit(&x, &y).unwrap();

    assert_relative_eq!(line.b, 0.8, epsilon = 1e-12);
    assert_relative_eq!(line.a, 1.3, epsilon = 1e-12);
    // Residuals -0.3, 0.9, -0.9, 0.3
    assert_relative_eq!(line.chi2, 1.8, epsilon = 1e-12);
    assert_relative_eq!(line.sigdat, 0.9f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(line.sigb, 0.2f64.sqrt() * line.sigdat, epsilon = 1e-12);
    assert_relative_eq!(line.siga, 0.7f64.sqrt() * line.sigdat, epsilon = 1e-12);
}

#[test]
fn test_predict() {
    let line = LinearFit::fit(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0]).unwrap();
    assert_relative_eq!(line.predict(10.0), 21.0, epsilon = 1e-12);
    assert_relative_eq!(line.predict(-0.5), 0.0, epsilon = 1e-12);
}

#[test]
fn test_agrees_with_chi_square_fit() {
    let x: Vec<f64> = (0..15).map(f64::from).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&v| 0.5 * v + if (v as i32) % 2 == 0 { 0.25 } else { -0.25 })
        .collect();

    let line = LinearFit::fit(&x, &y).unwrap();
    let model = Lfit::new().polynomial(1).build().unwrap();
    let general = model.fit_polynomial(&x, &y).unwrap();

    assert_relative_eq!(line.a, general.params[0], epsilon = 1e-10);
    assert_relative_eq!(line.b, general.params[1], epsilon = 1e-10);
    assert_relative_eq!(line.chi2, general.chi2, epsilon = 1e-10);
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_two_points_have_zero_uncertainty() {
    let line = LinearFit::fit(&[1.0, 3.0], &[2.0, 6.0]).unwrap();

    assert_relative_eq!(line.a, 0.0, epsilon = 1e-12);
    assert_relative_eq!(line.b, 2.0, epsilon = 1e-12);
    assert_eq!(line.sigdat, 0.0);
    assert_eq!(line.siga, 0.0);
    assert_eq!(line.sigb, 0.0);
    assert_abs_diff_eq!(line.chi2, 0.0, epsilon = 1e-20);
}

#[test]
fn test_vertical_data_is_degenerate() {
    let err = LinearFit::fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, FitError::ZeroVariance);
    assert!(err.is_degenerate());
}

#[test]
fn test_single_point() {
    let err = LinearFit::fit(&[1.0], &[1.0]).unwrap_err();
    assert_eq!(err, FitError::TooFewPoints { got: 1, min: 2 });
}

#[test]
fn test_mismatched_lengths() {
    let err = LinearFit::fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(err, FitError::MismatchedInputs { x_len: 3, y_len: 2 });
}

#[test]
fn test_non_finite_ordinate() {
    let err = LinearFit::fit(&[1.0, 2.0, 3.0], &[1.0, f64::INFINITY, 2.0]).unwrap_err();
    assert_eq!(err, FitError::NonFinite { name: "y", index: 1 });
}
