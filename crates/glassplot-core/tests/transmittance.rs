//! Integration test: transmittance interpolation through the glass record.

use approx::assert_abs_diff_eq;

use glassplot_core::error::GlassError;
use glassplot_core::glass::Glass;
use glassplot_core::grid::{nm_to_micron, range_with_step};

/// Internal transmittance of a 10 mm crown glass sample.
fn crown_with_transmittance() -> Glass {
    let mut glass = Glass::new("N-BK7", "SCHOTT");
    let samples = [
        (0.310, 0.290),
        (0.320, 0.560),
        (0.334, 0.800),
        (0.350, 0.920),
        (0.365, 0.971),
        (0.380, 0.989),
        (0.400, 0.992),
        (0.460, 0.995),
        (0.546, 0.998),
        (0.700, 0.998),
        (1.060, 0.999),
    ];
    for (lambda, t) in samples {
        glass.append_transmittance_data(lambda, t, 10.0);
    }
    glass
}

#[test]
fn test_measured_points_are_reproduced_at_reference_thickness() {
    let glass = crown_with_transmittance();
    let data = glass.transmittance_data();
    assert_eq!(data.reference_thickness(), Some(10.0));
    for (lambda, t) in data.wavelengths().iter().zip(data.transmittances()) {
        assert_abs_diff_eq!(glass.transmittance(*lambda, 10.0).unwrap(), *t, epsilon = 1e-9);
    }
}

#[test]
fn test_beer_lambert_doubling() {
    let glass = crown_with_transmittance();
    for &lambda in glass.transmittance_data().wavelengths() {
        let single = glass.transmittance(lambda, 10.0).unwrap();
        let double = glass.transmittance(lambda, 20.0).unwrap();
        assert_abs_diff_eq!(double, single * single, epsilon = 1e-9);
    }
}

#[test]
fn test_batch_matches_individual_queries() {
    let glass = crown_with_transmittance();
    let lambdas: Vec<f64> = range_with_step(300.0, 1100.0, 5.0)
        .into_iter()
        .map(nm_to_micron)
        .collect();
    let batch = glass.transmittance_many(&lambdas, 25.0).unwrap();
    assert_eq!(batch.len(), lambdas.len());
    for (lambda, t) in lambdas.iter().zip(&batch) {
        assert_abs_diff_eq!(*t, glass.transmittance(*lambda, 25.0).unwrap(), epsilon = 1e-15);
    }
}

#[test]
fn test_thicker_sample_transmits_less() {
    let glass = crown_with_transmittance();
    let thin = glass.transmittance(0.36, 5.0).unwrap();
    let thick = glass.transmittance(0.36, 50.0).unwrap();
    assert!(thick < thin, "{} should be below {}", thick, thin);
}

#[test]
fn test_glass_without_data_reports_insufficient_data() {
    let glass = Glass::new("EMPTY", "TEST");
    assert!(matches!(
        glass.transmittance(0.5, 10.0),
        Err(GlassError::InsufficientData(_))
    ));
    assert!(matches!(
        glass.transmittance_many(&[0.4, 0.5], 10.0),
        Err(GlassError::InsufficientData(_))
    ));
}

#[test]
fn test_unsorted_wavelengths_are_rejected() {
    let mut glass = Glass::new("UNSORTED", "TEST");
    glass.append_transmittance_data(0.5, 0.9, 10.0);
    glass.append_transmittance_data(0.4, 0.8, 10.0);
    glass.append_transmittance_data(0.6, 0.95, 10.0);
    assert_eq!(
        glass.transmittance(0.45, 10.0),
        Err(GlassError::NonMonotonic { index: 1 })
    );
}
