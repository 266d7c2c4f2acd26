/// Checks that `actual` is within `tolerance` of `expected`.
///
/// Panics with both values and the difference otherwise. Two NaNs compare equal.
pub fn check_scalar_near(actual: f64, expected: f64, tolerance: f64) {
    if !is_near(actual, expected, tolerance) {
        let diff = (actual - expected).abs();
        panic!(
            "Scalar mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

fn is_near(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual.is_nan() && expected.is_nan()) || (actual - expected).abs() <= tolerance
}

/// Element-wise [`check_scalar_near`] over two slices of equal length.
pub fn check_slice_near(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Data length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if !is_near(*a, *e, tolerance) {
            let diff = (a - e).abs();
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}
