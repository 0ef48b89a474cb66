use num::Float;

/// Similar to numpy.interp, for a single abscissa: values left of the first
/// breakpoint take its ordinate, values right of the last take the last one.
///
/// `coords` must be sorted by strictly increasing x.
pub(crate) fn interp<F: Float>(x: F, coords: &[(F, F)]) -> F {
    let (Some(&(x_first, y_first)), Some(&(x_last, y_last))) = (coords.first(), coords.last()) else {
        return F::zero();
    };

    // Base cases
    if x <= x_first {
        return y_first;
    }
    if x >= x_last {
        return y_last;
    }

    for window in coords.windows(2) {
        let (x1, y1) = window[0];
        let (x2, y2) = window[1];

        // Actual interpolation
        if x1 <= x && x <= x2 {
            return y1 + (x - x1) * (y2 - y1) / (x2 - x1);
        }
    }

    // NaN falls through every comparison above
    F::zero()
}

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_interp() {
    let xs = [1., 2., 3.];
    let ys = [3., 2., 0.];
    let coords: Vec<_> = xs.into_iter().zip(ys).collect();
    let expected = [3., 3., 2.5, 0.56, 0.];

    for (x, y) in [0., 1., 1.5, 2.72, 3.24].into_iter().zip(expected) {
        assert_close(interp(x, &coords), y);
    }

    let xs = [0., 1., 2., 3., 4.5];
    let ys = [0., 2., 5., 3., 2.];
    let coords: Vec<_> = xs.into_iter().zip(ys).collect();

    assert_close(interp(2.5, &coords), 4.);
    assert_close(interp(-1., &coords), 0.);
    assert_close(interp(7.5, &coords), 2.);
}

#[test]
fn test_interp_hits_breakpoints_exactly() {
    let coords = [(-100., 0.), (0., 1.), (100., 0.)];

    assert_eq!(interp(-100., &coords), 0.);
    assert_eq!(interp(0., &coords), 1.);
    assert_eq!(interp(100., &coords), 0.);
    assert_eq!(interp(-150., &coords), 0.);
    assert_eq!(interp(f64::NAN, &coords), 0.);
}
