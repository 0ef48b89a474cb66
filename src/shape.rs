use crate::error::{Error, Result};
use crate::math::interp;

/// A piecewise-linear membership function given by its breakpoints.
///
/// Past the first and last breakpoint the end degrees carry on unchanged, so
/// a shape ending at zero has no support there and one ending at one is a
/// saturating shoulder.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape(Vec<(f64, f64)>);

impl Shape {
    pub fn new(set: &str, points: impl Into<Vec<(f64, f64)>>) -> Result<Self> {
        let points = points.into();
        let invalid = |reason: &str| Error::InvalidShape {
            set: set.to_owned(),
            reason: reason.to_owned(),
        };

        if points.len() < 2 {
            return Err(invalid("at least two breakpoints are required"));
        }
        if points.iter().any(|(x, y)| !x.is_finite() || !(0. ..=1.).contains(y)) {
            return Err(invalid("breakpoints need finite x and a degree in [0, 1]"));
        }
        if points.windows(2).any(|w| w[0].0 >= w[1].0) {
            return Err(invalid("breakpoints must be strictly increasing in x"));
        }

        Ok(Shape(points))
    }

    /// Rises from `start` to one at `peak`, then falls back to zero at `end`
    pub fn triangle(set: &str, start: f64, peak: f64, end: f64) -> Result<Self> {
        Self::new(set, [(start, 0.), (peak, 1.), (end, 0.)])
    }

    /// Like a triangle with a plateau of one over `[left, right]`
    pub fn trapezoid(set: &str, start: f64, left: f64, right: f64, end: f64) -> Result<Self> {
        Self::new(set, [(start, 0.), (left, 1.), (right, 1.), (end, 0.)])
    }

    /// One at and below `full`, reaching zero at `zero`. Mirrored when `zero < full`.
    pub fn shoulder(set: &str, full: f64, zero: f64) -> Result<Self> {
        if full < zero {
            Self::new(set, [(full, 1.), (zero, 0.)])
        } else {
            Self::new(set, [(zero, 0.), (full, 1.)])
        }
    }

    pub fn membership(&self, x: f64) -> f64 {
        interp(x, &self.0)
    }

    pub fn breakpoints(&self) -> &[(f64, f64)] {
        &self.0
    }
}

/// A triangular output set. Its two edges have closed-form inverses, which is
/// what the defuzzifier needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub start: f64,
    pub peak: f64,
    pub end: f64,
}

impl Triangle {
    pub const fn new(start: f64, peak: f64, end: f64) -> Self {
        Triangle { start, peak, end }
    }

    pub fn membership(&self, x: f64) -> f64 {
        interp(x, &[(self.start, 0.), (self.peak, 1.), (self.end, 0.)])
    }

    /// The abscissas on the rising and the falling edge where the degree is `y`
    pub fn inverse(&self, y: f64) -> (f64, f64) {
        let rising = self.start + y * (self.peak - self.start);
        let falling = self.end - y * (self.end - self.peak);

        (rising, falling)
    }

    pub fn support(&self) -> (f64, f64) {
        (self.start, self.end)
    }
}

#[test]
fn test_shape_validation() {
    assert!(Shape::new("lonely", [(0., 1.)]).is_err());
    assert!(Shape::new("unsorted", [(1., 0.), (0., 1.)]).is_err());
    assert!(Shape::new("too_tall", [(0., 0.), (1., 1.5)]).is_err());
    assert!(Shape::new("vertical", [(0., 0.), (0., 1.)]).is_err());

    match Shape::new("bad", [(0., f64::NAN), (1., 0.)]) {
        Err(Error::InvalidShape { set, .. }) => assert_eq!(set, "bad"),
        other => panic!("expected an invalid shape, got {other:?}"),
    }
}

#[test]
fn test_shoulders_saturate() {
    let left = Shape::shoulder("left", -200., -100.).unwrap();
    let right = Shape::shoulder("right", 200., 100.).unwrap();

    assert_eq!(left.membership(-200.), 1.);
    assert_eq!(left.membership(-500.), 1.);
    assert_eq!(left.membership(-150.), 0.5);
    assert_eq!(left.membership(-100.), 0.);
    assert_eq!(left.membership(0.), 0.);
    assert_eq!(right.membership(200.), 1.);
    assert_eq!(right.membership(150.), 0.5);
    assert_eq!(right.membership(-150.), 0.);
}

#[test]
fn test_trapezoid_plateau() {
    let near = Shape::trapezoid("near", -10., -5., -2.5, 0.).unwrap();

    assert_eq!(near.membership(-10.), 0.);
    assert_eq!(near.membership(-7.5), 0.5);
    assert_eq!(near.membership(-4.), 1.);
    assert_eq!(near.membership(-1.25), 0.5);
    assert_eq!(near.membership(1.), 0.);
}

#[test]
fn test_triangle_inverse_round_trip() {
    let triangles = [
        Triangle::new(-100., -80., -60.),
        Triangle::new(-80., -60., 0.),
        Triangle::new(-60., 0., 60.),
        Triangle::new(0., 60., 80.),
        Triangle::new(60., 80., 100.),
    ];

    for triangle in triangles {
        for y in [0.05, 0.3, 0.5, 0.75, 1.] {
            let (rising, falling) = triangle.inverse(y);

            assert!(rising <= falling);
            crate::math::assert_close(triangle.membership(rising), y);
            crate::math::assert_close(triangle.membership(falling), y);
        }
    }
}

#[test]
fn test_triangle_inverse_matches_edge_formulas() {
    let left_fast = Triangle::new(-100., -80., -60.);
    let left_slow = Triangle::new(-80., -60., 0.);

    // y = 0.05x + 5 and y = -0.05x - 3
    let (x1, x2) = left_fast.inverse(0.4);
    crate::math::assert_close(x1, (0.4 - 5.) * 20.);
    crate::math::assert_close(x2, (0.4 + 3.) * -20.);

    // y = 0.05x + 4 and y = -x / 60
    let (x1, x2) = left_slow.inverse(0.4);
    crate::math::assert_close(x1, (0.4 - 4.) * 20.);
    crate::math::assert_close(x2, -60. * 0.4);
    assert_eq!(left_slow.support(), (-80., 0.));
}
