use crate::outputs::Outputs;
use crate::terms::{OutputTerm, Terms};

/// Crisp output by trapezoid centroids.
///
/// Every active term with degree `y` is cut at `y`: the cut runs between the
/// two edge inverses `x1..x2`, the base is the term's full support `x3..x4`.
/// The cut region is weighted by the trapezoid area
/// `(|x2 - x1| + |x4 - x3|) * y / 2` and located at `(x1 + x2) / 2`. The
/// result is the area-weighted mean location, or zero when nothing is active.
pub fn defuzzify<K: OutputTerm>(outputs: &Outputs<K>, terms: &Terms<K>) -> f64 {
    let mut sigma_area = 0.;
    let mut sigma_moment = 0.;

    for (term, degree) in outputs.active() {
        let Some(triangle) = terms.get(term) else {
            tracing::warn!(term = term.name(), "no shape for active output term, skipping");
            continue;
        };
        let (x1, x2) = triangle.inverse(degree);
        let (x3, x4) = triangle.support();
        let area = 0.5 * ((x2 - x1).abs() + (x4 - x3).abs()) * degree;
        let x_bar = (x1 + x2) / 2.;

        sigma_area += area;
        sigma_moment += area * x_bar;
    }

    if sigma_area > 0. {
        sigma_moment / sigma_area
    } else {
        0.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartpole::{force_terms, Force};
    use crate::math::assert_close;

    #[test]
    fn test_nothing_active_is_zero() {
        assert_eq!(defuzzify(&Outputs::<Force>::new(), &force_terms()), 0.);
    }

    #[test]
    fn test_single_full_term_lands_on_its_peak() {
        let terms = force_terms();

        for (term, peak) in [(Force::LeftFast, -80.), (Force::Stop, 0.), (Force::RightSlow, 60.)] {
            let mut outputs = Outputs::new();
            outputs.raise(term, 1.);

            assert_close(defuzzify(&outputs, &terms), peak);
        }
    }

    #[test]
    fn test_weighted_centroid() {
        let mut outputs = Outputs::new();
        outputs.raise(Force::Stop, 0.5);
        outputs.raise(Force::RightSlow, 0.5);

        // stop cut at 0.5: x1 = -30, x2 = 30, area = (60 + 120) * 0.25 = 45, x_bar = 0
        // right_slow cut at 0.5: x1 = 30, x2 = 70, area = (40 + 80) * 0.25 = 30, x_bar = 50
        assert_close(defuzzify(&outputs, &force_terms()), 30. * 50. / 75.);
    }

    #[test]
    fn test_symmetric_conclusions_cancel() {
        let mut outputs = Outputs::new();
        outputs.raise(Force::LeftSlow, 0.7);
        outputs.raise(Force::RightSlow, 0.7);

        assert_close(defuzzify(&outputs, &force_terms()), 0.);
    }

    #[test]
    #[should_panic(expected = "outside [0, 1]")]
    fn test_degree_above_one_is_fatal() {
        let mut outputs = Outputs::new();
        outputs.raise(Force::Stop, 1.5);
    }

    #[test]
    #[should_panic(expected = "outside [0, 1]")]
    fn test_negative_degree_is_fatal() {
        let mut outputs = Outputs::new();
        outputs.raise(Force::Stop, -0.1);
    }
}
