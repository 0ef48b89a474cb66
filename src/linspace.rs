use num::Float;

/// Evenly spaced samples over a closed interval, endpoints included.
pub struct Linspace<F> {
    start: F,
    step: F,
    index: usize,
    len: usize,
}

impl<F: Float> Linspace<F> {
    pub fn new(min: F, max: F, n: usize) -> Self {
        let step = if n > 1 {
            // n - 1 always fits a float's integer range for any realistic sample count
            let num_steps = F::from(n - 1).unwrap_or_else(F::one);
            (max - min) / num_steps
        } else {
            F::zero()
        };
        Linspace {
            start: min,
            step,
            index: 0,
            len: n,
        }
    }

    /// Samples `min..=max` every `step` units, like numpy.arange with the end included
    pub fn with_step(min: F, max: F, step: F) -> Self {
        // floor is closest approx to what python does for int() conversion
        let num = ((max - min) / step).floor().to_usize().unwrap_or(0) + 1;

        Self::new(min, max, num)
    }
}

impl<F: Float> Iterator for Linspace<F> {
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            // Calculate the value just like numpy.linspace does
            let i = F::from(self.index)?;
            self.index += 1;
            Some(self.start + self.step * i)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<F: Float> ExactSizeIterator for Linspace<F> {}

#[test]
fn test_linspace() {
    let samples: Vec<f64> = Linspace::new(-10., 10., 5).collect();

    assert_eq!(samples, vec![-10., -5., 0., 5., 10.]);

    let samples: Vec<f64> = Linspace::with_step(0., 1., 0.25).collect();

    assert_eq!(samples, vec![0., 0.25, 0.5, 0.75, 1.]);
    assert_eq!(Linspace::new(3., 7., 1).collect::<Vec<f64>>(), vec![3.]);
}
