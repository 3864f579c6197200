//! Polynomial band-limited step (polyBLEP) correction.
//!
//! A naive square or saw jumps instantaneously, and sampling that jump folds
//! energy above Nyquist back into the audible band. The correction below
//! replaces the samples within one step of the jump with a two-segment
//! polynomial approximating a band-limited step. Generators add (or subtract)
//! it at every discontinuity.

/// Polynomial used to round off a discontinuity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlepKernel {
    /// Full-height kernel: `2t - t² - 1` after the jump, `t² + 2t + 1` before it.
    /// Cancels a jump of height 2 such as the edges of a ±1 square.
    #[default]
    Narrow,
    /// The same polynomial at half scale.
    Wide,
}

impl BlepKernel {
    fn scale(self) -> f64 {
        match self {
            BlepKernel::Narrow => 1.0,
            BlepKernel::Wide => 0.5,
        }
    }

    /// Correction for normalized phase `t` in `[0, 1)` and step width `dt`.
    ///
    /// Zero everywhere except within `dt` of the wrap point at `t = 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use psynth::BlepKernel;
    ///
    /// assert_eq!(BlepKernel::Narrow.correction(0.0, 0.1), -1.0);
    /// assert_eq!(BlepKernel::Wide.correction(0.0, 0.1), -0.5);
    /// assert_eq!(BlepKernel::Narrow.correction(0.5, 0.1), 0.0);
    /// ```
    pub fn correction(self, t: f64, dt: f64) -> f64 {
        let value = if t < dt {
            let t = t / dt;
            2.0 * t - t * t - 1.0
        } else if t > 1.0 - dt {
            let t = (t - 1.0) / dt;
            t * t + 2.0 * t + 1.0
        } else {
            0.0
        };
        value * self.scale()
    }
}

/// Shorthand for [`BlepKernel::Narrow`]'s correction.
pub fn polyblep_narrow(t: f64, dt: f64) -> f64 {
    BlepKernel::Narrow.correction(t, dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_between_windows() {
        for &dt in &[0.001, 0.01, 0.1, 0.25, 0.49] {
            let steps = 1000;
            for i in 1..steps {
                let t = dt + (1.0 - 2.0 * dt) * i as f64 / steps as f64;
                assert_eq!(polyblep_narrow(t, dt), 0.0, "t={} dt={}", t, dt);
                assert_eq!(BlepKernel::Wide.correction(t, dt), 0.0);
            }
        }
    }

    #[test]
    fn test_narrow_endpoints() {
        let dt = 0.05;
        assert_eq!(polyblep_narrow(0.0, dt), -1.0);
        // Just before the wrap the correction approaches +1
        assert!((polyblep_narrow(1.0 - 1e-9, dt) - 1.0).abs() < 1e-6);
        // Both segments meet zero at the window edges
        assert!(polyblep_narrow(dt - 1e-12, dt).abs() < 1e-9);
        assert!(polyblep_narrow(1.0 - dt + 1e-12, dt).abs() < 1e-9);
    }

    #[test]
    fn test_wide_is_half_narrow() {
        let dt = 0.02;
        for &t in &[0.0, 0.005, 0.0199, 0.981, 0.99, 0.999] {
            let narrow = BlepKernel::Narrow.correction(t, dt);
            let wide = BlepKernel::Wide.correction(t, dt);
            assert!((wide - narrow / 2.0).abs() < 1e-15);
        }
    }

    #[test]
    fn test_bounded() {
        let dt = 0.3;
        for i in 0..1000 {
            let t = i as f64 / 1000.0;
            let c = polyblep_narrow(t, dt);
            assert!((-1.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn test_default_kernel() {
        assert_eq!(BlepKernel::default(), BlepKernel::Narrow);
    }
}
