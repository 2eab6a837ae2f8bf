use crate::errors::{EngineError, Result};

/// Validated competition width.
///
/// Holds `sigma` together with the precomputed factor `1 / (2·sigma²)` so the
/// inner loops of every strategy only multiply. Construction fails for
/// `sigma <= 0`, for non-finite `sigma`, and for a `sigma` small enough that the
/// factor overflows (which would turn self-weights into `0 · ∞ = NaN`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelWidth {
    sigma: f64,
    inv_two_var: f64,
}

impl KernelWidth {
    pub fn new(sigma: f64) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(EngineError::domain(format!(
                "competition width sigma must be finite and > 0, got {sigma}"
            )));
        }
        let inv_two_var = 1.0 / (2.0 * sigma * sigma);
        if !inv_two_var.is_finite() {
            return Err(EngineError::domain(format!(
                "competition width sigma = {sigma} is too small to evaluate the kernel"
            )));
        }
        Ok(Self { sigma, inv_two_var })
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// `1 / (2·sigma²)`.
    #[inline]
    pub fn inv_two_var(&self) -> f64 {
        self.inv_two_var
    }

    /// Gaussian interaction weight between two trait values.
    ///
    /// Exactly `1.0` when `a == b`, and symmetric in its arguments since
    /// `(a - b)²` and `(b - a)²` round identically.
    #[inline]
    pub fn weight(&self, a: f64, b: f64) -> f64 {
        let d = a - b;
        (-(d * d) * self.inv_two_var).exp()
    }
}
