use serde::{Deserialize, Serialize};

use crate::error::RegressionError;

/// A fitted one-dimensional linear model `y = slope * x + intercept`.
///
/// This struct is also the persisted artifact schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    /// Fits the model with the ordinary-least-squares closed form.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the columns differ in length,
    /// `NotEnoughSamples` with fewer than two samples, and `ZeroVariance`
    /// when every feature value is identical.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self, RegressionError> {
        if xs.len() != ys.len() {
            return Err(RegressionError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(RegressionError::NotEnoughSamples {
                got: xs.len(),
                required: 2,
            });
        }

        let n = xs.len() as f64;
        let x_mean = xs.iter().sum::<f64>() / n;
        let y_mean = ys.iter().sum::<f64>() / n;

        let mut cov = 0.0;
        let mut var = 0.0;
        for (&x, &y) in xs.iter().zip(ys) {
            cov += (x - x_mean) * (y - y_mean);
            var += (x - x_mean) * (x - x_mean);
        }

        if var == 0.0 {
            return Err(RegressionError::ZeroVariance);
        }

        let slope = cov / var;
        Ok(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    /// Evaluates the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
