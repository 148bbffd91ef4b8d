use anyhow::Result;

/// The capability the optimizer depends on. The contract is fixed in
/// log-space: callers pass log(jackpot) and receive log(predicted ticket
/// sales). Implementations must be deterministic and pure.
pub trait SalesPredictor {
    fn predict_log_sales(&self, log_jackpot: f64) -> Result<f64>;
}

/// Fitted ordinary-least-squares line in log-log space, the shape the
/// weekly training step produces for one market.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLogRegression {
    pub intercept: f64,
    pub slope: f64,
}

impl SalesPredictor for LogLogRegression {
    fn predict_log_sales(&self, log_jackpot: f64) -> Result<f64> {
        Ok(self.intercept + self.slope * log_jackpot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regression_is_linear_in_log_space() {
        let model = LogLogRegression {
            intercept: 10.0,
            slope: 0.5,
        };
        let y0 = model.predict_log_sales(0.0).unwrap();
        let y2 = model.predict_log_sales(2.0).unwrap();
        assert!((y0 - 10.0).abs() < 1e-12);
        assert!((y2 - 11.0).abs() < 1e-12);
    }
}
