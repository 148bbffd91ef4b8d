use serde::Serialize;
use thiserror::Error;

use crate::config::config::ConfigError;

/// The argmax candidate: the jackpot to announce (millions of currency
/// units) and its projected net revenue (raw currency).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    pub jackpot: f64,
    pub net_revenue: f64,
}

/// Terminal result of one optimization run. An empty feasible set is a
/// defined outcome the caller must branch on, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OptimizeOutcome {
    Recommendation(Recommendation),
    NoFeasibleCandidate,
}

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("sales predictor failed at jackpot {jackpot}m")]
    Prediction {
        jackpot: f64,
        #[source]
        source: anyhow::Error,
    },
    #[error("sales predictor produced a non-finite prediction ({value}) at jackpot {jackpot}m")]
    NonFinitePrediction { jackpot: f64, value: f64 },
}
