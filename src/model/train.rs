use thiserror::Error;

use crate::data::records::SalesRecord;
use crate::model::predictor::LogLogRegression;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrainError {
    #[error("need at least 2 rows to fit the sales model, got {0}")]
    NotEnoughData(usize),
    #[error(
        "row {index}: jackpot_announced ({jackpot}) and tickets_sold ({tickets}) \
         must be > 0 to take logs"
    )]
    NonPositiveObservation {
        index: usize,
        jackpot: f64,
        tickets: f64,
    },
    #[error("jackpot_announced is constant across the series; slope is undefined")]
    DegenerateRegressor,
}

/// Least-squares fit of log(tickets_sold) on log(jackpot_announced) over
/// one market's series.
pub fn fit_log_log(records: &[SalesRecord]) -> Result<LogLogRegression, TrainError> {
    if records.len() < 2 {
        return Err(TrainError::NotEnoughData(records.len()));
    }

    let mut xs = Vec::with_capacity(records.len());
    let mut ys = Vec::with_capacity(records.len());
    for (index, r) in records.iter().enumerate() {
        if !(r.jackpot_announced > 0.0) || !(r.tickets_sold > 0.0) {
            return Err(TrainError::NonPositiveObservation {
                index,
                jackpot: r.jackpot_announced,
                tickets: r.tickets_sold,
            });
        }
        xs.push(r.jackpot_announced.ln());
        ys.push(r.tickets_sold.ln());
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in xs.iter().zip(&ys) {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }
    if sxx == 0.0 {
        return Err(TrainError::DegenerateRegressor);
    }

    let slope = sxy / sxx;
    Ok(LogLogRegression {
        intercept: mean_y - slope * mean_x,
        slope,
    })
}
