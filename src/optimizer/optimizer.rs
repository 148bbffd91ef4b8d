use crate::config::config::OptimizerCfg;
use crate::data::history::HistoryAggregates;
use crate::data::records::{partition_by_country, SalesRecord, MILLION};
use crate::model::predictor::SalesPredictor;
use crate::optimizer::payout::{expected_jackpot_payout, is_payout_ratio_valid};
use crate::optimizer::types::{OptimizeError, OptimizeOutcome, Recommendation};

/// Evenly spaced candidate jackpots (millions) from `min_jackpot` to
/// `max_jackpot`, both endpoints included. A one-point grid sits at
/// `min_jackpot`.
pub fn candidate_grid(cfg: &OptimizerCfg) -> Vec<f64> {
    let steps = cfg.optimization_grid_steps;
    if steps == 1 {
        return vec![cfg.min_jackpot];
    }
    let span = cfg.max_jackpot - cfg.min_jackpot;
    (0..steps)
        .map(|i| cfg.min_jackpot + span * i as f64 / (steps - 1) as f64)
        .collect()
}

/// One pass over the candidate grid: drop candidates the cash on hand
/// cannot cover, drop candidates that would sink the trailing payout
/// ratio below the regulatory floor, score the rest by projected net
/// revenue and keep the argmax. Equal scores keep the smaller jackpot,
/// which the ascending walk with a strictly-greater compare guarantees.
pub fn optimize<P: SalesPredictor>(
    cfg: &OptimizerCfg,
    predictor: &P,
    records: &[SalesRecord],
    available_cash: f64,
) -> Result<OptimizeOutcome, OptimizeError> {
    cfg.validate()?;

    let market = partition_by_country(records, &cfg.country_name);
    let history = HistoryAggregates::for_market(cfg, &market);
    let spendable = available_cash - cfg.safety_buffer;

    let mut best: Option<Recommendation> = None;
    for jackpot in candidate_grid(cfg) {
        // Hard eligibility filter, inclusive boundary: a jackpot exactly
        // equal to cash minus the buffer is still payable.
        if jackpot * MILLION > spendable {
            continue;
        }

        let log_sales = predictor
            .predict_log_sales(jackpot.ln())
            .map_err(|source| OptimizeError::Prediction { jackpot, source })?;
        if !log_sales.is_finite() {
            return Err(OptimizeError::NonFinitePrediction {
                jackpot,
                value: log_sales,
            });
        }
        let predicted_sales = log_sales.exp();
        if !predicted_sales.is_finite() {
            return Err(OptimizeError::NonFinitePrediction {
                jackpot,
                value: log_sales,
            });
        }

        let expected_payout = expected_jackpot_payout(jackpot, predicted_sales, cfg);
        if !is_payout_ratio_valid(expected_payout, predicted_sales, &history, cfg) {
            continue;
        }

        let sales_revenue = predicted_sales * cfg.ticket_price;
        let secondary_cost = sales_revenue * cfg.secondary_prize_payout_percentage;
        let net_revenue = sales_revenue - expected_payout - secondary_cost;

        let better = match &best {
            Some(b) => net_revenue > b.net_revenue,
            None => true,
        };
        if better {
            best = Some(Recommendation {
                jackpot,
                net_revenue,
            });
        }
    }

    Ok(match best {
        Some(rec) => OptimizeOutcome::Recommendation(rec),
        None => OptimizeOutcome::NoFeasibleCandidate,
    })
}
