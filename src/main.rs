mod config;
mod data;
mod model;
mod optimizer;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use crate::config::config::AppCfg;
use crate::data::records::{load_sales_csv, partition_by_country};
use crate::model::train::fit_log_log;
use crate::optimizer::optimizer::optimize;
use crate::optimizer::types::OptimizeOutcome;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    dotenv::dotenv().ok();

    let cfg_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yml".to_string());
    let cfg = AppCfg::load(&cfg_path)?;

    let span = info_span!(
        "Optimizer",
        country = %cfg.optimizer.country_name,
        version = env!("CARGO_PKG_VERSION"),
    );
    let _enter = span.enter();

    info!(path = %cfg.pipeline.data_path, "Loading historical sales data");
    let records = load_sales_csv(&cfg.pipeline.data_path)?;
    let market = partition_by_country(&records, &cfg.optimizer.country_name);
    info!(rows = market.len(), "Market partition ready");

    info!("Fitting sales model");
    let model = fit_log_log(&market).context("fitting sales model")?;
    info!(
        intercept = model.intercept,
        slope = model.slope,
        "Sales model fitted"
    );

    info!(
        available_cash = cfg.pipeline.available_cash,
        grid_steps = cfg.optimizer.optimization_grid_steps,
        "Running grid search"
    );
    let outcome = optimize(
        &cfg.optimizer,
        &model,
        &records,
        cfg.pipeline.available_cash,
    )?;

    match &outcome {
        OptimizeOutcome::Recommendation(rec) => {
            info!(
                jackpot = rec.jackpot,
                net_revenue = rec.net_revenue,
                "Optimization complete"
            );
        }
        OptimizeOutcome::NoFeasibleCandidate => {
            warn!("No feasible jackpot under the current constraints");
        }
    }

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
