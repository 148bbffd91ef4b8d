use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use thiserror::Error;

/// Rejections raised by [`OptimizerCfg::validate`]. Raised at load time,
/// before any grid evaluation can happen.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("countryName must not be empty")]
    EmptyCountry,
    #[error("ticketPrice must be a finite value > 0, got {0}")]
    InvalidTicketPrice(f64),
    #[error("probSingleTicketWin must lie strictly inside (0, 1), got {0}")]
    WinProbabilityOutOfRange(f64),
    #[error("secondaryPrizePayoutPercentage must lie in [0, 1], got {0}")]
    SecondaryPayoutOutOfRange(f64),
    #[error("minPayoutRatio12m must lie in [0, 1], got {0}")]
    PayoutRatioOutOfRange(f64),
    #[error("minJackpot must be a finite value > 0 (millions), got {0}")]
    InvalidMinJackpot(f64),
    #[error("maxJackpot ({max}) must be finite and >= minJackpot ({min})")]
    JackpotBoundsInverted { min: f64, max: f64 },
    #[error("optimizationGridSteps must be >= 1")]
    ZeroGridSteps,
    #[error("safetyBuffer must be finite and >= 0, got {0}")]
    InvalidSafetyBuffer(f64),
    #[error("history override totals must be finite and >= 0")]
    InvalidHistoryOverride,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppCfg {
    pub optimizer: OptimizerCfg,
    pub pipeline: PipelineCfg,
}

/// Glue-level settings for one run of the binary. Kept apart from
/// [`OptimizerCfg`] so the optimizer itself only ever sees the pure
/// market parameters. `availableCash` comes from whatever treasury
/// source drives the run; the loader only checks it is usable.
#[derive(Debug, Deserialize, Clone)]
pub struct PipelineCfg {
    #[serde(rename = "dataPath", alias = "datapath", default = "default_data_path")]
    pub data_path: String,
    #[serde(rename = "availableCash", alias = "availablecash")]
    pub available_cash: f64,
}

/// Market parameters for one optimization run. Jackpot bounds are in
/// millions of currency units; `safetyBuffer` and the history override
/// totals are raw currency.
#[derive(Debug, Deserialize, Clone)]
pub struct OptimizerCfg {
    #[serde(rename = "countryName", alias = "countryname")]
    pub country_name: String,
    #[serde(rename = "ticketPrice", alias = "ticketprice")]
    pub ticket_price: f64,
    #[serde(rename = "probSingleTicketWin", alias = "probsingleticketwin")]
    pub prob_single_ticket_win: f64,
    #[serde(
        rename = "secondaryPrizePayoutPercentage",
        alias = "secondaryprizepayoutpercentage"
    )]
    pub secondary_prize_payout_percentage: f64,
    #[serde(rename = "minPayoutRatio12m", alias = "minpayoutratio12m")]
    pub min_payout_ratio_12m: f64,
    #[serde(rename = "minJackpot", alias = "minjackpot")]
    pub min_jackpot: f64,
    #[serde(rename = "maxJackpot", alias = "maxjackpot")]
    pub max_jackpot: f64,
    #[serde(
        rename = "optimizationGridSteps",
        alias = "optimizationgridsteps",
        default = "default_grid_steps"
    )]
    pub optimization_grid_steps: usize,
    #[serde(rename = "safetyBuffer", alias = "safetybuffer", default)]
    pub safety_buffer: f64,
    #[serde(default)]
    pub history: Option<HistoryOverrideCfg>,
}

/// Pre-aggregated trailing-51-week totals, raw currency. When present the
/// optimizer uses these verbatim instead of recomputing from the raw
/// weekly series.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HistoryOverrideCfg {
    #[serde(
        rename = "totalPrizesPaidLast51Weeks",
        alias = "totalprizespaidlast51weeks"
    )]
    pub total_prizes_paid_last_51_weeks: f64,
    #[serde(
        rename = "totalSalesRevenueLast51Weeks",
        alias = "totalsalesrevenuelast51weeks"
    )]
    pub total_sales_revenue_last_51_weeks: f64,
}

fn default_data_path() -> String {
    "data/lottery_sales.csv".into()
}
fn default_grid_steps() -> usize {
    50
}

impl OptimizerCfg {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.country_name.trim().is_empty() {
            return Err(ConfigError::EmptyCountry);
        }
        if !self.ticket_price.is_finite() || self.ticket_price <= 0.0 {
            return Err(ConfigError::InvalidTicketPrice(self.ticket_price));
        }
        if !self.prob_single_ticket_win.is_finite()
            || self.prob_single_ticket_win <= 0.0
            || self.prob_single_ticket_win >= 1.0
        {
            return Err(ConfigError::WinProbabilityOutOfRange(
                self.prob_single_ticket_win,
            ));
        }
        if !self.secondary_prize_payout_percentage.is_finite()
            || !(0.0..=1.0).contains(&self.secondary_prize_payout_percentage)
        {
            return Err(ConfigError::SecondaryPayoutOutOfRange(
                self.secondary_prize_payout_percentage,
            ));
        }
        if !self.min_payout_ratio_12m.is_finite()
            || !(0.0..=1.0).contains(&self.min_payout_ratio_12m)
        {
            return Err(ConfigError::PayoutRatioOutOfRange(self.min_payout_ratio_12m));
        }
        if !self.min_jackpot.is_finite() || self.min_jackpot <= 0.0 {
            return Err(ConfigError::InvalidMinJackpot(self.min_jackpot));
        }
        if !self.max_jackpot.is_finite() || self.max_jackpot < self.min_jackpot {
            return Err(ConfigError::JackpotBoundsInverted {
                min: self.min_jackpot,
                max: self.max_jackpot,
            });
        }
        if self.optimization_grid_steps < 1 {
            return Err(ConfigError::ZeroGridSteps);
        }
        if !self.safety_buffer.is_finite() || self.safety_buffer < 0.0 {
            return Err(ConfigError::InvalidSafetyBuffer(self.safety_buffer));
        }
        if let Some(h) = &self.history {
            let ok = h.total_prizes_paid_last_51_weeks.is_finite()
                && h.total_prizes_paid_last_51_weeks >= 0.0
                && h.total_sales_revenue_last_51_weeks.is_finite()
                && h.total_sales_revenue_last_51_weeks >= 0.0;
            if !ok {
                return Err(ConfigError::InvalidHistoryOverride);
            }
        }
        Ok(())
    }
}

impl AppCfg {
    pub fn load(path: &str) -> Result<Self> {
        let cfg = Config::builder()
            .add_source(File::with_name(path))
            .add_source(config::Environment::default().separator("__"))
            .build()
            .context("building config")?;

        let app: AppCfg = cfg.try_deserialize().context("deserializing config")?;
        app.validate()?;
        Ok(app)
    }

    pub fn validate(&self) -> Result<()> {
        self.optimizer.validate()?;
        anyhow::ensure!(
            !self.pipeline.data_path.is_empty(),
            "pipeline.dataPath missing"
        );
        anyhow::ensure!(
            self.pipeline.available_cash.is_finite() && self.pipeline.available_cash >= 0.0,
            "pipeline.availableCash must be finite and >= 0"
        );
        Ok(())
    }
}
