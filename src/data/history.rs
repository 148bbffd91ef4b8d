use crate::config::config::{HistoryOverrideCfg, OptimizerCfg};
use crate::data::records::{SalesRecord, MILLION};

/// The regulatory window is the trailing 51 completed weeks; the week
/// being optimized is the 52nd.
pub const TRAILING_WEEKS: usize = 51;

/// Trailing-window prize and sales totals, raw currency units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryAggregates {
    pub total_prizes_paid: f64,
    pub total_sales_revenue: f64,
}

impl HistoryAggregates {
    /// Pre-aggregated totals supplied with the configuration. The real
    /// pipeline aggregates upstream and passes the totals through;
    /// deterministic tests use this path too.
    pub fn from_override(h: &HistoryOverrideCfg) -> Self {
        Self {
            total_prizes_paid: h.total_prizes_paid_last_51_weeks,
            total_sales_revenue: h.total_sales_revenue_last_51_weeks,
        }
    }

    /// Recompute the totals from the raw weekly series: last
    /// [`TRAILING_WEEKS`] records by `week_start` ascending. `records`
    /// must already hold a single market's rows (see
    /// [`partition_by_country`](crate::data::records::partition_by_country));
    /// mixed countries would be summed together. Prizes are
    /// estimated as costs minus marketing, where costs are sales revenue
    /// minus net revenue. `net_revenue` and `marketing_spend` are stored
    /// in millions and scaled to raw currency before subtraction so all
    /// terms share the units of `tickets_sold * ticket_price`.
    pub fn from_records(records: &[SalesRecord], ticket_price: f64) -> Self {
        let mut sorted: Vec<&SalesRecord> = records.iter().collect();
        sorted.sort_by_key(|r| r.week_start);
        let tail = &sorted[sorted.len().saturating_sub(TRAILING_WEEKS)..];

        let mut total_sales = 0.0;
        let mut total_prizes = 0.0;
        for r in tail {
            let week_sales = r.tickets_sold * ticket_price;
            let week_costs = week_sales - r.net_revenue * MILLION;
            total_prizes += week_costs - r.marketing_spend * MILLION;
            total_sales += week_sales;
        }

        Self {
            total_prizes_paid: total_prizes,
            total_sales_revenue: total_sales,
        }
    }

    /// Strategy selection: a pre-aggregated override wins over
    /// recomputation from the raw series.
    pub fn for_market(cfg: &OptimizerCfg, market: &[SalesRecord]) -> Self {
        match &cfg.history {
            Some(h) => Self::from_override(h),
            None => Self::from_records(market, cfg.ticket_price),
        }
    }
}
