use crate::config::config::OptimizerCfg;
use crate::data::history::HistoryAggregates;
use crate::data::records::MILLION;

/// Probability-weighted jackpot cost: the chance that at least one of
/// `predicted_sales` tickets hits, times the advertised jackpot in raw
/// currency. `predicted_sales` is an estimate and need not be an
/// integer, so the exponent is real-valued.
pub fn expected_jackpot_payout(
    jackpot_millions: f64,
    predicted_sales: f64,
    cfg: &OptimizerCfg,
) -> f64 {
    let prob_win = 1.0 - (1.0 - cfg.prob_single_ticket_win).powf(predicted_sales);
    jackpot_millions * MILLION * prob_win
}

/// Regulatory floor: prizes paid over the trailing 51 weeks plus this
/// week's projected prizes, as a share of the matching sales revenue,
/// must reach `min_payout_ratio_12m`. A zero combined denominator is
/// vacuously valid rather than a division error.
pub fn is_payout_ratio_valid(
    expected_payout: f64,
    predicted_sales: f64,
    history: &HistoryAggregates,
    cfg: &OptimizerCfg,
) -> bool {
    let new_sales_revenue = predicted_sales * cfg.ticket_price;
    let secondary_prizes = new_sales_revenue * cfg.secondary_prize_payout_percentage;
    let new_prizes_paid = expected_payout + secondary_prizes;

    let total_sales = history.total_sales_revenue + new_sales_revenue;
    let total_prizes = history.total_prizes_paid + new_prizes_paid;

    if total_sales == 0.0 {
        return true;
    }
    total_prizes / total_sales >= cfg.min_payout_ratio_12m
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> OptimizerCfg {
        OptimizerCfg {
            country_name: "ireland".into(),
            ticket_price: 2.5,
            prob_single_ticket_win: 1.0 / 45_000_000.0,
            secondary_prize_payout_percentage: 0.25,
            min_payout_ratio_12m: 0.40,
            min_jackpot: 2.0,
            max_jackpot: 20.0,
            optimization_grid_steps: 10,
            safety_buffer: 0.0,
            history: None,
        }
    }

    #[test]
    fn test_zero_sales_means_zero_payout() {
        let c = cfg();
        assert_eq!(expected_jackpot_payout(10.0, 0.0, &c), 0.0);
        assert_eq!(expected_jackpot_payout(1e9, 0.0, &c), 0.0);
    }

    #[test]
    fn test_payout_grows_with_sales() {
        let c = cfg();
        let small = expected_jackpot_payout(10.0, 1_000_000.0, &c);
        let large = expected_jackpot_payout(10.0, 50_000_000.0, &c);
        assert!(small > 0.0);
        assert!(large > small);
        assert!(large <= 10.0 * MILLION);
    }

    #[test]
    fn test_payout_accepts_fractional_sales() {
        // The exponent is real-valued; fractional estimates must not
        // round or truncate.
        let c = cfg();
        let lo = expected_jackpot_payout(10.0, 1_000_000.0, &c);
        let mid = expected_jackpot_payout(10.0, 1_000_000.5, &c);
        let hi = expected_jackpot_payout(10.0, 1_000_001.0, &c);
        assert!(lo < mid && mid < hi);
    }

    #[test]
    fn test_ratio_valid_scenario() {
        // 400m prizes on 1bn sales; this week adds 20m jackpot payout and
        // 10m tickets at 2.50 with 25% secondary. Combined ratio > 0.40.
        let history = HistoryAggregates {
            total_prizes_paid: 400_000_000.0,
            total_sales_revenue: 1_000_000_000.0,
        };
        assert!(is_payout_ratio_valid(
            20_000_000.0,
            10_000_000.0,
            &history,
            &cfg()
        ));
    }

    #[test]
    fn test_ratio_invalid_scenario() {
        // Identical shape but only 300m historical prizes; combined ratio
        // falls short of 0.40.
        let history = HistoryAggregates {
            total_prizes_paid: 300_000_000.0,
            total_sales_revenue: 1_000_000_000.0,
        };
        assert!(!is_payout_ratio_valid(
            1_000_000.0,
            1_000_000.0,
            &history,
            &cfg()
        ));
    }

    #[test]
    fn test_zero_denominator_is_vacuously_valid() {
        let history = HistoryAggregates {
            total_prizes_paid: 0.0,
            total_sales_revenue: 0.0,
        };
        assert!(is_payout_ratio_valid(0.0, 0.0, &history, &cfg()));

        // Even with prizes on the books, no sales means no ratio to fail.
        let history = HistoryAggregates {
            total_prizes_paid: 5_000_000.0,
            total_sales_revenue: 0.0,
        };
        assert!(is_payout_ratio_valid(0.0, 0.0, &history, &cfg()));
    }
}
