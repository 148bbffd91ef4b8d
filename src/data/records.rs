use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

/// Scale factor between the millions-denominated columns
/// (`jackpot_announced`, `net_revenue`, `marketing_spend`) and raw
/// currency units.
pub const MILLION: f64 = 1_000_000.0;

/// One observed week of sales for a single market. Rows are uniquely
/// keyed by (country, week_start). `net_revenue` and `marketing_spend`
/// are in millions; `jackpot_announced` is in millions and only used
/// when fitting the sales model.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SalesRecord {
    pub country: String,
    pub week_start: NaiveDate,
    pub jackpot_announced: f64,
    pub tickets_sold: f64,
    pub net_revenue: f64,
    pub marketing_spend: f64,
}

pub fn load_sales_csv(path: &str) -> Result<Vec<SalesRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("failed to open csv: {path}"))?;

    let mut records = Vec::new();
    for row in rdr.deserialize() {
        let rec: SalesRecord = row.context("malformed sales record")?;
        records.push(rec);
    }
    Ok(records)
}

/// One market's series, ascending by `week_start`.
pub fn partition_by_country(records: &[SalesRecord], country: &str) -> Vec<SalesRecord> {
    let mut market: Vec<SalesRecord> = records
        .iter()
        .filter(|r| r.country == country)
        .cloned()
        .collect();
    market.sort_by_key(|r| r.week_start);
    market
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(country: &str, week: &str, tickets: f64) -> SalesRecord {
        SalesRecord {
            country: country.into(),
            week_start: week.parse().unwrap(),
            jackpot_announced: 5.0,
            tickets_sold: tickets,
            net_revenue: 1.0,
            marketing_spend: 0.1,
        }
    }

    #[test]
    fn test_partition_filters_and_sorts() {
        let records = vec![
            rec("ireland", "2024-03-04", 300.0),
            rec("portugal", "2024-02-26", 900.0),
            rec("ireland", "2024-02-26", 100.0),
            rec("ireland", "2024-03-11", 200.0),
        ];

        let market = partition_by_country(&records, "ireland");
        assert_eq!(market.len(), 3);
        let weeks: Vec<_> = market.iter().map(|r| r.week_start.to_string()).collect();
        assert_eq!(weeks, ["2024-02-26", "2024-03-04", "2024-03-11"]);
    }

    #[test]
    fn test_partition_unknown_country_is_empty() {
        let records = vec![rec("ireland", "2024-02-26", 100.0)];
        assert!(partition_by_country(&records, "norway").is_empty());
    }

    #[test]
    fn test_csv_row_deserialization() {
        let csv = "country,week_start,jackpot_announced,tickets_sold,net_revenue,marketing_spend\n\
                   ireland,2024-02-26,5.5,1200000,1.8,0.2\n";
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv.as_bytes());
        let rows: Vec<SalesRecord> = rdr.deserialize().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].country, "ireland");
        assert_eq!(rows[0].week_start.to_string(), "2024-02-26");
        assert_eq!(rows[0].jackpot_announced, 5.5);
        assert_eq!(rows[0].tickets_sold, 1_200_000.0);
    }

    #[test]
    fn test_csv_rejects_malformed_row() {
        let csv = "country,week_start,jackpot_announced,tickets_sold,net_revenue,marketing_spend\n\
                   ireland,not-a-date,5.5,1200000,1.8,0.2\n";
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv.as_bytes());
        let rows: Vec<Result<SalesRecord, _>> = rdr.deserialize().collect();
        assert!(rows[0].is_err());
    }
}
