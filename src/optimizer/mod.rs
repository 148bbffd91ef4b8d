pub mod optimizer;
pub mod payout;
pub mod types;
