pub mod predictor;
pub mod train;
