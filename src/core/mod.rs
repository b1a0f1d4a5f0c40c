//! Core building blocks: validated run parameters, input checks, the predictor
//! command, and the closing time report. Consumed by the high-level `api` module.
pub mod invoke;
pub mod params;
pub mod report;
pub mod validate;
