pub mod balance_calculator;
pub mod settlement_engine;
pub mod share_split;

pub use balance_calculator::{BalanceAccumulator, BalanceSheet};
pub use settlement_engine::SettlementEngine;
pub use share_split::{split_evenly, split_units};
