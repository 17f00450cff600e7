//! Aggregation and derived-metrics engine
//!
//! Stateless pure functions over normalized record slices. Every function
//! here is deterministic and free of shared mutable state, so callers may
//! compute several datasets concurrently without coordination.

pub mod balance;
pub mod budget;
pub mod filter;
pub mod forecast;
pub mod group;
pub mod totals;

pub use balance::{opening_balance, running_balance, BalancePoint};
pub use budget::budget_vs_actual;
pub use filter::filter_records;
pub use forecast::{forecast_next_month, Forecast};
pub use group::{group_sum, top_n};
pub use totals::{daily_average_expense, totals, Totals};
