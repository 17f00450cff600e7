//! Report generation

pub mod dashboard;

pub use dashboard::{CategoryShare, DashboardSummary};
