//! Profit optimization and plan statistics.
//!
//! # Algorithm
//!
//! `ProfitOptimizer` runs a backward dynamic program over discrete time
//! slots: `best[t]` is the maximum profit attainable when construction
//! decisions begin at slot `t`, and `choice[t]` records the building type
//! achieving it. Reconstruction walks the choices forward from `t = 0` to
//! materialize the schedule.
//!
//! # KPI
//!
//! `PlanKpi` computes derived plan statistics: building count, time used,
//! utilization, profit per time unit, and per-entry revenues.
//!
//! # References
//!
//! - Bellman (1957), "Dynamic Programming"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15

mod dp;
mod kpi;

pub use dp::{OptimizeRequest, ProfitOptimizer};
pub use kpi::PlanKpi;
