//! Domain models for construction profit scheduling.
//!
//! Provides the core data types for posing a profit-scheduling problem
//! and representing its solution. A problem is an integer time horizon
//! plus an ordered catalog of building types; a solution is the maximum
//! profit, the per-type build counts, and the reconstructed schedule.
//!
//! All values are transient — nothing here persists across optimizer calls.

mod building;
mod plan;

pub use building::{standard_catalog, BuildingType};
pub use plan::{OptimizationResult, ScheduleEntry};
