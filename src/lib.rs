//! Construction profit scheduling.
//!
//! Computes the maximum achievable profit from scheduling construction
//! projects within a fixed time horizon, given an ordered catalog of
//! building types with build durations and per-unit-time earning rates.
//! The core is a backward dynamic program over discrete time slots plus
//! reconstruction of the concrete build schedule achieving the optimum.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `BuildingType`, `ScheduleEntry`,
//!   `OptimizationResult`
//! - **`validation`**: Eager input checks (horizon domain, catalog integrity)
//! - **`optimizer`**: `ProfitOptimizer` (backward DP + reconstruction) and
//!   `PlanKpi` plan statistics
//!
//! # Architecture
//!
//! This crate is a pure algorithms library: no I/O, no logging, no shared
//! state. Each `optimize` call reads its inputs, allocates a DP table of
//! size `horizon + 1`, and returns a fully materialized result, so callers
//! may invoke it concurrently without coordination. Presentation (tables,
//! progress bars, currency formatting) belongs to the consumer.
//!
//! # References
//!
//! - Bellman (1957), "Dynamic Programming"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15

pub mod models;
pub mod optimizer;
pub mod validation;
