//! Plan quality metrics (KPIs).
//!
//! Computes derived statistics from a completed optimization result,
//! ready for a presentation layer to render.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Building count | Total instances built |
//! | Time used | Sum of schedule entry durations |
//! | Time remaining | Horizon minus time used |
//! | Utilization | time_used / horizon |
//! | Profit per time unit | total_profit / time_used |
//! | Entry revenues | `(horizon - end) * earn_rate` per entry |

use crate::models::{BuildingType, OptimizationResult};

/// Plan performance indicators for a given horizon.
#[derive(Debug, Clone)]
pub struct PlanKpi {
    /// Maximum achievable profit (copied from the result).
    pub total_profit: i64,
    /// Total building instances in the plan.
    pub building_count: u32,
    /// Time units spent constructing.
    pub time_used: u32,
    /// Idle time units at the end of the horizon.
    pub time_remaining: u32,
    /// Fraction of the horizon spent constructing (0.0..1.0).
    pub utilization: f64,
    /// Profit earned per time unit of construction (0.0 for idle plans).
    pub profit_per_time_unit: f64,
    /// Revenue contributed by each schedule entry, in schedule order.
    pub entry_revenues: Vec<i64>,
}

impl PlanKpi {
    /// Computes KPIs from a result, its catalog, and the horizon it was
    /// optimized for.
    pub fn calculate(result: &OptimizationResult, catalog: &[BuildingType], horizon: u32) -> Self {
        let time_used = result.time_used();
        let time_remaining = horizon.saturating_sub(time_used);

        let utilization = if horizon == 0 {
            0.0
        } else {
            f64::from(time_used) / f64::from(horizon)
        };

        let profit_per_time_unit = if time_used == 0 {
            0.0
        } else {
            result.total_profit as f64 / f64::from(time_used)
        };

        let entry_revenues = result
            .schedule
            .iter()
            .map(|entry| {
                catalog
                    .iter()
                    .find(|b| b.id == entry.building_id)
                    .map(|b| entry.revenue(horizon, b))
                    .unwrap_or(0)
            })
            .collect();

        Self {
            total_profit: result.total_profit,
            building_count: result.building_count(),
            time_used,
            time_remaining,
            utilization,
            profit_per_time_unit,
            entry_revenues,
        }
    }
}
