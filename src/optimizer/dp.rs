//! Backward dynamic-programming profit optimizer.
//!
//! # Algorithm
//!
//! 1. `best[n] = 0`. For `t` from `n - 1` down to `0`, try every catalog
//!    entry that can still complete by the horizon.
//! 2. A building finishing at `finish` earns `(n - finish) * earn_rate`,
//!    plus whatever is optimal to build from `finish` onward.
//! 3. Only a strictly greater candidate replaces the current best, so ties
//!    go to the earliest-listed catalog entry.
//! 4. Slots where no building fits are left idle and contribute zero
//!    profit to upstream sums.
//! 5. Reconstruction follows `choice[t]` forward from `t = 0` until the
//!    horizon is reached or no building fits.
//!
//! # Complexity
//! O(n * c) time, O(n) space, where n = horizon and c = catalog size.

use crate::models::{standard_catalog, BuildingType, OptimizationResult, ScheduleEntry};
use crate::validation::{validate_input, ValidationError};

/// Input container for optimization.
#[derive(Debug, Clone)]
pub struct OptimizeRequest {
    /// Time horizon (discrete units).
    pub horizon: u32,
    /// Building catalog, in tie-break order.
    pub catalog: Vec<BuildingType>,
}

impl OptimizeRequest {
    /// Creates a new optimize request.
    pub fn new(horizon: u32, catalog: Vec<BuildingType>) -> Self {
        Self { horizon, catalog }
    }

    /// Creates a request against the standard three-building catalog.
    pub fn standard(horizon: u32) -> Self {
        Self::new(horizon, standard_catalog())
    }
}

/// Backward dynamic-programming profit optimizer.
///
/// Decides, for every starting slot, which building type (if any) to begin
/// constructing so as to maximize total profit accrued over the remaining
/// horizon, then reconstructs the schedule achieving that optimum.
///
/// The optimizer is stateless: each call is a pure function of the horizon
/// and catalog, so a single instance is safely shared across callers.
///
/// # Example
///
/// ```
/// use profit_sched::models::standard_catalog;
/// use profit_sched::optimizer::ProfitOptimizer;
///
/// let optimizer = ProfitOptimizer::new();
/// let result = optimizer.optimize(13, &standard_catalog()).unwrap();
/// assert_eq!(result.total_profit, 16500);
/// assert_eq!(result.count_for("T"), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitOptimizer;

impl ProfitOptimizer {
    /// Creates a new optimizer.
    pub fn new() -> Self {
        Self
    }

    /// Computes the maximum-profit construction plan.
    ///
    /// # Algorithm
    /// 1. Validate the horizon and catalog eagerly.
    /// 2. Fill `best` and `choice` backward from the horizon.
    /// 3. Walk the choices forward to materialize schedule and counts.
    ///
    /// # Errors
    /// Returns every detected input violation (`InvalidInput` for the
    /// horizon, `InvalidCatalog` for malformed entries) before any
    /// computation begins. The algorithm itself is total over valid
    /// inputs — a horizon too short for any building yields a zero-profit
    /// result with an empty schedule, not an error.
    pub fn optimize(
        &self,
        horizon: u32,
        catalog: &[BuildingType],
    ) -> Result<OptimizationResult, Vec<ValidationError>> {
        validate_input(horizon, catalog)?;

        let n = horizon as usize;
        let mut best = vec![0i64; n + 1];
        let mut choice: Vec<Option<usize>> = vec![None; n + 1];

        for t in (0..n).rev() {
            let mut leader: Option<(i64, usize)> = None;

            for (idx, building) in catalog.iter().enumerate() {
                let finish = t + building.build_time as usize;
                if finish > n {
                    continue;
                }

                let candidate = (n - finish) as i64 * building.earn_rate + best[finish];

                // Strict comparison: ties keep the earliest-listed entry.
                let replaces = match leader {
                    None => true,
                    Some((profit, _)) => candidate > profit,
                };
                if replaces {
                    leader = Some((candidate, idx));
                }
            }

            // No feasible building: the slot range stays idle at zero profit.
            if let Some((profit, idx)) = leader {
                best[t] = profit;
                choice[t] = Some(idx);
            }
        }

        let mut result = OptimizationResult::new();
        result.total_profit = best[0];
        for building in catalog {
            result.counts_by_type.insert(building.id.clone(), 0);
        }

        let mut t = 0;
        while t < n {
            let Some(idx) = choice[t] else {
                break;
            };
            let building = &catalog[idx];
            let start = t as u32;
            let end = start + building.build_time;

            result
                .schedule
                .push(ScheduleEntry::new(&building.id, start, end));
            *result
                .counts_by_type
                .entry(building.id.clone())
                .or_insert(0) += 1;

            t = end as usize;
        }

        Ok(result)
    }

    /// Optimizes from a request.
    pub fn optimize_request(
        &self,
        request: &OptimizeRequest,
    ) -> Result<OptimizationResult, Vec<ValidationError>> {
        self.optimize(request.horizon, &request.catalog)
    }
}
