//! Optimization result (solution) model.
//!
//! An `OptimizationResult` is a complete answer to a profit-scheduling
//! problem: the maximum total profit, the number of instances built per
//! building type, and the reconstructed construction schedule. Schedule
//! entries are contiguous and non-overlapping by construction — each
//! entry starts where the previous one ended.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::BuildingType;

/// One scheduled construction interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Building type id.
    pub building_id: String,
    /// Construction start time.
    pub start: u32,
    /// Construction end time (`start + build_time`).
    pub end: u32,
}

impl ScheduleEntry {
    /// Creates a new schedule entry.
    pub fn new(building_id: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            building_id: building_id.into(),
            start,
            end,
        }
    }

    /// Construction duration (`end - start`).
    #[inline]
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Profit this entry contributes: `(horizon - end) * earn_rate`.
    ///
    /// Zero when the entry completes at (or, defensively, past) the horizon.
    pub fn revenue(&self, horizon: u32, building: &BuildingType) -> i64 {
        i64::from(horizon.saturating_sub(self.end)) * building.earn_rate
    }
}

/// A complete solution to a profit-scheduling problem.
///
/// Invariant: the schedule is contiguous from time 0, entry durations sum
/// to `time_used()`, and no entry ends past the horizon it was computed for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Maximum achievable profit.
    pub total_profit: i64,
    /// Instances built per building type id. Contains an entry for every
    /// catalog id, including zero counts.
    pub counts_by_type: HashMap<String, u32>,
    /// Ordered construction schedule.
    pub schedule: Vec<ScheduleEntry>,
}

impl OptimizationResult {
    /// Creates an empty zero-profit result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of instances built for a building type (0 if unknown id).
    pub fn count_for(&self, building_id: &str) -> u32 {
        self.counts_by_type.get(building_id).copied().unwrap_or(0)
    }

    /// Total number of building instances in the plan.
    pub fn building_count(&self) -> u32 {
        self.counts_by_type.values().sum()
    }

    /// Total time units spent constructing.
    pub fn time_used(&self) -> u32 {
        self.schedule.iter().map(ScheduleEntry::duration).sum()
    }

    /// End time of the last scheduled entry (0 for an empty plan).
    pub fn makespan(&self) -> u32 {
        self.schedule.iter().map(|e| e.end).max().unwrap_or(0)
    }

    /// Returns all schedule entries for a given building type.
    pub fn entries_for_building(&self, building_id: &str) -> Vec<&ScheduleEntry> {
        self.schedule
            .iter()
            .filter(|e| e.building_id == building_id)
            .collect()
    }

    /// Build counts in catalog order.
    ///
    /// `counts_by_type` is an unordered map; presentation layers that need
    /// a deterministic listing should iterate this instead.
    pub fn counts_in_order(&self, catalog: &[BuildingType]) -> Vec<(String, u32)> {
        catalog
            .iter()
            .map(|b| (b.id.clone(), self.count_for(&b.id)))
            .collect()
    }

    /// Whether the schedule is gap-free from time 0.
    pub fn is_contiguous(&self) -> bool {
        let mut expected = 0;
        for entry in &self.schedule {
            if entry.start != expected {
                return false;
            }
            expected = entry.end;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::standard_catalog;

    fn sample_result() -> OptimizationResult {
        let mut r = OptimizationResult::new();
        r.total_profit = 16500;
        r.counts_by_type.insert("T".into(), 2);
        r.counts_by_type.insert("P".into(), 0);
        r.counts_by_type.insert("C".into(), 0);
        r.schedule.push(ScheduleEntry::new("T", 0, 5));
        r.schedule.push(ScheduleEntry::new("T", 5, 10));
        r
    }

    #[test]
    fn test_entry_duration() {
        let e = ScheduleEntry::new("T", 5, 10);
        assert_eq!(e.duration(), 5);
    }

    #[test]
    fn test_entry_revenue() {
        let theatre = BuildingType::new("T", 5, 1500);
        let e = ScheduleEntry::new("T", 0, 5);
        // Completes at 5 with horizon 13 → 8 earning units.
        assert_eq!(e.revenue(13, &theatre), 12000);
        // Completes exactly at the horizon → nothing left to earn.
        assert_eq!(e.revenue(5, &theatre), 0);
    }

    #[test]
    fn test_count_queries() {
        let r = sample_result();
        assert_eq!(r.count_for("T"), 2);
        assert_eq!(r.count_for("P"), 0);
        assert_eq!(r.count_for("unknown"), 0);
        assert_eq!(r.building_count(), 2);
    }

    #[test]
    fn test_time_used_and_makespan() {
        let r = sample_result();
        assert_eq!(r.time_used(), 10);
        assert_eq!(r.makespan(), 10);

        let empty = OptimizationResult::new();
        assert_eq!(empty.time_used(), 0);
        assert_eq!(empty.makespan(), 0);
    }

    #[test]
    fn test_entries_for_building() {
        let r = sample_result();
        assert_eq!(r.entries_for_building("T").len(), 2);
        assert!(r.entries_for_building("P").is_empty());
    }

    #[test]
    fn test_counts_in_order() {
        let r = sample_result();
        let counts = r.counts_in_order(&standard_catalog());
        assert_eq!(
            counts,
            vec![("T".into(), 2), ("P".into(), 0), ("C".into(), 0)]
        );
    }

    #[test]
    fn test_is_contiguous() {
        let r = sample_result();
        assert!(r.is_contiguous());

        let mut gapped = sample_result();
        gapped.schedule[1].start = 6;
        assert!(!gapped.is_contiguous());

        assert!(OptimizationResult::new().is_contiguous());
    }

    #[test]
    fn test_result_serialization() {
        // The presentation layer consumes this value as-is.
        let r = sample_result();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["total_profit"], 16500);
        assert_eq!(json["counts_by_type"]["T"], 2);
        assert_eq!(json["schedule"][1]["start"], 5);

        let back: OptimizationResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }
}
