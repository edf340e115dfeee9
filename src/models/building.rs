//! Building type model.
//!
//! A building type is a catalog entry: a symbolic id, a fixed build
//! duration, and an earning rate applied to every time unit remaining
//! after construction completes. The catalog is an ordered collection —
//! the optimizer breaks ties by picking the earliest-listed entry, so
//! catalog order is part of the behavioral contract.

use serde::{Deserialize, Serialize};

/// A building type available for construction.
///
/// Once an instance completes at time `end`, it earns `earn_rate` profit
/// for each of the `horizon - end` time units left until the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingType {
    /// Short unique symbol (e.g. "T").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Time units required to complete construction. Must be >= 1.
    pub build_time: u32,
    /// Profit per remaining time unit after completion. Must be > 0.
    pub earn_rate: i64,
}

impl BuildingType {
    /// Creates a new building type.
    pub fn new(id: impl Into<String>, build_time: u32, earn_rate: i64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            build_time,
            earn_rate,
        }
    }

    /// Sets the human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Earning rate per time unit spent building (`earn_rate / build_time`).
    ///
    /// A rough value-density measure; not used by the optimizer itself.
    pub fn efficiency(&self) -> f64 {
        self.earn_rate as f64 / f64::from(self.build_time)
    }
}

/// The standard three-building catalog, in tie-break order.
///
/// | id | name            | build_time | earn_rate |
/// |----|-----------------|-----------|-----------|
/// | T  | Theatre         | 5         | 1500      |
/// | P  | Pub             | 4         | 1000      |
/// | C  | Commercial Park | 10        | 2000      |
pub fn standard_catalog() -> Vec<BuildingType> {
    vec![
        BuildingType::new("T", 5, 1500).with_name("Theatre"),
        BuildingType::new("P", 4, 1000).with_name("Pub"),
        BuildingType::new("C", 10, 2000).with_name("Commercial Park"),
    ]
}
