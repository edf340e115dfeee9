//! Input validation for profit optimization.
//!
//! Checks the horizon and the building catalog before any computation
//! runs. Detects:
//! - Horizon outside the supported domain (`horizon < 1`)
//! - Empty catalog
//! - Empty or duplicate building ids
//! - Non-positive build times or earning rates

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use crate::models::BuildingType;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The horizon is outside the supported domain.
    InvalidInput,
    /// A catalog entry is malformed, or the catalog itself is unusable.
    InvalidCatalog,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ValidationErrorKind::InvalidInput => "invalid input",
            ValidationErrorKind::InvalidCatalog => "invalid catalog",
        };
        write!(f, "{kind}: {}", self.message)
    }
}

impl Error for ValidationError {}

/// Validates the inputs to a profit optimization.
///
/// Checks:
/// 1. Horizon is at least 1
/// 2. Catalog is non-empty
/// 3. No empty or duplicate building ids
/// 4. Every build time is at least 1
/// 5. Every earning rate is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(horizon: u32, catalog: &[BuildingType]) -> ValidationResult {
    let mut errors = Vec::new();

    if horizon < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidInput,
            format!("Horizon must be at least 1, got {horizon}"),
        ));
    }

    if catalog.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCatalog,
            "Catalog must contain at least one building type",
        ));
    }

    let mut ids = HashSet::new();
    for building in catalog {
        if building.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCatalog,
                "Building type has an empty id",
            ));
        } else if !ids.insert(building.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCatalog,
                format!("Duplicate building id: {}", building.id),
            ));
        }

        if building.build_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCatalog,
                format!("Building '{}' has a zero build time", building.id),
            ));
        }

        if building.earn_rate <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCatalog,
                format!(
                    "Building '{}' has a non-positive earn rate: {}",
                    building.id, building.earn_rate
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::standard_catalog;

    #[test]
    fn test_valid_input() {
        assert!(validate_input(20, &standard_catalog()).is_ok());
        assert!(validate_input(1, &standard_catalog()).is_ok());
    }

    #[test]
    fn test_zero_horizon() {
        let errors = validate_input(0, &standard_catalog()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidInput);
    }

    #[test]
    fn test_empty_catalog() {
        let errors = validate_input(10, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidCatalog));
    }

    #[test]
    fn test_zero_build_time() {
        let catalog = vec![BuildingType::new("X", 0, 100)];
        let errors = validate_input(10, &catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidCatalog
                && e.message.contains("build time")));
    }

    #[test]
    fn test_non_positive_earn_rate() {
        let catalog = vec![BuildingType::new("X", 5, 0), BuildingType::new("Y", 5, -10)];
        let errors = validate_input(10, &catalog).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.message.contains("earn rate"))
                .count(),
            2
        );
    }

    #[test]
    fn test_duplicate_id() {
        let catalog = vec![BuildingType::new("T", 5, 1500), BuildingType::new("T", 4, 1000)];
        let errors = validate_input(10, &catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.message.contains("Duplicate building id")));
    }

    #[test]
    fn test_empty_id() {
        let catalog = vec![BuildingType::new("", 5, 1500)];
        let errors = validate_input(10, &catalog).unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("empty id")));
    }

    #[test]
    fn test_multiple_errors_collected() {
        // Bad horizon and a bad catalog entry are both reported.
        let catalog = vec![BuildingType::new("X", 0, -5)];
        let errors = validate_input(0, &catalog).unwrap_err();
        assert!(errors.len() >= 3);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidInput));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidCatalog));
    }

    #[test]
    fn test_display() {
        let err = ValidationError::new(
            ValidationErrorKind::InvalidInput,
            "Horizon must be at least 1, got 0",
        );
        assert_eq!(
            err.to_string(),
            "invalid input: Horizon must be at least 1, got 0"
        );
    }
}
