//! Input validation for simulation requests.
//!
//! Checks a request before any simulation state is constructed. Detects:
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive round-robin quantum
//! - Duplicate process ids
//!
//! All violations are collected and returned together; the engine never
//! coerces or skips invalid entries.

use std::collections::HashSet;

use crate::engine::{Algorithm, SimulationRequest};

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
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Per-process input sequences have different lengths.
    LengthMismatch,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process has a zero or negative CPU burst.
    NonPositiveBurst,
    /// Round-robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Two processes share the same id.
    DuplicateId,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validates a simulation request.
///
/// Checks:
/// 1. No duplicate process ids
/// 2. All arrival times >= 0
/// 3. All burst times > 0
/// 4. Round-robin quantum > 0
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
/// An empty process set is valid; it yields an empty result downstream.
pub fn validate_request(request: &SimulationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for p in &request.processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process id: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.label(),
                    p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst time {}",
                    p.label(),
                    p.burst_time
                ),
            ));
        }
    }

    if let Algorithm::RoundRobin { quantum } = request.algorithm {
        if quantum <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                format!("Round-robin quantum must be positive, got {quantum}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
