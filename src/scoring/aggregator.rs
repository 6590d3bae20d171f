//! Threat-score aggregation and statistics.
//!
//! This module combines per-department threat scores into one
//! importance-weighted score: each department contributes its mean
//! score, weighted by its share of the total importance.

use crate::models::{Department, DepartmentBreakdown, ReportMetadata, ScoreReport, ThreatLevel};
use chrono::Utc;
use thiserror::Error;

/// Error raised when the aggregate score is undefined.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    /// The department collection is empty, or every importance weight is zero.
    #[error("total importance is zero; at least one department with positive importance is required")]
    ZeroTotalImportance,
}

/// Arithmetic mean of a score sequence.
///
/// Returns 0.0 for an empty sequence rather than dividing by zero.
pub fn mean(scores: &[u32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }

    scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64
}

/// Importance-weighted aggregate of per-department mean scores.
///
/// Computes `Σ(mean_i * importance_i) / Σ(importance_i)`. With all
/// importances positive the result is a convex combination of the
/// per-department means, so it lies between the smallest and largest
/// mean.
pub fn aggregate(departments: &[Department]) -> Result<f64, AggregateError> {
    let total_importance: f64 = departments.iter().map(|d| d.importance).sum();

    if total_importance == 0.0 {
        return Err(AggregateError::ZeroTotalImportance);
    }

    Ok(departments
        .iter()
        .map(|d| mean(&d.scores) * d.importance / total_importance)
        .sum())
}

/// Aggregate with the per-department terms retained for reporting.
pub fn breakdown(departments: &[Department]) -> Result<ScoreReport, AggregateError> {
    let score = aggregate(departments)?;
    let total_importance: f64 = departments.iter().map(|d| d.importance).sum();

    let rows: Vec<DepartmentBreakdown> = departments
        .iter()
        .enumerate()
        .map(|(index, d)| {
            let dept_mean = mean(&d.scores);
            DepartmentBreakdown {
                index,
                users: d.scores.len(),
                mean: dept_mean,
                importance: d.importance,
                contribution: dept_mean * d.importance / total_importance,
            }
        })
        .collect();

    Ok(ScoreReport {
        metadata: ReportMetadata {
            generated_at: Utc::now(),
            departments: departments.len(),
            users: departments.iter().map(|d| d.scores.len()).sum(),
        },
        aggregate: score,
        level: ThreatLevel::from_score(score),
        breakdown: rows,
    })
}
