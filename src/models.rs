//! Data models for threat scoring.
//!
//! This module contains the core data structures used throughout
//! the application for representing departments, threat levels, and
//! score reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Threat level band for an aggregated score on the 0-90 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    /// Below 10 - background noise
    Low,
    /// 10 to 29 - worth watching
    Guarded,
    /// 30 to 49 - sustained suspicious activity
    Elevated,
    /// 50 to 69 - active threats likely
    High,
    /// 70 and above - incident response territory
    Severe,
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreatLevel::Low => write!(f, "Low"),
            ThreatLevel::Guarded => write!(f, "Guarded"),
            ThreatLevel::Elevated => write!(f, "Elevated"),
            ThreatLevel::High => write!(f, "High"),
            ThreatLevel::Severe => write!(f, "Severe"),
        }
    }
}

impl ThreatLevel {
    /// Classify an aggregated score into a band.
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            ThreatLevel::Severe
        } else if score >= 50.0 {
            ThreatLevel::High
        } else if score >= 30.0 {
            ThreatLevel::Elevated
        } else if score >= 10.0 {
            ThreatLevel::Guarded
        } else {
            ThreatLevel::Low
        }
    }

    /// Returns an emoji representation of the level.
    pub fn emoji(&self) -> &'static str {
        match self {
            ThreatLevel::Low => "🟢",
            ThreatLevel::Guarded => "🔵",
            ThreatLevel::Elevated => "🟡",
            ThreatLevel::High => "🟠",
            ThreatLevel::Severe => "🔴",
        }
    }
}

/// A single department's threat measurements.
///
/// Departments have no identity beyond their position in the input
/// collection; records are built by the caller and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Per-user threat scores, each in 0-90.
    pub scores: Vec<u32>,
    /// Positive weight of this department in the aggregate.
    pub importance: f64,
}

impl Department {
    /// Creates a department record.
    pub fn new(scores: Vec<u32>, importance: f64) -> Self {
        Self { scores, importance }
    }
}

/// Per-department terms of the aggregate computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentBreakdown {
    /// Position of the department in the input collection (0-indexed).
    pub index: usize,
    /// Number of scored users.
    pub users: usize,
    /// Mean threat score of the department.
    pub mean: f64,
    /// Importance weight.
    pub importance: f64,
    /// Normalized contribution to the aggregate score.
    pub contribution: f64,
}

/// Metadata about a score report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Date and time the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Number of departments in the input collection.
    pub departments: usize,
    /// Total number of scored users across all departments.
    pub users: usize,
}

/// The complete aggregated threat report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Metadata about the report.
    pub metadata: ReportMetadata,
    /// The importance-weighted aggregate score.
    pub aggregate: f64,
    /// Threat level band for the aggregate.
    pub level: ThreatLevel,
    /// Per-department terms of the computation.
    pub breakdown: Vec<DepartmentBreakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threat_level_bands() {
        assert_eq!(ThreatLevel::from_score(0.0), ThreatLevel::Low);
        assert_eq!(ThreatLevel::from_score(9.9), ThreatLevel::Low);
        assert_eq!(ThreatLevel::from_score(10.0), ThreatLevel::Guarded);
        assert_eq!(ThreatLevel::from_score(30.0), ThreatLevel::Elevated);
        assert_eq!(ThreatLevel::from_score(49.9), ThreatLevel::Elevated);
        assert_eq!(ThreatLevel::from_score(50.0), ThreatLevel::High);
        assert_eq!(ThreatLevel::from_score(70.0), ThreatLevel::Severe);
        assert_eq!(ThreatLevel::from_score(90.0), ThreatLevel::Severe);
    }

    #[test]
    fn test_threat_level_ordering() {
        assert!(ThreatLevel::Low < ThreatLevel::Guarded);
        assert!(ThreatLevel::Guarded < ThreatLevel::Elevated);
        assert!(ThreatLevel::Elevated < ThreatLevel::High);
        assert!(ThreatLevel::High < ThreatLevel::Severe);
    }

    #[test]
    fn test_threat_level_display() {
        assert_eq!(ThreatLevel::Low.to_string(), "Low");
        assert_eq!(ThreatLevel::Severe.to_string(), "Severe");
    }

    #[test]
    fn test_threat_level_emoji() {
        assert_eq!(ThreatLevel::Low.emoji(), "🟢");
        assert_eq!(ThreatLevel::Severe.emoji(), "🔴");
    }

    #[test]
    fn test_department_from_json() {
        let json = r#"[
            {"scores": [10, 20, 30], "importance": 2.0},
            {"scores": [], "importance": 1.0}
        ]"#;

        let departments: Vec<Department> = serde_json::from_str(json).unwrap();
        assert_eq!(departments.len(), 2);
        assert_eq!(departments[0].scores, vec![10, 20, 30]);
        assert_eq!(departments[0].importance, 2.0);
        assert!(departments[1].scores.is_empty());
    }
}
