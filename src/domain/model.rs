use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{
    validate_gpa, validate_non_empty_string, validate_non_negative, validate_strictly_positive,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseCredit {
    pub code: String,
    pub credits: f64,
}

impl CourseCredit {
    pub fn new(code: impl Into<String>, credits: f64) -> Self {
        Self {
            code: code.into(),
            credits,
        }
    }
}

/// Degree-audit data as produced by the upstream converter. Every key is
/// optional on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub completed_courses: Vec<CourseCredit>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub remaining_courses: Vec<CourseCredit>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub credits_earned: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub credits_applied: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub credits_needed: f64,
    #[serde(default)]
    pub credits_required: Option<f64>,
    #[serde(default, rename = "overallGPA")]
    pub overall_gpa: Option<f64>,
}

// Converters emit `null` for fields they could not find; treat it like a missing key.
fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<CourseCredit>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<CourseCredit>>::deserialize(deserializer)?.unwrap_or_default())
}

impl AcademicRecord {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parses converter output that may be wrapped in Markdown fences or
    /// surrounded by prose. Only the first `{...}` block is considered.
    pub fn from_converter_output(raw: &str) -> Result<Self> {
        if raw.trim_start().starts_with("ERROR") {
            return Err(PlannerError::RecordFormat {
                message: "converter reported that it could not produce a record".to_string(),
            });
        }

        let fence = Regex::new(r"```[^`]*\n").map_err(|e| PlannerError::RecordFormat {
            message: e.to_string(),
        })?;
        let cleaned = fence.replace_all(raw, "");
        let cleaned = cleaned.trim_matches(|c: char| c == '`' || c == ' ' || c == '\n');

        let object = Regex::new(r"(?s)\{.*\}").map_err(|e| PlannerError::RecordFormat {
            message: e.to_string(),
        })?;
        let block = object
            .find(cleaned)
            .ok_or_else(|| PlannerError::RecordFormat {
                message: "no JSON object found in converter output".to_string(),
            })?;

        Self::from_json_str(block.as_str())
    }

    /// `creditsRequired` when present, otherwise `applied + needed`.
    pub fn required_credits(&self) -> f64 {
        self.credits_required
            .unwrap_or(self.credits_applied + self.credits_needed)
    }

    pub fn credit_summary(&self) -> CreditSummary {
        CreditSummary {
            earned: self.credits_earned,
            applied: self.credits_applied,
            needed: self.credits_needed,
            required: self.required_credits(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_non_negative("creditsEarned", self.credits_earned)?;
        validate_non_negative("creditsApplied", self.credits_applied)?;
        validate_non_negative("creditsNeeded", self.credits_needed)?;
        if let Some(required) = self.credits_required {
            validate_non_negative("creditsRequired", required)?;
        }
        if let Some(gpa) = self.overall_gpa {
            validate_gpa("overallGPA", gpa)?;
        }
        for course in self.remaining_courses.iter().chain(&self.completed_courses) {
            validate_course(course)?;
        }
        Ok(())
    }
}

pub(crate) fn validate_course(course: &CourseCredit) -> Result<()> {
    validate_non_empty_string("course.code", &course.code)?;
    validate_strictly_positive(&format!("course '{}' credits", course.code), course.credits)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditSummary {
    pub earned: f64,
    pub applied: f64,
    pub needed: f64,
    pub required: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePlan {
    pub courses: Vec<CourseCredit>,
    pub total_credits: f64,
}

impl SchedulePlan {
    pub fn course_codes(&self) -> Vec<&str> {
        self.courses.iter().map(|c| c.code.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    Spring,
    Fall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradTerm {
    pub term: Term,
    pub year: i32,
}

impl GradTerm {
    /// The term `offset` Spring/Fall terms later; summer is never a target.
    /// `None` when the year leaves the `i32` range.
    pub fn advance_by(self, offset: u64) -> Option<Self> {
        // Spring of `year` is position 0, Fall of `year` is position 1.
        let position = match self.term {
            Term::Spring => offset,
            Term::Fall => offset.checked_add(1)?,
        };
        let years = i32::try_from(position / 2).ok()?;
        let term = if position % 2 == 0 {
            Term::Spring
        } else {
            Term::Fall
        };
        Some(GradTerm {
            term,
            year: self.year.checked_add(years)?,
        })
    }
}

impl fmt::Display for GradTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.term {
            Term::Spring => write!(f, "May {}", self.year),
            Term::Fall => write!(f, "Dec {}", self.year),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradEstimate {
    AlreadyEligible,
    Term(GradTerm),
}

impl fmt::Display for GradEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradEstimate::AlreadyEligible => f.write_str("Already eligible"),
            GradEstimate::Term(term) => write!(f, "{}", term),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpaProjection {
    pub current_gpa: f64,
    pub target_term_gpa: f64,
    pub term_credits: f64,
    pub projected_gpa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningReport {
    pub generated_on: NaiveDate,
    pub summary: CreditSummary,
    pub overall_gpa: Option<f64>,
    pub graduation: String,
    pub schedules: Vec<SchedulePlan>,
    /// Set when the remaining-course list was too long to search.
    #[serde(default)]
    pub schedule_search_skipped: bool,
    pub gpa_projection: Option<GpaProjection>,
}
