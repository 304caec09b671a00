use crate::core::graduation::DEFAULT_CREDITS_PER_TERM;
use crate::core::schedule::ScheduleOptions;
use crate::core::{ConfigProvider, GpaScenario};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_gpa, validate_non_negative, validate_path, validate_strictly_positive, Validate,
};
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "degreewise")]
#[command(about = "Schedule suggestions, GPA what-if and graduation estimate from a degree audit record")]
pub struct CliConfig {
    /// JSON record produced by the audit converter
    #[arg(long, default_value = "audit.json")]
    pub record: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "15")]
    pub credit_floor: f64,

    #[arg(long, default_value = "3")]
    pub min_courses: usize,

    #[arg(long, default_value = "5")]
    pub max_courses: usize,

    #[arg(long, default_value = "3")]
    pub limit: usize,

    #[arg(long, default_value = "40", help = "Refuse to search longer remaining-course lists")]
    pub max_candidates: usize,

    #[arg(long, default_value = "3.5")]
    pub target_gpa: f64,

    #[arg(long, default_value = "15")]
    pub term_credits: f64,

    #[arg(long, default_value = "3.0", help = "Current GPA to assume when the record has none")]
    pub assumed_gpa: f64,

    #[arg(long, default_value_t = DEFAULT_CREDITS_PER_TERM)]
    pub credits_per_term: f64,

    #[arg(long, help = "Plan as of this date (YYYY-MM-DD) instead of today")]
    pub today: Option<NaiveDate>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn record_path(&self) -> &str {
        &self.record
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn schedule_options(&self) -> ScheduleOptions {
        ScheduleOptions {
            credit_floor: self.credit_floor,
            min_size: self.min_courses,
            max_size: self.max_courses,
            limit: self.limit,
            max_candidates: self.max_candidates,
        }
    }

    fn gpa_scenario(&self) -> GpaScenario {
        GpaScenario {
            target_term_gpa: self.target_gpa,
            term_credits: self.term_credits,
            assumed_current_gpa: self.assumed_gpa,
        }
    }

    fn credits_per_term(&self) -> f64 {
        self.credits_per_term
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("record", &self.record)?;
        validate_path("output_path", &self.output_path)?;
        self.schedule_options().validate()?;
        validate_gpa("target_gpa", self.target_gpa)?;
        validate_gpa("assumed_gpa", self.assumed_gpa)?;
        validate_non_negative("term_credits", self.term_credits)?;
        validate_strictly_positive("credits_per_term", self.credits_per_term)
    }
}
