use crate::core::graduation::DEFAULT_CREDITS_PER_TERM;
use crate::core::schedule::ScheduleOptions;
use crate::core::{ConfigProvider, GpaScenario};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{
    validate_gpa, validate_non_negative, validate_path, validate_required_field,
    validate_strictly_positive, Validate,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub planner: Option<PlannerSection>,
    pub record: RecordSection,
    pub schedule: Option<ScheduleSection>,
    pub gpa: Option<GpaSection>,
    pub graduation: Option<GraduationSection>,
    pub output: OutputSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSection {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleSection {
    pub credit_floor: Option<f64>,
    pub min_courses: Option<usize>,
    pub max_courses: Option<usize>,
    pub limit: Option<usize>,
    pub max_candidates: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GpaSection {
    pub target_term_gpa: Option<f64>,
    pub term_credits: Option<f64>,
    pub assumed_current_gpa: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraduationSection {
    pub credits_per_term: Option<f64>,
    /// Fixed planning date, `"YYYY-MM-DD"`.
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlannerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlannerError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let record_path = validate_required_field("record.path", &self.record.path)?;
        validate_path("record.path", record_path)?;
        validate_path("output.path", &self.output.path)?;

        self.schedule_options().validate()?;

        let scenario = self.gpa_scenario();
        validate_gpa("gpa.target_term_gpa", scenario.target_term_gpa)?;
        validate_gpa("gpa.assumed_current_gpa", scenario.assumed_current_gpa)?;
        validate_non_negative("gpa.term_credits", scenario.term_credits)?;
        validate_strictly_positive("graduation.credits_per_term", self.credits_per_term())
    }

    pub fn today(&self) -> Option<NaiveDate> {
        self.graduation.as_ref().and_then(|g| g.today)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn name(&self) -> &str {
        self.planner
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .unwrap_or("degreewise")
    }
}

impl ConfigProvider for TomlConfig {
    fn record_path(&self) -> &str {
        self.record.path.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn schedule_options(&self) -> ScheduleOptions {
        let defaults = ScheduleOptions::default();
        let section = self.schedule.clone().unwrap_or_default();
        ScheduleOptions {
            credit_floor: section.credit_floor.unwrap_or(defaults.credit_floor),
            min_size: section.min_courses.unwrap_or(defaults.min_size),
            max_size: section.max_courses.unwrap_or(defaults.max_size),
            limit: section.limit.unwrap_or(defaults.limit),
            max_candidates: section.max_candidates.unwrap_or(defaults.max_candidates),
        }
    }

    fn gpa_scenario(&self) -> GpaScenario {
        let defaults = GpaScenario::default();
        let section = self.gpa.clone().unwrap_or_default();
        GpaScenario {
            target_term_gpa: section.target_term_gpa.unwrap_or(defaults.target_term_gpa),
            term_credits: section.term_credits.unwrap_or(defaults.term_credits),
            assumed_current_gpa: section
                .assumed_current_gpa
                .unwrap_or(defaults.assumed_current_gpa),
        }
    }

    fn credits_per_term(&self) -> f64 {
        self.graduation
            .as_ref()
            .and_then(|g| g.credits_per_term)
            .unwrap_or(DEFAULT_CREDITS_PER_TERM)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
