use crate::core::schedule::ScheduleOptions;
use crate::domain::model::{AcademicRecord, PlanningReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// What-if inputs for the GPA simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpaScenario {
    pub target_term_gpa: f64,
    pub term_credits: f64,
    /// Used when the record carries no overall GPA.
    pub assumed_current_gpa: f64,
}

impl Default for GpaScenario {
    fn default() -> Self {
        Self {
            target_term_gpa: 3.5,
            term_credits: 15.0,
            assumed_current_gpa: 3.0,
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn record_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn schedule_options(&self) -> ScheduleOptions;
    fn gpa_scenario(&self) -> GpaScenario;
    fn credits_per_term(&self) -> f64;
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<AcademicRecord>;
    async fn transform(&self, record: AcademicRecord) -> Result<PlanningReport>;
    async fn load(&self, report: PlanningReport) -> Result<String>;
}
