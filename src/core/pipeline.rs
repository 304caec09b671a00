use crate::core::export::{plan_to_csv, plans_to_csv};
use crate::core::report::build_report;
use crate::core::{Clock, ConfigProvider, Pipeline, Storage};
use crate::domain::model::{AcademicRecord, PlanningReport};
use crate::utils::error::{PlannerError, Result};

pub const TOP_PLAN_FILE: &str = "semester_plan.csv";
pub const OPTIONS_FILE: &str = "schedule_options.csv";
pub const REPORT_FILE: &str = "planning_report.json";

/// Reads the record through `record_storage`, writes outputs through
/// `output_storage`.
pub struct PlanningPipeline<S: Storage, C: ConfigProvider, K: Clock> {
    record_storage: S,
    output_storage: S,
    config: C,
    clock: K,
}

impl<S: Storage, C: ConfigProvider, K: Clock> PlanningPipeline<S, C, K> {
    pub fn new(record_storage: S, output_storage: S, config: C, clock: K) -> Self {
        Self {
            record_storage,
            output_storage,
            config,
            clock,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, K: Clock> Pipeline for PlanningPipeline<S, C, K> {
    async fn extract(&self) -> Result<AcademicRecord> {
        let path = self.config.record_path();
        tracing::debug!("Reading academic record from: {}", path);

        let bytes = self.record_storage.read_file(path).await?;
        let text = String::from_utf8(bytes).map_err(|e| PlannerError::RecordFormat {
            message: format!("record file is not UTF-8: {}", e),
        })?;

        let record = match AcademicRecord::from_json_str(&text) {
            Ok(record) => record,
            Err(_) => {
                tracing::debug!("Record is not plain JSON, trying converter output format");
                AcademicRecord::from_converter_output(&text)?
            }
        };

        tracing::debug!(
            "Record has {} remaining and {} completed course(s)",
            record.remaining_courses.len(),
            record.completed_courses.len()
        );
        Ok(record)
    }

    async fn transform(&self, record: AcademicRecord) -> Result<PlanningReport> {
        let today = self.clock.today();
        tracing::debug!("Planning as of {}", today);

        build_report(
            &record,
            &self.config.schedule_options(),
            &self.config.gpa_scenario(),
            self.config.credits_per_term(),
            today,
        )
    }

    async fn load(&self, report: PlanningReport) -> Result<String> {
        if let Some(top) = report.schedules.first() {
            let csv = plan_to_csv(top)?;
            self.output_storage
                .write_file(TOP_PLAN_FILE, csv.as_bytes())
                .await?;

            let options = plans_to_csv(&report.schedules)?;
            self.output_storage
                .write_file(OPTIONS_FILE, options.as_bytes())
                .await?;
            tracing::debug!("Wrote {} schedule option(s)", report.schedules.len());
        }

        let json = serde_json::to_string_pretty(&report)?;
        self.output_storage
            .write_file(REPORT_FILE, json.as_bytes())
            .await?;

        Ok(format!("{}/{}", self.config.output_path(), REPORT_FILE))
    }
}
