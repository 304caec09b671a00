use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct PlannerEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PlannerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting planning run");

        let record = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded record: {} credits earned, {} applied, {} remaining course(s)",
            record.credits_earned,
            record.credits_applied,
            record.remaining_courses.len()
        );

        let report = self.pipeline.transform(record).await?;
        tracing::info!(
            "Estimated graduation: {}; {} schedule option(s)",
            report.graduation,
            report.schedules.len()
        );
        if let Some(projection) = &report.gpa_projection {
            tracing::info!(
                "GPA what-if: {:.1} on {} credits gives {:.2}",
                projection.target_term_gpa,
                projection.term_credits,
                projection.projected_gpa
            );
        }

        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(output_path)
    }
}
