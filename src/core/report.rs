use chrono::NaiveDate;

use crate::core::gpa::project_gpa;
use crate::core::graduation::estimate_grad_term_with_pace;
use crate::core::schedule::{find_schedules, ScheduleOptions};
use crate::domain::model::{AcademicRecord, GpaProjection, PlanningReport};
use crate::domain::ports::GpaScenario;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::Validate;

/// Composes the dashboard view of a record: credit summary, graduation
/// estimate, schedule suggestions and the GPA what-if.
pub fn build_report(
    record: &AcademicRecord,
    schedule: &ScheduleOptions,
    scenario: &GpaScenario,
    credits_per_term: f64,
    today: NaiveDate,
) -> Result<PlanningReport> {
    record.validate()?;
    let summary = record.credit_summary();

    let graduation = estimate_grad_term_with_pace(
        summary.applied,
        summary.required,
        summary.earned,
        today,
        credits_per_term,
    )?;

    schedule.validate()?;
    // An oversized course list only costs the schedule section.
    let schedule_search_skipped = record.remaining_courses.len() > schedule.max_candidates;
    let schedules = if schedule_search_skipped {
        tracing::warn!(
            "Skipping schedule search: {} remaining courses exceeds the limit of {}",
            record.remaining_courses.len(),
            schedule.max_candidates
        );
        Vec::new()
    } else {
        find_schedules(&record.remaining_courses, schedule)?
    };
    if schedules.is_empty() && !schedule_search_skipped {
        tracing::info!(
            "No {}- to {}-course combination reaches {} credits",
            schedule.min_size,
            schedule.max_size,
            schedule.credit_floor
        );
    }

    let gpa_projection = simulate_gpa(record, scenario)?;

    Ok(PlanningReport {
        generated_on: today,
        summary,
        overall_gpa: record.overall_gpa,
        graduation: graduation.to_string(),
        schedules,
        schedule_search_skipped,
        gpa_projection,
    })
}

/// `None` when neither the record nor the scenario carries any credits.
pub fn simulate_gpa(
    record: &AcademicRecord,
    scenario: &GpaScenario,
) -> Result<Option<GpaProjection>> {
    let current_gpa = record.overall_gpa.unwrap_or(scenario.assumed_current_gpa);
    let quality_points = record.credits_earned * current_gpa;

    match project_gpa(
        record.credits_earned,
        quality_points,
        scenario.term_credits,
        scenario.target_term_gpa,
    ) {
        Ok(projected_gpa) => Ok(Some(GpaProjection {
            current_gpa,
            target_term_gpa: scenario.target_term_gpa,
            term_credits: scenario.term_credits,
            projected_gpa,
        })),
        Err(PlannerError::DivisionUndefined { message }) => {
            tracing::warn!("Skipping GPA projection: {}", message);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
