use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_gpa, validate_non_negative};

/// Cumulative GPA after a hypothetical term, rounded to three decimals.
///
/// `current_quality_points` is taken as given (usually credits times the
/// current GPA).
pub fn project_gpa(
    current_credits: f64,
    current_quality_points: f64,
    new_credits: f64,
    target_term_gpa: f64,
) -> Result<f64> {
    validate_non_negative("current_credits", current_credits)?;
    validate_non_negative("current_quality_points", current_quality_points)?;
    validate_non_negative("new_credits", new_credits)?;
    validate_gpa("target_term_gpa", target_term_gpa)?;

    let total_credits = current_credits + new_credits;
    if total_credits == 0.0 {
        return Err(PlannerError::DivisionUndefined {
            message: "current and new credits are both zero".to_string(),
        });
    }

    let gpa = (current_quality_points + target_term_gpa * new_credits) / total_credits;
    Ok(round_to_thousandths(gpa))
}

fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
