//! Graduation-term estimate from remaining credit load.
//!
//! Only Spring and Fall terms are planned. The starting term is the first
//! term the student can still take credits in:
//!
//! * `applied > earned` means credits are in progress for the current Fall,
//!   so planning starts the following Spring.
//! * otherwise January-April starts this Spring, May-August this Fall and
//!   September-December next Spring.
//!
//! The starting term counts as the first needed term.

use chrono::{Datelike, NaiveDate};

use crate::domain::model::{GradEstimate, GradTerm, Term};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_non_negative, validate_strictly_positive};

pub const DEFAULT_CREDITS_PER_TERM: f64 = 15.0;

pub fn estimate_grad_term(
    applied_credits: f64,
    required_credits: f64,
    earned_credits: f64,
    today: NaiveDate,
) -> Result<GradEstimate> {
    estimate_grad_term_with_pace(
        applied_credits,
        required_credits,
        earned_credits,
        today,
        DEFAULT_CREDITS_PER_TERM,
    )
}

pub fn estimate_grad_term_with_pace(
    applied_credits: f64,
    required_credits: f64,
    earned_credits: f64,
    today: NaiveDate,
    credits_per_term: f64,
) -> Result<GradEstimate> {
    validate_non_negative("applied_credits", applied_credits)?;
    validate_non_negative("required_credits", required_credits)?;
    validate_non_negative("earned_credits", earned_credits)?;
    validate_strictly_positive("credits_per_term", credits_per_term)?;

    let needed = required_credits - applied_credits;
    if needed <= 0.0 {
        return Ok(GradEstimate::AlreadyEligible);
    }

    let terms_needed = (needed / credits_per_term).ceil();
    // u64::MAX as f64 is 2^64; anything below it casts without saturating
    if terms_needed >= u64::MAX as f64 {
        return Err(PlannerError::invalid_input(
            "required_credits",
            required_credits,
            "Remaining credits are too large to plan",
        ));
    }
    // a vanishingly small remainder still needs one term
    let terms_needed = (terms_needed as u64).max(1);

    let start = starting_term(applied_credits, earned_credits, today);
    let finish = start.advance_by(terms_needed - 1).ok_or_else(|| {
        PlannerError::invalid_input(
            "required_credits",
            required_credits,
            format!("{} terms would run past the last representable year", terms_needed),
        )
    })?;

    tracing::debug!(
        "Need {} credits over {} term(s), starting {:?} {}",
        needed,
        terms_needed,
        start.term,
        start.year
    );
    Ok(GradEstimate::Term(finish))
}

fn starting_term(applied_credits: f64, earned_credits: f64, today: NaiveDate) -> GradTerm {
    let year = today.year();
    if applied_credits > earned_credits {
        return GradTerm {
            term: Term::Spring,
            year: year + 1,
        };
    }

    match today.month() {
        1..=4 => GradTerm {
            term: Term::Spring,
            year,
        },
        5..=8 => GradTerm {
            term: Term::Fall,
            year,
        },
        _ => GradTerm {
            term: Term::Spring,
            year: year + 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn label(applied: f64, required: f64, earned: f64, today: NaiveDate) -> String {
        estimate_grad_term(applied, required, earned, today)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_already_eligible() {
        assert_eq!(label(120.0, 120.0, 120.0, date(2024, 10, 1)), "Already eligible");
        assert_eq!(label(130.0, 120.0, 110.0, date(2024, 10, 1)), "Already eligible");
    }

    #[test]
    fn test_spring_start_advances_to_fall() {
        assert_eq!(label(60.0, 90.0, 60.0, date(2024, 3, 15)), "Dec 2024");
    }

    #[test]
    fn test_in_progress_credits_start_next_spring() {
        assert_eq!(label(75.0, 90.0, 60.0, date(2024, 3, 15)), "May 2025");
    }

    #[test]
    fn test_month_windows() {
        // one term needed, so the starting term is the answer
        assert_eq!(label(100.0, 110.0, 100.0, date(2024, 4, 30)), "May 2024");
        assert_eq!(label(100.0, 110.0, 100.0, date(2024, 5, 1)), "Dec 2024");
        assert_eq!(label(100.0, 110.0, 100.0, date(2024, 8, 31)), "Dec 2024");
        assert_eq!(label(100.0, 110.0, 100.0, date(2024, 9, 1)), "May 2025");
    }

    #[test]
    fn test_fall_start_crosses_year() {
        // 45 credits -> 3 terms: Fall 2024, Spring 2025, Fall 2025
        assert_eq!(label(75.0, 120.0, 75.0, date(2024, 6, 10)), "Dec 2025");
        // 46 credits -> 4 terms
        assert_eq!(label(74.0, 120.0, 74.0, date(2024, 6, 10)), "May 2026");
    }

    #[test]
    fn test_custom_pace() {
        let estimate =
            estimate_grad_term_with_pace(60.0, 90.0, 60.0, date(2024, 1, 10), 30.0).unwrap();
        assert_eq!(estimate.to_string(), "May 2024");
        assert!(estimate_grad_term_with_pace(60.0, 90.0, 60.0, date(2024, 1, 10), 0.0).is_err());
    }

    #[test]
    fn test_huge_remaining_load_is_rejected_without_looping() {
        let started = std::time::Instant::now();
        let result = estimate_grad_term(0.0, 1e300, 0.0, date(2024, 3, 15));
        assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));

        // fits in u64 but not in the year range
        let result = estimate_grad_term(0.0, 1e12, 0.0, date(2024, 3, 15));
        assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_long_but_representable_load() {
        // 3000 credits -> 200 terms: Spring 2024 plus 199 terms
        assert_eq!(label(0.0, 3000.0, 0.0, date(2024, 3, 15)), "Dec 2123");
    }

    #[test]
    fn test_negative_credits_rejected() {
        assert!(estimate_grad_term(-1.0, 90.0, 60.0, date(2024, 1, 10)).is_err());
    }
}
