//! Schedule search over the remaining-course list.
//!
//! Plans are produced lazily in size-then-lexicographic order: every
//! combination of `min_size` courses first (index order), then
//! `min_size + 1`, and so on. [`find_schedules`] keeps the first `limit`
//! plans that reach the credit floor. It does not look for the best plan.

use crate::domain::model::{validate_course, CourseCredit, SchedulePlan};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_positive_number, Validate};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleOptions {
    pub credit_floor: f64,
    pub min_size: usize,
    pub max_size: usize,
    pub limit: usize,
    /// Upper bound on the remaining-course list; the search is combinatorial.
    pub max_candidates: usize,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            credit_floor: 15.0,
            min_size: 3,
            max_size: 5,
            limit: 3,
            max_candidates: 40,
        }
    }
}

impl Validate for ScheduleOptions {
    fn validate(&self) -> Result<()> {
        if !self.credit_floor.is_finite() {
            return Err(PlannerError::invalid_input(
                "credit_floor",
                self.credit_floor,
                "Value must be a finite number",
            ));
        }
        validate_positive_number("min_size", self.min_size, 1)?;
        if self.min_size > self.max_size {
            return Err(PlannerError::invalid_input(
                "max_size",
                self.max_size,
                format!("Value must be at least min_size ({})", self.min_size),
            ));
        }
        validate_positive_number("max_candidates", self.max_candidates, 1)
    }
}

/// Index combinations of `k` out of `n`, in lexicographic order.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            exhausted: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        // rightmost position that has not reached its maximum
        let Some(pos) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            self.exhausted = true;
            return None;
        };

        self.indices[pos] += 1;
        for i in pos + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// Lazily yields every plan of `min_size..=max_size` courses whose total
/// reaches `credit_floor`. Courses are identified by position, so duplicate
/// codes are distinct elements.
pub fn qualifying_plans<'a>(
    remaining: &'a [CourseCredit],
    credit_floor: f64,
    min_size: usize,
    max_size: usize,
) -> impl Iterator<Item = SchedulePlan> + 'a {
    (min_size..=max_size)
        .flat_map(move |k| Combinations::new(remaining.len(), k))
        .filter_map(move |indices| {
            let total_credits: f64 = indices.iter().map(|&i| remaining[i].credits).sum();
            (total_credits >= credit_floor).then(|| SchedulePlan {
                courses: indices.iter().map(|&i| remaining[i].clone()).collect(),
                total_credits,
            })
        })
}

/// First `options.limit` qualifying plans. An empty result means no
/// combination reached the floor; bad input is reported as an error.
pub fn find_schedules(
    remaining: &[CourseCredit],
    options: &ScheduleOptions,
) -> Result<Vec<SchedulePlan>> {
    options.validate()?;
    if remaining.len() > options.max_candidates {
        return Err(PlannerError::invalid_input(
            "remaining_courses",
            remaining.len(),
            format!(
                "At most {} remaining courses can be searched",
                options.max_candidates
            ),
        ));
    }
    for course in remaining {
        validate_course(course)?;
    }

    let plans: Vec<SchedulePlan> =
        qualifying_plans(remaining, options.credit_floor, options.min_size, options.max_size)
            .take(options.limit)
            .collect();

    tracing::debug!(
        "Schedule search over {} courses produced {} plan(s)",
        remaining.len(),
        plans.len()
    );
    Ok(plans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses(items: &[(&str, f64)]) -> Vec<CourseCredit> {
        items
            .iter()
            .map(|(code, credits)| CourseCredit::new(*code, *credits))
            .collect()
    }

    #[test]
    fn test_combinations_lexicographic() {
        let combos: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(
            combos,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
        assert_eq!(Combinations::new(5, 3).count(), 10);
        assert_eq!(Combinations::new(2, 3).count(), 0);
        assert_eq!(Combinations::new(3, 3).count(), 1);
    }

    #[test]
    fn test_fixed_input_ordering() {
        let remaining = courses(&[("A", 3.0), ("B", 3.0), ("C", 3.0), ("D", 3.0), ("E", 6.0)]);
        let plans = find_schedules(&remaining, &ScheduleOptions::default()).unwrap();

        // No three courses reach 15, so the first plans are size four.
        let codes: Vec<Vec<&str>> = plans.iter().map(|p| p.course_codes()).collect();
        assert_eq!(
            codes,
            vec![
                vec!["A", "B", "C", "E"],
                vec!["A", "B", "D", "E"],
                vec!["A", "C", "D", "E"]
            ]
        );
        assert!(plans.iter().all(|p| p.total_credits == 15.0));
    }

    #[test]
    fn test_smaller_sizes_come_first() {
        let remaining = courses(&[("A", 3.0), ("B", 5.0), ("C", 5.0), ("D", 5.0), ("E", 1.0)]);
        let plans = find_schedules(&remaining, &ScheduleOptions::default()).unwrap();
        assert_eq!(plans[0].course_codes(), vec!["B", "C", "D"]);
        assert_eq!(plans[1].course_codes(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_fewer_courses_than_min_size() {
        let remaining = courses(&[("A", 10.0), ("B", 10.0)]);
        let plans = find_schedules(&remaining, &ScheduleOptions::default()).unwrap();
        assert!(plans.is_empty());
    }

    #[test]
    fn test_non_positive_floor_accepts_first_combination() {
        let remaining = courses(&[("A", 1.0), ("B", 1.0), ("C", 1.0), ("D", 1.0)]);
        let options = ScheduleOptions {
            credit_floor: 0.0,
            limit: 1,
            ..Default::default()
        };
        let plans = find_schedules(&remaining, &options).unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].course_codes(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_duplicate_codes_are_positional() {
        let remaining = courses(&[("LAB", 5.0), ("LAB", 5.0), ("LAB", 5.0)]);
        let plans = find_schedules(&remaining, &ScheduleOptions::default()).unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].courses.len(), 3);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let remaining = courses(&[("A", 3.0), ("B", 3.0), ("C", 3.0)]);
        let inverted = ScheduleOptions {
            min_size: 4,
            max_size: 3,
            ..Default::default()
        };
        assert!(matches!(
            find_schedules(&remaining, &inverted),
            Err(PlannerError::InvalidInput { .. })
        ));

        let zero = ScheduleOptions {
            min_size: 0,
            ..Default::default()
        };
        assert!(find_schedules(&remaining, &zero).is_err());
    }

    #[test]
    fn test_bad_course_and_oversized_input_rejected() {
        let bad = courses(&[("A", 3.0), ("B", -3.0), ("C", 3.0)]);
        assert!(find_schedules(&bad, &ScheduleOptions::default()).is_err());

        let many: Vec<CourseCredit> = (0..41)
            .map(|i| CourseCredit::new(format!("C{}", i), 3.0))
            .collect();
        assert!(find_schedules(&many, &ScheduleOptions::default()).is_err());
    }

    #[test]
    fn test_lazy_iterator_keeps_going_past_limit() {
        let remaining = courses(&[("A", 5.0), ("B", 5.0), ("C", 5.0), ("D", 5.0)]);
        // 4 size-3 + 1 size-4
        assert_eq!(qualifying_plans(&remaining, 15.0, 3, 5).count(), 5);
    }
}
