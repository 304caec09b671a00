use serde::Serialize;

use crate::domain::model::SchedulePlan;
use crate::utils::error::{PlannerError, Result};

#[derive(Serialize)]
struct CourseRow<'a> {
    #[serde(rename = "Course")]
    course: &'a str,
    #[serde(rename = "Credits")]
    credits: f64,
}

#[derive(Serialize)]
struct OptionRow {
    #[serde(rename = "Option")]
    option: usize,
    #[serde(rename = "Courses")]
    courses: String,
    #[serde(rename = "Total Credits")]
    total_credits: f64,
}

/// One plan as a `Course,Credits` table.
pub fn plan_to_csv(plan: &SchedulePlan) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for course in &plan.courses {
        writer.serialize(CourseRow {
            course: &course.code,
            credits: course.credits,
        })?;
    }
    finish(writer)
}

/// All plans as an `Option,Courses,Total Credits` table, numbered from 1.
pub fn plans_to_csv(plans: &[SchedulePlan]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (i, plan) in plans.iter().enumerate() {
        writer.serialize(OptionRow {
            option: i + 1,
            courses: plan.course_codes().join(", "),
            total_credits: plan.total_credits,
        })?;
    }
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| PlannerError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| PlannerError::RecordFormat {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CourseCredit;

    fn plan() -> SchedulePlan {
        SchedulePlan {
            courses: vec![
                CourseCredit::new("CS 310", 3.0),
                CourseCredit::new("MATH 340", 4.0),
                CourseCredit::new("PHYS 210", 4.5),
            ],
            total_credits: 11.5,
        }
    }

    #[test]
    fn test_plan_to_csv() {
        let csv = plan_to_csv(&plan()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Course,Credits");
        assert_eq!(lines[1], "CS 310,3.0");
        assert_eq!(lines[3], "PHYS 210,4.5");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_plans_to_csv_quotes_joined_codes() {
        let csv = plans_to_csv(&[plan()]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Option,Courses,Total Credits");
        assert_eq!(lines[1], "1,\"CS 310, MATH 340, PHYS 210\",11.5");
    }

    #[test]
    fn test_empty_plans_yield_empty_output() {
        assert_eq!(plans_to_csv(&[]).unwrap(), "");
    }
}
