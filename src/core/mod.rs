pub mod engine;
pub mod export;
pub mod gpa;
pub mod graduation;
pub mod pipeline;
pub mod report;
pub mod schedule;

pub use crate::domain::model::{AcademicRecord, CourseCredit, PlanningReport, SchedulePlan};
pub use crate::domain::ports::{Clock, ConfigProvider, GpaScenario, Pipeline, Storage};
pub use crate::utils::error::Result;
