pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{toml_config::TomlConfig, LocalStorage};

pub use crate::core::{
    engine::PlannerEngine,
    gpa::project_gpa,
    graduation::estimate_grad_term,
    pipeline::PlanningPipeline,
    schedule::{find_schedules, qualifying_plans, ScheduleOptions},
};
pub use crate::domain::model::{
    AcademicRecord, CourseCredit, GradEstimate, GradTerm, PlanningReport, SchedulePlan, Term,
};
pub use crate::domain::ports::{Clock, FixedClock, GpaScenario, SystemClock};
pub use crate::utils::error::{PlannerError, Result};
