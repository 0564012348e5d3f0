//! Workflows driven by the command line front end

pub mod orchestration;

pub use orchestration::{create_next_tag, plan_next_tag, NextTagArgs, NextTagPlan, WorkflowResult};
