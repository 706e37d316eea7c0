//! Plan parameter records, input bounds, and worksheet loading

mod bounds;
mod data;
pub mod loader;

pub use bounds::{FieldBound, PlanBounds};
pub use data::{BasicPlan, GoalPlan, SipPlan, StepUpPlan};
pub use loader::{load_default_plans, load_plans, load_plans_from_reader};
