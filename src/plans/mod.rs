// Plan catalog and comparison scoring

pub mod catalog;
pub mod scoring;

pub use catalog::{plan_by_id, plans_for, Plan, PLANS};
pub use scoring::{recommend, score_plans, PlanError, PlanWeights, ScoredPlan};
