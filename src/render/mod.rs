//! Output rendering (plan summaries)

pub mod plan;

pub use plan::{plan_to_json, render_plan_text};
