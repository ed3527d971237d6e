//! Info command implementation

use anyhow::Result;
use clap::Args;

use super::utils::TargetArgs;
use crate::exports::plan_update;
use crate::render::{plan_to_json, render_plan_text};

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let (path, config) = args.target.resolve()?;
    let plan = plan_update(&path, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan_to_json(&plan))?);
    } else {
        println!("{}", render_plan_text(&plan));
    }
    Ok(())
}
