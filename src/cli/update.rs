//! Update command implementation

use anyhow::Result;
use clap::Args;

use super::utils::TargetArgs;
use crate::domain::Outcome;
use crate::exports::{apply_plan, plan_update};

#[derive(Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print the resulting file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: UpdateArgs) -> Result<()> {
    let (path, config) = args.target.resolve()?;
    let plan = plan_update(&path, &config)?;

    if args.dry_run {
        match (plan.action.path(), plan.action.contents()) {
            (Some(target), Some(contents)) => {
                eprintln!("Would write {}", target.display());
                print!("{}", contents);
            }
            _ => println!("No .dart files found; nothing to update"),
        }
        return Ok(());
    }

    match apply_plan(&plan)? {
        Outcome::Written(path) => println!("Updated {}", path.display()),
        Outcome::Created(path) => println!("Created {}", path.display()),
        Outcome::Unchanged(path) => println!("{} is already up to date", path.display()),
        Outcome::NoFiles(dir) => {
            println!("No .dart files found in {}; nothing to update", dir.display())
        }
    }
    Ok(())
}
