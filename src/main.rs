//! dart-exports command-line entry point

use anyhow::Result;

fn main() -> Result<()> {
    dart_exports::cli::run()
}
