use clap::Args;
use eyre::Result;

use super::ConfigArg;

#[derive(Args)]
pub struct PlanCommand {
    /// Print compact JSON on one line
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub config: ConfigArg,
}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let plan = self.config.load().plan()?;
        let json = if self.compact {
            serde_json::to_string(&plan)?
        } else {
            serde_json::to_string_pretty(&plan)?
        };
        println!("{}", json);
        Ok(())
    }
}
