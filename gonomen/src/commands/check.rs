use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use gonomen_manifest::Manifest;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to gonomen.toml (defaults to ./gonomen.toml)
    #[arg(short, long, default_value = "gonomen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::load(&self.config).unwrap_or_exit();

        println!("✓ {} is valid\n", self.config.display());

        let overrides = manifest.overrides();
        let override_count = overrides.variables.len()
            + overrides.parameters.len()
            + overrides.models.len()
            + overrides.enum_constants.len();
        println!(
            "  {} override{}, {} reserved word mapping{}",
            override_count,
            plural(override_count),
            overrides.reserved_words.len(),
            plural(overrides.reserved_words.len())
        );

        println!(
            "  {} model{}:",
            manifest.models.len(),
            plural(manifest.models.len())
        );
        for name in manifest.models.keys() {
            println!("    {}", name);
        }

        let groups = manifest.operation_groups();
        println!(
            "  {} operation{} in {} group{}:",
            manifest.operations.len(),
            plural(manifest.operations.len()),
            groups.len(),
            plural(groups.len())
        );
        for (tag, operations) in &groups {
            println!("    {} ({})", tag, operations.len());
        }

        Ok(())
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
