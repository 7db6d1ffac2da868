use clap::Args;
use eyre::{Result, WrapErr};
use gonomen_codegen_go::package_of;
use gonomen_core::SchemaType;

use super::ConfigArg;

#[derive(Args)]
pub struct TypeCommand {
    /// Schema type as JSON, e.g. '{"kind":"array","items":{"kind":"primitive","name":"integer"}}'
    pub schema: String,

    /// Register an extra model name references may point at (repeatable)
    #[arg(short, long = "model")]
    pub models: Vec<String>,

    /// Also print the package the type has to import, if any
    #[arg(long)]
    pub imports: bool,

    #[command(flatten)]
    pub config: ConfigArg,
}

impl TypeCommand {
    pub fn run(&self) -> Result<()> {
        let schema: SchemaType =
            serde_json::from_str(&self.schema).wrap_err("Invalid schema type JSON")?;
        let manifest = self.config.load();
        let generator = manifest.generator()?.with_models(self.models.iter());

        let resolved = generator.resolver().resolve(&schema)?;
        println!("{}", resolved);
        if let Some(package) = package_of(&resolved).filter(|_| self.imports) {
            println!("import \"{}\"", package);
        }
        Ok(())
    }
}
