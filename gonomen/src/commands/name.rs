use clap::Args;
use eyre::Result;
use gonomen_codegen_go::GoNaming;
use gonomen_core::{IdentifierCategory, IdentifierRequest};

use super::ConfigArg;

#[derive(Args)]
pub struct NameCommand {
    /// Raw name as it appears in the schema
    pub raw: String,

    /// What the name is for (variable, parameter, model_name, enum_constant, ...)
    #[arg(long, default_value = "variable")]
    pub category: IdentifierCategory,

    /// Go type backing an enum constant
    #[arg(long)]
    pub backing_type: Option<String>,

    /// Look up overrides under this key instead of the raw name
    #[arg(long)]
    pub override_key: Option<String>,

    #[command(flatten)]
    pub config: ConfigArg,
}

impl NameCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = self.config.load();
        let naming = GoNaming::new(&manifest.generator, manifest.overrides())?;
        println!("{}", naming.resolve(&self.request()));
        Ok(())
    }

    fn request(&self) -> IdentifierRequest {
        let mut request = IdentifierRequest::new(self.raw.as_str(), self.category);
        if let Some(key) = &self.override_key {
            request = request.with_override_key(key.as_str());
        }
        if let Some(ty) = &self.backing_type {
            request = request.with_backing_type(ty.as_str());
        }
        request
    }
}
