use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use gonomen_codegen_go::{FileKind, PostProcessor};
use tracing::warn;

use super::ConfigArg;

#[derive(Args)]
pub struct FmtCommand {
    /// Generated files to format
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Role of the files (model, model-test, model-doc, api, api-test, api-doc, supporting-file)
    #[arg(short, long, default_value = "supporting-file")]
    pub kind: FileKind,

    #[command(flatten)]
    pub config: ConfigArg,
}

impl FmtCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = self.config.load();
        let processor = PostProcessor::new(&manifest.generator);
        if !processor.is_enabled() {
            warn!("no post_process command configured in [generator]");
            return Ok(());
        }

        let mut formatted = 0;
        for path in &self.paths {
            if processor.process(path, self.kind)? {
                formatted += 1;
            }
        }
        println!("Formatted {} of {} files", formatted, self.paths.len());
        Ok(())
    }
}
