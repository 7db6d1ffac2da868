//! Formatter hook for generated Go files.

use std::{fmt, path::Path, process::Command, str::FromStr};

use eyre::{Result, WrapErr, bail};
use tracing::{debug, info};

use crate::config::GoConfig;

/// Role of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Model,
    ModelTest,
    ModelDoc,
    Api,
    ApiTest,
    ApiDoc,
    SupportingFile,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Model => "model",
            FileKind::ModelTest => "model-test",
            FileKind::ModelDoc => "model-doc",
            FileKind::Api => "api",
            FileKind::ApiTest => "api-test",
            FileKind::ApiDoc => "api-doc",
            FileKind::SupportingFile => "supporting-file",
        }
    }

    /// Whether files of this kind are Go source the formatter should see.
    pub fn is_formatted(&self) -> bool {
        !matches!(self, FileKind::ModelDoc | FileKind::ApiDoc)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "model" => Ok(FileKind::Model),
            "model-test" => Ok(FileKind::ModelTest),
            "model-doc" => Ok(FileKind::ModelDoc),
            "api" => Ok(FileKind::Api),
            "api-test" => Ok(FileKind::ApiTest),
            "api-doc" => Ok(FileKind::ApiDoc),
            "supporting-file" => Ok(FileKind::SupportingFile),
            _ => Err(format!("unknown file kind '{}'", s)),
        }
    }
}

/// Runs the configured formatter on generated Go files.
///
/// The command is fixed when the processor is built; the file path is
/// appended as the last argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostProcessor {
    command: Option<Vec<String>>,
}

impl PostProcessor {
    pub fn new(config: &GoConfig) -> Self {
        let command = config
            .post_process
            .clone()
            .filter(|argv| argv.first().is_some_and(|program| !program.is_empty()));
        Self { command }
    }

    pub fn is_enabled(&self) -> bool {
        self.command.is_some()
    }

    /// Format one file. Returns whether the formatter ran.
    pub fn process(&self, path: &Path, kind: FileKind) -> Result<bool> {
        let Some((program, args)) = self.command.as_ref().and_then(|argv| argv.split_first())
        else {
            return Ok(false);
        };
        if !kind.is_formatted() || path.extension().is_none_or(|ext| ext != "go") {
            debug!(path = %path.display(), %kind, "skipping post-processing");
            return Ok(false);
        }

        info!(path = %path.display(), program = %program, "formatting");
        let output = Command::new(program)
            .args(args)
            .arg(path)
            .output()
            .wrap_err_with(|| format!("Failed to run formatter '{}'", program))?;

        if !output.status.success() {
            bail!(
                "formatter '{}' failed on {}: {}",
                program,
                path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(true)
    }
}
