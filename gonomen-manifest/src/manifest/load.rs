//! Locating and reading `gonomen.toml`.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use super::{Manifest, validate::validate_manifest};
use crate::{Error, Result, error::SourceContext};

/// Name the manifest is looked up under in the working directory.
pub const MANIFEST_FILE: &str = "gonomen.toml";

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Read and validate the manifest at `path`.
    ///
    /// Diagnostics name the file by the path as given.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Load the explicit path, or `dir/gonomen.toml` when it exists.
    ///
    /// Without either, the engine runs on the default options with empty
    /// tables, which is what the single-name commands need.
    pub fn load_or_default(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match locate(explicit, dir) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// The manifest a command should read, if any.
pub fn locate(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = dir.join(MANIFEST_FILE);
    candidate.is_file().then_some(candidate)
}

/// Parse and validate manifest text; `filename` labels the diagnostics.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "").unwrap();

        let explicit = Path::new("elsewhere.toml");
        assert_eq!(locate(Some(explicit), dir.path()), Some(explicit.to_path_buf()));
        assert_eq!(locate(None, dir.path()), Some(dir.path().join(MANIFEST_FILE)));
    }

    #[test]
    fn test_missing_manifest_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(locate(None, dir.path()), None);

        let manifest = Manifest::load_or_default(None, dir.path()).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_diagnostics_name_the_file() {
        let err = parse_manifest("[generator\n", "api/gonomen.toml").unwrap_err();
        let Error::Parse { src, .. } = *err else {
            panic!("expected a parse error");
        };
        assert_eq!(src.name(), "api/gonomen.toml");
    }
}
