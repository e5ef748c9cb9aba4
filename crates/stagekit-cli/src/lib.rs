//! Shared plumbing for the `artnet-send` and `svg-to-isf` binaries.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glob::glob;
use tracing_subscriber::EnvFilter;

/// `--version` long form with the build commit and date.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("STAGEKIT_BUILD_COMMIT"),
    ", ",
    env!("STAGEKIT_BUILD_DATE"),
    ")"
);

/// Install the stderr log subscriber; `RUST_LOG` overrides the `warn` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub hint: Option<String>,
    /// Source chain below `message`, outermost first.
    pub causes: Vec<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
            causes: Vec::new(),
        }
    }

    /// Print to stderr and map to exit status 1.
    pub fn report(&self) -> ExitCode {
        eprintln!("error: {}", self.message);
        for cause in &self.causes {
            eprintln!("caused by: {}", cause);
        }
        if let Some(hint) = &self.hint {
            eprintln!("hint: {}", hint);
        }
        ExitCode::from(1)
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        let mut chain = err.chain().map(|cause| cause.to_string());
        let message = chain.next().unwrap_or_default();
        Self {
            message,
            hint: None,
            causes: chain.collect(),
        }
    }
}

/// Expand a glob pattern that must match exactly one file.
///
/// Existing paths and paths without glob metacharacters are returned
/// unchanged, so a file literally named `shape [v2].svg` is not expanded.
pub fn resolve_input_path(input: &Path, expected: &str) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if input.exists() || !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single file, or run once per file".to_string()),
        ));
    }

    matches.pop().ok_or_else(|| {
        CliError::new(
            format!("input file not found: no files match pattern '{}'", pattern),
            Some(format!("check the path or quote the pattern; expected {expected}")),
        )
    })
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}

#[cfg(test)]
mod tests {
    use std::fs;

    use anyhow::Context;
    use tempfile::TempDir;

    use super::{CliError, resolve_input_path};

    #[test]
    fn plain_path_is_returned_unchanged() {
        let path = std::path::Path::new("does/not/exist.svg");
        assert_eq!(resolve_input_path(path, "an .svg file").unwrap(), path);
    }

    #[test]
    fn single_glob_match_resolves() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("shape.svg"), "<svg/>").unwrap();
        let pattern = temp.path().join("*.svg");
        let resolved = resolve_input_path(&pattern, "an .svg file").unwrap();
        assert_eq!(resolved, temp.path().join("shape.svg"));
    }

    #[test]
    fn existing_file_with_metacharacters_is_literal() {
        let temp = TempDir::new().unwrap();
        let literal = temp.path().join("dragonfly [v2].svg");
        fs::write(&literal, "<svg/>").unwrap();
        assert_eq!(resolve_input_path(&literal, "an .svg file").unwrap(), literal);
    }

    #[test]
    fn ambiguous_glob_is_rejected() {
        let temp = TempDir::new().unwrap();
        for name in ["a.svg", "b.svg"] {
            fs::write(temp.path().join(name), "<svg/>").unwrap();
        }
        let err = resolve_input_path(&temp.path().join("*.svg"), "an .svg file").unwrap_err();
        assert!(err.message.contains("2 matches"));
        assert!(err.hint.is_some());
    }

    #[test]
    fn empty_glob_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = resolve_input_path(&temp.path().join("*.svg"), "an .svg file").unwrap_err();
        assert!(err.message.contains("input file not found"));
    }

    #[test]
    fn anyhow_chain_becomes_causes() {
        let err: anyhow::Result<()> = Err(std::io::Error::other("disk full")).context("write failed");
        let cli = CliError::from(err.unwrap_err());
        assert_eq!(cli.message, "write failed");
        assert_eq!(cli.causes, ["disk full"]);
    }
}
