//! Melody source resolution for the CLI.

use anyhow::{bail, Context, Result};
use chiptone_spec::{themes, Melody};

/// Where a loaded melody came from, for status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MelodySource {
    /// One of the built-in themes.
    Builtin,
    /// A JSON document on disk.
    File,
}

impl MelodySource {
    /// Short label for status lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            MelodySource::Builtin => "builtin",
            MelodySource::File => "file",
        }
    }
}

/// Resolves a melody from either a built-in theme name or a spec file path.
///
/// Exactly one of the two must be given.
pub fn load_melody(
    theme: Option<&str>,
    spec_path: Option<&str>,
) -> Result<(Melody, MelodySource)> {
    match (theme, spec_path) {
        (Some(name), None) => {
            let melody = themes::builtin(name).with_context(|| {
                format!(
                    "unknown melody '{}' (built-in themes: {})",
                    name,
                    themes::THEME_NAMES.join(", ")
                )
            })?;
            Ok((melody, MelodySource::Builtin))
        }
        (None, Some(path)) => {
            let melody = Melody::from_file(path)
                .with_context(|| format!("failed to load melody spec: {}", path))?;
            Ok((melody, MelodySource::File))
        }
        (Some(_), Some(_)) => bail!("--melody and --spec are mutually exclusive"),
        (None, None) => bail!("one of --melody or --spec is required"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_builtin_by_name() {
        let (melody, source) = load_melody(Some("fanfare"), None).unwrap();
        assert_eq!(melody.name, "fanfare");
        assert_eq!(source, MelodySource::Builtin);
    }

    #[test]
    fn unknown_builtin_lists_the_themes() {
        let err = load_melody(Some("polka"), None).unwrap_err();
        assert!(format!("{err:#}").contains("fanfare"));
    }

    #[test]
    fn loads_melody_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("melody.json");
        let json = chiptone_spec::builtin("circus")
            .unwrap()
            .to_json_pretty()
            .unwrap();
        std::fs::write(&path, json).unwrap();

        let (melody, source) = load_melody(None, path.to_str()).unwrap();
        assert_eq!(melody.name, "circus");
        assert_eq!(source, MelodySource::File);
    }

    #[test]
    fn requires_exactly_one_source() {
        assert!(load_melody(None, None).is_err());
        assert!(load_melody(Some("fanfare"), Some("x.json")).is_err());
    }
}
