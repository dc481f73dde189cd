use std::path::PathBuf;

/// Default directory holding unpacked speech models, one subdirectory
/// per language identifier.
///
/// - macOS: `~/Library/Application Support/percept/models/`
/// - Linux: `$XDG_DATA_HOME/percept/models/` or `~/.local/share/percept/models/`
/// - Windows: `%APPDATA%/percept/models/`
pub fn default_models_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("percept").join("models"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_dir_ends_with_expected_suffix() {
        if let Some(dir) = default_models_dir() {
            assert!(dir.ends_with("percept/models"));
        }
    }
}
