//! Runtime settings for deck generation.
//!
//! Everything the deck needs is compiled in; `Settings` only carries the
//! output location so tests can redirect it.

use std::path::{Path, PathBuf};

/// Where the deck is written when no path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "/app/Aventra_Consulting_Company_Profile.pptx";

/// Widescreen canvas (16:9), in inches
pub const SLIDE_WIDTH_IN: f64 = 13.333;
pub const SLIDE_HEIGHT_IN: f64 = 7.5;

/// Runtime settings for deck generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Settings {
    /// Default settings writing to `path`.
    pub fn with_output_path(path: impl AsRef<Path>) -> Self {
        Self {
            output_path: path.as_ref().to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            Settings::default().output_path,
            PathBuf::from("/app/Aventra_Consulting_Company_Profile.pptx")
        );
    }

    #[test]
    fn test_output_override() {
        let settings = Settings::with_output_path("/tmp/deck.pptx");
        assert_eq!(settings.output_path, PathBuf::from("/tmp/deck.pptx"));
    }
}
