//! Ordered font candidate lists per script and the font search path

use crate::script::Script;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Shared fallback identifier, appended to every candidate list so that
/// resolution only fails outright when the environment itself is broken.
pub const FALLBACK_FONT: &str = "DejaVuSans.ttf";

lazy_static! {
    static ref DEFAULT_CANDIDATES: HashMap<Script, Vec<String>> = {
        let mut map = HashMap::new();
        map.insert(
            Script::Devanagari,
            vec![
                "NotoSansDevanagari-Regular.ttf".to_string(),
                "mangal.ttf".to_string(),
                FALLBACK_FONT.to_string(),
            ],
        );
        map.insert(
            Script::Latin,
            vec![
                "arial.ttf".to_string(),
                "times.ttf".to_string(),
                FALLBACK_FONT.to_string(),
            ],
        );
        map.insert(
            Script::Mixed,
            vec![
                "NotoSansDevanagari-Regular.ttf".to_string(),
                "arialuni.ttf".to_string(),
                FALLBACK_FONT.to_string(),
            ],
        );
        map
    };
}

/// Directories searched when an identifier is not an absolute path.
fn default_search_dirs() -> Vec<PathBuf> {
    [
        // Process working directory first, so locally provisioned fonts win
        ".",
        // Linux
        "/usr/share/fonts/truetype/dejavu",
        "/usr/share/fonts/truetype/noto",
        "/usr/share/fonts/truetype/msttcorefonts",
        "/usr/share/fonts/truetype/liberation",
        "/usr/share/fonts/TTF",
        "/usr/share/fonts/google-noto",
        "/usr/local/share/fonts",
        // macOS
        "/System/Library/Fonts",
        "/Library/Fonts",
        // Windows
        "C:\\Windows\\Fonts",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// Per-script ordered font candidate lists plus the directories in which
/// identifiers are looked up.
#[derive(Debug, Clone)]
pub struct FontCatalog {
    candidates: HashMap<Script, Vec<String>>,
    search_dirs: Vec<PathBuf>,
}

impl FontCatalog {
    /// Catalog with the built-in candidate lists and search path.
    pub fn new() -> Self {
        FontCatalog {
            candidates: DEFAULT_CANDIDATES.clone(),
            search_dirs: default_search_dirs(),
        }
    }

    /// Replace the search path entirely.
    pub fn with_search_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.search_dirs = dirs;
        self
    }

    /// Append a directory to the search path.
    pub fn add_search_dir(&mut self, dir: impl Into<PathBuf>) {
        self.search_dirs.push(dir.into());
    }

    /// Replace the candidate list for one script.
    pub fn set_candidates(&mut self, script: Script, identifiers: Vec<String>) {
        self.candidates.insert(script, identifiers);
    }

    /// The ordered candidate list for a script. Falls back to the Latin list
    /// if a script has no entry.
    pub fn candidates(&self, script: Script) -> &[String] {
        self.candidates
            .get(&script)
            .or_else(|| self.candidates.get(&Script::Latin))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolve an identifier to an existing file path, if any.
    ///
    /// Absolute paths are used as-is; otherwise each search directory is
    /// tried in order. Also serves as a presence probe for provisioning
    /// checks.
    pub fn locate(&self, identifier: &str) -> Option<PathBuf> {
        let direct = Path::new(identifier);
        if direct.is_absolute() {
            return direct.exists().then(|| direct.to_path_buf());
        }
        self.search_dirs
            .iter()
            .map(|dir| dir.join(identifier))
            .find(|path| path.exists())
    }
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_every_default_list_ends_in_fallback() {
        let catalog = FontCatalog::new();
        for script in [Script::Latin, Script::Devanagari, Script::Mixed] {
            let candidates = catalog.candidates(script);
            assert!(!candidates.is_empty());
            assert_eq!(candidates.last().unwrap(), FALLBACK_FONT);
        }
    }

    #[test]
    fn test_candidate_order_preserved() {
        let catalog = FontCatalog::new();
        let devanagari = catalog.candidates(Script::Devanagari);
        assert_eq!(devanagari[0], "NotoSansDevanagari-Regular.ttf");
        assert_eq!(devanagari[1], "mangal.ttf");
    }

    #[test]
    fn test_locate_in_search_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Foo.ttf"), b"not really a font").unwrap();

        let catalog = FontCatalog::new().with_search_dirs(vec![dir.path().to_path_buf()]);
        assert_eq!(
            catalog.locate("Foo.ttf"),
            Some(dir.path().join("Foo.ttf"))
        );
        assert_eq!(catalog.locate("Missing.ttf"), None);
    }

    #[test]
    fn test_locate_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Abs.ttf");
        fs::write(&path, b"bytes").unwrap();

        // Empty search path: only the absolute identifier can resolve
        let catalog = FontCatalog::new().with_search_dirs(vec![]);
        assert_eq!(
            catalog.locate(path.to_str().unwrap()),
            Some(path.clone())
        );

        let missing = dir.path().join("Gone.ttf");
        assert_eq!(catalog.locate(missing.to_str().unwrap()), None);
    }

    #[test]
    fn test_search_dir_order_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("Dup.ttf"), b"first").unwrap();
        fs::write(second.path().join("Dup.ttf"), b"second").unwrap();

        let catalog = FontCatalog::new().with_search_dirs(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        assert_eq!(catalog.locate("Dup.ttf"), Some(first.path().join("Dup.ttf")));
    }
}
