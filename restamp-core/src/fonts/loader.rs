//! Turning a font identifier into parsed font data

use super::{FontCatalog, LoadedFont};
use crate::error::{RestampError, Result};

/// Load a font by identifier: locate the file through the catalog's search
/// path, read it, and parse the outlines.
///
/// A missing file and unparsable data are both per-candidate failures that
/// the resolver treats as "try the next candidate".
pub fn load_font(catalog: &FontCatalog, identifier: &str) -> Result<LoadedFont> {
    let path = catalog.locate(identifier).ok_or_else(|| {
        RestampError::FontLoad(format!("font file not found: {identifier}"))
    })?;
    let bytes = std::fs::read(&path)?;
    LoadedFont::from_bytes(identifier, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::test_support::locate_test_font;
    use std::fs;

    #[test]
    fn test_missing_font_is_font_load_error() {
        let catalog = FontCatalog::new().with_search_dirs(vec![]);
        let err = load_font(&catalog, "NoSuchFont.ttf").unwrap_err();
        match err {
            RestampError::FontLoad(msg) => assert!(msg.contains("NoSuchFont.ttf")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_garbage_file_is_font_load_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Garbage.ttf"), b"definitely not a font").unwrap();

        let catalog = FontCatalog::new().with_search_dirs(vec![dir.path().to_path_buf()]);
        let err = load_font(&catalog, "Garbage.ttf").unwrap_err();
        assert!(matches!(err, RestampError::FontLoad(_)));
    }

    #[test]
    fn test_loads_real_font() {
        let Some(path) = locate_test_font() else {
            eprintln!("skipping: no system font available");
            return;
        };
        let catalog = FontCatalog::new();
        let font = load_font(&catalog, path.to_str().unwrap()).unwrap();
        assert_eq!(font.identifier(), path.to_str().unwrap());
    }
}
