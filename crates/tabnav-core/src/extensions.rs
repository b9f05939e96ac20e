//! Built-in allowlist of file extensions offered for quick access
//!
//! The list is fixed: source, markup, resource and image files that are
//! worth opening from the project file picker.

/// Recognized extensions, compared case-sensitively
pub const RECOGNIZED_EXTENSIONS: &[&str] = &[
    "c",
    "cpp",
    "cxx",
    "cs",
    "h",
    "hpp",
    "html",
    "css",
    "txt",
    "vsct",
    "resx",
    "vsixmanifest",
    "config",
    "snk",
    "xml",
    "xaml",
    "settings",
    "js",
    "aspx",
    "cshtml",
    "jpg",
    "png",
    "ico",
    "targets",
];

/// Extension of `name`: the token after the last `.`, if there is a `.` at all
pub fn extension_of(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}

/// Whether `name` ends in one of the [`RECOGNIZED_EXTENSIONS`]
pub fn is_recognized(name: &str) -> bool {
    extension_of(name).is_some_and(|ext| RECOGNIZED_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_recognized_extension_matches() {
        for ext in RECOGNIZED_EXTENSIONS {
            let name = format!("file.{}", ext);
            assert!(is_recognized(&name), "{} should be recognized", name);
        }
    }

    #[test]
    fn test_name_without_dot_is_rejected() {
        assert!(!is_recognized("Makefile"));
        assert!(!is_recognized("cpp"));
        assert!(!is_recognized(""));
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        assert!(is_recognized("main.cpp"));
        assert!(!is_recognized("main.CPP"));
        assert!(!is_recognized("logo.Png"));
    }

    #[test]
    fn test_only_final_token_counts() {
        assert!(is_recognized("archive.tar.xml"));
        assert!(!is_recognized("main.cpp.bak"));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        assert!(!is_recognized("notes.md"));
        assert!(!is_recognized("c.unknown"));
    }

    #[test]
    fn test_trailing_dot_yields_empty_extension() {
        assert_eq!(extension_of("weird."), Some(""));
        assert!(!is_recognized("weird."));
    }

    #[test]
    fn test_dotfile_uses_text_after_dot() {
        assert_eq!(extension_of(".config"), Some("config"));
        assert!(is_recognized(".config"));
    }
}
