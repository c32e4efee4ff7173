use std::path::PathBuf;

const QUOTE_CHARS: &[char] = &['\'', '"'];

/// Splits a newline-delimited list of changed files into paths.
///
/// Each entry is trimmed of whitespace (including the `\r` of CRLF input) and
/// of surrounding quote characters, as emitted by `git diff --name-only` with
/// `core.quotePath`. Empty entries are dropped; order and duplicates are kept.
pub fn parse_file_list(raw: &str) -> Vec<PathBuf> {
    raw.split('\n')
        .map(|entry| entry.trim().trim_matches(QUOTE_CHARS))
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_newlines() {
        let files = parse_file_list("src/a.cs\nsrc/b.cs\nREADME.md");
        assert_eq!(
            files,
            vec![
                PathBuf::from("src/a.cs"),
                PathBuf::from("src/b.cs"),
                PathBuf::from("README.md"),
            ]
        );
    }

    #[test]
    fn test_strips_quotes_and_empty_entries() {
        let files = parse_file_list("\"Assets/Plugins/a b.cs\"\n\n'lib/c.py'\n\"\"\n");
        assert_eq!(
            files,
            vec![PathBuf::from("Assets/Plugins/a b.cs"), PathBuf::from("lib/c.py")]
        );
    }

    #[test]
    fn test_handles_crlf_input() {
        let files = parse_file_list("\"a.cs\"\r\nb.cs\r\n");
        assert_eq!(files, vec![PathBuf::from("a.cs"), PathBuf::from("b.cs")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_file_list("").is_empty());
        assert!(parse_file_list("\n\n  \n").is_empty());
    }
}
