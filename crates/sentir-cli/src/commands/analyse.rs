//! Analyse command: label a document and print `{"tag", "tags"}`.

use crate::error::{CliError, Result};
use sentir::config::ToolkitConfig;
use sentir::labels::Mode;
use sentir::storage::read_text_lossy;
use sentir::toolkit::Toolkit;
use std::path::Path;

/// Text to analyse: the file when given, else the inline input.
///
/// Invalid UTF-8 in the file is replaced rather than rejected.
pub(crate) fn read_input(input: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (file, input) {
        (Some(path), _) => {
            if !path.is_file() {
                return Err(CliError::FileNotFound(path.to_path_buf()));
            }
            Ok(read_text_lossy(path)?)
        }
        (None, Some(text)) => Ok(text.to_string()),
        (None, None) => Err(CliError::MissingInput),
    }
}

pub(crate) fn run(
    config: ToolkitConfig,
    mode: Mode,
    input: Option<&str>,
    file: Option<&Path>,
    sentence: usize,
    document: usize,
    club: bool,
) -> Result<()> {
    let text = read_input(input, file)?;
    let mut toolkit = Toolkit::new(config, mode)
        .with_sentence_level(sentence)
        .with_document_level(document)
        .with_club(club);

    log::info!(
        "{mode} analysis with {} and {}",
        toolkit.sentence_level_name(),
        toolkit.document_level_name()
    );
    let analysis = toolkit.analyse(&text)?;
    println!("{}", serde_json::to_string(&analysis)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_wins_over_inline_input() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "from file").expect("write file");
        let text = read_input(Some("inline"), Some(&path)).expect("readable");
        assert_eq!(text, "from file");
    }

    #[test]
    fn test_file_with_invalid_utf8() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, b"caf\xe9 was great. I loved it.").expect("write file");
        let text = read_input(None, Some(&path)).expect("lossy read");
        assert_eq!(text, "caf\u{fffd} was great. I loved it.");
    }

    #[test]
    fn test_inline_input() {
        assert_eq!(read_input(Some("hi"), None).expect("inline"), "hi");
    }

    #[test]
    fn test_missing_input() {
        assert!(matches!(read_input(None, None), Err(CliError::MissingInput)));
    }

    #[test]
    fn test_missing_file() {
        let err = read_input(None, Some(Path::new("/no/such/doc.txt"))).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
