use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    domain::Narrative,
    storage::locator::{DirectoryLister, NarrativeLoader},
};

/// Lists directories on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list_entries(&self, directory: &Path) -> Vec<PathBuf> {
        match fs::read_dir(directory) {
            Ok(entries) => entries
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .collect(),
            Err(e) => {
                tracing::debug!("Failed to list {}: {e}", directory.display());
                Vec::new()
            }
        }
    }
}

/// Loads plain-text and markdown narratives.
///
/// The first non-blank line is the title, with any markdown heading markers
/// removed. Everything after it is the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNarrativeLoader;

impl NarrativeLoader for TextNarrativeLoader {
    fn load(&self, file: &Path, default_type: &str) -> Option<Narrative> {
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("Failed to read narrative {}: {e}", file.display());
                return None;
            }
        };

        let (title, text) = split_title(&content);
        Some(Narrative::new(
            title,
            text,
            default_type,
            file.to_path_buf(),
        ))
    }
}

fn split_title(content: &str) -> (Option<String>, String) {
    let mut lines = content.lines().skip_while(|line| line.trim().is_empty());

    let Some(first) = lines.next() else {
        return (None, String::new());
    };

    let title = first.trim().trim_start_matches('#').trim();
    let title = (!title.is_empty()).then(|| title.to_string());

    let body = lines.collect::<Vec<_>>().join("\n");
    (title, body.trim_matches('\n').trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn splits_markdown_heading_from_body() {
        let (title, text) = split_title("# Payments\n\nPay for things.\n\nIn several ways.\n");

        assert_eq!(title.as_deref(), Some("Payments"));
        assert_eq!(text, "Pay for things.\n\nIn several ways.");
    }

    #[test]
    fn plain_text_title_after_blank_lines() {
        let (title, text) = split_title("\n\n  Billing  \nEverything to do with money");

        assert_eq!(title.as_deref(), Some("Billing"));
        assert_eq!(text, "Everything to do with money");
    }

    #[test]
    fn empty_content_has_no_title() {
        assert_eq!(split_title(""), (None, String::new()));
        assert_eq!(split_title("\n  \n"), (None, String::new()));
    }

    #[test]
    fn bare_heading_marker_is_not_a_title() {
        let (title, text) = split_title("#\nBody");
        assert_eq!(title, None);
        assert_eq!(text, "Body");
    }

    #[test]
    fn loads_narrative_with_default_type() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("narrative.md");
        fs::write(&path, "# Billing\nAll about money\n").unwrap();

        let narrative = TextNarrativeLoader.load(&path, "capability").unwrap();

        assert_eq!(narrative.title(), Some("Billing"));
        assert_eq!(narrative.text(), "All about money");
        assert_eq!(narrative.requirement_type(), "capability");
        assert_eq!(narrative.path(), path);
    }

    #[test]
    fn unreadable_file_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(
            TextNarrativeLoader
                .load(&tmp.path().join("missing.md"), "story")
                .is_none()
        );
    }

    #[test]
    fn lists_directory_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("narrative.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("payments")).unwrap();

        let mut entries = FsDirectoryLister.list_entries(tmp.path());
        entries.sort();

        assert_eq!(
            entries,
            [tmp.path().join("narrative.txt"), tmp.path().join("payments")]
        );
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(FsDirectoryLister.list_entries(&tmp.path().join("missing")).is_empty());
    }
}
