//! A scanned tree of narratives
//!
//! [`NarrativeTree::scan`] walks every directory below a requirements root and
//! collects the directory narratives and standalone story files it finds.

use std::path::{Path, PathBuf};

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use walkdir::WalkDir;

use crate::{
    domain::{Narrative, NarrativeFileKind},
    storage::locator::{DirectoryLister, FeatureParser, NarrativeLoader, NarrativeLocator},
};

/// Directory holding configuration and other metadata, never scanned.
const METADATA_DIR: &str = ".req";

/// A narrative discovered during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeEntry {
    /// How the narrative was found.
    pub kind: NarrativeFileKind,
    /// The loaded narrative.
    pub narrative: Narrative,
}

/// Every narrative below a requirements root, ordered by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NarrativeTree {
    entries: Vec<NarrativeEntry>,
}

impl NarrativeTree {
    /// Scans `root` for narratives.
    ///
    /// Each directory is searched for a narrative file, and each `.story` or
    /// `.feature` file is loaded on its own. `baseline_level` is passed through
    /// to the locator unchanged. Directories are processed in parallel.
    pub fn scan<L, N, F>(
        root: &Path,
        locator: &NarrativeLocator<L, N, F>,
        baseline_level: usize,
    ) -> Self
    where
        L: DirectoryLister + Sync,
        N: NarrativeLoader + Sync,
        F: FeatureParser + Sync,
    {
        let (directories, files) = collect_paths(root);

        let from_directories = directories.par_iter().filter_map(|directory| {
            locator
                .load_from_directory(directory, baseline_level)
                .map(|narrative| NarrativeEntry {
                    kind: NarrativeFileKind::DirectoryNarrative,
                    narrative,
                })
        });

        let from_files = files.par_iter().filter_map(|file| {
            let kind = NarrativeLocator::<L, N, F>::classify_standalone_file(file)?;
            locator
                .load_from_story_file(file)
                .map(|narrative| NarrativeEntry { kind, narrative })
        });

        let mut entries: Vec<_> = from_directories.chain(from_files).collect();
        entries.sort_by(|a, b| a.narrative.path().cmp(b.narrative.path()));

        tracing::info!(
            "Found {} narratives below {}",
            entries.len(),
            root.display()
        );

        Self { entries }
    }

    /// The narratives, ordered by path.
    #[must_use]
    pub fn entries(&self) -> &[NarrativeEntry] {
        &self.entries
    }

    /// The number of narratives found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no narratives were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the narrative loaded from a specific file.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&NarrativeEntry> {
        self.entries
            .binary_search_by(|entry| entry.narrative.path().cmp(path))
            .ok()
            .map(|index| &self.entries[index])
    }
}

fn collect_paths(root: &Path) -> (Vec<PathBuf>, Vec<PathBuf>) {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != METADATA_DIR)
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {e}");
                None
            }
        })
        .map(|entry| (entry.file_type().is_dir(), entry.into_path()))
        .fold(
            (Vec::new(), Vec::new()),
            |(mut directories, mut files), (is_dir, path)| {
                if is_dir {
                    directories.push(path);
                } else {
                    files.push(path);
                }
                (directories, files)
            },
        )
}
