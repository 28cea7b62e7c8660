//! Locating and loading narratives
//!
//! A narrative is found in one of two ways:
//!
//! - a directory may contain a single narrative file (`narrative.txt`,
//!   `readme.md`, `overview.md`, ...) describing that level of the hierarchy.
//!   Its requirement type is decided by its depth below the root.
//! - a standalone `.story` or `.feature` file describes itself. Story files
//!   are always stories; feature files are handed to a [`FeatureParser`].
//!
//! Listing directories and reading files is left to collaborators, so that the
//! classification rules can be used without touching the filesystem.

use std::path::{Path, PathBuf};

use crate::{
    Config,
    domain::{EmptyRequirementTypes, Narrative, NarrativeFileKind, RequirementTypes},
    storage::{
        FsDirectoryLister, GherkinFeatureParser, PathLevelResolver, TextNarrativeLoader,
    },
};

const NARRATIVE_FILENAMES: [&str; 5] = [
    "narrative.txt",
    "narrative.md",
    "readme.md",
    "overview.txt",
    "overview.md",
];

/// Whether a file name marks a directory narrative.
///
/// Matching is case-insensitive.
#[must_use]
pub fn is_recognized_narrative_filename(name: &str) -> bool {
    NARRATIVE_FILENAMES
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(name))
}

/// Whether a file name marks a directory narrative when it is seen on its
/// own rather than found in a directory listing.
///
/// Besides the recognised names, any name ending in `narrative.txt` or
/// `narrative.md` counts. Matching is case-insensitive.
#[must_use]
pub fn is_directory_narrative_marker(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    is_recognized_narrative_filename(name)
        || lower.ends_with("narrative.txt")
        || lower.ends_with("narrative.md")
}

/// Lists the immediate entries of a directory.
pub trait DirectoryLister {
    /// Returns the paths of the entries in `directory`, in whatever order the
    /// underlying source provides them.
    ///
    /// An unreadable or missing directory yields no entries.
    fn list_entries(&self, directory: &Path) -> Vec<PathBuf>;
}

/// Builds a [`Narrative`] from a file.
pub trait NarrativeLoader {
    /// Loads the narrative in `file`, classified as `default_type` unless the
    /// content says otherwise.
    fn load(&self, file: &Path, default_type: &str) -> Option<Narrative>;
}

/// Builds a [`Narrative`] from a Gherkin `.feature` file.
pub trait FeatureParser {
    /// Parses the feature-level narrative of `file`.
    fn parse_feature_narrative(&self, file: &Path) -> Option<Narrative>;
}

/// A directory narrative file together with its requirement type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<'a> {
    /// The narrative file.
    pub path: PathBuf,
    /// The requirement type inferred from the file's depth.
    pub requirement_type: &'a str,
}

/// Finds narrative files and loads them with the right requirement type.
#[derive(Debug, Clone)]
pub struct NarrativeLocator<
    L = FsDirectoryLister,
    N = TextNarrativeLoader,
    F = GherkinFeatureParser,
> {
    resolver: PathLevelResolver,
    lister: L,
    loader: N,
    feature_parser: F,
}

impl NarrativeLocator {
    /// Creates a locator backed by the local filesystem.
    #[must_use]
    pub const fn new(resolver: PathLevelResolver) -> Self {
        Self::with_collaborators(
            resolver,
            FsDirectoryLister,
            TextNarrativeLoader,
            GherkinFeatureParser,
        )
    }

    /// Creates a filesystem-backed locator for a requirements root, using the
    /// requirement types configured under that root.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration lists no requirement types.
    pub fn for_root(root: PathBuf) -> Result<Self, EmptyRequirementTypes> {
        // Candidates are made absolute before resolution, so the root must be
        // too or it will not be found within them.
        let root = std::path::absolute(&root).unwrap_or(root);
        let types = Config::load_or_default(&root).requirement_types()?;
        Ok(Self::new(PathLevelResolver::new(root, types)))
    }
}

impl<L, N, F> NarrativeLocator<L, N, F> {
    /// Creates a locator with custom collaborators.
    #[must_use]
    pub const fn with_collaborators(
        resolver: PathLevelResolver,
        lister: L,
        loader: N,
        feature_parser: F,
    ) -> Self {
        Self {
            resolver,
            lister,
            loader,
            feature_parser,
        }
    }

    /// Returns a locator for the same root with a different taxonomy.
    #[must_use]
    pub fn with_requirement_types(&self, requirement_types: RequirementTypes) -> Self
    where
        L: Clone,
        N: Clone,
        F: Clone,
    {
        Self {
            resolver: self.resolver.with_requirement_types(requirement_types),
            lister: self.lister.clone(),
            loader: self.loader.clone(),
            feature_parser: self.feature_parser.clone(),
        }
    }

    /// The resolver used to type directory narratives.
    #[must_use]
    pub const fn resolver(&self) -> &PathLevelResolver {
        &self.resolver
    }

    /// Classifies a standalone requirement file by its suffix.
    ///
    /// Returns [`NarrativeFileKind::StoryFile`] or
    /// [`NarrativeFileKind::FeatureFile`], or `None` for anything else.
    #[must_use]
    pub fn classify_standalone_file(file: &Path) -> Option<NarrativeFileKind> {
        match NarrativeFileKind::of(file) {
            kind @ (NarrativeFileKind::StoryFile | NarrativeFileKind::FeatureFile) => Some(kind),
            NarrativeFileKind::DirectoryNarrative | NarrativeFileKind::Unrecognized => None,
        }
    }
}

impl<L, N, F> NarrativeLocator<L, N, F>
where
    L: DirectoryLister,
    N: NarrativeLoader,
    F: FeatureParser,
{
    /// Finds the narrative file describing `directory`.
    ///
    /// If several recognised files are present the first one listed wins; the
    /// listing order is not specified.
    pub fn find_in_directory(&self, directory: &Path, baseline_level: usize) -> Option<Located<'_>> {
        let path = self
            .lister
            .list_entries(directory)
            .into_iter()
            .find(|entry| {
                entry
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(is_recognized_narrative_filename)
            })?;

        let absolute = std::path::absolute(&path).unwrap_or_else(|_| path.clone());
        let requirement_type = self.resolver.resolve_type(&absolute, baseline_level, true);

        tracing::debug!(
            "Found {requirement_type} narrative at {}",
            path.display()
        );

        Some(Located {
            path,
            requirement_type,
        })
    }

    /// Loads the narrative describing `directory`.
    ///
    /// Returns `None` if the directory has no narrative file, or if the loader
    /// could not build one.
    pub fn load_from_directory(&self, directory: &Path, baseline_level: usize) -> Option<Narrative> {
        let located = self.find_in_directory(directory, baseline_level)?;
        self.loader.load(&located.path, located.requirement_type)
    }

    /// Loads the narrative of a standalone `.story` or `.feature` file.
    ///
    /// Story files are always typed as stories, whatever their depth. Feature
    /// files are delegated entirely to the feature parser.
    pub fn load_from_story_file(&self, file: &Path) -> Option<Narrative> {
        match Self::classify_standalone_file(file)? {
            NarrativeFileKind::FeatureFile => self.feature_parser.parse_feature_narrative(file),
            kind => {
                let default_type = kind.default_type()?;
                self.loader.load(file, default_type)
            }
        }
    }
}
