//! Requirement type inference from file paths
//!
//! The requirement type of a narrative is decided by how many directories
//! separate it from the requirements root:
//!
//! ```text
//! stories/                      <- root
//!   billing/narrative.txt       -> capability
//!   billing/payments/
//!     narrative.txt             -> capability (describes `billing/payments`)
//!     checkout/narrative.txt    -> feature
//! ```
//!
//! The root is not always found verbatim in a file's path. Separators may
//! differ between platforms, and JBehave and Cucumber projects conventionally
//! keep their trees under `stories/` or `features/` whatever the configured
//! root says. Both folder names are used as fallback anchors.

use std::path::{Path, PathBuf};

use crate::domain::RequirementTypes;

const STORIES_ANCHOR: &str = "/stories/";
const FEATURES_ANCHOR: &str = "/features/";

/// Where the requirements root was found within a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The configured root appears in the path.
    ConfiguredRoot,
    /// The path contains a `stories` folder.
    Stories,
    /// The path contains a `features` folder.
    Features,
    /// No root was found; the whole path is treated as relative.
    Unanchored,
}

/// Maps file paths to requirement types.
///
/// A resolver is an immutable pairing of a root directory and a requirement
/// type taxonomy. It does no I/O: paths are treated as plain text, so it can
/// be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLevelResolver {
    root: PathBuf,
    requirement_types: RequirementTypes,
}

impl PathLevelResolver {
    /// Creates a resolver for the given root directory.
    ///
    /// The root is matched textually, so it must be in the same form as the
    /// candidates: absolute if they are. [`crate::NarrativeLocator::for_root`]
    /// takes care of this.
    #[must_use]
    pub const fn new(root: PathBuf, requirement_types: RequirementTypes) -> Self {
        Self {
            root,
            requirement_types,
        }
    }

    /// Returns a resolver for the same root with a different taxonomy.
    #[must_use]
    pub fn with_requirement_types(&self, requirement_types: RequirementTypes) -> Self {
        Self {
            root: self.root.clone(),
            requirement_types,
        }
    }

    /// The root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The requirement type taxonomy.
    #[must_use]
    pub const fn requirement_types(&self) -> &RequirementTypes {
        &self.requirement_types
    }

    /// Reports how the root was located within a path.
    #[must_use]
    pub fn anchor(&self, candidate: &Path) -> Anchor {
        find_anchor_end(&normalized(candidate), &normalized(&self.root)).0
    }

    /// Returns the requirement type for a file.
    ///
    /// `baseline_level` is the depth already consumed by the caller (zero at
    /// the top of the tree). Set `is_directory_narrative` for `narrative`,
    /// `readme` and `overview` files, which describe the grouping one level
    /// above where a story in the same directory would sit.
    #[must_use]
    pub fn resolve_type(
        &self,
        candidate: &Path,
        baseline_level: usize,
        is_directory_narrative: bool,
    ) -> &str {
        let level = self.resolve_level(candidate, baseline_level, is_directory_narrative);
        self.requirement_types.type_for_level(level)
    }

    /// Returns the unbounded hierarchy level of a file.
    ///
    /// The result may be negative, or beyond the end of the taxonomy. Use
    /// [`Self::resolve_type`] for a bounded type name.
    #[must_use]
    pub fn resolve_level(
        &self,
        candidate: &Path,
        baseline_level: usize,
        is_directory_narrative: bool,
    ) -> isize {
        let path = normalized(candidate);
        let root = normalized(&self.root);

        let (anchor, anchor_end) = find_anchor_end(&path, &root);
        let directory_count = segment_count(&path[anchor_end..]) - 1;

        let baseline = isize::try_from(baseline_level).unwrap_or(isize::MAX);
        let level = if is_directory_narrative {
            narrative_level(baseline, directory_count)
        } else {
            requirements_level(baseline, directory_count)
        };

        tracing::trace!(
            path = %path,
            ?anchor,
            directory_count,
            level,
            "resolved requirements level"
        );

        level
    }
}

fn normalized(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Locates the root within a normalized path, returning the byte offset just
/// past it.
fn find_anchor_end(path: &str, root: &str) -> (Anchor, usize) {
    let candidates = [
        (Anchor::ConfiguredRoot, root),
        (Anchor::Stories, STORIES_ANCHOR),
        (Anchor::Features, FEATURES_ANCHOR),
    ];

    candidates
        .into_iter()
        .find_map(|(anchor, needle)| path.find(needle).map(|start| (anchor, start + needle.len())))
        .unwrap_or((Anchor::Unanchored, 0))
}

fn segment_count(relative: &str) -> isize {
    let count = relative.split('/').filter(|s| !s.is_empty()).count();
    isize::try_from(count).unwrap_or(isize::MAX)
}

const fn requirements_level(baseline: isize, directory_count: isize) -> isize {
    baseline.saturating_add(directory_count) - 1
}

const fn narrative_level(baseline: isize, directory_count: isize) -> isize {
    let feature_level = requirements_level(baseline, directory_count);
    if feature_level > 0 {
        feature_level - 1
    } else {
        feature_level
    }
}
