/// Default filesystem collaborators.
pub mod filesystem;
/// Gherkin feature file header extraction.
pub mod feature;
/// Locating narrative files in directories and standalone story files.
pub mod locator;
mod path_level;
/// Recursive scanning of a requirements tree.
pub mod tree;

pub use feature::GherkinFeatureParser;
pub use filesystem::{FsDirectoryLister, TextNarrativeLoader};
pub use locator::{
    DirectoryLister, FeatureParser, Located, NarrativeLoader, NarrativeLocator,
    is_directory_narrative_marker, is_recognized_narrative_filename,
};
pub use path_level::{Anchor, PathLevelResolver};
pub use tree::{NarrativeEntry, NarrativeTree};
