use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::storage::is_recognized_narrative_filename;

/// A narrative loaded from a file.
///
/// A narrative describes a node of the requirements hierarchy: a capability,
/// a feature, or an individual story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narrative {
    title: Option<String>,
    text: String,
    requirement_type: String,
    path: PathBuf,
}

impl Narrative {
    /// Creates a new narrative.
    #[must_use]
    pub fn new(
        title: Option<String>,
        text: String,
        requirement_type: impl Into<String>,
        path: PathBuf,
    ) -> Self {
        Self {
            title,
            text,
            requirement_type: requirement_type.into(),
            path,
        }
    }

    /// The title, if the file had one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The body text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The requirement type this narrative was classified as.
    #[must_use]
    pub fn requirement_type(&self) -> &str {
        &self.requirement_type
    }

    /// The file the narrative was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The kind of narrative file, decided purely from its file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NarrativeFileKind {
    /// A `narrative`, `readme` or `overview` file describing its directory.
    DirectoryNarrative,
    /// A JBehave-style `.story` file.
    StoryFile,
    /// A Cucumber-style `.feature` file.
    FeatureFile,
    /// Anything else.
    Unrecognized,
}

impl NarrativeFileKind {
    /// The type given to standalone story files, whatever their depth.
    pub const STORY_TYPE: &'static str = "story";

    /// Classify a file by its name.
    ///
    /// Directory narrative names are matched case-insensitively; the `.story`
    /// and `.feature` suffixes are matched case-sensitively.
    #[must_use]
    pub fn of(path: &Path) -> Self {
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            return Self::Unrecognized;
        };

        if is_recognized_narrative_filename(name) {
            Self::DirectoryNarrative
        } else if name.ends_with(".story") {
            Self::StoryFile
        } else if name.ends_with(".feature") {
            Self::FeatureFile
        } else {
            Self::Unrecognized
        }
    }

    /// The fixed default type for this kind, if it has one.
    ///
    /// Only story files carry a fixed type. Directory narratives are typed by
    /// their depth, and feature files by their parser.
    #[must_use]
    pub const fn default_type(self) -> Option<&'static str> {
        match self {
            Self::StoryFile => Some(Self::STORY_TYPE),
            Self::DirectoryNarrative | Self::FeatureFile | Self::Unrecognized => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("narrative.txt", NarrativeFileKind::DirectoryNarrative; "narrative txt")]
    #[test_case("NARRATIVE.md", NarrativeFileKind::DirectoryNarrative; "narrative upper")]
    #[test_case("ReadMe.md", NarrativeFileKind::DirectoryNarrative; "readme mixed case")]
    #[test_case("overview.txt", NarrativeFileKind::DirectoryNarrative; "overview txt")]
    #[test_case("checkout.story", NarrativeFileKind::StoryFile; "story")]
    #[test_case("add_item.feature", NarrativeFileKind::FeatureFile; "feature")]
    #[test_case("checkout.STORY", NarrativeFileKind::Unrecognized; "suffix is case sensitive")]
    #[test_case("readme.txt", NarrativeFileKind::Unrecognized; "readme txt not recognised")]
    #[test_case("notes.md", NarrativeFileKind::Unrecognized; "plain markdown")]
    fn kind_from_name(name: &str, expected: NarrativeFileKind) {
        let path = Path::new("/project/stories").join(name);
        assert_eq!(NarrativeFileKind::of(&path), expected);
    }

    #[test]
    fn only_story_files_have_a_fixed_type() {
        assert_eq!(NarrativeFileKind::StoryFile.default_type(), Some("story"));
        assert_eq!(NarrativeFileKind::FeatureFile.default_type(), None);
        assert_eq!(NarrativeFileKind::DirectoryNarrative.default_type(), None);
        assert_eq!(NarrativeFileKind::Unrecognized.default_type(), None);
    }
}
