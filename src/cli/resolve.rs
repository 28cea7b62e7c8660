use std::path::{Path, PathBuf};

use narrative::{
    Config, NarrativeFileKind, PathLevelResolver, storage::is_directory_narrative_marker,
};
use tracing::instrument;

/// Command arguments for `req-narrative resolve`.
#[derive(Debug, clap::Parser)]
pub struct Resolve {
    /// The file to classify
    path: PathBuf,

    /// Baseline requirements level of the root (defaults to the configured
    /// level).
    #[arg(long, value_name = "N")]
    level: Option<usize>,

    /// Treat the file as a directory narrative, whatever its name.
    ///
    /// By default this is inferred from the file name.
    #[arg(long)]
    narrative: bool,
}

impl Resolve {
    #[instrument]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let config = Config::load_or_default(&root);
        let level = self.level.unwrap_or(config.requirements_level);
        let resolver = PathLevelResolver::new(root, config.requirement_types()?);

        match resolve(&resolver, &self.path, level, self.narrative) {
            Resolution::Fixed(requirement_type) | Resolution::Level(requirement_type) => {
                println!("{requirement_type}");
            }
            Resolution::FeatureFile => {
                println!("feature files are typed by their parser, not by their depth");
            }
        }

        Ok(())
    }
}

/// How `resolve` classified a path.
#[derive(Debug, PartialEq, Eq)]
enum Resolution<'a> {
    /// A fixed type that does not depend on depth.
    Fixed(&'a str),
    /// A `.feature` file; no level applies.
    FeatureFile,
    /// A type inferred from the depth below the root.
    Level(&'a str),
}

fn resolve<'a>(
    resolver: &'a PathLevelResolver,
    path: &Path,
    level: usize,
    force_narrative: bool,
) -> Resolution<'a> {
    let kind = NarrativeFileKind::of(path);
    if kind == NarrativeFileKind::FeatureFile {
        return Resolution::FeatureFile;
    }
    if let Some(default_type) = kind.default_type() {
        return Resolution::Fixed(default_type);
    }

    // The root is absolute, so the path must be too for it to be anchored.
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let is_narrative = force_narrative
        || path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(is_directory_narrative_marker);

    tracing::info!(
        "Anchored on {:?}, level {}",
        resolver.anchor(&path),
        resolver.resolve_level(&path, level, is_narrative)
    );

    Resolution::Level(resolver.resolve_type(&path, level, is_narrative))
}

#[cfg(test)]
mod tests {
    use narrative::RequirementTypes;

    use super::*;

    fn resolver(root: PathBuf) -> PathLevelResolver {
        PathLevelResolver::new(
            root,
            RequirementTypes::new(["capability", "feature", "story"]).unwrap(),
        )
    }

    #[test]
    fn feature_files_get_no_level() {
        let resolver = resolver(PathBuf::from("/project/stories"));

        for path in [
            "/project/stories/a/add.feature",
            "/project/stories/a/b/c/d/add.feature",
        ] {
            assert_eq!(
                resolve(&resolver, Path::new(path), 0, false),
                Resolution::FeatureFile
            );
        }
        assert_eq!(
            resolve(&resolver, Path::new("/project/stories/a/add.feature"), 0, true),
            Resolution::FeatureFile
        );
    }

    #[test]
    fn story_files_are_always_stories() {
        let resolver = resolver(PathBuf::from("/project/stories"));
        assert_eq!(
            resolve(&resolver, Path::new("/project/stories/a/checkout.story"), 0, false),
            Resolution::Fixed("story")
        );
    }

    #[test]
    fn relative_paths_resolve_like_absolute_ones() {
        let cwd = std::env::current_dir().unwrap();
        let resolver = resolver(cwd.join("stories"));

        let relative = resolve(&resolver, Path::new("stories/a/b/narrative.txt"), 0, false);
        let absolute = resolve(
            &resolver,
            &cwd.join("stories/a/b/narrative.txt"),
            0,
            false,
        );

        assert_eq!(relative, Resolution::Level("capability"));
        assert_eq!(relative, absolute);
    }

    #[test]
    fn suffixed_narrative_names_are_markers() {
        let resolver = resolver(PathBuf::from("/project/stories"));
        let path = Path::new("/project/stories/a/b/c/my-narrative.txt");

        assert_eq!(resolve(&resolver, path, 0, false), Resolution::Level("feature"));
        assert_eq!(
            resolve(&resolver, Path::new("/project/stories/a/b/c/notes.txt"), 0, false),
            Resolution::Level("story")
        );
    }
}
