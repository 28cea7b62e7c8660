use std::fmt;

use nonempty::NonEmpty;

/// The ordered requirement type taxonomy.
///
/// Types run from the broadest (for example `capability`) to the most
/// specific (for example `story`). The list is never empty, and is never
/// mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementTypes(NonEmpty<String>);

impl RequirementTypes {
    /// Creates a taxonomy from an ordered list of type names.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty.
    pub fn new<I, S>(types: I) -> Result<Self, EmptyRequirementTypes>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let types: Vec<String> = types.into_iter().map(Into::into).collect();
        NonEmpty::from_vec(types)
            .map(Self)
            .ok_or(EmptyRequirementTypes)
    }

    /// The number of configured types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`. Provided for symmetry with [`Self::len`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The most specific configured type.
    #[must_use]
    pub fn most_specific(&self) -> &str {
        self.0.last()
    }

    /// Iterate over the type names, broadest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the type name for a hierarchy level.
    ///
    /// Levels below zero map to the broadest type. Levels past the end of the
    /// taxonomy collapse onto the most specific type.
    #[must_use]
    pub fn type_for_level(&self, level: isize) -> &str {
        let index = usize::try_from(level).unwrap_or(0).min(self.0.len() - 1);
        &self.0[index]
    }
}

impl Default for RequirementTypes {
    fn default() -> Self {
        Self(NonEmpty::from((
            "capability".to_string(),
            vec!["feature".to_string(), "story".to_string()],
        )))
    }
}

impl fmt::Display for RequirementTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(" > "))
    }
}

impl From<RequirementTypes> for Vec<String> {
    fn from(types: RequirementTypes) -> Self {
        types.0.into()
    }
}

/// Returned when a requirement type list contains no entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("at least one requirement type must be configured")]
pub struct EmptyRequirementTypes;
