use std::{fs, path::Path};

use crate::{domain::Narrative, storage::locator::FeatureParser};

const FEATURE_TYPE: &str = "feature";
const FEATURE_KEYWORD: &str = "Feature:";

/// Keywords that end the free-text description of a feature.
const SECTION_KEYWORDS: [&str; 6] = [
    "Background:",
    "Scenario:",
    "Scenario Outline:",
    "Scenario Template:",
    "Rule:",
    "Example:",
];

/// Reads the feature-level narrative of a Gherkin file.
///
/// Only the `Feature:` header and the description beneath it are read.
/// Scenarios are not parsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct GherkinFeatureParser;

impl FeatureParser for GherkinFeatureParser {
    fn parse_feature_narrative(&self, file: &Path) -> Option<Narrative> {
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("Failed to read feature {}: {e}", file.display());
                return None;
            }
        };

        let Some((title, text)) = parse_header(&content) else {
            tracing::debug!("No feature header in {}", file.display());
            return None;
        };

        Some(Narrative::new(
            Some(title).filter(|title| !title.is_empty()),
            text,
            FEATURE_TYPE,
            file.to_path_buf(),
        ))
    }
}

fn parse_header(content: &str) -> Option<(String, String)> {
    let mut lines = content.lines().map(str::trim);

    let title = lines
        .by_ref()
        .find_map(|line| line.strip_prefix(FEATURE_KEYWORD))?
        .trim()
        .to_string();

    let description: Vec<&str> = lines
        .take_while(|line| !starts_section(line))
        .filter(|line| !line.starts_with('#'))
        .collect();

    let text = description.join("\n").trim().to_string();
    Some((title, text))
}

fn starts_section(line: &str) -> bool {
    line.starts_with('@') || SECTION_KEYWORDS.iter().any(|k| line.starts_with(k))
}
