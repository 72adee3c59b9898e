/// A label split on its first hyphen. The suffix keeps any later hyphens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLabel<'a> {
    pub category: &'a str,
    pub suffix: &'a str,
}

pub struct LabelParser;

impl LabelParser {
    /// Labels without a hyphen have no category and yield `None`.
    pub fn parse(label: &str) -> Option<ParsedLabel<'_>> {
        label
            .split_once('-')
            .map(|(category, suffix)| ParsedLabel { category, suffix })
    }

    pub fn category_of(label: &str) -> Option<&str> {
        Self::parse(label).map(|parsed| parsed.category)
    }
}
