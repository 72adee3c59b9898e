use crate::config::constants::DOMAIN_CATEGORY;
use crate::constants::palettes::{ASSIGNEE_COLORS, KNOWN_CATEGORIES, TYPE_COLORS};

pub struct LabelDisplay;

impl LabelDisplay {
    /// `ny-funksjonalitet` -> `Ny funksjonalitet`
    pub fn format_suffix(suffix: &str) -> String {
        let mut chars = suffix.chars();
        match chars.next() {
            Some(first) => {
                let rest: String = chars.as_str().replace('-', " ");
                format!("{}{}", first.to_uppercase(), rest)
            }
            None => String::new(),
        }
    }

    pub fn category_name(prefix: &str) -> String {
        KNOWN_CATEGORIES
            .iter()
            .find(|(known, ..)| *known == prefix)
            .map_or_else(|| capitalize(prefix), |(_, name, ..)| (*name).to_string())
    }

    pub fn category_description(prefix: &str) -> Option<&'static str> {
        KNOWN_CATEGORIES
            .iter()
            .find(|(known, ..)| *known == prefix)
            .map(|(_, _, description, _)| *description)
    }

    pub fn category_palette(prefix: &str) -> &'static [&'static str] {
        KNOWN_CATEGORIES
            .iter()
            .find(|(known, ..)| *known == prefix)
            .map_or(TYPE_COLORS, |(.., palette)| *palette)
    }

    pub fn category_color(prefix: &str, index: usize) -> &'static str {
        let palette = Self::category_palette(prefix);
        palette[index % palette.len()]
    }

    pub fn assignee_color(index: usize) -> &'static str {
        ASSIGNEE_COLORS[index % ASSIGNEE_COLORS.len()]
    }

    /// `domene-helse` -> `Helse`
    pub fn domain_name(label: &str) -> String {
        let suffix = label
            .strip_prefix(DOMAIN_CATEGORY)
            .and_then(|rest| rest.strip_prefix('-'))
            .unwrap_or(label);
        capitalize(suffix)
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        format!("{}{}", first.to_uppercase(), chars.as_str())
    })
}
