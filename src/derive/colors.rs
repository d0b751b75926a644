// Language display colors.

/// Color for languages missing from the table.
pub const DEFAULT_LANGUAGE_COLOR: &str = "#8b949e";

const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#f7df1e"),
    ("TypeScript", "#3178c6"),
    ("Python", "#3776ab"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Vue", "#41b883"),
    ("Java", "#b07219"),
    ("C#", "#239120"),
    ("Ruby", "#701516"),
    ("Go", "#00add8"),
    ("Rust", "#dea584"),
    ("PHP", "#4f5d95"),
    ("C++", "#f34b7d"),
    ("Kotlin", "#a97bff"),
    ("Swift", "#f05138"),
    ("Shell", "#89e051"),
    ("SCSS", "#c6538c"),
    ("Lua", "#000080"),
];

/// Look up the display color for a language name (exact match).
pub fn language_color(name: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(lang, _)| *lang == name)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_languages() {
        assert_eq!(language_color("Rust"), "#dea584");
        assert_eq!(language_color("C#"), "#239120");
        assert_eq!(language_color("rust"), DEFAULT_LANGUAGE_COLOR);
        assert_eq!(language_color("Other"), DEFAULT_LANGUAGE_COLOR);
    }
}
