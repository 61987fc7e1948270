//! Heading detection from typography.

use crate::source::StyledRun;

/// Heading detection settings.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingOptions {
    /// Runs must be longer than this many characters (after trimming)
    pub min_len: usize,
    /// Returned when no run qualifies
    pub placeholder: String,
}

impl Default for HeadingOptions {
    fn default() -> Self {
        Self {
            min_len: 5,
            placeholder: "Untitled".to_string(),
        }
    }
}

/// Pick the page heading: the largest-font run longer than `min_len`.
///
/// The first run at the maximum size wins; a later run only replaces the
/// candidate when strictly larger. Runs of size zero or below never qualify.
pub fn detect_heading(runs: &[StyledRun], options: &HeadingOptions) -> String {
    let mut max_size = 0.0_f32;
    let mut heading: Option<&str> = None;

    for run in runs {
        let text = run.text.trim();
        if run.size > max_size && text.chars().count() > options.min_len {
            max_size = run.size;
            heading = Some(text);
        }
    }

    heading
        .map(str::to_string)
        .unwrap_or_else(|| options.placeholder.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(items: &[(f32, &str)]) -> Vec<StyledRun> {
        items
            .iter()
            .map(|(size, text)| StyledRun::new(*text, *size))
            .collect()
    }

    #[test]
    fn test_first_max_size_wins() {
        let runs = runs(&[(10.0, "Intro"), (14.0, "Chapter One"), (14.0, "Chapter Two")]);
        assert_eq!(detect_heading(&runs, &HeadingOptions::default()), "Chapter One");
    }

    #[test]
    fn test_untitled_when_nothing_qualifies() {
        let options = HeadingOptions::default();
        assert_eq!(detect_heading(&[], &options), "Untitled");

        let short = runs(&[(30.0, "Intro"), (12.0, "  abc  "), (20.0, "12345")]);
        assert_eq!(detect_heading(&short, &options), "Untitled");
    }

    #[test]
    fn test_length_measured_after_trim() {
        let runs = runs(&[(24.0, "   Rate   "), (11.0, "  Rate Laws  ")]);
        assert_eq!(detect_heading(&runs, &HeadingOptions::default()), "Rate Laws");
    }

    #[test]
    fn test_non_positive_sizes_never_win() {
        let runs = runs(&[(0.0, "Zero sized text")]);
        assert_eq!(detect_heading(&runs, &HeadingOptions::default()), "Untitled");
    }

    #[test]
    fn test_custom_options() {
        let options = HeadingOptions {
            min_len: 2,
            placeholder: "(none)".to_string(),
        };
        let runs = runs(&[(9.0, "ab"), (12.0, "Rates")]);
        assert_eq!(detect_heading(&runs, &options), "Rates");
        assert_eq!(detect_heading(&[], &options), "(none)");
    }
}
