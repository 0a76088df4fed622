// ABOUTME: Compiled rewrite patterns and the individual cleanup passes.
// ABOUTME: One function per pass, listed in the order the pipeline applies them.

use once_cell::sync::Lazy;
use regex::Regex;

// Pandoc attribute blocks: {.class-name .another #id role="x"}
static ATTRIBUTE_BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[.#][^}]*\}").unwrap());

// Pandoc div fences: ::: or ::::::: (trailing text on the fence line included)
static DIV_FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^:{3,}.*$").unwrap());

// PDF page position markers: _1/40_ or _23/136_
static PAGE_FRACTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^_\d+/\d+_\s*$").unwrap());

// Standalone page numbers: just a number on its own line
static PAGE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d{1,4}\s*$").unwrap());

// Runs of two or more blank lines, where a blank line may still hold spaces/tabs
static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").unwrap());

// Trailing spaces and tabs on each line
static TRAILING_WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

/// Remove pandoc attribute blocks such as `{.lead #intro role="note"}`.
///
/// Matches anywhere in the text, not just whole lines, and stops at the
/// first closing brace.
pub fn strip_attribute_blocks(text: &str) -> String {
    ATTRIBUTE_BLOCK_RE.replace_all(text, "").to_string()
}

/// Empty every line that starts with a div fence of three or more colons.
pub fn strip_div_fences(text: &str) -> String {
    DIV_FENCE_RE.replace_all(text, "").to_string()
}

/// Remove page-position marker lines like `_1/40_`.
pub fn strip_page_fractions(text: &str) -> String {
    PAGE_FRACTION_RE.replace_all(text, "").to_string()
}

/// Remove lines holding nothing but a 1-4 digit number.
///
/// Content-blind: a legitimate numeric line is removed along with PDF page
/// numbers.
pub fn strip_page_numbers(text: &str) -> String {
    PAGE_NUMBER_RE.replace_all(text, "").to_string()
}

/// Collapse runs of two or more consecutive blank lines to one blank line.
///
/// A line of only spaces/tabs counts as blank, so runs left behind by the
/// removal passes fold in the same pipeline execution.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN_RE.replace_all(text, "\n\n").to_string()
}

/// Remove trailing spaces and tabs from every line.
pub fn strip_trailing_whitespace(text: &str) -> String {
    TRAILING_WS_RE.replace_all(text, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn attribute_blocks_removed_inline() {
        assert_eq!(
            strip_attribute_blocks("Hello {.note #x}world"),
            "Hello world"
        );
    }

    #[test]
    fn attribute_blocks_removed_with_id_marker() {
        assert_eq!(strip_attribute_blocks("Heading {#anchor}"), "Heading ");
    }

    #[test]
    fn attribute_blocks_multiple_per_line() {
        assert_eq!(strip_attribute_blocks("a{.x}b{#y}c"), "abc");
    }

    #[test]
    fn plain_braces_kept() {
        assert_eq!(
            strip_attribute_blocks("struct Foo { bar: u8 }"),
            "struct Foo { bar: u8 }"
        );
    }

    #[test]
    fn div_fences_emptied() {
        assert_eq!(strip_div_fences("::: note\nbody\n:::"), "\nbody\n");
    }

    #[test]
    fn two_colons_not_a_fence() {
        assert_eq!(strip_div_fences(":: not a fence"), ":: not a fence");
    }

    #[test]
    fn page_fraction_line_removed() {
        assert_eq!(strip_page_fractions("_1/40_\nBody"), "\nBody");
    }

    #[test]
    fn page_fraction_with_surrounding_text_kept() {
        assert_eq!(strip_page_fractions("see _1/40_ above"), "see _1/40_ above");
    }

    #[test]
    fn standalone_number_removed() {
        assert_eq!(strip_page_numbers("42\nReal content"), "\nReal content");
    }

    #[test]
    fn standalone_number_with_trailing_spaces_removed() {
        assert_eq!(strip_page_numbers("42  \nReal content"), "\nReal content");
    }

    #[test]
    fn five_digit_number_kept() {
        assert_eq!(strip_page_numbers("12345\nBody"), "12345\nBody");
    }

    #[test]
    fn number_inside_sentence_kept() {
        assert_eq!(strip_page_numbers("chapter 42 begins"), "chapter 42 begins");
    }

    #[test]
    fn blank_runs_collapse_to_one_blank_line() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\nb"), "a\nb");
    }

    #[test]
    fn whitespace_only_lines_count_as_blank() {
        assert_eq!(collapse_blank_lines("a\n  \n\t\nb"), "a\n\nb");
    }

    #[test]
    fn trailing_whitespace_stripped_per_line() {
        assert_eq!(strip_trailing_whitespace("a  \nb\t\nc"), "a\nb\nc");
    }
}
