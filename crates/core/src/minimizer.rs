// ABOUTME: The minimize pipeline: ordered cleanup passes plus edge normalization.
// ABOUTME: Pure text-to-text transform, total over every input string.

use crate::passes;

/// Apply all cleanup passes to markdown text.
///
/// Passes run in a fixed order: attribute blocks, div fences, page-fraction
/// markers, and standalone page numbers are removed first, then blank-line
/// runs collapse, trailing whitespace is stripped, and the document edges
/// are trimmed. The order is a contract: the whitespace passes fold the
/// blank lines the removal passes leave behind.
///
/// The result always ends in exactly one newline; an input with nothing to
/// keep normalizes to `"\n"`.
pub fn minimize(text: &str) -> String {
    let text = passes::strip_attribute_blocks(text);
    let text = passes::strip_div_fences(&text);
    let text = passes::strip_page_fractions(&text);
    let text = passes::strip_page_numbers(&text);
    let text = passes::collapse_blank_lines(&text);
    let text = passes::strip_trailing_whitespace(&text);

    let mut out = text.trim().to_string();
    out.push('\n');
    out
}
