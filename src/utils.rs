use scraper::ElementRef;
use std::ops::Range;

/// Full text of an element with surrounding whitespace trimmed
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of an element with inner whitespace runs collapsed to single spaces,
/// close to what a browser renders for inline content
pub fn rendered_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every descendant text fragment trimmed, empty ones dropped, concatenated
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split `total` items into `parts` contiguous ranges of `ceil(total / parts)` items.
///
/// Always returns `parts` ranges; trailing ones may be shorter or empty.
pub fn chunk_bounds(total: usize, parts: usize) -> Vec<Range<usize>> {
    if parts == 0 {
        return Vec::new();
    }
    let size = total.div_ceil(parts);
    (0..parts)
        .map(|part| {
            let start = (part * size).min(total);
            let end = ((part + 1) * size).min(total);
            start..end
        })
        .collect()
}

/// File name of the 1-based chunk `number`
pub fn chunk_file_name(prefix: &str, number: usize) -> String {
    format!("{prefix}{number}.json")
}
