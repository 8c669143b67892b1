//! Display helpers shared by every render sink.

/// Turn a hyphen-separated status token into title-cased words.
///
/// `"in-progress"` becomes `"In Progress"`. Empty segments are kept, so the
/// output always has as many words as the input has segments.
#[must_use]
pub fn format_status(status: &str) -> String {
    status
        .split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
