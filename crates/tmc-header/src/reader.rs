//! Header scanning: locate and parse magic comments in the leading
//! bytes of a document.

use crate::DirectiveSet;

/// How many leading bytes of a document are scanned for magic
/// comments. Matches the host editor's own peek window.
pub const PEEK_LENGTH: usize = 1024;

/// Scan the first `max_bytes` of `text` for each known directive and
/// return the populated registry.
///
/// The window is byte-bounded. When the limit falls inside a
/// multi-byte character the window backs off to the previous character
/// boundary, so a directive line straddling the limit simply fails to
/// match — malformed or absent directives are never an error, they
/// stay unset.
///
/// A match through a legacy key spelling switches the returned set
/// into legacy serialization mode.
#[must_use]
pub fn read_header(text: &str, max_bytes: usize) -> DirectiveSet {
    let header = bounded_prefix(text, max_bytes);
    let mut set = DirectiveSet::new();
    let mut saw_legacy = false;
    for directive in set.iter_mut() {
        if let Some(caps) = directive.kind().pattern().captures(header) {
            directive.parse_match(&caps);
            saw_legacy |= directive.legacy_syntax();
            tracing::debug!(
                key = directive.kind().key(),
                value = directive.value(),
                legacy = directive.legacy_syntax(),
                "matched magic comment"
            );
        }
    }
    if saw_legacy {
        set.set_legacy_mode(true);
    }
    set
}

/// Longest prefix of `text` that is at most `max_bytes` long and ends
/// on a character boundary.
fn bounded_prefix(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
