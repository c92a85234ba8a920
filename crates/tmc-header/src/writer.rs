//! Header rewriting: apply edited directive values back to the
//! document with a minimal, position-stable set of edits.

use crate::directive::Directive;
use crate::host::DocumentEditor;
use crate::DirectiveSet;

/// Rewrite the document header to reflect the set's current values.
///
/// Edits are planned against the spans recorded by the read pass and
/// applied in one ascending sweep:
///
/// 1. Directives found in the document come first, ascending by match
///    position; directives to be newly inserted follow in registry
///    order.
/// 2. A running `offset` accumulates the length drift of edits already
///    applied, so later spans are shifted without re-reading positions
///    from the live document. A `cursor` tracks where new directive
///    lines are inserted: immediately after the last rewritten or
///    inserted line (or at the top when the header had none).
/// 3. An empty value replaces the matched line with nothing (removal);
///    an empty value with no match produces no edit at all.
/// 4. An edit whose replacement equals the text already occupying the
///    target span is skipped, so untouched directives never register a
///    change with the host.
///
/// The caller must not mutate the document between the start and end
/// of the pass.
pub fn write_header(doc: &mut dyn DocumentEditor, set: &DirectiveSet) {
    let mut ordered: Vec<&Directive> = set.iter().collect();
    ordered.sort_by_key(|d| d.span().map_or((1, 0), |span| (0, span.index)));

    let mut offset: isize = 0;
    let mut cursor: usize = 0;
    for directive in ordered {
        let replacement = if directive.value().is_empty() {
            String::new()
        } else {
            directive.comment_line(set.legacy_mode())
        };
        if let Some(span) = directive.span() {
            let start = span.index.saturating_add_signed(offset);
            doc.select_range(start, span.len);
            cursor = start + replacement.len();
            offset += replacement.len() as isize - span.len as isize;
        } else if replacement.is_empty() {
            // Never insert a line for an unset directive.
            continue;
        } else {
            doc.select_range(cursor, 0);
            cursor += replacement.len();
        }
        if doc.selection() != replacement {
            tracing::debug!(
                key = directive.kind().key(),
                "rewriting magic comment"
            );
            doc.replace_selection(&replacement);
        }
    }
}
