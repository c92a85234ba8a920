//! The `encoding` directive: alias table and display transforms.
//!
//! Encoding names are displayed as the canonical table name followed
//! by the known aliases in parentheses, e.g. `UTF-8 (UTF-8 Unicode,
//! utf-8)`. The stored value is a single name; resolution against the
//! table is a case-insensitive substring match so any alias round-trips
//! to the annotated entry.

use std::sync::LazyLock;

use regex::Regex;

pub(super) fn pattern() -> &'static Regex {
    static PATTERN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)% *!TEX +encoding *= *(.+)\n").unwrap());
    &PATTERN
}

static DISPLAY_ALIASES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\(.+\)\s*$").unwrap());

/// Known encodings. Each row: canonical name, the legacy tool's
/// preferred name (empty when it has none), then remaining aliases.
/// Rows up to `IBM866` come from the inputenc package names, the rest
/// from inputenx.
const ENCODING_TABLE: &[&[&str]] = &[
    &["UTF-8", "UTF-8 Unicode", "utf-8"],
    &["ISO-8859-1", "IsoLatin", "latin1"],
    &["ISO-8859-2", "IsoLatin2", "latin2"],
    &["ISO-8859-3", "", "latin3"],
    &["ISO-8859-4", "", "latin4"],
    &["ISO-8859-9", "IsoLatin5", "latin5"],
    &["ISO-8859-15", "IsoLatin9", "latin9"],
    &["ISO-8859-16", "", "latin10"],
    &["IBM850", "", "cp850"],
    &["Windows-1250", "", "cp1250"],
    &["Windows-1252", "", "cp1252", "ansinew"],
    &["Windows-1257", "", "cp1257"],
    &["Apple Roman", "MacOSRoman", "applemac", "x-mac-roman"],
    &["ISO-8859-5", "", "iso88595"],
    &["ISO-8859-8", "", "x-iso-8859-8"],
    &["ISO-8859-10", "", "x-latin6"],
    &["ISO-8859-13", "", "x-latin7"],
    &["ISO-8859-14", "", "x-latin8"],
    &["IBM866", "", "x-cp866"],
    &["Windows-1251", "Windows Cyrillic", "x-cp1251"],
    &["Windows-1255", "", "x-cp1255"],
    &["KOI8-R", "KOI8_R", "x-koi8-r"],
];

/// Format one table row as `Name (alias, alias)`.
///
/// Under legacy mode the legacy tool's preferred name swaps into the
/// leading position. An empty slot marks where the parenthesized alias
/// list begins for rows without a legacy name.
fn format_entry(entry: &[&str], legacy_mode: bool) -> String {
    let mut names: Vec<&str> = entry.to_vec();
    if legacy_mode && !names[1].is_empty() {
        names.swap(0, 1);
    }
    let rest = names
        .iter()
        .position(|n| n.is_empty())
        .map_or(1, |empty| empty + 1);
    format!("{} ({})", names[0], names[rest..].join(", "))
}

/// Resolve a stored encoding name to its annotated table entry.
///
/// Falls back to the raw value when no entry's alias list contains it.
pub(super) fn display_value(value: &str, legacy_mode: bool) -> String {
    if value.is_empty() {
        return String::new();
    }
    let needle = value.to_lowercase();
    ENCODING_TABLE
        .iter()
        .map(|entry| format_entry(entry, legacy_mode))
        .find(|formatted| formatted.to_lowercase().contains(&needle))
        .unwrap_or_else(|| value.to_owned())
}

/// Strip a trailing parenthesized alias group from an edited display
/// value, leaving the leading name.
pub(super) fn from_display_value(text: &str) -> String {
    DISPLAY_ALIASES.captures(text).map_or_else(
        || text.to_owned(),
        |caps| caps.get(1).map_or("", |m| m.as_str()).trim().to_owned(),
    )
}

/// Candidate list: the annotated table in order, with the entry
/// matching the current value promoted to the front, or the raw value
/// itself prepended when nothing matches.
pub(super) fn candidates(value: &str, legacy_mode: bool) -> Vec<String> {
    let mut list: Vec<String> = ENCODING_TABLE
        .iter()
        .map(|entry| format_entry(entry, legacy_mode))
        .collect();
    if !value.is_empty() {
        let needle = value.to_lowercase();
        match list.iter().position(|e| e.to_lowercase().contains(&needle)) {
            Some(hit) => {
                let entry = list.remove(hit);
                list.insert(0, entry);
            }
            None => list.insert(0, value.to_owned()),
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_entry_with_legacy_name() {
        assert_eq!(
            format_entry(&["UTF-8", "UTF-8 Unicode", "utf-8"], false),
            "UTF-8 (UTF-8 Unicode, utf-8)"
        );
    }

    #[test]
    fn test_format_entry_without_legacy_name() {
        assert_eq!(
            format_entry(&["ISO-8859-3", "", "latin3"], false),
            "ISO-8859-3 (latin3)"
        );
    }

    #[test]
    fn test_format_entry_legacy_mode_swaps() {
        assert_eq!(
            format_entry(&["UTF-8", "UTF-8 Unicode", "utf-8"], true),
            "UTF-8 Unicode (UTF-8, utf-8)"
        );
    }

    #[test]
    fn test_format_entry_legacy_mode_without_legacy_name() {
        assert_eq!(
            format_entry(&["Windows-1250", "", "cp1250"], true),
            "Windows-1250 (cp1250)"
        );
    }

    #[test]
    fn test_display_value_resolves_alias() {
        assert_eq!(display_value("utf-8", false), "UTF-8 (UTF-8 Unicode, utf-8)");
        assert_eq!(display_value("latin1", false), "ISO-8859-1 (IsoLatin, latin1)");
    }

    #[test]
    fn test_display_value_unknown_passthrough() {
        assert_eq!(display_value("EBCDIC", false), "EBCDIC");
    }

    #[test]
    fn test_display_value_empty() {
        assert_eq!(display_value("", false), "");
    }

    #[test]
    fn test_from_display_value_strips_alias_group() {
        assert_eq!(from_display_value("UTF-8 (UTF-8 Unicode, utf-8)"), "UTF-8");
        assert_eq!(
            from_display_value("UTF-8 Unicode (UTF-8, utf-8)"),
            "UTF-8 Unicode"
        );
    }

    #[test]
    fn test_from_display_value_plain_value() {
        assert_eq!(from_display_value("UTF-8"), "UTF-8");
    }

    #[test]
    fn test_candidates_promote_match() {
        let list = candidates("latin2", false);
        assert_eq!(list[0], "ISO-8859-2 (IsoLatin2, latin2)");
        assert_eq!(list.len(), ENCODING_TABLE.len());
        // First table row follows the promoted entry.
        assert_eq!(list[1], "UTF-8 (UTF-8 Unicode, utf-8)");
    }

    #[test]
    fn test_candidates_prepend_unknown() {
        let list = candidates("EBCDIC", false);
        assert_eq!(list[0], "EBCDIC");
        assert_eq!(list.len(), ENCODING_TABLE.len() + 1);
    }

    #[test]
    fn test_candidates_empty_value() {
        let list = candidates("", false);
        assert_eq!(list.len(), ENCODING_TABLE.len());
        assert_eq!(list[0], "UTF-8 (UTF-8 Unicode, utf-8)");
    }
}
