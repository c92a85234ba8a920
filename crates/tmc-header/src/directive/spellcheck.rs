//! The `spellcheck` directive: dictionary selection.

use std::sync::LazyLock;

use regex::Regex;

use crate::host::HostEnvironment;
use crate::path::file_name_without_extension;

pub(super) fn pattern() -> &'static Regex {
    static PATTERN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)% *!TEX +spellcheck *= *(.+)\n").unwrap());
    &PATTERN
}

/// Dictionaries offered when the host cannot enumerate its own.
const FALLBACK_DICTIONARIES: &[&str] = &["de_DE", "en_US", "es_ES", "fr_FR", "it_IT"];

/// Candidate list: dictionary identifiers derived from the host's
/// dictionary files (several aliases can point at the same file, so
/// paths are deduplicated first), or the static fallback. The current
/// value is prepended when not already present.
pub(super) fn candidates(value: &str, env: &dyn HostEnvironment) -> Vec<String> {
    let mut list: Vec<String> = match env.dictionaries() {
        Some(paths) => {
            let mut unique: Vec<String> = Vec::new();
            for path in paths {
                if !unique.contains(&path) {
                    unique.push(path);
                }
            }
            unique
                .iter()
                .map(|p| file_name_without_extension(p).to_owned())
                .collect()
        }
        None => FALLBACK_DICTIONARIES.iter().map(|&d| d.to_owned()).collect(),
    };
    if !value.is_empty() && !list.iter().any(|d| d == value) {
        list.insert(0, value.to_owned());
    }
    list
}
