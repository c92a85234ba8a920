//! The `program` directive: typesetting engine selection.
//!
//! Matches both the modern `program` key and the deprecated
//! `TS-program` spelling; the capture groups are (optional legacy
//! marker, value).

use std::sync::LazyLock;

use regex::Regex;

use crate::host::HostEnvironment;

pub(super) fn pattern() -> &'static Regex {
    static PATTERN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)% *!TEX +(TS-)?program *= *(.+)\n").unwrap());
    &PATTERN
}

/// Engines offered when the host cannot enumerate its own.
const FALLBACK_ENGINES: &[&str] = &[
    "pdfLaTeX",
    "XeLaTeX",
    "LuaLaTeX",
    "pdfTeX",
    "XeTeX",
    "LuaTeX",
    "ConTeXt (LuaTeX)",
    "ConTeXt (pdfTeX)",
    "ConTeXt (XeTeX)",
    "BibTeX",
    "MakeIndex",
];

/// Candidate list: the host's engines (or the static fallback), with
/// the current value prepended when not already present. The presence
/// check is case-sensitive so a differently cased value stays visible.
pub(super) fn candidates(value: &str, env: &dyn HostEnvironment) -> Vec<String> {
    let mut list = env
        .engines()
        .unwrap_or_else(|| FALLBACK_ENGINES.iter().map(|&e| e.to_owned()).collect());
    if !value.is_empty() && !list.iter().any(|e| e == value) {
        list.insert(0, value.to_owned());
    }
    list
}
