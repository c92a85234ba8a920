//! The `root` directive: path to the master document.
//!
//! The value is stored relative to the edited document's folder and
//! always serializes with forward slashes, which the host editor
//! requires on Unix systems.

use std::sync::LazyLock;

use regex::Regex;

use crate::path::{parent_folder, relative_path};

use super::CandidateContext;

pub(super) fn pattern() -> &'static Regex {
    static PATTERN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)% *!TEX +root *= *(.+)\n").unwrap());
    &PATTERN
}

/// Candidate list: every other open document, expressed relative to
/// this document's folder, with the current value prepended when not
/// already present.
pub(super) fn candidates(value: &str, ctx: &CandidateContext<'_>) -> Vec<String> {
    let root_folder = parent_folder(ctx.file_name);
    let mut list: Vec<String> = ctx
        .env
        .open_documents()
        .iter()
        .filter(|path| path.as_str() != ctx.file_name)
        .map(|path| relative_path(path, root_folder))
        .collect();
    if !value.is_empty() && !list.iter().any(|p| p == value) {
        list.insert(0, value.to_owned());
    }
    list
}

/// "Provide value" action: let the user browse for a file and convert
/// the chosen absolute path to one relative to the document's folder.
pub(super) fn provide_value(ctx: &CandidateContext<'_>) -> Option<String> {
    let file = ctx.env.choose_file()?;
    Some(relative_path(&file, parent_folder(ctx.file_name)))
}
