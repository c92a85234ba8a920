//! String path helpers for host-supplied file paths.
//!
//! Paths coming from the host editor may use `/` or `\` separators
//! depending on the platform, so these helpers work on plain strings
//! rather than [`std::path::Path`], which would mis-split foreign
//! separators. Output always uses `/`.

use std::sync::LazyLock;

use regex::Regex;

static FILE_NAME_WITHOUT_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\\/]+)\.[^.]+$").unwrap());

static PARENT_FOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*[\\/])[^\\/]+\.[^.]+$").unwrap());

/// Extract the final path segment with its extension stripped.
///
/// Returns the input unchanged when the final segment has no extension.
///
/// # Examples
///
/// ```
/// use tmc_header::path::file_name_without_extension;
///
/// assert_eq!(file_name_without_extension("/usr/share/dict/en_US.dic"), "en_US");
/// assert_eq!(file_name_without_extension("notes"), "notes");
/// ```
#[must_use]
pub fn file_name_without_extension(path: &str) -> &str {
    FILE_NAME_WITHOUT_EXTENSION
        .captures(path)
        .map_or(path, |c| c.get(1).map_or(path, |m| m.as_str()))
}

/// Return the directory portion of a file path, including the trailing
/// separator. Answers `"."` when the path has no directory part, and
/// also when the final segment has no extension (the path is then not
/// recognized as a file path).
///
/// # Examples
///
/// ```
/// use tmc_header::path::parent_folder;
///
/// assert_eq!(parent_folder("/home/user/thesis.tex"), "/home/user/");
/// assert_eq!(parent_folder("thesis.tex"), ".");
/// assert_eq!(parent_folder("/home/user/thesis"), ".");
/// ```
#[must_use]
pub fn parent_folder(path: &str) -> &str {
    PARENT_FOLDER
        .captures(path)
        .map_or(".", |c| c.get(1).map_or(".", |m| m.as_str()))
}

/// Compute the path of `file` relative to `folder`.
///
/// Both arguments must be absolute, or both relative to the same base.
/// Empty and `.` segments are discarded before comparison, so
/// `"/a//b/./c.tex"` and `"/a/b/c.tex"` are equivalent inputs. The
/// result joins segments with `/` regardless of the input separator.
///
/// # Examples
///
/// ```
/// use tmc_header::path::relative_path;
///
/// assert_eq!(relative_path("/a/b/c.tex", "/a/b/"), "c.tex");
/// assert_eq!(relative_path("/a/x.tex", "/a/b/"), "../x.tex");
/// ```
#[must_use]
pub fn relative_path(file: &str, folder: &str) -> String {
    let file_segs: Vec<&str> = file
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();
    let folder_segs: Vec<&str> = folder
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();

    let common = file_segs
        .iter()
        .zip(&folder_segs)
        .take_while(|(a, b)| a == b)
        .count();

    let ups = "../".repeat(folder_segs.len() - common);
    format!("{ups}{}", file_segs[common..].join("/"))
}
