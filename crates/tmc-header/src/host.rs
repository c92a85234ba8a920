//! Host editor collaborators.
//!
//! The engine performs no I/O itself: document text and edits go
//! through [`DocumentEditor`], and candidate lists query the host
//! through [`HostEnvironment`]. This enables:
//!
//! - **Unit testing** against in-memory mocks (behind the `mock`
//!   feature flag)
//! - **Host flexibility** (editor scripting API, files on disk)
//!
//! All environment queries are optional; a host that answers `None`
//! degrades to the engine's static fallback lists.

/// Editing surface for a single document.
///
/// Edits follow the host editor's select-then-replace model: the
/// writer selects a byte range and replaces the selection. The writer
/// assumes it is the sole mutator between the start and end of a write
/// pass; interleaved edits from another actor invalidate its offsets.
pub trait DocumentEditor {
    /// Full document text.
    fn text(&self) -> &str;

    /// File name of the document, as the host reports it. May use
    /// either separator style.
    fn file_name(&self) -> &str;

    /// Move the selection to the byte range `[start, start + len)`.
    fn select_range(&mut self, start: usize, len: usize);

    /// Text currently covered by the selection.
    fn selection(&self) -> &str;

    /// Replace the selected range with `text`, leaving the selection
    /// covering the inserted text.
    fn replace_selection(&mut self, text: &str);
}

/// Optional host environment queries.
///
/// Every method has a degraded default so a minimal host can implement
/// the trait with an empty body.
pub trait HostEnvironment {
    /// Names of the available typesetting engines, or `None` when the
    /// host cannot enumerate them.
    fn engines(&self) -> Option<Vec<String>> {
        None
    }

    /// Paths of the available dictionary files, or `None` when the
    /// host cannot enumerate them. May contain duplicates when several
    /// aliases point at the same file.
    fn dictionaries(&self) -> Option<Vec<String>> {
        None
    }

    /// File paths of the currently open documents.
    fn open_documents(&self) -> Vec<String> {
        Vec::new()
    }

    /// Ask the user to pick a file, returning its absolute path, or
    /// `None` when the dialog is dismissed.
    fn choose_file(&self) -> Option<String> {
        None
    }
}

/// A host with no environment support; every query degrades to the
/// static fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEnvironment;

impl HostEnvironment for NoEnvironment {}

/// In-memory document for testing.
///
/// # Example
///
/// ```ignore
/// use tmc_header::{DocumentEditor, MockDocument};
///
/// let mut doc = MockDocument::new("% !TeX program = pdfLaTeX\n")
///     .with_file_name("/home/user/main.tex");
/// doc.select_range(0, 6);
/// assert_eq!(doc.selection(), "% !TeX");
/// ```
#[cfg(any(test, feature = "mock"))]
#[derive(Clone, Debug)]
pub struct MockDocument {
    text: String,
    file_name: String,
    sel_start: usize,
    sel_len: usize,
}

#[cfg(any(test, feature = "mock"))]
impl MockDocument {
    /// Create a document with the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            file_name: "untitled.tex".to_owned(),
            sel_start: 0,
            sel_len: 0,
        }
    }

    /// Set the reported file name.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }
}

#[cfg(any(test, feature = "mock"))]
impl DocumentEditor for MockDocument {
    fn text(&self) -> &str {
        &self.text
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn select_range(&mut self, start: usize, len: usize) {
        self.sel_start = start.min(self.text.len());
        self.sel_len = len.min(self.text.len() - self.sel_start);
    }

    fn selection(&self) -> &str {
        &self.text[self.sel_start..self.sel_start + self.sel_len]
    }

    fn replace_selection(&mut self, text: &str) {
        let range = self.sel_start..self.sel_start + self.sel_len;
        self.text.replace_range(range, text);
        self.sel_len = text.len();
    }
}

/// Configurable host environment for testing.
///
/// Builder methods mirror the optional queries; anything left unset
/// answers the degraded default.
#[cfg(any(test, feature = "mock"))]
#[derive(Clone, Debug, Default)]
pub struct MockEnvironment {
    engines: Option<Vec<String>>,
    dictionaries: Option<Vec<String>>,
    open_documents: Vec<String>,
    chosen_file: Option<String>,
}

#[cfg(any(test, feature = "mock"))]
impl MockEnvironment {
    /// Create an environment with no query support.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer engine enumeration with the given names.
    #[must_use]
    pub fn with_engines<I, S>(mut self, engines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.engines = Some(engines.into_iter().map(Into::into).collect());
        self
    }

    /// Answer dictionary enumeration with the given file paths.
    #[must_use]
    pub fn with_dictionaries<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dictionaries = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    /// Add an open document path.
    #[must_use]
    pub fn with_open_document(mut self, path: impl Into<String>) -> Self {
        self.open_documents.push(path.into());
        self
    }

    /// Answer the file browser with the given path.
    #[must_use]
    pub fn with_chosen_file(mut self, path: impl Into<String>) -> Self {
        self.chosen_file = Some(path.into());
        self
    }
}

#[cfg(any(test, feature = "mock"))]
impl HostEnvironment for MockEnvironment {
    fn engines(&self) -> Option<Vec<String>> {
        self.engines.clone()
    }

    fn dictionaries(&self) -> Option<Vec<String>> {
        self.dictionaries.clone()
    }

    fn open_documents(&self) -> Vec<String> {
        self.open_documents.clone()
    }

    fn choose_file(&self) -> Option<String> {
        self.chosen_file.clone()
    }
}
