//! File-backed document editor.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tmc_header::DocumentEditor;

/// A [`DocumentEditor`] over an in-memory buffer loaded from disk.
///
/// Edits mutate the buffer; nothing touches the file until
/// [`save`](Self::save).
#[derive(Debug)]
pub(crate) struct FileDocument {
    path: PathBuf,
    name: String,
    text: String,
    sel_start: usize,
    sel_len: usize,
}

impl FileDocument {
    /// Load the file at `path`.
    pub(crate) fn open(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            name: path.to_string_lossy().into_owned(),
            text,
            sel_start: 0,
            sel_len: 0,
        })
    }

    /// Write the buffer back to the file.
    pub(crate) fn save(&self) -> io::Result<()> {
        tracing::debug!(path = %self.path.display(), bytes = self.text.len(), "saving document");
        fs::write(&self.path, &self.text)
    }
}

impl DocumentEditor for FileDocument {
    fn text(&self) -> &str {
        &self.text
    }

    fn file_name(&self) -> &str {
        &self.name
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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_open_edit_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.tex");
        fs::write(&path, "hello world\n").unwrap();

        let mut doc = FileDocument::open(&path).unwrap();
        doc.select_range(6, 5);
        assert_eq!(doc.selection(), "world");
        doc.replace_selection("there");
        doc.save().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello there\n");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(FileDocument::open(Path::new("/no/such/file.tex")).is_err());
    }
}
