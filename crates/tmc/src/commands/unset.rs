//! `unset` command: remove magic comments from a document.

use std::path::PathBuf;

use clap::Args;
use tmc_header::{read_header, write_header, DirectiveKind, DocumentEditor, PEEK_LENGTH};

use crate::document::FileDocument;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `unset` command.
#[derive(Args)]
pub(crate) struct UnsetArgs {
    /// TeX file to modify.
    pub file: PathBuf,

    /// Directive keys to remove (encoding, program, root, spellcheck).
    #[arg(required = true)]
    pub keys: Vec<String>,
}

impl UnsetArgs {
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        let mut kinds = Vec::new();
        for key in &self.keys {
            let kind = DirectiveKind::from_key(key)
                .ok_or_else(|| CliError::Validation(format!("unknown directive key: {key}")))?;
            kinds.push(kind);
        }

        let mut doc = FileDocument::open(&self.file)?;
        let mut set = read_header(doc.text(), PEEK_LENGTH);
        for kind in kinds {
            set.set_value(kind, "");
        }
        write_header(&mut doc, &set);
        doc.save()?;
        output.success(&format!("updated {}", self.file.display()));
        Ok(())
    }
}
