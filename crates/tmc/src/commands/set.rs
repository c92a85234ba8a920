//! `set` command: assign magic comment values in a document.

use std::path::PathBuf;

use clap::Args;
use tmc_header::{read_header, write_header, DirectiveKind, DocumentEditor, PEEK_LENGTH};

use crate::document::FileDocument;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `set` command.
#[derive(Args)]
pub(crate) struct SetArgs {
    /// TeX file to modify.
    pub file: PathBuf,

    /// Set the document encoding.
    #[arg(long)]
    pub encoding: Option<String>,

    /// Set the typesetting engine.
    #[arg(long)]
    pub program: Option<String>,

    /// Set the root document (path relative to the file's folder).
    #[arg(long)]
    pub root: Option<String>,

    /// Set the spellcheck dictionary.
    #[arg(long)]
    pub spellcheck: Option<String>,

    /// Serialize with legacy key spellings (TS-program).
    #[arg(long, conflicts_with = "modern")]
    pub legacy: bool,

    /// Force modern key spellings even when the header used legacy ones.
    #[arg(long)]
    pub modern: bool,
}

impl SetArgs {
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        let assignments = [
            (DirectiveKind::Encoding, &self.encoding),
            (DirectiveKind::Program, &self.program),
            (DirectiveKind::Root, &self.root),
            (DirectiveKind::Spellcheck, &self.spellcheck),
        ];
        if assignments.iter().all(|(_, v)| v.is_none()) && !self.legacy && !self.modern {
            return Err(CliError::Validation(
                "nothing to do: pass at least one of --encoding, --program, --root, \
                 --spellcheck, --legacy, --modern"
                    .to_owned(),
            ));
        }

        let mut doc = FileDocument::open(&self.file)?;
        let mut set = read_header(doc.text(), PEEK_LENGTH);
        for (kind, value) in assignments {
            if let Some(value) = value {
                set.set_value(kind, value.trim());
            }
        }
        if self.legacy {
            set.set_legacy_mode(true);
        } else if self.modern {
            set.set_legacy_mode(false);
        }

        write_header(&mut doc, &set);
        doc.save()?;
        output.success(&format!("updated {}", self.file.display()));
        Ok(())
    }
}
