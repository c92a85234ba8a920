//! `show` command: print the magic comments found in a document.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tmc_header::{read_header, DirectiveSet, DocumentEditor, PEEK_LENGTH};

use crate::document::FileDocument;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `show` command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// TeX file to inspect.
    pub file: PathBuf,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct HeaderReport {
    legacy_mode: bool,
    directives: Vec<DirectiveReport>,
}

#[derive(Serialize)]
struct DirectiveReport {
    key: &'static str,
    value: String,
    found: bool,
    legacy_syntax: bool,
}

impl HeaderReport {
    fn new(set: &DirectiveSet) -> Self {
        Self {
            legacy_mode: set.legacy_mode(),
            directives: set
                .iter()
                .map(|d| DirectiveReport {
                    key: d.kind().key(),
                    value: d.value().to_owned(),
                    found: d.span().is_some(),
                    legacy_syntax: d.legacy_syntax(),
                })
                .collect(),
        }
    }
}

impl ShowArgs {
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        let doc = FileDocument::open(&self.file)?;
        let set = read_header(doc.text(), PEEK_LENGTH);
        for line in self.render(&set)? {
            output.data(&line);
        }
        Ok(())
    }

    fn render(&self, set: &DirectiveSet) -> Result<Vec<String>, CliError> {
        if self.json {
            return Ok(vec![serde_json::to_string_pretty(&HeaderReport::new(set))?]);
        }

        let lines: Vec<String> = set
            .iter()
            .filter(|d| d.span().is_some())
            .map(|directive| {
                let legacy = if directive.legacy_syntax() {
                    " (legacy syntax)"
                } else {
                    ""
                };
                format!(
                    "{} = {}{legacy}",
                    directive.kind().key(),
                    directive.value()
                )
            })
            .collect();
        if lines.is_empty() {
            return Ok(vec!["no magic comments found".to_owned()]);
        }
        Ok(lines)
    }
}
