//! Magic comment engine for TeX document headers.
//!
//! TeX editors configure per-document behavior through *magic
//! comments*: structured key/value lines such as
//! `% !TeX program = XeLaTeX` in the leading bytes of a document.
//! This crate locates and parses the four built-in directive kinds,
//! maintains a typed model of their values with display and storage
//! normalization, and rewrites the header region with a minimal,
//! position-stable set of edits.
//!
//! # Architecture
//!
//! - [`read_header`] scans a byte-bounded prefix of the document and
//!   populates a [`DirectiveSet`]
//! - [`Directive`] values are edited through display transforms and
//!   candidate lists (see [`Directive::candidates`])
//! - [`write_header`] plans replace-range edits against the original
//!   match positions and applies them in one sweep, skipping edits
//!   that would not change the text
//!
//! Host collaborators are abstracted behind [`DocumentEditor`] and
//! [`HostEnvironment`]; mocks are available behind the `mock` feature
//! flag.
//!
//! # Example
//!
//! ```
//! use tmc_header::{read_header, DirectiveKind, PEEK_LENGTH};
//!
//! let text = "% !TeX program = XeLaTeX\n\\documentclass{article}\n";
//! let set = read_header(text, PEEK_LENGTH);
//! assert_eq!(set.get(DirectiveKind::Program).value(), "XeLaTeX");
//! ```

mod directive;
mod host;
pub mod path;
mod reader;
mod registry;
mod writer;

pub use directive::{CandidateContext, Directive, DirectiveKind, Span};
pub use host::{DocumentEditor, HostEnvironment, NoEnvironment};
#[cfg(any(test, feature = "mock"))]
pub use host::{MockDocument, MockEnvironment};
pub use reader::{read_header, PEEK_LENGTH};
pub use registry::DirectiveSet;
pub use writer::write_header;
