//! Magic comment directives and their per-kind behavior.
//!
//! A magic comment is a structured key/value annotation embedded as a
//! specially formatted comment line near the top of a TeX document:
//!
//! ```text
//! % !TeX encoding = UTF-8
//! % !TeX program = pdfLaTeX
//! ```
//!
//! The engine knows exactly four directive kinds ([`DirectiveKind`]),
//! modeled as a closed enum. Each kind owns its match pattern, its
//! canonical and legacy key spellings, a display transform for the
//! editing UI, and a candidate-list generator. The `program` directive
//! additionally recognizes the deprecated `TS-program` spelling; a
//! match through that spelling switches the whole session into legacy
//! serialization mode (see [`DirectiveSet`](crate::DirectiveSet)).

mod encoding;
mod program;
mod root;
mod spellcheck;

use regex::{Captures, Regex};

use crate::host::HostEnvironment;

/// Location of a matched directive inside the scanned document text.
///
/// `index` and `len` are byte offsets covering the full matched line,
/// not just the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the match start.
    pub index: usize,
    /// Byte length of the full matched text.
    pub len: usize,
}

/// The four built-in magic comment kinds, in fixed registry order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `% !TeX encoding = <name>`
    Encoding,
    /// `% !TeX program = <engine>` (legacy: `TS-program`)
    Program,
    /// `% !TeX root = <relative path>`
    Root,
    /// `% !TeX spellcheck = <dictionary>`
    Spellcheck,
}

impl DirectiveKind {
    /// All kinds in registry order.
    pub const ALL: [Self; 4] = [
        Self::Encoding,
        Self::Program,
        Self::Root,
        Self::Spellcheck,
    ];

    /// Canonical key spelling.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Encoding => "encoding",
            Self::Program => "program",
            Self::Root => "root",
            Self::Spellcheck => "spellcheck",
        }
    }

    /// Key spelling used when serializing under legacy compatibility
    /// mode. Only `program` has a distinct legacy spelling.
    #[must_use]
    pub fn legacy_key(self) -> &'static str {
        match self {
            Self::Program => "TS-program",
            other => other.key(),
        }
    }

    /// Look up a kind by key, case-insensitively.
    ///
    /// Accepts the legacy `TS-program` spelling for [`Self::Program`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "encoding" => Some(Self::Encoding),
            "program" | "ts-program" => Some(Self::Program),
            "root" => Some(Self::Root),
            "spellcheck" => Some(Self::Spellcheck),
            _ => None,
        }
    }

    pub(crate) fn pattern(self) -> &'static Regex {
        match self {
            Self::Encoding => encoding::pattern(),
            Self::Program => program::pattern(),
            Self::Root => root::pattern(),
            Self::Spellcheck => spellcheck::pattern(),
        }
    }
}

/// Context supplied to candidate-list generation.
///
/// Bundles the host environment handle, the edited document's file
/// name, and the session's legacy serialization flag.
pub struct CandidateContext<'a> {
    /// Host environment queries (engines, dictionaries, open documents).
    pub env: &'a dyn HostEnvironment,
    /// File name of the document being edited, as reported by the host.
    pub file_name: &'a str,
    /// Whether the session serializes with legacy key spellings.
    pub legacy_mode: bool,
}

/// One magic comment directive: its kind, current value, and, when the
/// directive was found in the document, the matched span.
///
/// An empty `value` means "unset": the directive is absent from the
/// document, or is to be removed on the next write pass. `span` is
/// `Some` exactly when the directive matched during the read pass; a
/// directive without a span that is given a value will be newly
/// inserted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    kind: DirectiveKind,
    value: String,
    legacy_syntax: bool,
    span: Option<Span>,
}

impl Directive {
    pub(crate) fn new(kind: DirectiveKind) -> Self {
        Self {
            kind,
            value: String::new(),
            legacy_syntax: false,
            span: None,
        }
    }

    /// The directive's kind.
    #[must_use]
    pub fn kind(&self) -> DirectiveKind {
        self.kind
    }

    /// The raw stored value. Empty means unset.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the raw value. An empty value marks the directive for
    /// removal on the next write pass.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Whether the document match used a deprecated key spelling.
    #[must_use]
    pub fn legacy_syntax(&self) -> bool {
        self.legacy_syntax
    }

    /// The matched location in the scanned text, if any.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Populate span, value, and the legacy-syntax flag from a pattern
    /// match against the document header.
    pub(crate) fn parse_match(&mut self, caps: &Captures<'_>) {
        let Some(whole) = caps.get(0) else { return };
        self.span = Some(Span {
            index: whole.start(),
            len: whole.len(),
        });
        match self.kind {
            DirectiveKind::Program => {
                self.legacy_syntax = caps.get(1).is_some();
                self.value = caps.get(2).map_or("", |m| m.as_str()).trim().to_owned();
            }
            _ => {
                self.value = caps.get(1).map_or("", |m| m.as_str()).trim().to_owned();
            }
        }
    }

    /// The value as presented in the editing UI.
    ///
    /// For `encoding`, resolves the stored name against the encoding
    /// table and returns the alias-annotated entry; every other kind
    /// shows the raw value.
    #[must_use]
    pub fn display_value(&self, legacy_mode: bool) -> String {
        match self.kind {
            DirectiveKind::Encoding => encoding::display_value(&self.value, legacy_mode),
            _ => self.value.clone(),
        }
    }

    /// Store an edited display value, undoing the display transform.
    ///
    /// For `encoding`, strips a trailing parenthesized alias group;
    /// every other kind stores the text as-is.
    pub fn set_display_value(&mut self, text: &str) {
        self.value = match self.kind {
            DirectiveKind::Encoding => encoding::from_display_value(text),
            _ => text.to_owned(),
        };
    }

    /// Serialize the directive as a full comment line, including the
    /// trailing newline.
    ///
    /// `legacy_mode` selects the deprecated key spelling where one
    /// exists. The `root` value is normalized to forward slashes, and
    /// the `encoding` value is canonicalized through a display
    /// round-trip so stored aliases serialize under their table name.
    #[must_use]
    pub fn comment_line(&self, legacy_mode: bool) -> String {
        let key = if legacy_mode {
            self.kind.legacy_key()
        } else {
            self.kind.key()
        };
        let value = match self.kind {
            DirectiveKind::Encoding => {
                encoding::from_display_value(&encoding::display_value(&self.value, legacy_mode))
            }
            DirectiveKind::Root => self.value.replace('\\', "/"),
            _ => self.value.clone(),
        };
        format!("% !TeX {key} = {value}\n")
    }

    /// Ordered value suggestions for the editing UI.
    ///
    /// Sourced from a static table (`encoding`), the host environment
    /// (`program`, `spellcheck`), or the set of other open documents
    /// (`root`), degrading to static fallback lists when the host
    /// cannot answer. The current value is surfaced at the front when
    /// it is not already present.
    #[must_use]
    pub fn candidates(&self, ctx: &CandidateContext<'_>) -> Vec<String> {
        match self.kind {
            DirectiveKind::Encoding => encoding::candidates(&self.value, ctx.legacy_mode),
            DirectiveKind::Program => program::candidates(&self.value, ctx.env),
            DirectiveKind::Root => root::candidates(&self.value, ctx),
            DirectiveKind::Spellcheck => spellcheck::candidates(&self.value, ctx.env),
        }
    }

    /// Whether the directive supports a user-invoked "provide value"
    /// action (only `root`, which opens a file browser).
    #[must_use]
    pub fn has_provide_value(&self) -> bool {
        matches!(self.kind, DirectiveKind::Root)
    }

    /// Run the "provide value" action: ask the host for a file and
    /// convert it to a path relative to the document's folder.
    ///
    /// Returns `None` for kinds without the action, or when the user
    /// dismisses the browser.
    #[must_use]
    pub fn provide_value(&self, ctx: &CandidateContext<'_>) -> Option<String> {
        match self.kind {
            DirectiveKind::Root => root::provide_value(ctx),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn matched(kind: DirectiveKind, header: &str) -> Directive {
        let mut d = Directive::new(kind);
        let caps = kind
            .pattern()
            .captures(header)
            .expect("pattern should match");
        d.parse_match(&caps);
        d
    }

    #[test]
    fn test_encoding_match() {
        let d = matched(DirectiveKind::Encoding, "% !TeX encoding = UTF-8\n");
        assert_eq!(d.value(), "UTF-8");
        assert_eq!(d.span(), Some(Span { index: 0, len: 24 }));
        assert!(!d.legacy_syntax());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let d = matched(DirectiveKind::Encoding, "% !tex ENCODING = latin1\n");
        assert_eq!(d.value(), "latin1");
    }

    #[test]
    fn test_match_tolerates_spacing() {
        let d = matched(
            DirectiveKind::Spellcheck,
            "%!TEX  spellcheck=  en_US  \n",
        );
        assert_eq!(d.value(), "en_US");
    }

    #[test]
    fn test_match_requires_newline() {
        assert!(DirectiveKind::Encoding
            .pattern()
            .captures("% !TeX encoding = UTF-8")
            .is_none());
    }

    #[test]
    fn test_program_modern_spelling() {
        let d = matched(DirectiveKind::Program, "% !TeX program = pdfLaTeX\n");
        assert_eq!(d.value(), "pdfLaTeX");
        assert!(!d.legacy_syntax());
    }

    #[test]
    fn test_program_legacy_spelling() {
        let d = matched(DirectiveKind::Program, "% !TeX TS-program = xelatex\n");
        assert_eq!(d.value(), "xelatex");
        assert!(d.legacy_syntax());
    }

    #[test]
    fn test_match_offset_into_header() {
        let header = "\\documentclass{article}\n% !TeX root = ../main.tex\n";
        let d = matched(DirectiveKind::Root, header);
        let span = d.span().unwrap();
        assert_eq!(span.index, 24);
        assert_eq!(&header[span.index..span.index + span.len], "% !TeX root = ../main.tex\n");
    }

    #[test]
    fn test_comment_line_modern() {
        let mut d = Directive::new(DirectiveKind::Program);
        d.set_value("LuaLaTeX");
        assert_eq!(d.comment_line(false), "% !TeX program = LuaLaTeX\n");
    }

    #[test]
    fn test_comment_line_legacy_program_key() {
        let mut d = Directive::new(DirectiveKind::Program);
        d.set_value("pdfLaTeX");
        assert_eq!(d.comment_line(true), "% !TeX TS-program = pdfLaTeX\n");
    }

    #[test]
    fn test_comment_line_legacy_leaves_other_keys() {
        let mut d = Directive::new(DirectiveKind::Spellcheck);
        d.set_value("en_US");
        assert_eq!(d.comment_line(true), "% !TeX spellcheck = en_US\n");
    }

    #[test]
    fn test_root_comment_line_normalizes_separators() {
        let mut d = Directive::new(DirectiveKind::Root);
        d.set_value(r"..\thesis\main.tex");
        assert_eq!(d.comment_line(false), "% !TeX root = ../thesis/main.tex\n");
    }

    #[test]
    fn test_from_key() {
        assert_eq!(DirectiveKind::from_key("Encoding"), Some(DirectiveKind::Encoding));
        assert_eq!(DirectiveKind::from_key("TS-Program"), Some(DirectiveKind::Program));
        assert_eq!(DirectiveKind::from_key("margin"), None);
    }
}
