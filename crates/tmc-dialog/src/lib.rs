//! Presentation adapter for the magic comment engine.
//!
//! The editing UI shows one row per directive — a checkbox, an
//! editable combo box with value candidates, and for some directives a
//! browse button — plus a global legacy-compatibility toggle. This
//! crate specifies that surface as data ([`DialogModel`],
//! [`DialogOutcome`]) and a backend trait ([`DirectiveDialog`]), and
//! wires the whole session in [`edit_magic_comments`]: read the
//! header, present it, apply the user's edits, write the header back.
//!
//! Widget rendering lives with the host; a backend only has to map the
//! model onto its widgets and hand back the outcome. Cancelling the
//! dialog is not an error: the registry and the document are left
//! untouched, and no edits are even computed.

use tmc_header::{
    read_header, write_header, CandidateContext, DirectiveKind, DocumentEditor, HostEnvironment,
    PEEK_LENGTH,
};

/// One directive row as presented to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogField {
    /// Which directive this row edits.
    pub kind: DirectiveKind,
    /// Initial checkbox state: set when the directive has a value.
    pub enabled: bool,
    /// Initial combo box text (the display value).
    pub text: String,
    /// Ordered value suggestions for the combo box.
    pub candidates: Vec<String>,
    /// Whether the row has a browse button ("provide value" action).
    pub can_browse: bool,
}

/// Everything a backend needs to render the dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogModel {
    /// One field per directive, in registry order.
    pub fields: Vec<DialogField>,
    /// Initial state of the legacy-compatibility toggle.
    pub legacy_mode: bool,
}

/// The user's decision for one directive row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEdit {
    /// Which directive this edit applies to.
    pub kind: DirectiveKind,
    /// Final checkbox state; unchecked removes the directive.
    pub enabled: bool,
    /// Final combo box text (a display value).
    pub text: String,
}

/// The confirmed dialog state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogOutcome {
    /// At most one edit per directive. A directive with no entry is
    /// left as it was, so a backend may report only the rows the user
    /// touched.
    pub fields: Vec<FieldEdit>,
    /// Final state of the legacy-compatibility toggle.
    pub legacy_mode: bool,
}

/// Callback producing a value for a field's browse action.
pub type BrowseFn<'a> = dyn FnMut(DirectiveKind) -> Option<String> + 'a;

/// A dialog backend.
///
/// `run` blocks until the user confirms or cancels. `Ok(None)` is a
/// cancel; errors are reserved for failures to construct or present
/// the dialog itself. The `browse` callback services a row's browse
/// button, synchronously producing a value to fill into the field.
pub trait DirectiveDialog {
    fn run(
        &mut self,
        model: DialogModel,
        browse: &mut BrowseFn<'_>,
    ) -> Result<Option<DialogOutcome>, DialogError>;
}

/// Dialog backend failures.
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    /// The backend could not build or present its UI.
    #[error("cannot create the editor dialog: {0}")]
    Backend(String),
}

/// Run one magic comment editing session against `doc`.
///
/// Reads the header, presents the directives through `dialog`, and on
/// confirmation writes the edited values back with minimal edits.
/// Returns `Ok(true)` when the user confirmed (even if nothing
/// changed) and `Ok(false)` on cancel, in which case the document is
/// untouched.
pub fn edit_magic_comments(
    doc: &mut dyn DocumentEditor,
    env: &dyn HostEnvironment,
    dialog: &mut dyn DirectiveDialog,
) -> Result<bool, DialogError> {
    let text = doc.text().to_owned();
    let file_name = doc.file_name().to_owned();
    let mut set = read_header(&text, PEEK_LENGTH);

    let ctx = CandidateContext {
        env,
        file_name: &file_name,
        legacy_mode: set.legacy_mode(),
    };
    let model = DialogModel {
        fields: set
            .iter()
            .map(|d| DialogField {
                kind: d.kind(),
                enabled: !d.value().is_empty(),
                text: d.display_value(set.legacy_mode()),
                candidates: d.candidates(&ctx),
                can_browse: d.has_provide_value(),
            })
            .collect(),
        legacy_mode: set.legacy_mode(),
    };

    let mut browse = |kind: DirectiveKind| set.get(kind).provide_value(&ctx);
    let Some(outcome) = dialog.run(model, &mut browse)? else {
        tracing::debug!("magic comment dialog cancelled");
        return Ok(false);
    };

    set.set_legacy_mode(outcome.legacy_mode);
    for edit in outcome.fields {
        let directive = set.get_mut(edit.kind);
        if edit.enabled {
            directive.set_display_value(edit.text.trim());
        } else {
            directive.set_value("");
        }
    }
    write_header(doc, &set);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tmc_header::{MockDocument, MockEnvironment};

    use super::*;

    /// Backend that records the model it was shown and answers with a
    /// preset outcome (or a cancel when none is set).
    #[derive(Default)]
    struct ScriptedDialog {
        outcome: Option<DialogOutcome>,
        seen: Option<DialogModel>,
    }

    impl DirectiveDialog for ScriptedDialog {
        fn run(
            &mut self,
            model: DialogModel,
            _browse: &mut BrowseFn<'_>,
        ) -> Result<Option<DialogOutcome>, DialogError> {
            self.seen = Some(model);
            Ok(self.outcome.take())
        }
    }

    fn confirm(fields: Vec<FieldEdit>, legacy_mode: bool) -> ScriptedDialog {
        ScriptedDialog {
            outcome: Some(DialogOutcome {
                fields,
                legacy_mode,
            }),
            seen: None,
        }
    }

    fn edit(kind: DirectiveKind, text: &str) -> FieldEdit {
        FieldEdit {
            kind,
            enabled: true,
            text: text.to_owned(),
        }
    }

    #[test]
    fn test_cancel_leaves_document_untouched() {
        let text = "% !TeX program = pdfLaTeX\nbody\n";
        let mut doc = MockDocument::new(text);
        let mut dialog = ScriptedDialog::default();

        let confirmed =
            edit_magic_comments(&mut doc, &MockEnvironment::new(), &mut dialog).unwrap();
        assert!(!confirmed);
        assert_eq!(doc.text(), text);
    }

    #[test]
    fn test_confirm_writes_edits() {
        let mut doc = MockDocument::new("% !TeX program = pdfLaTeX\nbody\n");
        let mut dialog = confirm(vec![edit(DirectiveKind::Program, "XeLaTeX")], false);

        let confirmed =
            edit_magic_comments(&mut doc, &MockEnvironment::new(), &mut dialog).unwrap();
        assert!(confirmed);
        assert_eq!(doc.text(), "% !TeX program = XeLaTeX\nbody\n");
    }

    #[test]
    fn test_unchecked_field_removes_line() {
        let mut doc = MockDocument::new("% !TeX spellcheck = en_US\nbody\n");
        let mut dialog = confirm(
            vec![FieldEdit {
                kind: DirectiveKind::Spellcheck,
                enabled: false,
                text: "en_US".to_owned(),
            }],
            false,
        );

        edit_magic_comments(&mut doc, &MockEnvironment::new(), &mut dialog).unwrap();
        assert_eq!(doc.text(), "body\n");
    }

    #[test]
    fn test_omitted_field_is_left_unchanged() {
        let mut doc =
            MockDocument::new("% !TeX encoding = UTF-8\n% !TeX program = pdfLaTeX\nbody\n");
        let mut dialog = confirm(vec![edit(DirectiveKind::Program, "LuaLaTeX")], false);

        edit_magic_comments(&mut doc, &MockEnvironment::new(), &mut dialog).unwrap();
        assert_eq!(
            doc.text(),
            "% !TeX encoding = UTF-8\n% !TeX program = LuaLaTeX\nbody\n"
        );
    }

    #[test]
    fn test_edited_text_is_trimmed() {
        let mut doc = MockDocument::new("body\n");
        let mut dialog = confirm(vec![edit(DirectiveKind::Program, "  LuaLaTeX  ")], false);

        edit_magic_comments(&mut doc, &MockEnvironment::new(), &mut dialog).unwrap();
        assert_eq!(doc.text(), "% !TeX program = LuaLaTeX\nbody\n");
    }

    #[test]
    fn test_encoding_display_value_round_trips() {
        let mut doc = MockDocument::new("% !TeX encoding = utf-8\nbody\n");
        let mut dialog = confirm(
            vec![edit(DirectiveKind::Encoding, "UTF-8 (UTF-8 Unicode, utf-8)")],
            false,
        );

        edit_magic_comments(&mut doc, &MockEnvironment::new(), &mut dialog).unwrap();
        assert_eq!(doc.text(), "% !TeX encoding = UTF-8\nbody\n");
    }

    #[test]
    fn test_legacy_toggle_switches_serialization() {
        let mut doc = MockDocument::new("% !TeX program = pdfLaTeX\nbody\n");
        let mut dialog = confirm(vec![edit(DirectiveKind::Program, "pdfLaTeX")], true);

        edit_magic_comments(&mut doc, &MockEnvironment::new(), &mut dialog).unwrap();
        assert_eq!(doc.text(), "% !TeX TS-program = pdfLaTeX\nbody\n");
    }

    #[test]
    fn test_model_reflects_header() {
        let mut doc = MockDocument::new("% !TeX TS-program = pdflatex\nbody\n")
            .with_file_name("/a/doc.tex");
        let env = MockEnvironment::new().with_open_document("/a/main.tex");
        let mut dialog = ScriptedDialog::default();

        edit_magic_comments(&mut doc, &env, &mut dialog).unwrap();
        let model = dialog.seen.expect("dialog was shown");

        assert!(model.legacy_mode);
        assert_eq!(model.fields.len(), 4);

        let program = &model.fields[DirectiveKind::Program as usize];
        assert!(program.enabled);
        assert_eq!(program.text, "pdflatex");
        assert!(!program.can_browse);

        let root = &model.fields[DirectiveKind::Root as usize];
        assert!(!root.enabled);
        assert!(root.can_browse);
        assert_eq!(root.candidates, vec!["main.tex"]);

        let encoding = &model.fields[DirectiveKind::Encoding as usize];
        assert!(!encoding.enabled);
        assert_eq!(encoding.text, "");
        // Legacy mode reorders the alias annotations.
        assert_eq!(encoding.candidates[0], "UTF-8 Unicode (UTF-8, utf-8)");
    }

    #[test]
    fn test_browse_fills_field() {
        /// Backend that presses the browse button on the root row and
        /// confirms with whatever it produced.
        struct BrowsingDialog;

        impl DirectiveDialog for BrowsingDialog {
            fn run(
                &mut self,
                _model: DialogModel,
                browse: &mut BrowseFn<'_>,
            ) -> Result<Option<DialogOutcome>, DialogError> {
                let value = browse(DirectiveKind::Root).expect("browse produced a value");
                Ok(Some(DialogOutcome {
                    fields: vec![FieldEdit {
                        kind: DirectiveKind::Root,
                        enabled: true,
                        text: value,
                    }],
                    legacy_mode: false,
                }))
            }
        }

        let mut doc = MockDocument::new("body\n").with_file_name("/a/b/doc.tex");
        let env = MockEnvironment::new().with_chosen_file("/a/main.tex");

        edit_magic_comments(&mut doc, &env, &mut BrowsingDialog).unwrap();
        assert_eq!(doc.text(), "% !TeX root = ../main.tex\nbody\n");
    }

    #[test]
    fn test_backend_error_propagates() {
        struct FailingDialog;

        impl DirectiveDialog for FailingDialog {
            fn run(
                &mut self,
                _model: DialogModel,
                _browse: &mut BrowseFn<'_>,
            ) -> Result<Option<DialogOutcome>, DialogError> {
                Err(DialogError::Backend("no display".to_owned()))
            }
        }

        let mut doc = MockDocument::new("body\n");
        let result = edit_magic_comments(&mut doc, &MockEnvironment::new(), &mut FailingDialog);
        assert!(result.is_err());
        assert_eq!(doc.text(), "body\n");
    }

    #[test]
    fn test_confirm_without_changes_is_noop() {
        let text = "% !TeX encoding = UTF-8\n% !TeX program = pdfLaTeX\nbody\n";
        let mut doc = MockDocument::new(text);
        let mut dialog = confirm(
            vec![
                edit(DirectiveKind::Encoding, "UTF-8 (UTF-8 Unicode, utf-8)"),
                edit(DirectiveKind::Program, "pdfLaTeX"),
            ],
            false,
        );

        let confirmed =
            edit_magic_comments(&mut doc, &MockEnvironment::new(), &mut dialog).unwrap();
        assert!(confirmed);
        assert_eq!(doc.text(), text);
    }
}
