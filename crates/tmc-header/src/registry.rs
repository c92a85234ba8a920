//! The directive registry: the fixed set of known magic comments plus
//! the session's compatibility flag.

use crate::directive::{Directive, DirectiveKind};

/// The fixed, ordered set of the four known directives, together with
/// the session-scoped legacy serialization flag.
///
/// Constructed once per editing session, populated by the read pass,
/// mutated by the editing UI, and consumed by the write pass. The set
/// never grows or shrinks.
///
/// The legacy flag (compatibility with the older tool's `TS-program`
/// naming and alias ordering) is shared by every directive while
/// serializing, so it lives here rather than on any one directive. It
/// is switched on automatically when the read pass finds a
/// legacy-syntax match, and can be toggled explicitly by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectiveSet {
    directives: [Directive; 4],
    legacy_mode: bool,
}

impl Default for DirectiveSet {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveSet {
    /// Create a set with all four directives unset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            directives: DirectiveKind::ALL.map(Directive::new),
            legacy_mode: false,
        }
    }

    /// The directive for `kind`.
    #[must_use]
    pub fn get(&self, kind: DirectiveKind) -> &Directive {
        &self.directives[kind as usize]
    }

    /// Mutable access to the directive for `kind`.
    pub fn get_mut(&mut self, kind: DirectiveKind) -> &mut Directive {
        &mut self.directives[kind as usize]
    }

    /// Shorthand for assigning a raw value.
    pub fn set_value(&mut self, kind: DirectiveKind, value: impl Into<String>) {
        self.get_mut(kind).set_value(value);
    }

    /// Iterate the directives in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Directive> {
        self.directives.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Directive> {
        self.directives.iter_mut()
    }

    /// Whether directives serialize with legacy key spellings.
    #[must_use]
    pub fn legacy_mode(&self) -> bool {
        self.legacy_mode
    }

    /// Toggle legacy serialization for the whole set.
    pub fn set_legacy_mode(&mut self, legacy: bool) {
        self.legacy_mode = legacy;
    }
}
