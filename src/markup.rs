//! Conversion between escape-aware markup and plain text.
//!
//! Name fields in a bibliography may carry LaTeX-style markup (`{\"O}zel`,
//! `\c{c}`). Transliterating that markup to plain text, and encoding plain
//! text back into markup, is the job of an external collaborator; this module
//! only defines the seam through which it is consumed.

/// Conversion between markup-form and plain-text strings.
///
/// The formatter invokes [`to_plain`](MarkupCodec::to_plain) on a raw name
/// only when it contains a backslash, and [`to_markup`](MarkupCodec::to_markup)
/// when constructing markup-form names from plain-text edits.
pub trait MarkupCodec {
    /// Transliterate a markup string to plain text.
    fn to_plain(&self, markup: &str) -> String;

    /// Encode a plain-text string as markup.
    fn to_markup(&self, plain: &str) -> String;
}

/// A codec which passes text through untouched, for bibliographies which are
/// already plain.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl MarkupCodec for Identity {
    fn to_plain(&self, markup: &str) -> String {
        markup.to_owned()
    }

    fn to_markup(&self, plain: &str) -> String {
        plain.to_owned()
    }
}

impl<C: MarkupCodec> MarkupCodec for &C {
    fn to_plain(&self, markup: &str) -> String {
        (**self).to_plain(markup)
    }

    fn to_markup(&self, plain: &str) -> String {
        (**self).to_markup(plain)
    }
}
