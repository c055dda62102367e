//! A parsed author name kept in both plain-text and markup form.

use crate::error::NameError;
use crate::markup::MarkupCodec;
use crate::name::{Mode, NameParts, split_name};

/// One person's name, parsed once from a plain-text string and held in both
/// plain and markup form.
///
/// The markup form is produced by encoding the plain string through the
/// supplied [`MarkupCodec`] before splitting, so that non-ASCII characters
/// survive a round trip into a BibTeX file. Part setters re-encode in the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    plain: NameParts,
    markup: NameParts,
}

impl Author {
    /// Parse a plain-text name, deriving the markup form through `codec`.
    pub fn parse<C: MarkupCodec>(name: &str, mode: Mode, codec: &C) -> Result<Self, NameError> {
        let name = name.trim();
        Ok(Self {
            plain: split_name(name, mode)?,
            markup: split_name(&codec.to_markup(name), mode)?,
        })
    }

    /// The plain-text parts.
    pub fn plain(&self) -> &NameParts {
        &self.plain
    }

    /// The markup-form parts.
    pub fn markup(&self) -> &NameParts {
        &self.markup
    }

    /// The plain-text name in canonical `{Last}, First` form.
    pub fn full_name(&self) -> String {
        self.plain.to_bibtex()
    }

    /// The markup-form name in canonical `{Last}, First` form, suitable for
    /// writing back to a BibTeX file.
    pub fn markup_name(&self) -> String {
        self.markup.to_bibtex()
    }

    /// The joined plain-text surname.
    pub fn last(&self) -> String {
        self.plain.last.join(" ")
    }

    /// The joined plain-text first name.
    pub fn first(&self) -> String {
        self.plain.first.join(" ")
    }

    /// The joined plain-text particles.
    pub fn von(&self) -> String {
        self.plain.von.join(" ")
    }

    /// The joined plain-text generational suffix.
    pub fn jr(&self) -> String {
        self.plain.jr.join(" ")
    }

    /// Replace the surname from a plain-text edit.
    pub fn set_last<C: MarkupCodec>(&mut self, name: &str, codec: &C) {
        self.plain.last = split_words(name);
        self.markup.last = split_words(&codec.to_markup(name));
    }

    /// Replace the first name from a plain-text edit.
    pub fn set_first<C: MarkupCodec>(&mut self, name: &str, codec: &C) {
        self.plain.first = split_words(name);
        self.markup.first = split_words(&codec.to_markup(name));
    }

    /// Replace the particles from a plain-text edit.
    pub fn set_von<C: MarkupCodec>(&mut self, name: &str, codec: &C) {
        self.plain.von = split_words(name);
        self.markup.von = split_words(&codec.to_markup(name));
    }

    /// Replace the generational suffix from a plain-text edit.
    pub fn set_jr<C: MarkupCodec>(&mut self, name: &str, codec: &C) {
        self.plain.jr = split_words(name);
        self.markup.jr = split_words(&codec.to_markup(name));
    }
}

fn split_words(part: &str) -> Vec<String> {
    part.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Identity;

    #[test]
    fn test_parse_and_accessors() {
        let author = Author::parse("de la Cruz, Maria", Mode::Strict, &Identity).unwrap();
        assert_eq!(author.last(), "Cruz");
        assert_eq!(author.von(), "de la");
        assert_eq!(author.first(), "Maria");
        assert_eq!(author.jr(), "");
        assert_eq!(author.full_name(), "{de la Cruz}, Maria");
        assert_eq!(author.full_name(), author.markup_name());
    }

    #[test]
    fn test_set_parts() {
        let mut author = Author::parse("Krogager, J.-K.", Mode::Strict, &Identity).unwrap();
        author.set_first("Jens-Kristian", &Identity);
        assert_eq!(author.first(), "Jens-Kristian");
        assert_eq!(author.full_name(), "{Krogager}, Jens-Kristian");

        author.set_last("van Krogager", &Identity);
        assert_eq!(author.plain().last, ["van", "Krogager"]);
    }

    #[test]
    fn test_markup_form_uses_codec() {
        struct Doubler;
        impl MarkupCodec for Doubler {
            fn to_plain(&self, markup: &str) -> String {
                markup.replace("{\\\"u}", "ü")
            }
            fn to_markup(&self, plain: &str) -> String {
                plain.replace('ü', "{\\\"u}")
            }
        }

        let author = Author::parse("Müller, Hans", Mode::Strict, &Doubler).unwrap();
        assert_eq!(author.last(), "Müller");
        assert_eq!(author.markup().last, ["M{\\\"u}ller"]);
        // The accented surname already carries a brace group, so no extra
        // wrapping is added.
        assert_eq!(author.markup_name(), "M{\\\"u}ller, Hans");
    }
}
