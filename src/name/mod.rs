//! Splitting BibTeX name strings into their constituent parts, and composing
//! them back.
//!
//! A BibTeX name can be written in any of three forms:
//!
//! * `First von Last`
//! * `von Last, First`
//! * `von Last, Jr, First`
//!
//! [`split_name`] breaks a single name into the four parts, using the case of
//! each word to separate the lowercase-led `von` particles from the
//! surrounding parts. [`NameParts::to_bibtex`] recomposes the parts into the
//! canonical `{Von Last}, First` form.

mod author;
mod scan;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub use author::Author;

use crate::error::NameError;
use scan::{Case, Word};

/// Parsing policy for [`split_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Reject malformed name syntax with a [`NameError`].
    #[default]
    Strict,
    /// Recover from malformed syntax and keep going.
    Lenient,
}

/// The constituent parts of one name.
///
/// Each part is the ordered list of words making up that part, and may be
/// empty. Words keep nested brace groups and escape sequences verbatim.
/// For any syntactically valid name with non-whitespace content, `last` is
/// non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameParts {
    /// First (given) name words.
    pub first: Vec<String>,
    /// Lowercase-led particles such as `van` or `de la`.
    pub von: Vec<String>,
    /// Surname words.
    pub last: Vec<String>,
    /// Generational suffix such as `Jr.` or `III`.
    pub jr: Vec<String>,
}

impl NameParts {
    /// Whether the name has no parts at all, as returned for blank input.
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.von.is_empty() && self.last.is_empty() && self.jr.is_empty()
    }

    /// Compose the parts into the canonical `{Von Last}, Jr, First` form.
    ///
    /// The surname group is wrapped in braces to protect it from downstream
    /// case-folding, unless the assembled surname already contains a brace
    /// group of its own.
    ///
    /// # Example
    /// ```
    /// use bibcite::name::{split_name, Mode};
    ///
    /// let parts = split_name("Jens-Kristian Krogager", Mode::Strict).unwrap();
    /// assert_eq!(parts.to_bibtex(), "{Krogager}, Jens-Kristian");
    /// ```
    pub fn to_bibtex(&self) -> String {
        let surname = self.von.iter().chain(self.last.iter()).join(" ");
        let first = self.first.join("~");
        let jr = self.jr.join(" ");

        let braces = !(surname.contains('{') && surname.contains('}'));

        match (braces, jr.is_empty()) {
            (true, false) => format!("{{{surname}}}, {jr}, {first}"),
            (false, false) => format!("{surname}, {jr}, {first}"),
            (true, true) => format!("{{{surname}}}, {first}"),
            (false, true) => format!("{surname}, {first}"),
        }
    }
}

/// Split a name into its `first`, `von`, `last` and `jr` parts.
///
/// Blank input produces the empty [`NameParts`], not an error. In
/// [`Mode::Strict`], malformed syntax is rejected with the specific
/// [`NameError`]; in [`Mode::Lenient`] the scanner recovers as best it can.
///
/// # Example
/// ```
/// use bibcite::name::{split_name, Mode};
///
/// let parts = split_name("von Neumann, John", Mode::Strict).unwrap();
/// assert_eq!(parts.von, ["von"]);
/// assert_eq!(parts.last, ["Neumann"]);
/// assert_eq!(parts.first, ["John"]);
/// ```
pub fn split_name(name: &str, mode: Mode) -> Result<NameParts, NameError> {
    let sections = scan::scan(name, mode)?;
    Ok(interpret(sections))
}

fn texts(words: &[Word]) -> Vec<String> {
    words.iter().map(|w| w.text.clone()).collect()
}

fn last_lower(words: &[Word]) -> Option<usize> {
    words.iter().rposition(|w| w.case == Case::Lower)
}

/// Assign scanned sections to name parts according to which of the three name
/// forms the section count selects.
fn interpret(sections: Vec<Vec<Word>>) -> NameParts {
    if sections.iter().all(Vec::is_empty) {
        return NameParts::default();
    }

    let mut parts = NameParts::default();

    if sections.len() == 1 {
        // Form 1: "First von Last".
        let section = &sections[0];
        match section.len() {
            1 => parts.last = texts(section),
            2 => {
                parts.first = texts(&section[..1]);
                parts.last = texts(&section[1..]);
            }
            _ => {
                // First is the longest leading run before the first
                // lowercase word; von then extends through the last
                // lowercase word, except that the final word always remains
                // for last.
                match section.iter().position(|w| w.case == Case::Lower) {
                    Some(start) => {
                        let lower_end = last_lower(section).expect("a lowercase word exists");
                        let von_end = if lower_end == section.len() - 1 {
                            section.len() - 1
                        } else {
                            lower_end + 1
                        };
                        parts.first = texts(&section[..start]);
                        parts.von = texts(&section[start..von_end]);
                        parts.last = texts(&section[von_end..]);
                    }
                    None => {
                        parts.first = texts(&section[..section.len() - 1]);
                        parts.last = texts(&section[section.len() - 1..]);
                    }
                }
            }
        }
    } else {
        // Form 2 "von Last, First" or form 3 "von Last, Jr, First".
        let first = sections.last().expect("at least two sections");
        if !first.is_empty() {
            parts.first = texts(first);
        }

        if sections.len() == 3 && !sections[1].is_empty() {
            parts.jr = texts(&sections[1]);
        }

        let head = &sections[0];
        if head.len() == 1 {
            parts.last = texts(head);
        } else {
            match last_lower(head) {
                Some(lower_end) => {
                    // At least one trailing word always remains for last.
                    let split = if lower_end + 1 == head.len() { 0 } else { lower_end + 1 };
                    parts.von = texts(&head[..split]);
                    parts.last = texts(&head[split..]);
                }
                None => parts.last = texts(head),
            }
        }
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(name: &str) -> NameParts {
        split_name(name, Mode::Strict).unwrap()
    }

    fn parts(first: &[&str], von: &[&str], last: &[&str], jr: &[&str]) -> NameParts {
        let own = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        NameParts {
            first: own(first),
            von: own(von),
            last: own(last),
            jr: own(jr),
        }
    }

    #[test]
    fn test_blank() {
        assert!(strict("").is_empty());
        assert!(strict("  \t ").is_empty());
        assert!(split_name("  ", Mode::Lenient).unwrap().is_empty());
    }

    #[test]
    fn test_single_word() {
        assert_eq!(strict("Krogager"), parts(&[], &[], &["Krogager"], &[]));
        // A single lowercase word is still the surname.
        assert_eq!(strict("krogager"), parts(&[], &[], &["krogager"], &[]));
    }

    #[test]
    fn test_first_last() {
        assert_eq!(
            strict("Jens-Kristian Krogager"),
            parts(&["Jens-Kristian"], &[], &["Krogager"], &[])
        );
    }

    #[test]
    fn test_first_von_last() {
        assert_eq!(
            strict("John von Neumann"),
            parts(&["John"], &["von"], &["Neumann"], &[])
        );
        assert_eq!(
            strict("Jean de la Fontaine"),
            parts(&["Jean"], &["de", "la"], &["Fontaine"], &[])
        );
    }

    #[test]
    fn test_von_never_consumes_final_word() {
        // The trailing lowercase word is reserved for last.
        assert_eq!(strict("John von der"), parts(&["John"], &["von"], &["der"], &[]));
        assert_eq!(strict("john von der"), parts(&[], &["john", "von"], &["der"], &[]));
    }

    #[test]
    fn test_caseless_first_word() {
        // A brace-protected word is caseless: it neither ends the first run
        // nor extends the von run.
        assert_eq!(
            strict("{Jean} de la Fontaine"),
            parts(&["{Jean}"], &["de", "la"], &["Fontaine"], &[])
        );
    }

    #[test]
    fn test_no_lowercase_words() {
        assert_eq!(
            strict("Charles Louis Xavier Joseph"),
            parts(&["Charles", "Louis", "Xavier"], &[], &["Joseph"], &[])
        );
    }

    #[test]
    fn test_comma_form() {
        assert_eq!(
            strict("von Neumann, John"),
            parts(&["John"], &["von"], &["Neumann"], &[])
        );
        assert_eq!(
            strict("Krogager, Jens-Kristian"),
            parts(&["Jens-Kristian"], &[], &["Krogager"], &[])
        );
    }

    #[test]
    fn test_jr_form() {
        assert_eq!(
            strict("King, Jr, Martin Luther"),
            parts(&["Martin", "Luther"], &[], &["King"], &["Jr"])
        );
        // Empty middle section: no jr.
        assert_eq!(strict("King, , Martin"), parts(&["Martin"], &[], &["King"], &[]));
    }

    #[test]
    fn test_comma_form_head_splitting() {
        assert_eq!(
            strict("de la Cruz Gonzalez, Maria"),
            parts(&["Maria"], &["de", "la"], &["Cruz", "Gonzalez"], &[])
        );
        // All-lowercase head: at least one word stays in last.
        assert_eq!(
            strict("van der berg, A."),
            parts(&["A."], &[], &["van", "der", "berg"], &[])
        );
        // No lowercase word: the whole head is the surname.
        assert_eq!(
            strict("Cruz Gonzalez, Maria"),
            parts(&["Maria"], &[], &["Cruz", "Gonzalez"], &[])
        );
    }

    #[test]
    fn test_lenient_extra_sections_fold_into_first() {
        assert_eq!(
            split_name("Last, Jr, First, Extra", Mode::Lenient).unwrap(),
            parts(&["First", "Extra"], &[], &["Last"], &["Jr"])
        );
    }

    #[test]
    fn test_lenient_trailing_comma() {
        assert_eq!(
            split_name("Smith,", Mode::Lenient).unwrap(),
            parts(&[], &[], &["Smith"], &[])
        );
    }

    #[test]
    fn test_to_bibtex() {
        assert_eq!(strict("Krogager, J.-K.").to_bibtex(), "{Krogager}, J.-K.");
        assert_eq!(
            strict("von Neumann, John").to_bibtex(),
            "{von Neumann}, John"
        );
        assert_eq!(
            strict("King, Jr, Martin Luther").to_bibtex(),
            "{King}, Jr, Martin~Luther"
        );
    }

    #[test]
    fn test_to_bibtex_suppresses_double_braces() {
        // A surname that is already a brace-protected unit is not re-wrapped.
        let parsed = strict("{Gaia Collaboration}, T.");
        assert_eq!(parsed.last, ["{Gaia Collaboration}"]);
        assert_eq!(parsed.to_bibtex(), "{Gaia Collaboration}, T.");
    }
}
