//! Publication-style citation strings for bibliographic entries.
//!
//! [`Formatter`] dispatches on the entry type and assembles the citation text
//! from the name-list, journal and cleaning helpers. Missing required fields
//! and unrepresentable field combinations are reported as [`FormatError`];
//! an unrecognized entry type instead produces a placeholder reference
//! carrying a [`FormatWarning`], so that bulk formatting of a heterogeneous
//! bibliography keeps going.

use std::fmt;

use crate::entry::{Entry, EntryKind};
use crate::error::FormatError;
use crate::journal;
use crate::list::{self, ListOptions};
use crate::markup::{Identity, MarkupCodec};

/// Non-fatal diagnostics raised while formatting a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatWarning {
    /// The entry type has no reference format defined.
    UnknownEntryType(String),
}

impl fmt::Display for FormatWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatWarning::UnknownEntryType(entry_type) => {
                write!(f, "no reference format defined for entry type '{entry_type}'")
            }
        }
    }
}

/// A formatted citation string, possibly carrying a non-fatal warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The citation text.
    pub text: String,
    /// Set when the text is a placeholder rather than a real reference.
    pub warning: Option<FormatWarning>,
}

impl Reference {
    fn new(text: String) -> Self {
        Self {
            text,
            warning: None,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Formats bibliographic entries into citation strings.
///
/// The formatter is a pure transformation of its inputs: it holds only the
/// list-truncation options and the markup codec used to transliterate
/// escaped names, so a single instance may format any number of entries.
///
/// # Example
/// ```
/// use bibcite::citation::Formatter;
/// use bibcite::entry::Entry;
///
/// let entry = Entry::new("article")
///     .with_field("author", "Krogager, J.-K. and Noterdaeme, P.")
///     .with_field("year", "2018")
///     .with_field("journal", "\\aap")
///     .with_field("volume", "619")
///     .with_field("pages", "A142");
///
/// let reference = Formatter::new().reference(&entry).unwrap();
/// assert_eq!(
///     reference.text,
///     "Krogager, J.-K. and Noterdaeme, P. 2018, A&A, 619, A142"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter<C = Identity> {
    options: ListOptions,
    codec: C,
}

impl Formatter<Identity> {
    /// A formatter with default truncation rules for plain-text
    /// bibliographies.
    pub fn new() -> Self {
        Self {
            options: ListOptions::default(),
            codec: Identity,
        }
    }
}

impl<C: MarkupCodec> Formatter<C> {
    /// A formatter transliterating escaped names through `codec`.
    pub fn with_codec(codec: C) -> Self {
        Self {
            options: ListOptions::default(),
            codec,
        }
    }

    /// Replace the list-truncation options.
    pub fn options(mut self, options: ListOptions) -> Self {
        self.options = options;
        self
    }

    /// Format the author list of a raw author field.
    pub fn author_list(&self, field: &str) -> String {
        list::format_author_list(&list::split_list(field), &self.options, &self.codec)
    }

    /// Format the editor list of a raw editor field, with its
    /// `(Ed.)`/`(Eds.)` marker.
    pub fn editor_list(&self, field: &str) -> (String, &'static str) {
        list::format_editor_list(&list::split_list(field), &self.codec)
    }

    /// Format an entry into a citation string.
    ///
    /// Dispatches on the entry type; unrecognized types yield a placeholder
    /// [`Reference`] with a [`FormatWarning`] instead of an error.
    pub fn reference(&self, entry: &Entry) -> Result<Reference, FormatError> {
        match entry.kind() {
            EntryKind::Article => self.article(entry),
            EntryKind::InProceedings => self.inproceedings(entry),
            EntryKind::InBook => self.inbook(entry),
            EntryKind::PhdThesis => self.phdthesis(entry),
            EntryKind::Other => Ok(Reference {
                text: format!(
                    "Reference format not defined for type: {}",
                    entry.entry_type
                ),
                warning: Some(FormatWarning::UnknownEntryType(entry.entry_type.clone())),
            }),
        }
    }

    fn required<'e>(&self, entry: &'e Entry, field: &'static str) -> Result<&'e str, FormatError> {
        entry.get(field).ok_or_else(|| FormatError::MissingField {
            entry_type: entry.entry_type.clone(),
            field,
        })
    }

    /// `author year, journal, volume, pages` with the page range truncated to
    /// its first page; or the arXiv identifier or bare journal when no pages
    /// are given.
    fn article(&self, entry: &Entry) -> Result<Reference, FormatError> {
        let author = self.author_list(self.required(entry, "author")?);
        let year = self.required(entry, "year")?;

        let text = if let Some(pages) = entry.get("pages") {
            let journal = journal::resolve(self.required(entry, "journal")?);
            let volume = self.required(entry, "volume")?;
            let pages = pages.split('-').next().unwrap_or(pages);
            format!("{author} {year}, {journal}, {volume}, {pages}")
        } else {
            let raw_journal = self.required(entry, "journal")?;
            if raw_journal.to_ascii_lowercase().contains("arxiv") {
                let eprint = self.required(entry, "eprint")?;
                format!("{author} {year}, arXiv:{eprint}")
            } else {
                let journal = journal::resolve(raw_journal);
                format!("{author} {year}, {journal}")
            }
        };
        Ok(Reference::new(text))
    }

    fn inproceedings(&self, entry: &Entry) -> Result<Reference, FormatError> {
        let author = self.author_list(self.required(entry, "author")?);
        let year = self.required(entry, "year")?;
        let title = display_text(self.required(entry, "title")?);
        let booktitle = display_text(self.required(entry, "booktitle")?);

        if let (Some(journal), Some(volume)) = (entry.get("journal"), entry.get("volume")) {
            return Ok(Reference::new(format!(
                "{author} ({year}), '{title}'. In {journal} {volume}, {booktitle}"
            )));
        }
        if let Some(editor_field) = entry.get("editor") {
            let (editor, marker) = self.editor_list(editor_field);
            return Ok(Reference::new(format!(
                "{author} ({year}), {editor}. In {marker} {booktitle}"
            )));
        }
        Err(FormatError::Unrepresentable {
            entry_type: entry.entry_type.clone(),
        })
    }

    fn inbook(&self, entry: &Entry) -> Result<Reference, FormatError> {
        let author = if let Some(author_field) = entry.get("author") {
            self.author_list(author_field)
        } else if let Some(editor_field) = entry.get("editor") {
            self.editor_list(editor_field).0
        } else {
            return Err(FormatError::MissingField {
                entry_type: entry.entry_type.clone(),
                field: "author",
            });
        };
        let year = self.required(entry, "year")?;
        let title = display_text(self.required(entry, "title")?);
        let publisher = self.required(entry, "publisher")?;

        Ok(Reference::new(format!(
            "{author} {year}, '{title}': {publisher}"
        )))
    }

    fn phdthesis(&self, entry: &Entry) -> Result<Reference, FormatError> {
        let author = self.author_list(self.required(entry, "author")?);
        let year = self.required(entry, "year")?;
        let _title = display_text(self.required(entry, "title")?);
        let school = list::clean(self.required(entry, "school")?);

        Ok(Reference::new(format!(
            "{author} {year}, PhD thesis, {school}"
        )))
    }
}

/// Prepare a multi-word field value for display: collapse embedded newlines
/// and strip brace and tie markup.
fn display_text(value: &str) -> String {
    list::clean(&value.replace('\n', " "))
}
